use crate::error::{CoreError, Result};
use crate::records::Record;
use crate::string_normalization::clean_title;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Title lookup over a loaded record set.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    records: Vec<Record>,
    by_title: FxHashMap<String, Vec<usize>>,
}

impl RecordIndex {
    pub fn new(records: Vec<Record>) -> Self {
        let mut by_title: FxHashMap<String, Vec<usize>> =
            FxHashMap::with_capacity_and_hasher(records.len(), Default::default());

        for (position, record) in records.iter().enumerate() {
            by_title
                .entry(clean_title(&record.title))
                .or_default()
                .push(position);
        }

        Self { records, by_title }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.by_title.contains_key(&clean_title(title))
    }

    /// All records sharing a title, in load order.
    pub fn find_all(&self, title: &str) -> Vec<&Record> {
        self.by_title
            .get(&clean_title(title))
            .map(|positions| positions.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Resolves a title to exactly one record.
    ///
    /// A unique title ignores `year`. A shared title needs `year` to pick a
    /// record; without it the caller gets [`CoreError::AmbiguousTitle`]
    /// listing the candidate years.
    pub fn find(&self, title: &str, year: Option<&str>) -> Result<&Record> {
        let matches = self.find_all(title);

        match (matches.as_slice(), year) {
            ([], _) => Err(CoreError::RecordNotFound(title.to_string())),
            ([only], _) => Ok(*only),
            (_, None) => Err(CoreError::AmbiguousTitle {
                title: title.to_string(),
                years: distinct_years(&matches),
            }),
            (_, Some(year)) => matches
                .iter()
                .copied()
                .find(|record| record.year.as_deref() == Some(year))
                .ok_or_else(|| CoreError::YearNotFound {
                    title: title.to_string(),
                    year: year.to_string(),
                }),
        }
    }

    /// Distinct genre vocabulary across every record, sorted.
    pub fn genres(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|record| record.genres.iter().map(String::as_str))
            .collect()
    }
}

fn distinct_years(records: &[&Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.year.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
