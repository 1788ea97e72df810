use crate::error::Result;
use crate::files::read_json_file;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, path::Path};

/// One normalized film entry.
///
/// Deserializes from the extracted-records export, which spells the title
/// and year as `original_title` and `release_year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(alias = "original_title")]
    pub title: String,
    #[serde(default)]
    pub genres: BTreeSet<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub crew: Vec<String>,
    #[serde(default, alias = "release_year")]
    pub year: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Which credit list of a record feeds a collaboration graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Cast,
    Crew,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Cast => f.write_str("cast"),
            RecordField::Crew => f.write_str("crew"),
        }
    }
}

impl Record {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genres: BTreeSet::new(),
            cast: Vec::new(),
            crew: Vec::new(),
            year: None,
            overview: None,
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cast<I, S>(mut self, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_crew<I, S>(mut self, crew: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.crew = crew.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    pub fn field(&self, field: RecordField) -> &[String] {
        match field {
            RecordField::Cast => &self.cast,
            RecordField::Crew => &self.crew,
        }
    }

    /// Distinct names credited in `field`.
    pub fn members(&self, field: RecordField) -> FxHashSet<&str> {
        self.field(field).iter().map(String::as_str).collect()
    }
}

pub fn load_records(records_path: &Path) -> Result<Vec<Record>> {
    let records: Vec<Record> = read_json_file(records_path)?;
    tracing::debug!(
        path = %records_path.display(),
        count = records.len(),
        "loaded records"
    );
    Ok(records)
}
