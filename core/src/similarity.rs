use crate::error::Result;
use crate::record_index::RecordIndex;
use crate::records::Record;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Number of distinct elements the two collections share.
pub fn overlap_score<T, A, B>(left: A, right: B) -> usize
where
    T: Hash + Eq,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let left: FxHashSet<T> = left.into_iter().collect();
    let right: FxHashSet<T> = right.into_iter().collect();
    left.intersection(&right).count()
}

/// Per-category overlaps between two records.
#[derive(Debug, Clone, Copy)]
pub struct ScorePair<'r> {
    pub left: &'r Record,
    pub right: &'r Record,
    pub cast_overlap: usize,
    pub crew_overlap: usize,
    pub genre_overlap: usize,
}

impl<'r> ScorePair<'r> {
    pub fn between(left: &'r Record, right: &'r Record) -> Self {
        Self {
            left,
            right,
            cast_overlap: overlap_score(&left.cast, &right.cast),
            crew_overlap: overlap_score(&left.crew, &right.crew),
            genre_overlap: overlap_score(&left.genres, &right.genres),
        }
    }

    pub fn total_overlap(&self) -> usize {
        self.cast_overlap + self.crew_overlap + self.genre_overlap
    }

    /// Mean overlap across cast, crew and genres. Not normalized by set
    /// sizes, so it grows without bound.
    pub fn score(&self) -> f64 {
        self.total_overlap() as f64 / 3.0
    }
}

pub fn correlation_score(left: &Record, right: &Record) -> f64 {
    ScorePair::between(left, right).score()
}

/// Looks both titles up in `index` and scores them. Lookup failures come
/// back unchanged.
pub fn correlate_titles<'r>(
    index: &'r RecordIndex,
    left: (&str, Option<&str>),
    right: (&str, Option<&str>),
) -> Result<ScorePair<'r>> {
    let left = index.find(left.0, left.1)?;
    let right = index.find(right.0, right.1)?;
    Ok(ScorePair::between(left, right))
}
