use crate::error::Result;
use crate::record_index::RecordIndex;
use crate::records::Record;
use crate::similarity::overlap_score;

pub const DEFAULT_RECOMMENDATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation<'r> {
    pub record: &'r Record,
    pub score: usize,
}

/// Ranks records by how many of `genres` they carry, best first. Ties keep
/// load order.
pub fn recommend_by_genres<'r, I, S>(records: I, genres: &[S], limit: usize) -> Vec<Recommendation<'r>>
where
    I: IntoIterator<Item = &'r Record>,
    S: AsRef<str>,
{
    let wanted: Vec<&str> = genres.iter().map(AsRef::as_ref).collect();

    let mut ranked: Vec<Recommendation<'r>> = records
        .into_iter()
        .map(|record| Recommendation {
            record,
            score: overlap_score(
                wanted.iter().copied(),
                record.genres.iter().map(String::as_str),
            ),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Recommends by the genres of a favourite title, leaving that title out.
pub fn recommend_like<'r>(
    index: &'r RecordIndex,
    title: &str,
    year: Option<&str>,
    limit: usize,
) -> Result<Vec<Recommendation<'r>>> {
    let source = index.find(title, year)?;
    let genres: Vec<&str> = source.genres.iter().map(String::as_str).collect();

    let candidates = index
        .records()
        .iter()
        .filter(|record| !std::ptr::eq(*record, source));

    Ok(recommend_by_genres(candidates, &genres, limit))
}
