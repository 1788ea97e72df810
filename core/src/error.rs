use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("'{0}' not found in graph")]
    NodeNotFound(String),

    #[error("Movie '{0}' not found in records")]
    RecordNotFound(String),

    #[error("Multiple movies titled '{title}', release years: {}", .years.join(", "))]
    AmbiguousTitle { title: String, years: Vec<String> },

    #[error("No movie titled '{title}' released in {year}")]
    YearNotFound { title: String, year: String },

    #[error("I/O error: {source} (path: {})", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        CoreError::Io {
            source,
            path: path.into(),
        }
    }

    pub(crate) fn json(source: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        CoreError::Json {
            source,
            path: path.into(),
        }
    }
}
