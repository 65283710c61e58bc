//! Steam table errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for steam table operations.
pub type SteamResult<T> = Result<T, SteamError>;

/// Errors raised while building or loading steam tables.
///
/// Lookups themselves never fail once a table exists; these only surface at load time.
#[derive(Error, Debug)]
pub enum SteamError {
    /// Table file could not be opened.
    #[error("Failed to open steam table {path}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Table file could not be parsed.
    #[error("Failed to parse steam table {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// No usable rows after filtering.
    #[error("Steam table '{table}' has no usable rows")]
    Empty { table: &'static str },

    /// None of the candidate locations hold the file.
    #[error("Steam table file '{file}' not found (searched {searched} locations)")]
    NotFound { file: String, searched: usize },
}

impl SteamError {
    pub(crate) fn parse(path: &std::path::Path, message: impl Into<String>) -> Self {
        SteamError::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
