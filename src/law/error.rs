//! Errors of the fallible edges of the library: files, JSON, configuration and formats.
//!
//! Tokenizing, parsing and assembling never fail; malformed text simply stays plain.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LawError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("format '{0}' not found")]
    UnknownFormat(String),
}

impl LawError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LawError::Io {
            path: path.into(),
            source,
        }
    }
}
