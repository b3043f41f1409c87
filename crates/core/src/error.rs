//! Core error types for EOData

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    /// The path does not resolve to a readable file
    #[error("Source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Truncated source at offset {offset}: need {need} bytes, have {have}")]
    TruncatedSource {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("Format mismatch: found tag {found:?}, expected {expected:?}")]
    FormatMismatch { found: String, expected: String },

    #[error("Invalid {field} value: {value}")]
    InvalidEnumValue { field: &'static str, value: u32 },

    #[error("Invalid text at offset {offset}: non-ASCII byte")]
    InvalidText { offset: usize },

    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

impl DataError {
    /// Whether a serving layer should answer "not found" for this error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::SourceUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
