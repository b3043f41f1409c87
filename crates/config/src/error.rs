//! Error types for the config crate

use eodata_core::DataError;
use std::path::PathBuf;

/// Text format error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The path does not resolve to a readable file
    #[error("Source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid UTF-8
    #[error("Invalid encoding: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Line is neither blank, a comment, a section header nor key=value
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Value token that does not parse as the expected number
    #[error("Malformed token in {key:?}: {message}")]
    MalformedToken { key: String, message: String },

    /// Key without a numeric entity id, or without exactly two dotted parts
    #[error("Malformed key {key:?}")]
    MalformedKey { key: String },

    /// Group name with no parser
    #[error("Unknown group {group:?} in key {key:?}")]
    UnknownGroup { key: String, group: String },
}

impl ConfigError {
    /// Whether a serving layer should answer "not found" for this error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::SourceUnavailable { .. })
    }
}

impl From<ConfigError> for DataError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::SourceUnavailable { path, source } => {
                DataError::SourceUnavailable { path, source }
            }
            other => DataError::MalformedToken(other.to_string()),
        }
    }
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_stays_not_found() {
        let err = ConfigError::SourceUnavailable {
            path: PathBuf::from("data/shops.ini"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let data: DataError = err.into();
        assert!(data.is_not_found());
        assert!(data.to_string().contains("shops.ini"));
    }

    #[test]
    fn test_text_errors_fold_into_malformed_token() {
        let err = ConfigError::MalformedKey { key: "x.name".into() };
        match DataError::from(err) {
            DataError::MalformedToken(message) => assert!(message.contains("x.name")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
