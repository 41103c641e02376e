//! All error types for the locgen crate.
//!
//! These are returned from all fallible operations (discovery, staging, decoding,
//! aggregation, emission).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("the input directory must be set")]
    InputNotSet,

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid source file: {0}")]
    InvalidSource(String),
}

impl Error {
    /// Creates a new invalid-source error for content the decoder cannot flatten.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Error::InvalidSource(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_input_not_set_error() {
        let error = Error::InputNotSet;
        assert_eq!(error.to_string(), "the input directory must be set");
    }

    #[test]
    fn test_json_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::JsonParse(json_error);
        assert!(error.to_string().contains("JSON parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_source_error() {
        let error = Error::invalid_source("nested value under key `a`");
        assert_eq!(
            error.to_string(),
            "invalid source file: nested value under key `a`"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::invalid_source("test");
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidSource"));
        assert!(debug.contains("test"));
    }
}
