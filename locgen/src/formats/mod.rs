//! All supported translation source formats for locgen.
//!
//! This module re-exports the decoder for each format and provides the
//! [`FormatType`] enum for generic format handling across the crate.

pub mod csv;
pub mod json;
pub mod toml;
pub mod yaml;

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

use crate::{error::Error, traits::Decoder};

/// A decoded translation source file: flat, case-sensitive key → value.
///
/// `BTreeMap` keeps per-file iteration deterministic regardless of how the
/// underlying decoder orders entries.
pub type FlatMap = BTreeMap<String, String>;

/// Represents all supported translation source formats for generic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// JSON object of string values.
    Json,
    /// YAML mapping of string values (`.yaml` or `.yml`).
    Yaml,
    /// TOML table of string values.
    Toml,
    /// Headerless two-column CSV (key, value).
    Csv,
}

/// Implements [`std::fmt::Display`] for [`FormatType`].
///
/// # Example
/// ```rust
/// use locgen::formats::FormatType;
/// assert_eq!(FormatType::Json.to_string(), "json");
/// assert_eq!(FormatType::Yaml.to_string(), "yaml");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Json => write!(f, "json"),
            FormatType::Yaml => write!(f, "yaml"),
            FormatType::Toml => write!(f, "toml"),
            FormatType::Csv => write!(f, "csv"),
        }
    }
}

/// Implements [`std::str::FromStr`] for [`FormatType`].
///
/// Accepts the case-insensitive format names and common extension spellings
/// (`"yml"` for YAML). Returns [`crate::error::Error::InvalidSource`] for
/// unknown strings.
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "json" => Ok(FormatType::Json),
            "yaml" | "yml" => Ok(FormatType::Yaml),
            "toml" => Ok(FormatType::Toml),
            "csv" => Ok(FormatType::Csv),
            other => Err(Error::invalid_source(format!("unknown format `{other}`"))),
        }
    }
}

impl FormatType {
    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Json => "json",
            FormatType::Yaml => "yaml",
            FormatType::Toml => "toml",
            FormatType::Csv => "csv",
        }
    }

    /// Detects the format from a file path's extension.
    ///
    /// Returns `None` for unrecognized extensions; those files are silently
    /// excluded from the pipeline rather than treated as errors.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FormatType::Json),
            "yaml" | "yml" => Some(FormatType::Yaml),
            "toml" => Some(FormatType::Toml),
            "csv" => Some(FormatType::Csv),
            _ => None,
        }
    }

    /// Decodes the file at `path` with this format's decoder.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<FlatMap, Error> {
        match self {
            FormatType::Json => json::Format::read_from(path),
            FormatType::Yaml => yaml::Format::read_from(path),
            FormatType::Toml => toml::Format::read_from(path),
            FormatType::Csv => csv::Format::read_from(path),
        }
    }
}
