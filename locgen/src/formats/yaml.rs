//! Support for YAML translation sources (`.yaml` and `.yml`).
//!
//! A source file is a single YAML mapping of string keys to string values.
//! Nested mappings, sequences, and non-string scalars are decode errors.

use std::io::BufRead;

use crate::{error::Error, formats::FlatMap, traits::Decoder};

pub struct Format;

impl Decoder for Format {
    /// Decode from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<FlatMap, Error> {
        serde_yaml::from_reader(reader).map_err(Error::YamlParse)
    }
}
