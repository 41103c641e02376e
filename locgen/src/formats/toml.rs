//! Support for TOML translation sources.
//!
//! A source file is a flat TOML table of string values. Sub-tables, arrays,
//! and non-string values are decode errors.

use std::io::{BufRead, Read};

use crate::{error::Error, formats::FlatMap, traits::Decoder};

pub struct Format;

impl Decoder for Format {
    /// Decode from any reader.
    ///
    /// The `toml` crate only deserializes from strings, so the reader is
    /// drained into memory first.
    fn from_reader<R: BufRead>(mut reader: R) -> Result<FlatMap, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        toml::from_str(&content).map_err(Error::TomlParse)
    }
}
