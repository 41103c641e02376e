//! Support for JSON translation sources.
//!
//! A source file is a single JSON object whose values are all strings. Nested
//! objects and non-string values are decode errors; flattening is not performed.

use std::io::BufRead;

use crate::{error::Error, formats::FlatMap, traits::Decoder};

pub struct Format;

impl Decoder for Format {
    /// Decode from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<FlatMap, Error> {
        serde_json::from_reader(reader).map_err(Error::JsonParse)
    }
}
