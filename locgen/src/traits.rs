//! Traits for format-agnostic decoding in locgen.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use crate::{error::Error, formats::FlatMap};

/// A trait for decoding one translation source file into a flat key/value map.
///
/// # Example
///
/// ```rust,no_run
/// use locgen::traits::Decoder;
/// let entries = locgen::formats::json::Format::read_from("common/en.json")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Decoder {
    /// Decode from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<FlatMap, Error>;

    /// Decode from a file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<FlatMap, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Decode from a string.
    fn from_str(s: &str) -> Result<FlatMap, Error> {
        Self::from_reader(Cursor::new(s))
    }

    /// Decode from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<FlatMap, Error> {
        Self::from_reader(Cursor::new(bytes))
    }
}
