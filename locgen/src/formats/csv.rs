//! Support for CSV translation sources.
//!
//! Rows are two columns, `key,value`, with no header row. Quoting of embedded
//! delimiters follows the `csv` crate's RFC 4180 defaults. Rows with a column
//! count other than two are decode errors.

use std::io::BufRead;

use serde::Deserialize;

use crate::{error::Error, formats::FlatMap, traits::Decoder};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub key: String,
    pub value: String,
}

pub struct Format;

impl Decoder for Format {
    /// Decode from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<FlatMap, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);
        let mut entries = FlatMap::new();
        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            entries.insert(record.key, record.value);
        }
        Ok(entries)
    }
}
