//! The end-to-end run: staging, discovery, aggregation, grouping, emission.
//!
//! Strictly sequential and single-threaded; all accumulator state is local to
//! the run. The first error anywhere aborts the run before any generated file
//! is written.

use std::{fs, path::PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::{
    aggregate, archive,
    emit::{self, GENERATED_LISTS_FILE, GENERATED_MODULE_FILE},
    error::Error,
    scan, symbols,
    warnings::Warning,
};

/// Default output directory when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "localizations";

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root of the translation source tree. Required.
    pub input: PathBuf,
    /// Directory the generated module is written into.
    pub output: PathBuf,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        GenerateOptions {
            input: input.into(),
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct Report {
    /// Number of source files folded.
    pub files: usize,
    /// Number of distinct locale-independent key names.
    pub key_names: usize,
    /// Number of fully-qualified values in the table.
    pub values: usize,
    /// Generated files, in write order.
    pub written: Vec<PathBuf>,
    /// Non-fatal merge events observed during the run.
    pub warnings: Vec<Warning>,
}

/// Runs the whole pipeline.
///
/// Files extracted from archives exist only for the duration of this call;
/// the staging guard removes them on return, error or not.
pub fn generate(options: &GenerateOptions) -> Result<Report, Error> {
    if options.input.as_os_str().is_empty() {
        return Err(Error::InputNotSet);
    }

    let _staged = archive::stage(&options.input)?;
    let files = scan::discover(&options.input)?;
    let mut aggregation = aggregate::aggregate(&options.input, &files)?;
    let sorted_key_names = aggregation.sorted_key_names();
    let mut symbols = symbols::group(&sorted_key_names);

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let source = emit::render(aggregation.values(), &symbols, &timestamp);

    fs::create_dir_all(&options.output)?;
    let mut written = Vec::new();
    let module_path = options.output.join(GENERATED_MODULE_FILE);
    fs::write(&module_path, &source.module)?;
    written.push(module_path);
    if let Some(lists) = &source.lists {
        let lists_path = options.output.join(GENERATED_LISTS_FILE);
        fs::write(&lists_path, lists)?;
        written.push(lists_path);
    }

    let mut warnings = aggregation.take_warnings();
    warnings.append(&mut symbols.warnings);

    Ok(Report {
        files: files.len(),
        key_names: sorted_key_names.len(),
        values: aggregation.values().len(),
        written,
        warnings,
    })
}
