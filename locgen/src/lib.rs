#![forbid(unsafe_code)]
//! Localization code generation for Rust.
//!
//! Aggregates a tree of per-locale translation source files (JSON, YAML,
//! TOML, CSV, optionally bundled in `.zip` archives) into one flattened
//! namespace of dot-delimited keys and emits a generated Rust module with key
//! constants, the value table, and ordered list accessors.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use locgen::{GenerateOptions, generate};
//!
//! let options = GenerateOptions::new("translations", None);
//! let report = generate(&options)?;
//! for warning in &report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok::<(), locgen::Error>(())
//! ```
//!
//! # Layout convention
//!
//! Directories namespace keys; the file's base name is the locale:
//! `common/en.json` with key `greeting` produces the fully-qualified key
//! `en.common.greeting` and the shared, locale-independent key name
//! `common.greeting`. See [`key_path`] for the exact head-segment contract.

pub mod aggregate;
pub mod archive;
pub mod emit;
pub mod error;
pub mod formats;
pub mod generator;
pub mod key_path;
pub mod remote;
pub mod scan;
pub mod symbols;
pub mod traits;
pub mod warnings;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::FormatType,
    generator::{DEFAULT_OUTPUT_DIR, GenerateOptions, Report, generate},
    key_path::KeyPath,
    scan::SourceFile,
    warnings::Warning,
};
