//! Discovery of translation source files under the input root.
//!
//! Traversal order is sorted by file name so that last-write-wins merges and
//! the emitted output are reproducible across runs and platforms.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{error::Error, formats::FormatType};

/// A discovered source file: its path and the format detected from its
/// extension. Consumed exactly once by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub format: FormatType,
}

/// Walks `root` and collects every file with a recognized extension.
///
/// Files with unrecognized extensions are silently excluded; they are not
/// errors. Archives must already have been staged (see [`crate::archive`]).
pub fn discover(root: &Path) -> Result<Vec<SourceFile>, Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(format) = FormatType::from_path(entry.path()) {
            files.push(SourceFile {
                path: entry.path().to_path_buf(),
                format,
            });
        }
    }
    Ok(files)
}
