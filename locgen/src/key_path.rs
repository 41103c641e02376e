//! Path resolution: turns a source file's location under the input root into
//! an ordered key path.
//!
//! The key path namespaces every entry of the file inside the global value map
//! and decides which segment acts as the locale discriminator.
//!
//! # Head segment contract
//!
//! When the derived sequence has more than one element, the last element (the
//! file's extension-stripped base name) is rotated to the front and becomes the
//! head segment. The conventional layout is namespace directories containing
//! one file per locale (`common/en.json`, `common/zh.json`), so the head is the
//! locale. This lines up with the generated runtime lookup, which prepends the
//! requested locale to a locale-independent key name: `en` + `.` +
//! `common.greeting` addresses the same entry as the fully-qualified key
//! `en.common.greeting`.

use std::path::Path;

use crate::error::Error;

/// Ordered key-path segments for one source file. Never empty; no segment is
/// empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Resolves `file` relative to `root` into a key path.
    ///
    /// The root is stripped from the file's directory portion by plain string
    /// replacement, not by path-aware relativization: `root` must be spelled
    /// exactly as it was when the file was discovered. The remaining directory
    /// pieces are trimmed of whitespace and stray separators, empties are
    /// dropped, and the extension-stripped base name is appended before the
    /// head rotation described at the module level.
    ///
    /// Returns an error when no usable segment remains — a file directly
    /// under the root whose stem trims to nothing (e.g. `" .json"`) has no
    /// place in the key namespace.
    pub fn resolve(root: &Path, file: &Path) -> Result<Self, Error> {
        let root = root.to_string_lossy();
        let dir = file
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut segments: Vec<String> = dir
            .replace(root.as_ref(), "")
            .split(['/', '\\'])
            .map(|piece| piece.trim().trim_matches(|c| c == '/' || c == '\\'))
            .filter(|piece| !piece.is_empty())
            .map(str::to_owned)
            .collect();

        if let Some(stem) = file.file_stem().map(|s| s.to_string_lossy()) {
            let stem = stem.trim();
            if !stem.is_empty() {
                segments.push(stem.to_owned());
            }
        }

        if segments.is_empty() {
            return Err(Error::invalid_source(format!(
                "cannot derive a key path from `{}`",
                file.display()
            )));
        }

        if segments.len() > 1 {
            // Last element (file base name) becomes the head.
            segments.rotate_right(1);
        }

        Ok(KeyPath { segments })
    }

    /// The distinguished first segment, conventionally the locale.
    pub fn head(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or_default()
    }

    /// All segments after the head; empty for a bare file in the root.
    pub fn rest(&self) -> &[String] {
        self.segments.get(1..).unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Fully-qualified dotted key for a file-local key: every segment, then
    /// the local key, dot-joined.
    pub fn qualify(&self, local_key: &str) -> String {
        let mut parts = self.segments.clone();
        parts.push(local_key.to_owned());
        parts.join(".")
    }

    /// Locale-independent key name for a file-local key: the segments after
    /// the head, dot-joined with the local key. For a one-segment key path the
    /// key name is the bare local key.
    pub fn key_name(&self, local_key: &str) -> String {
        if self.rest().is_empty() {
            local_key.to_owned()
        } else {
            format!("{}.{}", self.rest().join("."), local_key)
        }
    }
}
