//! The global fold: decodes every discovered file and merges its entries into
//! one value map and one set of locale-independent key names.
//!
//! Collisions between files on the same fully-qualified key are not errors:
//! later files override earlier ones so layered inputs can shadow defaults.
//! Each override is recorded as a [`Warning`].

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use crate::{error::Error, key_path::KeyPath, scan::SourceFile, warnings::Warning};

/// The folded result of one run: every value keyed by its fully-qualified
/// dotted key, plus the deduplicated locale-independent key names.
///
/// Both accumulators are B-tree collections, so iteration order is byte-order
/// regardless of the order files were folded in.
#[derive(Debug, Default)]
pub struct Aggregation {
    values: BTreeMap<String, String>,
    key_names: BTreeSet<String>,
    warnings: Vec<Warning>,
}

impl Aggregation {
    /// Fully-qualified key → value.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Locale-independent key names in ascending byte order.
    pub fn sorted_key_names(&self) -> Vec<String> {
        self.key_names.iter().cloned().collect()
    }

    /// Overrides observed while folding, in fold order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    fn fold_file(&mut self, root: &Path, file: &SourceFile) -> Result<(), Error> {
        let entries = file.format.decode_file(&file.path)?;
        let key_path = KeyPath::resolve(root, &file.path)?;
        for (local_key, value) in entries {
            let qualified = key_path.qualify(&local_key);
            self.key_names.insert(key_path.key_name(&local_key));
            if let Some(previous) = self.values.insert(qualified.clone(), value.clone()) {
                self.warnings.push(Warning::ValueOverwritten {
                    key: qualified,
                    previous,
                    replacement: value,
                });
            }
        }
        Ok(())
    }
}

/// Folds every file into one [`Aggregation`].
///
/// The first decode or I/O error aborts the whole run; nothing partial is
/// returned. Files are folded in the order given, which is the deterministic
/// discovery order from [`crate::scan::discover`].
pub fn aggregate(root: &Path, files: &[SourceFile]) -> Result<Aggregation, Error> {
    let mut aggregation = Aggregation::default();
    for file in files {
        aggregation.fold_file(root, file)?;
    }
    Ok(aggregation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{formats::FormatType, scan::discover};
    use std::fs;
    use tempfile::TempDir;

    fn source(path: &Path, format: FormatType) -> SourceFile {
        SourceFile {
            path: path.to_path_buf(),
            format,
        }
    }

    #[test]
    fn test_fold_two_locales_of_one_namespace() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("common")).unwrap();
        fs::write(
            temp_dir.path().join("common/en.json"),
            r#"{"greeting":"hi"}"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("common/zh.json"),
            r#"{"greeting":"ni hao"}"#,
        )
        .unwrap();

        let files = discover(temp_dir.path()).unwrap();
        let aggregation = aggregate(temp_dir.path(), &files).unwrap();

        assert_eq!(aggregation.values()["en.common.greeting"], "hi");
        assert_eq!(aggregation.values()["zh.common.greeting"], "ni hao");
        // One shared symbol for both locales.
        assert_eq!(aggregation.sorted_key_names(), ["common.greeting"]);
        assert!(aggregation.warnings().is_empty());
    }

    #[test]
    fn test_last_file_wins_on_collision() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("common")).unwrap();
        fs::write(
            temp_dir.path().join("common/en.json"),
            r#"{"greeting":"hi"}"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("common/en.csv"), "greeting,hello\n").unwrap();

        let csv_file = source(&temp_dir.path().join("common/en.csv"), FormatType::Csv);
        let json_file = source(&temp_dir.path().join("common/en.json"), FormatType::Json);

        let aggregation = aggregate(temp_dir.path(), &[csv_file, json_file]).unwrap();
        assert_eq!(aggregation.values()["en.common.greeting"], "hi");
        assert_eq!(
            aggregation.warnings(),
            [Warning::ValueOverwritten {
                key: "en.common.greeting".to_string(),
                previous: "hello".to_string(),
                replacement: "hi".to_string(),
            }]
        );
    }

    #[test]
    fn test_key_names_deduplicate_and_sort() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("common")).unwrap();
        fs::write(
            temp_dir.path().join("common/en.json"),
            r#"{"b":"1","a":"2"}"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("common/zh.json"),
            r#"{"a":"3","b":"4"}"#,
        )
        .unwrap();

        let files = discover(temp_dir.path()).unwrap();
        let aggregation = aggregate(temp_dir.path(), &files).unwrap();
        assert_eq!(aggregation.sorted_key_names(), ["common.a", "common.b"]);
    }

    #[test]
    fn test_format_parity_across_decoders() {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["a", "b", "c", "d"] {
            fs::create_dir(temp_dir.path().join(dir)).unwrap();
        }
        fs::write(temp_dir.path().join("a/en.json"), r#"{"k":"v"}"#).unwrap();
        fs::write(temp_dir.path().join("b/en.yaml"), "k: v\n").unwrap();
        fs::write(temp_dir.path().join("c/en.toml"), "k = \"v\"\n").unwrap();
        fs::write(temp_dir.path().join("d/en.csv"), "k,v\n").unwrap();

        let files = discover(temp_dir.path()).unwrap();
        let aggregation = aggregate(temp_dir.path(), &files).unwrap();

        for dir in ["a", "b", "c", "d"] {
            assert_eq!(aggregation.values()[&format!("en.{dir}.k")], "v");
        }
    }

    #[test]
    fn test_whitespace_stem_in_root_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(" .json"), r#"{"greeting":"hi"}"#).unwrap();

        let files = discover(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        let result = aggregate(temp_dir.path(), &files);
        assert!(matches!(result, Err(Error::InvalidSource(_))));
    }

    #[test]
    fn test_malformed_file_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("good.json"), r#"{"k":"v"}"#).unwrap();
        fs::write(temp_dir.path().join("bad.json"), "{ broken").unwrap();

        let files = discover(temp_dir.path()).unwrap();
        assert!(aggregate(temp_dir.path(), &files).is_err());
    }

    #[test]
    fn test_determinism_across_fold_orders() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("common")).unwrap();
        fs::write(temp_dir.path().join("common/en.json"), r#"{"a":"1"}"#).unwrap();
        fs::write(temp_dir.path().join("common/zh.json"), r#"{"b":"2"}"#).unwrap();

        let mut files = discover(temp_dir.path()).unwrap();
        let forward = aggregate(temp_dir.path(), &files).unwrap();
        files.reverse();
        let backward = aggregate(temp_dir.path(), &files).unwrap();

        assert_eq!(forward.values(), backward.values());
        assert_eq!(forward.sorted_key_names(), backward.sorted_key_names());
    }
}
