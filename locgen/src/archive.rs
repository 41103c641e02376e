//! Archive staging: expands `.zip` inputs before the format scan runs.
//!
//! Members are flattened into the archive's containing directory (base name
//! only); collisions between members overwrite. Every extracted path is
//! recorded in a [`StagedFiles`] guard that removes the files when dropped, so
//! cleanup happens whether the run succeeds or fails.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::Error;

/// Paths materialized solely by archive expansion. Dropping the guard deletes
/// them.
#[derive(Debug, Default)]
pub struct StagedFiles {
    extracted: Vec<PathBuf>,
}

impl StagedFiles {
    /// Paths extracted so far, in extraction order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.extracted
    }

    pub fn is_empty(&self) -> bool {
        self.extracted.is_empty()
    }

    fn record(&mut self, path: PathBuf) {
        self.extracted.push(path);
    }
}

impl Drop for StagedFiles {
    fn drop(&mut self) {
        for path in &self.extracted {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Finds every `.zip` under `root` and expands it in place.
///
/// Archives are collected before any extraction starts so that files written
/// during expansion are never themselves walked.
pub fn stage(root: &Path) -> Result<StagedFiles, Error> {
    let mut archives = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
        {
            archives.push(entry.path().to_path_buf());
        }
    }

    let mut staged = StagedFiles::default();
    for archive in archives {
        let target = archive.parent().unwrap_or(root).to_path_buf();
        extract_into(&archive, &target, &mut staged)?;
    }
    Ok(staged)
}

fn extract_into(archive: &Path, target: &Path, staged: &mut StagedFiles) -> Result<(), Error> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(file)?;
    for index in 0..zip.len() {
        let mut member = zip.by_index(index)?;
        if member.is_dir() {
            continue;
        }
        let Some(base) = Path::new(member.name()).file_name().map(PathBuf::from) else {
            continue;
        };
        let destination = target.join(base);
        // Recorded before writing so a partially-written file is still
        // cleaned up.
        staged.record(destination.clone());
        let mut out = File::create(&destination)?;
        io::copy(&mut member, &mut out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Write};
    use tempfile::TempDir;
    use zip::write::{SimpleFileOptions, ZipWriter};

    fn write_zip(path: &Path, members: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        for (name, content) in members {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_stage_extracts_members_into_containing_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("common")).unwrap();
        write_zip(
            &temp_dir.path().join("common/bundle.zip"),
            &[("en.json", r#"{"greeting":"hi"}"#)],
        );

        let staged = stage(temp_dir.path()).unwrap();
        let extracted = temp_dir.path().join("common/en.json");
        assert!(extracted.exists());
        assert_eq!(staged.paths(), [extracted.clone()]);
        assert_eq!(
            fs::read_to_string(&extracted).unwrap(),
            r#"{"greeting":"hi"}"#
        );
    }

    #[test]
    fn test_stage_flattens_member_paths() {
        let temp_dir = TempDir::new().unwrap();
        write_zip(
            &temp_dir.path().join("bundle.zip"),
            &[("nested/dir/en.json", r#"{"a":"b"}"#)],
        );

        let staged = stage(temp_dir.path()).unwrap();
        assert!(temp_dir.path().join("en.json").exists());
        assert!(!temp_dir.path().join("nested").exists());
        assert_eq!(staged.paths().len(), 1);
    }

    #[test]
    fn test_stage_member_collision_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        write_zip(
            &temp_dir.path().join("bundle.zip"),
            &[("a/en.json", r#"{"k":"first"}"#), ("b/en.json", r#"{"k":"second"}"#)],
        );

        let _staged = stage(temp_dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("en.json")).unwrap(),
            r#"{"k":"second"}"#
        );
    }

    #[test]
    fn test_drop_removes_extracted_files() {
        let temp_dir = TempDir::new().unwrap();
        write_zip(
            &temp_dir.path().join("bundle.zip"),
            &[("en.json", r#"{"greeting":"hi"}"#)],
        );

        {
            let _staged = stage(temp_dir.path()).unwrap();
            assert!(temp_dir.path().join("en.json").exists());
        }
        assert!(!temp_dir.path().join("en.json").exists());
        // The archive itself stays.
        assert!(temp_dir.path().join("bundle.zip").exists());
    }

    #[test]
    fn test_stage_without_archives_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en.json"), "{}").unwrap();
        let staged = stage(temp_dir.path()).unwrap();
        assert!(staged.is_empty());
    }

    #[test]
    fn test_stage_corrupt_archive_is_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bundle.zip"), "not a zip").unwrap();
        assert!(stage(temp_dir.path()).is_err());
    }
}
