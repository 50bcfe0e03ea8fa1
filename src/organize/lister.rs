//! Target directory enumeration.

use std::fs;
use std::path::Path;

use crate::error::{Result, ShelverError};

/// List the names of the regular files directly inside `dir`.
///
/// Subdirectories are never descended into or included. Symbolic links are
/// excluded, whatever they point at. Names are returned sorted so repeated
/// runs see the same order. Entries whose names are not valid UTF-8 are
/// skipped with a warning.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(ShelverError::directory_not_found(dir.display().to_string()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // file_type() does not follow symlinks, so links are filtered here
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::warn!("skipping file with non-UTF-8 name {raw:?}"),
        }
    }

    names.sort();
    log::info!("found {} files in {}", names.len(), dir.display());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_lists_only_regular_files() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.pdf")).unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let names = list_files(dir.path()).unwrap();
        assert_eq!(names, vec!["a.pdf", "b.txt"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let names = list_files(dir.path()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let result = list_files(Path::new("/nonexistent/target"));
        assert!(matches!(result, Err(ShelverError::DirectoryNotFound(_))));
    }
}
