//! Filesystem tests for directory listing and label-driven reorganization.

use std::fs::{self, File};
use std::path::Path;

use tempfile::TempDir;

use shelver::error::ShelverError;
use shelver::organize::{MoveOutcome, list_files, reorganize};

fn touch(path: &Path) {
    File::create(path).unwrap();
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_list_files_excludes_subdirectories() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("report.docx"));
    touch(&dir.path().join("song.mp3"));
    fs::create_dir(dir.path().join("already_sorted")).unwrap();

    let names = list_files(dir.path()).unwrap();
    assert_eq!(names, strings(&["report.docx", "song.mp3"]));
}

#[cfg(unix)]
#[test]
fn test_list_files_excludes_symlinks() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("report.docx"));
    symlink(dir.path().join("report.docx"), dir.path().join("link.docx")).unwrap();
    symlink("no_such_target", dir.path().join("dangling.docx")).unwrap();

    let names = list_files(dir.path()).unwrap();
    assert_eq!(names, strings(&["report.docx"]));
}

#[cfg(unix)]
#[test]
fn test_list_files_skips_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("plain.txt"));
    File::create(dir.path().join(OsStr::from_bytes(b"mangled_\xff.txt"))).unwrap();

    let names = list_files(dir.path()).unwrap();
    assert_eq!(names, strings(&["plain.txt"]));
}

#[test]
fn test_reorganize_moves_every_file() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("invoice.pdf"));
    touch(&dir.path().join("photo.jpg"));

    let entries = strings(&["invoice.pdf", "photo.jpg"]);
    let labels = strings(&["financial", "media"]);
    let report = reorganize(dir.path(), &entries, &labels).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.moved(), 2);
    assert!(dir.path().join("financial/invoice.pdf").is_file());
    assert!(dir.path().join("media/photo.jpg").is_file());
    assert!(!dir.path().join("invoice.pdf").exists());
    assert!(!dir.path().join("photo.jpg").exists());
}

#[test]
fn test_no_file_is_lost_or_duplicated() {
    let dir = TempDir::new().unwrap();
    let entries = strings(&["a.txt", "b.txt", "c.txt"]);
    for name in &entries {
        touch(&dir.path().join(name));
    }
    let labels = strings(&["docs", "docs", "notes"]);

    reorganize(dir.path(), &entries, &labels).unwrap();

    let mut found = Vec::new();
    for sub in ["docs", "notes"] {
        for entry in fs::read_dir(dir.path().join(sub)).unwrap() {
            found.push(entry.unwrap().file_name().into_string().unwrap());
        }
    }
    found.sort();
    assert_eq!(found, entries);
    // Nothing left at the top level but the label directories
    assert!(list_files(dir.path()).unwrap().is_empty());
}

#[test]
fn test_collision_is_reported_not_overwritten() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("invoice.pdf"));
    fs::create_dir(dir.path().join("financial")).unwrap();
    fs::write(dir.path().join("financial/invoice.pdf"), b"original").unwrap();

    let entries = strings(&["invoice.pdf"]);
    let labels = strings(&["financial"]);
    let report = reorganize(dir.path(), &entries, &labels).unwrap();

    assert_eq!(report.collided(), 1);
    assert_eq!(report.moved(), 0);
    // The occupied destination keeps its content and the source stays put
    assert_eq!(
        fs::read(dir.path().join("financial/invoice.pdf")).unwrap(),
        b"original"
    );
    assert!(dir.path().join("invoice.pdf").is_file());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_destination_is_a_collision() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("invoice.pdf"));
    fs::create_dir(dir.path().join("financial")).unwrap();
    // A dangling link occupies the destination even though it resolves to
    // nothing; moving over it would silently replace it
    symlink("no_such_target", dir.path().join("financial/invoice.pdf")).unwrap();

    let entries = strings(&["invoice.pdf"]);
    let labels = strings(&["financial"]);
    let report = reorganize(dir.path(), &entries, &labels).unwrap();

    assert_eq!(report.collided(), 1);
    assert_eq!(report.moved(), 0);
    assert!(dir.path().join("invoice.pdf").is_file());
    let destination = dir.path().join("financial/invoice.pdf");
    assert!(
        destination
            .symlink_metadata()
            .unwrap()
            .file_type()
            .is_symlink()
    );
}

#[test]
fn test_second_run_reports_collisions() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("photo.jpg"));
    let entries = strings(&["photo.jpg"]);
    let labels = strings(&["media"]);

    let first = reorganize(dir.path(), &entries, &labels).unwrap();
    assert!(first.is_clean());

    // Recreate the source file and run the same batch again
    touch(&dir.path().join("photo.jpg"));
    let second = reorganize(dir.path(), &entries, &labels).unwrap();
    assert_eq!(second.collided(), 1);
}

#[test]
fn test_mismatched_lengths_leave_filesystem_untouched() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("a.txt"));
    touch(&dir.path().join("b.txt"));
    touch(&dir.path().join("c.txt"));

    let entries = strings(&["a.txt", "b.txt", "c.txt"]);
    let labels = strings(&["docs", "docs"]);
    let result = reorganize(dir.path(), &entries, &labels);

    assert!(matches!(result, Err(ShelverError::Alignment(_))));
    assert_eq!(list_files(dir.path()).unwrap(), entries);
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_unsafe_label_aborts_before_any_move() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("a.txt"));
    touch(&dir.path().join("b.txt"));

    let entries = strings(&["a.txt", "b.txt"]);
    let labels = strings(&["docs", "../escape"]);
    let result = reorganize(dir.path(), &entries, &labels);

    assert!(matches!(result, Err(ShelverError::UnsafeLabel(_))));
    assert_eq!(list_files(dir.path()).unwrap(), entries);
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_missing_source_is_isolated() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("real.txt"));

    let entries = strings(&["ghost.txt", "real.txt"]);
    let labels = strings(&["docs", "docs"]);
    let report = reorganize(dir.path(), &entries, &labels).unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(report.moved(), 1);
    assert!(matches!(report.moves[0].outcome, MoveOutcome::Failed(_)));
    assert!(dir.path().join("docs/real.txt").is_file());
}

#[test]
fn test_reorganize_missing_directory() {
    let result = reorganize(Path::new("/nonexistent/target"), &[], &[]);
    assert!(matches!(result, Err(ShelverError::DirectoryNotFound(_))));
}

#[test]
fn test_label_directory_creation_is_idempotent() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    touch(&dir.path().join("a.txt"));

    let report = reorganize(dir.path(), &strings(&["a.txt"]), &strings(&["docs"])).unwrap();
    assert!(report.is_clean());
    assert!(dir.path().join("docs/a.txt").is_file());
}
