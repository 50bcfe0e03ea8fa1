//! File relocation driven by predicted labels.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelverError};

/// Terminal state of one file in a reorganization batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum MoveOutcome {
    /// The file was moved to its destination.
    Moved,
    /// A file with the same name already exists at the destination;
    /// the source file was left in place.
    Collision,
    /// The move failed for another reason; the batch continued.
    Failed(String),
}

/// The planned and realized move for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMove {
    /// Bare filename within the target directory.
    pub name: String,
    /// Predicted label, also the destination subdirectory name.
    pub label: String,
    pub outcome: MoveOutcome,
}

/// Per-file outcomes of one reorganization run, in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveReport {
    pub moves: Vec<FileMove>,
}

impl MoveReport {
    /// Number of files moved successfully.
    pub fn moved(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Moved))
    }

    /// Number of files skipped due to a destination collision.
    pub fn collided(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Collision))
    }

    /// Number of files that failed to move for another reason.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Failed(_)))
    }

    /// Whether every file in the batch was moved.
    pub fn is_clean(&self) -> bool {
        self.moved() == self.moves.len()
    }

    fn count<F: Fn(&MoveOutcome) -> bool>(&self, predicate: F) -> usize {
        self.moves
            .iter()
            .filter(|m| predicate(&m.outcome))
            .count()
    }
}

/// Reject labels that cannot safely name a subdirectory of the target.
///
/// A label containing a path separator would let directory creation escape
/// the target directory, so such labels abort the batch before any move.
fn check_label(label: &str) -> Result<()> {
    if label.is_empty() || label == "." || label == ".." {
        return Err(ShelverError::unsafe_label(format!(
            "'{label}' cannot name a destination directory"
        )));
    }
    if label.chars().any(std::path::is_separator) {
        return Err(ShelverError::unsafe_label(format!(
            "'{label}' contains a path separator"
        )));
    }
    Ok(())
}

/// Check every label in a batch, failing on the first unsafe one.
///
/// Callers that only plan moves (dry runs) use this too, so a plan is never
/// shown for a batch the real run would reject.
pub fn validate_labels(labels: &[String]) -> Result<()> {
    for label in labels {
        check_label(label)?;
    }
    Ok(())
}

/// Move each file into a subdirectory of `dir` named after its label.
///
/// `entries` and `labels` must be equal-length and positionally aligned;
/// a mismatch fails with [`ShelverError::Alignment`] before any file is
/// touched, as does an unsafe label. Destination directories are created as
/// needed. An occupied destination is never overwritten: the collision is
/// recorded and the batch continues. The report preserves input order.
pub fn reorganize(dir: &Path, entries: &[String], labels: &[String]) -> Result<MoveReport> {
    if entries.len() != labels.len() {
        return Err(ShelverError::alignment(format!(
            "{} entries vs {} labels",
            entries.len(),
            labels.len()
        )));
    }
    if !dir.is_dir() {
        return Err(ShelverError::directory_not_found(dir.display().to_string()));
    }
    validate_labels(labels)?;

    let mut report = MoveReport::default();
    for (name, label) in entries.iter().zip(labels.iter()) {
        let outcome = move_one(dir, name, label);
        match &outcome {
            MoveOutcome::Moved => log::info!("moved '{name}' into '{label}'"),
            MoveOutcome::Collision => {
                log::warn!("'{label}/{name}' already exists, leaving '{name}' in place")
            }
            MoveOutcome::Failed(reason) => log::warn!("failed to move '{name}': {reason}"),
        }
        report.moves.push(FileMove {
            name: name.clone(),
            label: label.clone(),
            outcome,
        });
    }

    Ok(report)
}

fn move_one(dir: &Path, name: &str, label: &str) -> MoveOutcome {
    let destination_dir = dir.join(label);
    if let Err(e) = fs::create_dir_all(&destination_dir) {
        return MoveOutcome::Failed(format!("cannot create '{}': {e}", destination_dir.display()));
    }

    let source = dir.join(name);
    let destination = destination_dir.join(name);
    // symlink_metadata does not follow links, so a dangling symlink at the
    // destination still counts as occupied
    if destination.symlink_metadata().is_ok() {
        return MoveOutcome::Collision;
    }
    if !source.exists() {
        return MoveOutcome::Failed(format!("source '{}' does not exist", source.display()));
    }

    match fs::rename(&source, &destination) {
        Ok(()) => MoveOutcome::Moved,
        Err(e) => MoveOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_label() {
        assert!(check_label("financial").is_ok());
        assert!(check_label("media-2024").is_ok());
        assert!(check_label("").is_err());
        assert!(check_label(".").is_err());
        assert!(check_label("..").is_err());
        assert!(check_label("a/b").is_err());
    }

    #[test]
    fn test_validate_labels() {
        assert!(validate_labels(&["docs".to_string(), "media".to_string()]).is_ok());
        let result = validate_labels(&["docs".to_string(), "a/b".to_string()]);
        assert!(matches!(result, Err(ShelverError::UnsafeLabel(_))));
    }

    #[test]
    fn test_report_counts() {
        let report = MoveReport {
            moves: vec![
                FileMove {
                    name: "a.txt".to_string(),
                    label: "docs".to_string(),
                    outcome: MoveOutcome::Moved,
                },
                FileMove {
                    name: "b.txt".to_string(),
                    label: "docs".to_string(),
                    outcome: MoveOutcome::Collision,
                },
                FileMove {
                    name: "c.txt".to_string(),
                    label: "docs".to_string(),
                    outcome: MoveOutcome::Failed("source missing".to_string()),
                },
            ],
        };

        assert_eq!(report.moved(), 1);
        assert_eq!(report.collided(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_clean());
    }
}
