//! Directory listing and file reorganization.
//!
//! [`lister::list_files`] enumerates the direct regular-file children of a
//! target directory; [`mover::reorganize`] relocates each one into a
//! subdirectory named after its predicted label. Batch-level preconditions
//! (alignment, label safety) fail before any file is touched; per-file
//! failures are isolated in the returned [`MoveReport`].

pub mod lister;
pub mod mover;

pub use lister::list_files;
pub use mover::{FileMove, MoveOutcome, MoveReport, reorganize, validate_labels};
