//! Error types for the shelver library.
//!
//! All fallible operations return [`Result`], with [`ShelverError`] as the
//! single error type. Pipeline-level precondition failures (missing model,
//! malformed dataset, misaligned batch) abort a run before any file is
//! touched; per-file failures during reorganization are reported through
//! [`crate::organize::MoveReport`] instead of this enum.
//!
//! # Examples
//!
//! ```
//! use shelver::error::{Result, ShelverError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShelverError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for shelver operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum ShelverError {
    /// I/O errors (file operations, directory enumeration, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed training dataset (missing columns, empty fields)
    #[error("Dataset format error: {0}")]
    DatasetFormat(String),

    /// The model artifact does not exist at the designated location
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// The model artifact exists but does not decode into a valid model
    #[error("Corrupt model: {0}")]
    CorruptModel(String),

    /// Prediction was requested on a model that was never fitted
    #[error("Model not fitted: {0}")]
    ModelNotFitted(String),

    /// The target directory does not exist
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    /// Entries and labels passed to reorganize are not positionally aligned
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// A predicted label cannot be used as a directory name
    #[error("Unsafe label: {0}")]
    UnsafeLabel(String),

    /// Analysis-related errors (tokenization, invalid patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ShelverError.
pub type Result<T> = std::result::Result<T, ShelverError>;

impl ShelverError {
    /// Create a new dataset format error.
    pub fn dataset_format<S: Into<String>>(msg: S) -> Self {
        ShelverError::DatasetFormat(msg.into())
    }

    /// Create a new model-not-found error.
    pub fn model_not_found<S: Into<String>>(msg: S) -> Self {
        ShelverError::ModelNotFound(msg.into())
    }

    /// Create a new corrupt-model error.
    pub fn corrupt_model<S: Into<String>>(msg: S) -> Self {
        ShelverError::CorruptModel(msg.into())
    }

    /// Create a new model-not-fitted error.
    pub fn model_not_fitted<S: Into<String>>(msg: S) -> Self {
        ShelverError::ModelNotFitted(msg.into())
    }

    /// Create a new directory-not-found error.
    pub fn directory_not_found<S: Into<String>>(msg: S) -> Self {
        ShelverError::DirectoryNotFound(msg.into())
    }

    /// Create a new alignment error.
    pub fn alignment<S: Into<String>>(msg: S) -> Self {
        ShelverError::Alignment(msg.into())
    }

    /// Create a new unsafe-label error.
    pub fn unsafe_label<S: Into<String>>(msg: S) -> Self {
        ShelverError::UnsafeLabel(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ShelverError::Analysis(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        ShelverError::SerializationError(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ShelverError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ShelverError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ShelverError::dataset_format("missing 'Etiqueta' column");
        assert_eq!(
            error.to_string(),
            "Dataset format error: missing 'Etiqueta' column"
        );

        let error = ShelverError::model_not_found("/tmp/model.bin");
        assert_eq!(error.to_string(), "Model not found: /tmp/model.bin");

        let error = ShelverError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let shelver_error = ShelverError::from(io_error);

        match shelver_error {
            ShelverError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
