//! # shelver
//!
//! Classify files by filename alone and organize them into labeled folders.
//!
//! Two pipelines share one serialized model artifact:
//!
//! - **Training**: load a labeled dataset of (filename, label) rows, fit a
//!   TF-IDF vectorizer and a multinomial Naive Bayes classifier as one
//!   pipeline, persist it, and report a confusion matrix and per-label
//!   metrics.
//! - **Inference**: load the model, list the files in a target directory,
//!   predict a label per filename, and move each file into a subdirectory
//!   named after its label. Collisions are reported, never overwritten.
//!
//! Filenames are the only input: file content is never inspected.

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod ml;
pub mod organize;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
