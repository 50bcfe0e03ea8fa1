//! Training dataset loading.
//!
//! The training dataset is a `;`-delimited text file with a required header
//! row naming a `Nombre` (filename) column and an `Etiqueta` (label) column.
//! A malformed row aborts the load; rows are never silently dropped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelverError};

/// Header name of the filename column.
pub const NAME_COLUMN: &str = "Nombre";

/// Header name of the label column.
pub const LABEL_COLUMN: &str = "Etiqueta";

/// One training row: a filename paired with its category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Bare filename, with extension.
    pub name: String,
    /// Category label; the label set is open, defined by the dataset.
    pub label: String,
}

impl LabeledExample {
    /// Create a new labeled example.
    pub fn new<S: Into<String>, L: Into<String>>(name: S, label: L) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Load a training dataset from a `;`-delimited file.
///
/// An unreadable file surfaces as an I/O error; [`ShelverError::DatasetFormat`]
/// is reserved for header and row problems.
pub fn load_dataset(path: &Path) -> Result<Vec<LabeledExample>> {
    let file = File::open(path)?;
    read_dataset(file)
}

/// Read a training dataset from any byte source.
pub fn read_dataset<R: Read>(reader: R) -> Result<Vec<LabeledExample>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ShelverError::dataset_format(format!("cannot read header row: {e}")))?;

    let name_idx = headers.iter().position(|h| h == NAME_COLUMN);
    let label_idx = headers.iter().position(|h| h == LABEL_COLUMN);
    let (name_idx, label_idx) = match (name_idx, label_idx) {
        (Some(n), Some(l)) => (n, l),
        _ => {
            return Err(ShelverError::dataset_format(format!(
                "dataset must have '{NAME_COLUMN}' and '{LABEL_COLUMN}' columns"
            )));
        }
    };

    let mut examples = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        // Header is row 1, data starts at row 2
        let line = row + 2;
        let record =
            record.map_err(|e| ShelverError::dataset_format(format!("row {line}: {e}")))?;

        let name = record.get(name_idx).unwrap_or("");
        let label = record.get(label_idx).unwrap_or("");
        if name.is_empty() || label.is_empty() {
            return Err(ShelverError::dataset_format(format!(
                "row {line}: both '{NAME_COLUMN}' and '{LABEL_COLUMN}' must be non-empty"
            )));
        }

        examples.push(LabeledExample::new(name, label));
    }

    log::debug!("loaded {} labeled examples", examples.len());
    Ok(examples)
}
