//! Evaluation metrics for the training pipeline.
//!
//! Computes a confusion matrix and a per-label precision/recall/F1 summary
//! from aligned true and predicted label sequences. Rendering lives in
//! [`crate::cli::output`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelverError};

/// Counts per (true label, predicted label) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Label axes in sorted order; rows are true labels, columns predicted.
    labels: Vec<String>,
    /// `counts[true][predicted]`.
    counts: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    /// Compute the confusion matrix for aligned truth/prediction sequences.
    pub fn compute(truth: &[String], predicted: &[String]) -> Result<Self> {
        if truth.len() != predicted.len() {
            return Err(ShelverError::alignment(format!(
                "{} true labels vs {} predicted labels",
                truth.len(),
                predicted.len()
            )));
        }

        let labels: Vec<String> = truth
            .iter()
            .chain(predicted.iter())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut counts = vec![vec![0u64; labels.len()]; labels.len()];
        for (t, p) in truth.iter().zip(predicted.iter()) {
            // Both labels are members of `labels` by construction
            let row = labels.binary_search(t).map_err(|_| {
                ShelverError::other(format!("label '{t}' missing from matrix axes"))
            })?;
            let col = labels.binary_search(p).map_err(|_| {
                ShelverError::other(format!("label '{p}' missing from matrix axes"))
            })?;
            counts[row][col] += 1;
        }

        Ok(Self { labels, counts })
    }

    /// The label axes, in sorted order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Count for one (true label, predicted label) cell by index.
    pub fn count(&self, true_idx: usize, predicted_idx: usize) -> u64 {
        self.counts[true_idx][predicted_idx]
    }

    /// One row of counts (fixed true label, all predicted labels).
    pub fn row(&self, true_idx: usize) -> &[u64] {
        &self.counts[true_idx]
    }

    /// Total number of scored samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}

/// Precision/recall/F1 for one label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true samples with this label.
    pub support: u64,
}

/// Per-label metrics plus overall accuracy and macro averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub per_label: Vec<LabelMetrics>,
    pub accuracy: f64,
    pub macro_precision: f64,
    pub macro_recall: f64,
    pub macro_f1: f64,
}

impl ClassificationReport {
    /// Compute the report for aligned truth/prediction sequences.
    pub fn compute(truth: &[String], predicted: &[String]) -> Result<Self> {
        let matrix = ConfusionMatrix::compute(truth, predicted)?;
        Ok(Self::from_matrix(&matrix))
    }

    /// Derive the report from an already-computed confusion matrix.
    pub fn from_matrix(matrix: &ConfusionMatrix) -> Self {
        let n = matrix.labels().len();
        let mut per_label = Vec::with_capacity(n);
        let mut correct = 0u64;

        for idx in 0..n {
            let true_positives = matrix.count(idx, idx);
            correct += true_positives;

            let row_total: u64 = matrix.row(idx).iter().sum();
            let col_total: u64 = (0..n).map(|r| matrix.count(r, idx)).sum();

            let precision = ratio(true_positives, col_total);
            let recall = ratio(true_positives, row_total);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            per_label.push(LabelMetrics {
                label: matrix.labels()[idx].clone(),
                precision,
                recall,
                f1,
                support: row_total,
            });
        }

        let total = matrix.total();
        let accuracy = ratio(correct, total);
        let count = per_label.len().max(1) as f64;
        let macro_precision = per_label.iter().map(|m| m.precision).sum::<f64>() / count;
        let macro_recall = per_label.iter().map(|m| m.recall).sum::<f64>() / count;
        let macro_f1 = per_label.iter().map(|m| m.f1).sum::<f64>() / count;

        Self {
            per_label,
            accuracy,
            macro_precision,
            macro_recall,
            macro_f1,
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
