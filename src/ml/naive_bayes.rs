//! Multinomial Naive Bayes classifier over term-weight vectors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelverError};

/// Default Laplace smoothing factor.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Multinomial Naive Bayes classifier.
///
/// Trained on TF-IDF weight vectors paired with string labels. Fractional
/// feature weights are accepted as multinomial pseudo-counts. The class list
/// is kept sorted; when two classes score identically the first one in sorted
/// order wins, which makes prediction deterministic for a fixed model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Class labels in sorted order.
    classes: Vec<String>,
    /// Log prior probability per class.
    log_prior: Vec<f64>,
    /// Log likelihood per class and feature: `[class][feature]`.
    log_likelihood: Vec<Vec<f64>>,
    /// Laplace smoothing factor used at fit time.
    alpha: f64,
}

impl MultinomialNb {
    /// Fit the classifier on feature vectors and their paired labels.
    pub fn fit(features: &[Vec<f64>], labels: &[String], alpha: f64) -> Result<Self> {
        if features.is_empty() {
            return Err(ShelverError::invalid_argument(
                "training features cannot be empty",
            ));
        }
        if features.len() != labels.len() {
            return Err(ShelverError::invalid_argument(format!(
                "features and labels must be aligned: {} features vs {} labels",
                features.len(),
                labels.len()
            )));
        }
        if alpha <= 0.0 {
            return Err(ShelverError::invalid_argument(
                "smoothing factor alpha must be positive",
            ));
        }

        let n_features = features[0].len();
        for row in features {
            if row.len() != n_features {
                return Err(ShelverError::invalid_argument(format!(
                    "feature vectors must all have length {n_features}"
                )));
            }
        }

        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let n_classes = classes.len();
        let mut doc_count = vec![0usize; n_classes];
        let mut feature_count = vec![vec![0.0; n_features]; n_classes];

        for (row, label) in features.iter().zip(labels.iter()) {
            // Label set comes from `labels`, so the lookup always succeeds
            let class_idx = classes
                .binary_search(label)
                .map_err(|_| ShelverError::other(format!("unknown label '{label}'")))?;
            doc_count[class_idx] += 1;
            for (idx, weight) in row.iter().enumerate() {
                feature_count[class_idx][idx] += weight;
            }
        }

        let n_documents = features.len() as f64;
        let mut log_prior = Vec::with_capacity(n_classes);
        let mut log_likelihood = Vec::with_capacity(n_classes);

        for class_idx in 0..n_classes {
            log_prior.push((doc_count[class_idx] as f64 / n_documents).ln());

            let total: f64 =
                feature_count[class_idx].iter().sum::<f64>() + alpha * n_features as f64;
            let likelihood = feature_count[class_idx]
                .iter()
                .map(|&count| ((count + alpha) / total).ln())
                .collect();
            log_likelihood.push(likelihood);
        }

        Ok(Self {
            classes,
            log_prior,
            log_likelihood,
            alpha,
        })
    }

    /// Predict the most likely class for a single feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<&str> {
        if self.classes.is_empty() {
            return Err(ShelverError::model_not_fitted(
                "predict called on an unfitted classifier",
            ));
        }
        let n_features = self.log_likelihood[0].len();
        if features.len() != n_features {
            return Err(ShelverError::invalid_argument(format!(
                "expected {n_features} features, got {}",
                features.len()
            )));
        }

        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;
        for class_idx in 0..self.classes.len() {
            let mut score = self.log_prior[class_idx];
            for (idx, &weight) in features.iter().enumerate() {
                if weight != 0.0 {
                    score += weight * self.log_likelihood[class_idx][idx];
                }
            }
            // Strictly-greater keeps the first class on ties (sorted order)
            if score > best_score {
                best_score = score;
                best_idx = class_idx;
            }
        }

        Ok(&self.classes[best_idx])
    }

    /// The class labels seen at fit time, in sorted order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of features the classifier was fitted on.
    pub fn n_features(&self) -> usize {
        self.log_likelihood.first().map_or(0, Vec::len)
    }

    /// Whether the classifier has been fitted.
    pub fn is_fitted(&self) -> bool {
        !self.classes.is_empty()
    }

    /// The smoothing factor used at fit time.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
