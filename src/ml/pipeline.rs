//! The fitted vectorizer + classifier pair, persisted as one artifact.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dataset::LabeledExample;
use crate::error::{Result, ShelverError};
use crate::ml::naive_bayes::{DEFAULT_ALPHA, MultinomialNb};
use crate::ml::tfidf::TfIdfVectorizer;

/// Magic bytes identifying a shelver model artifact.
const MODEL_MAGIC: &[u8; 4] = b"SHLV";

/// Model artifact format version.
const MODEL_FORMAT_VERSION: u32 = 1;

/// A fitted TF-IDF vectorizer bound to a fitted Naive Bayes classifier.
///
/// This is the trained model shared between the training and inference
/// pipelines. It is immutable after [`ClassifierPipeline::fit`]: the training
/// run persists it with [`save`](ClassifierPipeline::save) and the inference
/// run reads it back with [`load`](ClassifierPipeline::load).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierPipeline {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
}

impl ClassifierPipeline {
    /// Fit the pipeline on labeled examples.
    ///
    /// Fits the vectorizer on the filenames, transforms them, then fits the
    /// classifier on the resulting term-weight vectors and paired labels.
    pub fn fit(examples: &[LabeledExample]) -> Result<Self> {
        if examples.is_empty() {
            return Err(ShelverError::invalid_argument(
                "training examples cannot be empty",
            ));
        }

        let documents: Vec<String> = examples.iter().map(|e| e.name.clone()).collect();
        let labels: Vec<String> = examples.iter().map(|e| e.label.clone()).collect();

        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&documents)?;

        let features: Vec<Vec<f64>> = documents
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect::<Result<_>>()?;

        let classifier = MultinomialNb::fit(&features, &labels, DEFAULT_ALPHA)?;

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Predict a label for each filename, positionally.
    ///
    /// An empty input yields an empty output. Fails with
    /// [`ShelverError::ModelNotFitted`] on a never-fitted pipeline.
    pub fn predict(&self, names: &[String]) -> Result<Vec<String>> {
        if !self.is_fitted() {
            return Err(ShelverError::model_not_fitted(
                "predict called before fit or load",
            ));
        }

        names
            .iter()
            .map(|name| {
                let features = self.vectorizer.transform(name)?;
                Ok(self.classifier.predict(&features)?.to_string())
            })
            .collect()
    }

    /// Whether both stages of the pipeline have been fitted.
    pub fn is_fitted(&self) -> bool {
        self.vectorizer.is_fitted() && self.classifier.is_fitted()
    }

    /// The class labels the pipeline can predict, in sorted order.
    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    /// Serialize the pipeline to a model artifact on disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MODEL_MAGIC)?;
        writer.write_all(&MODEL_FORMAT_VERSION.to_le_bytes())?;
        bincode::serialize_into(&mut writer, self)
            .map_err(|e| ShelverError::serialization(format!("Failed to serialize model: {e}")))?;
        writer.flush()?;

        Ok(())
    }

    /// Load a pipeline from a model artifact on disk.
    ///
    /// Fails with [`ShelverError::ModelNotFound`] if `path` does not exist
    /// and [`ShelverError::CorruptModel`] if the byte stream does not decode
    /// into a valid model.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShelverError::model_not_found(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic).map_err(|e| {
            ShelverError::corrupt_model(format!("{}: truncated header: {e}", path.display()))
        })?;
        if &magic != MODEL_MAGIC {
            return Err(ShelverError::corrupt_model(format!(
                "{}: not a shelver model artifact",
                path.display()
            )));
        }

        let mut version = [0u8; 4];
        reader.read_exact(&mut version).map_err(|e| {
            ShelverError::corrupt_model(format!("{}: truncated header: {e}", path.display()))
        })?;
        let version = u32::from_le_bytes(version);
        if version != MODEL_FORMAT_VERSION {
            return Err(ShelverError::corrupt_model(format!(
                "{}: unsupported model format version {version}",
                path.display()
            )));
        }

        let pipeline: ClassifierPipeline = bincode::deserialize_from(&mut reader).map_err(|e| {
            ShelverError::corrupt_model(format!("{}: failed to decode model: {e}", path.display()))
        })?;

        // The two stages must agree on the feature space
        if pipeline.vectorizer.vocabulary_size() != pipeline.classifier.n_features() {
            return Err(ShelverError::corrupt_model(format!(
                "{}: vectorizer and classifier disagree on feature count",
                path.display()
            )));
        }

        Ok(pipeline)
    }
}
