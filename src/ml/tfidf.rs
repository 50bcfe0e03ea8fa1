//! TF-IDF vectorizer for filename feature extraction.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// TF-IDF vectorizer for text feature extraction.
///
/// Tokens are lowercased before entering the vocabulary. Out-of-vocabulary
/// tokens at transform time contribute nothing to the feature vector.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Tokenizer used for both fitting and transforming.
    tokenizer: RegexTokenizer,
    /// Vocabulary: term -> feature index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each term, indexed by feature index.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(RegexTokenizer::default())
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified tokenizer.
    pub fn new(tokenizer: RegexTokenizer) -> Self {
        Self {
            tokenizer,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        }
    }

    /// Fit the vectorizer on training documents.
    ///
    /// Builds the vocabulary and the smoothed IDF table. Vocabulary indices
    /// are assigned in sorted term order so fitting the same corpus twice
    /// produces the same model.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = self.tokenize(doc)?;
            let unique_tokens: BTreeSet<_> = tokens.into_iter().collect();

            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<&String> = document_frequency.keys().collect();
        terms.sort();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = vec![0.0; terms.len()];
        for (idx, term) in terms.into_iter().enumerate() {
            let df = document_frequency[term];
            // IDF = log((N + 1) / (df + 1)) + 1
            idf[idx] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
            vocabulary.insert(term.clone(), idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = self.tokenize(document)?;
        let mut tf = vec![0.0; self.vocabulary.len()];

        // Count term frequencies; unknown terms are simply absent
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        // Apply IDF
        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        Ok(tf)
    }

    /// Tokenize a document into lowercased terms.
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self
            .tokenizer
            .tokenize(text)?
            .map(|token| token.text.to_lowercase())
            .collect();
        Ok(tokens)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether the vectorizer has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.n_documents > 0
    }
}
