//! Machine learning pipeline for filename classification.
//!
//! The pipeline mirrors the classic text-classification recipe: a TF-IDF
//! vectorizer turns a filename into a term-weight vector, and a multinomial
//! Naive Bayes classifier maps that vector to a label. The two are fitted
//! together and persisted as one artifact, so inference only needs the
//! filename string.

pub mod naive_bayes;
pub mod pipeline;
pub mod tfidf;

pub use naive_bayes::MultinomialNb;
pub use pipeline::ClassifierPipeline;
pub use tfidf::TfIdfVectorizer;
