// file: src/features/mod.rs
// description: feature construction module exports
// reference: internal module structure

pub mod lda;
pub mod tfidf;
pub mod vector;
pub mod word_vectors;

pub use lda::TopicModel;
pub use tfidf::{Norm, TfidfVectorizer};
pub use vector::FeatureVector;
pub use word_vectors::WordVectors;
