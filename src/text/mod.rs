// file: src/text/mod.rs
// description: text normalization module exports
// reference: internal module structure

pub mod cleaner;
pub mod lemmatizer;
pub mod patterns;
pub mod stopwords;
pub mod tokenizer;

pub use cleaner::TextCleaner;
pub use lemmatizer::Lemmatizer;
