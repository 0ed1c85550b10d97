// file: src/text/cleaner.rs
// description: text cleaning pipeline applied to title + abstract
// reference: regex normalization, stopword removal, lemmatization

use crate::text::lemmatizer::Lemmatizer;
use crate::text::{patterns, stopwords, tokenizer};

pub struct TextCleaner {
    lemmatizer: Lemmatizer,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self::with_lemmatizer(Lemmatizer::new())
    }

    pub fn with_lemmatizer(lemmatizer: Lemmatizer) -> Self {
        Self { lemmatizer }
    }

    /// Lower-case, strip noise and digits, drop stopwords, tokenize and
    /// lemmatize. Returns the lemmas joined by single spaces.
    pub fn clean(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = patterns::strip_digits(&patterns::strip_noise(&lowered));
        let filtered = stopwords::remove_stopwords(&stripped);

        tokenizer::tokenize(&filtered)
            .iter()
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
