// file: src/features/tfidf.rs
// description: TF-IDF vectorizer restored from an exported vocabulary and idf table
// reference: word-level analyzer with a two-or-more word-character token pattern

use crate::error::{ClassifierError, Result};
use crate::features::vector::FeatureVector;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").expect("TOKEN regex is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        Self {
            vocabulary,
            idf,
            ngram_range: default_ngram_range(),
            lowercase: true,
            sublinear_tf: false,
            norm: default_norm(),
        }
    }

    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Check that every vocabulary column has an idf weight.
    pub fn validate(&self) -> Result<()> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ClassifierError::Validation(format!(
                "Invalid ngram range ({}, {})",
                min_n, max_n
            )));
        }

        if let Some((term, idx)) = self
            .vocabulary
            .iter()
            .find(|(_, idx)| **idx >= self.idf.len())
        {
            return Err(ClassifierError::Validation(format!(
                "Vocabulary term '{}' maps to column {} but idf has {} entries",
                term,
                idx,
                self.idf.len()
            )));
        }

        Ok(())
    }

    fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let tokens: Vec<&str> = TOKEN.find_iter(&text).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();

        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }

        terms
    }

    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.analyze(text) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if self.sublinear_tf {
                    count.ln() + 1.0
                } else {
                    count
                };
                (idx, tf * self.idf.get(idx).copied().unwrap_or(0.0))
            })
            .collect();

        let norm = match self.norm {
            Some(Norm::L2) => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Some(Norm::L1) => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            None => 1.0,
        };

        if norm > 0.0 {
            for (_, value) in entries.iter_mut() {
                *value /= norm;
            }
        }

        FeatureVector::sparse(self.n_features(), entries)
    }
}
