// file: src/features/word_vectors.rs
// description: word embedding table and mean-pooled sentence vectors
// reference: word2vec / GloVe text format

use crate::error::{ClassifierError, Result};
use crate::features::vector::FeatureVector;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Width used for sentence vectors when the table carries no vectors.
pub const DEFAULT_VECTOR_SIZE: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct WordVectors {
    vectors: HashMap<String, Vec<f64>>,
    vector_size: usize,
}

impl WordVectors {
    pub fn new(vectors: HashMap<String, Vec<f64>>, vector_size: usize) -> Self {
        Self {
            vectors,
            vector_size,
        }
    }

    pub fn empty() -> Self {
        Self::new(HashMap::new(), DEFAULT_VECTOR_SIZE)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ClassifierError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&content)?;
        debug!(
            "Loaded {} word vectors of size {} from {}",
            table.len(),
            table.vector_size,
            path.display()
        );
        Ok(table)
    }

    /// Parse `word v1 ... vn` lines. A leading `count dim` header is skipped.
    /// The vector size is the width of the first vector read.
    pub fn parse(content: &str) -> Result<Self> {
        let mut vectors = HashMap::new();
        let mut vector_size = None;

        for (line_no, line) in content.lines().enumerate() {
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };

            let rest: Vec<&str> = parts.collect();
            if line_no == 0
                && rest.len() == 1
                && word.parse::<usize>().is_ok()
                && rest[0].parse::<usize>().is_ok()
            {
                continue;
            }

            let values = rest
                .iter()
                .map(|v| v.parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| {
                    ClassifierError::Validation(format!(
                        "Invalid word vector on line {}: {}",
                        line_no + 1,
                        e
                    ))
                })?;

            if values.is_empty() {
                continue;
            }

            vector_size.get_or_insert(values.len());
            vectors.insert(word.to_string(), values);
        }

        Ok(Self::new(
            vectors,
            vector_size.unwrap_or(DEFAULT_VECTOR_SIZE),
        ))
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vector_size(&self) -> usize {
        self.vector_size
    }

    /// Mean of the vectors of the known words in `sentence`; zeros when no
    /// word is known. Vectors of differing widths cannot be averaged.
    pub fn sentence_vector(&self, sentence: &str) -> Result<FeatureVector> {
        let known: Vec<&Vec<f64>> = sentence
            .split_whitespace()
            .filter_map(|word| self.vectors.get(word))
            .collect();

        let Some(first) = known.first() else {
            return Ok(FeatureVector::Dense(vec![0.0; self.vector_size]));
        };

        let width = first.len();
        let mut sum = vec![0.0; width];
        for vector in &known {
            if vector.len() != width {
                return Err(ClassifierError::Vectorization(format!(
                    "word vectors have inconsistent sizes ({} and {})",
                    width,
                    vector.len()
                )));
            }
            for (acc, value) in sum.iter_mut().zip(vector.iter()) {
                *acc += value;
            }
        }

        let count = known.len() as f64;
        Ok(FeatureVector::Dense(
            sum.into_iter().map(|v| v / count).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_with_header() {
        let table = WordVectors::parse("2 3\nquantum 1 0 0\nspin 0 1 0\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.vector_size(), 3);
    }

    #[test]
    fn test_sentence_vector_mean() {
        let table = WordVectors::parse("quantum 1 2\nspin 3 4\n").unwrap();
        let vector = table.sentence_vector("quantum unknown spin").unwrap();
        assert_eq!(vector, FeatureVector::Dense(vec![2.0, 3.0]));
    }

    #[test]
    fn test_sentence_vector_no_known_words() {
        let table = WordVectors::parse("quantum 1 2 3\n").unwrap();
        let vector = table.sentence_vector("").unwrap();
        assert_eq!(vector, FeatureVector::Dense(vec![0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_inconsistent_widths() {
        let table = WordVectors::parse("quantum 1 2\nspin 3 4 5\n").unwrap();
        let err = table.sentence_vector("quantum spin").unwrap_err();
        assert!(err.to_string().starts_with("Error creating vector from text"));
    }

    #[test]
    fn test_invalid_number() {
        assert!(WordVectors::parse("quantum 1 abc\n").is_err());
    }

    #[test]
    fn test_empty_table_defaults() {
        let table = WordVectors::empty();
        assert!(table.is_empty());
        assert_eq!(table.vector_size(), DEFAULT_VECTOR_SIZE);
    }
}
