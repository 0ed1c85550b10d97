// file: src/features/vector.rs
// description: feature vectors handed from transforms to estimators

use serde::{Deserialize, Serialize};

/// A single sample's features. Sparse entries are sorted by column and
/// never repeat a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureVector {
    Sparse { dim: usize, entries: Vec<(usize, f64)> },
    Dense(Vec<f64>),
}

impl FeatureVector {
    pub fn sparse(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(idx, _)| *idx);
        Self::Sparse { dim, entries }
    }

    pub fn dim(&self) -> usize {
        match self {
            Self::Sparse { dim, .. } => *dim,
            Self::Dense(values) => values.len(),
        }
    }

    /// Non-zero (column, value) pairs in column order.
    pub fn nonzero(&self) -> Vec<(usize, f64)> {
        match self {
            Self::Sparse { entries, .. } => entries
                .iter()
                .copied()
                .filter(|(_, value)| *value != 0.0)
                .collect(),
            Self::Dense(values) => values
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, value)| *value != 0.0)
                .collect(),
        }
    }

    pub fn get(&self, idx: usize) -> f64 {
        match self {
            Self::Sparse { entries, .. } => entries
                .binary_search_by_key(&idx, |(i, _)| *i)
                .map(|pos| entries[pos].1)
                .unwrap_or(0.0),
            Self::Dense(values) => values.get(idx).copied().unwrap_or(0.0),
        }
    }

    pub fn to_dense(&self) -> Vec<f64> {
        match self {
            Self::Sparse { dim, entries } => {
                let mut dense = vec![0.0; *dim];
                for (idx, value) in entries {
                    if *idx < *dim {
                        dense[*idx] = *value;
                    }
                }
                dense
            }
            Self::Dense(values) => values.clone(),
        }
    }

    /// Dot product against a dense weight row of the same dimension.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        match self {
            Self::Sparse { entries, .. } => entries
                .iter()
                .filter_map(|(idx, value)| weights.get(*idx).map(|w| w * value))
                .sum(),
            Self::Dense(values) => values.iter().zip(weights).map(|(v, w)| v * w).sum(),
        }
    }

    pub fn squared_distance(&self, point: &[f64]) -> f64 {
        match self {
            Self::Dense(values) => values
                .iter()
                .zip(point)
                .map(|(v, p)| (v - p) * (v - p))
                .sum(),
            Self::Sparse { .. } => self
                .to_dense()
                .iter()
                .zip(point)
                .map(|(v, p)| (v - p) * (v - p))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_access() {
        let vector = FeatureVector::sparse(5, vec![(3, 2.0), (1, 0.5)]);

        assert_eq!(vector.dim(), 5);
        assert_eq!(vector.get(1), 0.5);
        assert_eq!(vector.get(2), 0.0);
        assert_eq!(vector.to_dense(), vec![0.0, 0.5, 0.0, 2.0, 0.0]);
        assert_eq!(vector.dot(&[1.0, 2.0, 3.0, 4.0, 5.0]), 9.0);
    }

    #[test]
    fn test_dense_distance() {
        let vector = FeatureVector::Dense(vec![1.0, 2.0]);
        assert_eq!(vector.squared_distance(&[1.0, 4.0]), 4.0);
        assert_eq!(vector.nonzero(), vec![(0, 1.0), (1, 2.0)]);
    }
}
