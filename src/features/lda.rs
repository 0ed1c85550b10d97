// file: src/features/lda.rs
// description: LDA topic model used to reduce TF-IDF features to topic proportions
// reference: online variational Bayes, document E-step

use crate::error::{ClassifierError, Result};
use crate::features::vector::FeatureVector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicModel {
    /// Variational topic-word parameters, one row per topic.
    pub components: Vec<Vec<f64>>,
    /// Dirichlet prior on document-topic weights; defaults to 1 / n_topics.
    #[serde(default)]
    pub doc_topic_prior: Option<f64>,
    #[serde(default = "default_max_iter")]
    pub max_doc_update_iter: usize,
    #[serde(default = "default_tol")]
    pub mean_change_tol: f64,
}

fn default_max_iter() -> usize {
    100
}

fn default_tol() -> f64 {
    1e-3
}

impl TopicModel {
    pub fn n_topics(&self) -> usize {
        self.components.len()
    }

    pub fn n_features(&self) -> usize {
        self.components.first().map(Vec::len).unwrap_or(0)
    }

    pub fn validate(&self) -> Result<()> {
        if self.components.is_empty() {
            return Err(ClassifierError::Validation(
                "Topic model has no components".to_string(),
            ));
        }

        let width = self.n_features();
        for (topic, row) in self.components.iter().enumerate() {
            if row.len() != width {
                return Err(ClassifierError::Validation(format!(
                    "Topic {} has {} features, expected {}",
                    topic,
                    row.len(),
                    width
                )));
            }
            if row.iter().any(|v| v.is_nan() || *v <= 0.0) {
                return Err(ClassifierError::Validation(format!(
                    "Topic {} has non-positive weights",
                    topic
                )));
            }
        }

        Ok(())
    }

    /// Normalized document-topic distribution for one document.
    pub fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        self.validate()?;

        if features.dim() != self.n_features() {
            return Err(ClassifierError::Inference(format!(
                "Topic model expects {} features, got {}",
                self.n_features(),
                features.dim()
            )));
        }

        let n_topics = self.n_topics();
        let alpha = self
            .doc_topic_prior
            .unwrap_or(1.0 / n_topics as f64);

        let (ids, counts): (Vec<usize>, Vec<f64>) = features.nonzero().into_iter().unzip();

        // exp(E[log beta]) restricted to the document's columns
        let exp_topic_word: Vec<Vec<f64>> = self
            .components
            .iter()
            .map(|row| {
                let total = digamma(row.iter().sum());
                ids.iter()
                    .map(|&id| (digamma(row[id]) - total).exp())
                    .collect()
            })
            .collect();

        let mut doc_topic = vec![1.0; n_topics];
        let mut exp_doc_topic = exp_dirichlet_expectation(&doc_topic);

        for _ in 0..self.max_doc_update_iter {
            let last = doc_topic.clone();

            let norm_phi: Vec<f64> = (0..ids.len())
                .map(|w| {
                    (0..n_topics)
                        .map(|k| exp_doc_topic[k] * exp_topic_word[k][w])
                        .sum::<f64>()
                        + f64::EPSILON
                })
                .collect();

            for k in 0..n_topics {
                let weighted: f64 = (0..ids.len())
                    .map(|w| counts[w] / norm_phi[w] * exp_topic_word[k][w])
                    .sum();
                doc_topic[k] = exp_doc_topic[k] * weighted + alpha;
            }

            exp_doc_topic = exp_dirichlet_expectation(&doc_topic);

            let mean_change = doc_topic
                .iter()
                .zip(&last)
                .map(|(a, b)| (a - b).abs())
                .sum::<f64>()
                / n_topics as f64;
            if mean_change < self.mean_change_tol {
                break;
            }
        }

        let total: f64 = doc_topic.iter().sum();
        Ok(doc_topic.into_iter().map(|v| v / total).collect())
    }
}

fn exp_dirichlet_expectation(alpha: &[f64]) -> Vec<f64> {
    let total = digamma(alpha.iter().sum());
    alpha.iter().map(|a| (digamma(*a) - total).exp()).collect()
}

/// Digamma function for positive arguments.
pub fn digamma(mut x: f64) -> f64 {
    let mut result = 0.0;
    while x < 6.0 {
        result -= 1.0 / x;
        x += 1.0;
    }

    let inv = 1.0 / x;
    let inv2 = inv * inv;
    result + x.ln() - 0.5 * inv
        - inv2
            * (1.0 / 12.0
                - inv2 * (1.0 / 120.0 - inv2 * (1.0 / 252.0 - inv2 * (1.0 / 240.0 - inv2 / 132.0))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TopicModel {
        TopicModel {
            components: vec![vec![10.0, 10.0, 0.1, 0.1], vec![0.1, 0.1, 10.0, 10.0]],
            doc_topic_prior: None,
            max_doc_update_iter: 100,
            mean_change_tol: 1e-3,
        }
    }

    #[test]
    fn test_digamma_known_values() {
        // psi(1) = -euler_gamma, psi(0.5) = -gamma - 2 ln 2
        let euler = 0.577_215_664_901_532_9;
        assert!((digamma(1.0) + euler).abs() < 1e-10);
        assert!((digamma(0.5) - (-euler - 2.0 * 2.0_f64.ln())).abs() < 1e-10);
        assert!((digamma(10.0) - 2.251_752_589_066_721).abs() < 1e-10);
    }

    #[test]
    fn test_transform_prefers_matching_topic() {
        let lda = model();
        let doc = FeatureVector::sparse(4, vec![(0, 0.7), (1, 0.7)]);
        let topics = lda.transform(&doc).unwrap();

        assert_eq!(topics.len(), 2);
        assert!((topics.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(topics[0] > 0.6);
    }

    #[test]
    fn test_empty_document_is_uniform() {
        let lda = model();
        let topics = lda.transform(&FeatureVector::sparse(4, vec![])).unwrap();
        assert!((topics[0] - 0.5).abs() < 1e-12);
        assert!((topics[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let lda = model();
        let doc = FeatureVector::Dense(vec![1.0, 0.0]);
        assert!(lda.transform(&doc).is_err());
    }
}
