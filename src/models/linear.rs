// file: src/models/linear.rs
// description: linear decision functions and multinomial naive bayes

use crate::error::{ClassifierError, Result};
use crate::features::FeatureVector;
use crate::models::estimator::Classifier;
use crate::models::prediction::{ClassLabel, argmax};
use serde::{Deserialize, Serialize};

/// One weight row per class, or a single row for a binary decision where a
/// positive score selects `classes[1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    pub classes: Vec<ClassLabel>,
}

impl LinearModel {
    fn decision_function(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        if self.coef.len() != self.intercept.len() {
            return Err(ClassifierError::Inference(format!(
                "Linear model has {} weight rows but {} intercepts",
                self.coef.len(),
                self.intercept.len()
            )));
        }

        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| features.dot(row) + bias)
            .collect())
    }
}

impl Classifier for LinearModel {
    fn classes(&self) -> &[ClassLabel] {
        &self.classes
    }

    fn n_features(&self) -> Option<usize> {
        self.coef.first().map(Vec::len)
    }

    fn predict_position(&self, features: &FeatureVector) -> Result<usize> {
        let scores = self.decision_function(features)?;

        if scores.len() == 1 && self.classes.len() == 2 {
            return Ok(usize::from(scores[0] > 0.0));
        }

        if scores.len() != self.classes.len() {
            return Err(ClassifierError::Inference(format!(
                "Linear model has {} weight rows for {} classes",
                scores.len(),
                self.classes.len()
            )));
        }

        argmax(&scores).ok_or_else(|| ClassifierError::Inference("Linear model has no classes".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    pub class_log_prior: Vec<f64>,
    pub feature_log_prob: Vec<Vec<f64>>,
    pub classes: Vec<ClassLabel>,
}

impl Classifier for MultinomialNb {
    fn classes(&self) -> &[ClassLabel] {
        &self.classes
    }

    fn n_features(&self) -> Option<usize> {
        self.feature_log_prob.first().map(Vec::len)
    }

    fn predict_position(&self, features: &FeatureVector) -> Result<usize> {
        if self.class_log_prior.len() != self.feature_log_prob.len()
            || self.class_log_prior.len() != self.classes.len()
        {
            return Err(ClassifierError::Inference(
                "Naive bayes priors, likelihoods and classes differ in length".to_string(),
            ));
        }

        let joint_log_likelihood: Vec<f64> = self
            .feature_log_prob
            .iter()
            .zip(&self.class_log_prior)
            .map(|(row, prior)| features.dot(row) + prior)
            .collect();

        argmax(&joint_log_likelihood)
            .ok_or_else(|| ClassifierError::Inference("Naive bayes model has no classes".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_decision() {
        let model = LinearModel {
            coef: vec![vec![1.0, -1.0]],
            intercept: vec![-0.5],
            classes: vec![ClassLabel::Index(0), ClassLabel::Index(3)],
        };

        let high = FeatureVector::Dense(vec![2.0, 0.0]);
        let low = FeatureVector::Dense(vec![0.0, 2.0]);
        assert_eq!(model.predict_class(&high).unwrap(), ClassLabel::Index(3));
        assert_eq!(model.predict_class(&low).unwrap(), ClassLabel::Index(0));
    }

    #[test]
    fn test_multiclass_argmax_on_sparse_input() {
        let model = LinearModel {
            coef: vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]],
            intercept: vec![0.0, 0.0, 0.1],
            classes: vec![
                ClassLabel::Index(0),
                ClassLabel::Index(1),
                ClassLabel::Index(2),
            ],
        };

        let features = FeatureVector::sparse(3, vec![(1, 0.8)]);
        assert_eq!(model.predict_class(&features).unwrap(), ClassLabel::Index(1));
    }

    #[test]
    fn test_mismatched_intercepts() {
        let model = LinearModel {
            coef: vec![vec![1.0], vec![2.0]],
            intercept: vec![0.0],
            classes: vec![ClassLabel::Index(0), ClassLabel::Index(1)],
        };
        assert!(model.predict_class(&FeatureVector::Dense(vec![1.0])).is_err());
    }

    #[test]
    fn test_naive_bayes() {
        let model = MultinomialNb {
            class_log_prior: vec![(0.5_f64).ln(), (0.5_f64).ln()],
            feature_log_prob: vec![
                vec![(0.9_f64).ln(), (0.1_f64).ln()],
                vec![(0.2_f64).ln(), (0.8_f64).ln()],
            ],
            classes: vec![
                ClassLabel::Name("Physics".into()),
                ClassLabel::Name("Statistics".into()),
            ],
        };

        let features = FeatureVector::Dense(vec![0.1, 0.9]);
        assert_eq!(
            model.predict_class(&features).unwrap(),
            ClassLabel::Name("Statistics".into())
        );
    }
}
