// file: src/models/meta.rs
// description: estimators composed of other estimators

use crate::error::{ClassifierError, Result};
use crate::features::FeatureVector;
use crate::models::estimator::{Classifier, Estimator};
use crate::models::prediction::ClassLabel;
use serde::{Deserialize, Serialize};

/// Hard majority vote over member predictions. Ties go to the class listed
/// first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingModel {
    pub estimators: Vec<Estimator>,
    pub classes: Vec<ClassLabel>,
}

impl Classifier for VotingModel {
    fn classes(&self) -> &[ClassLabel] {
        &self.classes
    }

    fn n_features(&self) -> Option<usize> {
        None
    }

    fn predict_position(&self, features: &FeatureVector) -> Result<usize> {
        if self.estimators.is_empty() {
            return Err(ClassifierError::Inference(
                "Voting model has no estimators".to_string(),
            ));
        }

        let mut votes = vec![0usize; self.classes.len()];
        for estimator in &self.estimators {
            let label = estimator.predict_class(features)?;
            let position = self
                .classes
                .iter()
                .position(|class| *class == label)
                .ok_or_else(|| {
                    ClassifierError::Inference(format!(
                        "Member predicted class {} unknown to the voting model",
                        label
                    ))
                })?;
            votes[position] += 1;
        }

        let best = votes.iter().copied().max().unwrap_or(0);
        votes
            .iter()
            .position(|count| *count == best)
            .ok_or_else(|| ClassifierError::Inference("Voting model has no classes".into()))
    }
}

/// One binary estimator per label position; a member predicting class `1`
/// sets its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiLabelModel {
    pub estimators: Vec<Estimator>,
}

impl MultiLabelModel {
    pub fn predict_row(&self, features: &FeatureVector) -> Result<Vec<u8>> {
        if self.estimators.is_empty() {
            return Err(ClassifierError::Inference(
                "Multi-label model has no estimators".to_string(),
            ));
        }

        self.estimators
            .iter()
            .map(|estimator| {
                let label = estimator.predict_class(features)?;
                Ok(u8::from(label == ClassLabel::Index(1)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::linear::LinearModel;

    fn threshold(weight: f64, bias: f64, classes: Vec<ClassLabel>) -> Estimator {
        Estimator::Linear(LinearModel {
            coef: vec![vec![weight]],
            intercept: vec![bias],
            classes,
        })
    }

    fn binary() -> Vec<ClassLabel> {
        vec![ClassLabel::Index(0), ClassLabel::Index(1)]
    }

    #[test]
    fn test_voting_majority() {
        let voting = VotingModel {
            estimators: vec![
                threshold(1.0, 0.0, binary()),
                threshold(1.0, -10.0, binary()),
                threshold(1.0, -0.5, binary()),
            ],
            classes: binary(),
        };

        let features = FeatureVector::Dense(vec![1.0]);
        assert_eq!(voting.predict_class(&features).unwrap(), ClassLabel::Index(1));
    }

    #[test]
    fn test_voting_unknown_member_class() {
        let voting = VotingModel {
            estimators: vec![threshold(
                1.0,
                0.0,
                vec![ClassLabel::Index(0), ClassLabel::Index(7)],
            )],
            classes: binary(),
        };

        assert!(voting.predict_class(&FeatureVector::Dense(vec![1.0])).is_err());
    }

    #[test]
    fn test_multi_label_row() {
        let model = MultiLabelModel {
            estimators: vec![
                threshold(1.0, 0.0, binary()),
                threshold(-1.0, 0.0, binary()),
                threshold(1.0, -0.5, binary()),
            ],
        };

        let row = model.predict_row(&FeatureVector::Dense(vec![1.0])).unwrap();
        assert_eq!(row, vec![1, 0, 1]);
    }
}
