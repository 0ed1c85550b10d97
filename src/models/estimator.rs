// file: src/models/estimator.rs
// description: classifier artifacts and the prediction seam they share
// reference: tagged serde enums for persisted model variants

use crate::error::{ClassifierError, Result};
use crate::features::FeatureVector;
use crate::models::linear::{LinearModel, MultinomialNb};
use crate::models::meta::{MultiLabelModel, VotingModel};
use crate::models::neighbors::KNeighbors;
use crate::models::prediction::{ClassLabel, Prediction};
use crate::models::tree::{DecisionTree, RandomForest};
use serde::{Deserialize, Serialize};

/// Single-sample classification over a fixed set of classes.
pub trait Classifier {
    fn classes(&self) -> &[ClassLabel];

    /// Feature width the model was trained on, when it is recorded.
    fn n_features(&self) -> Option<usize>;

    /// Position of the predicted class within `classes()`.
    fn predict_position(&self, features: &FeatureVector) -> Result<usize>;

    fn predict_class(&self, features: &FeatureVector) -> Result<ClassLabel> {
        check_width(self.n_features(), features)?;
        let position = self.predict_position(features)?;
        self.classes().get(position).cloned().ok_or_else(|| {
            ClassifierError::Inference(format!(
                "Predicted position {} but model has {} classes",
                position,
                self.classes().len()
            ))
        })
    }
}

pub(crate) fn check_width(expected: Option<usize>, features: &FeatureVector) -> Result<()> {
    match expected {
        Some(width) if width != features.dim() => Err(ClassifierError::Inference(format!(
            "X has {} features, but the classifier is expecting {} features as input",
            features.dim(),
            width
        ))),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    Linear(LinearModel),
    MultinomialNb(MultinomialNb),
    KNeighbors(KNeighbors),
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
    Voting(VotingModel),
    OneVsRest(MultiLabelModel),
    MultiOutput(MultiLabelModel),
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::Linear(_) => "linear",
            Estimator::MultinomialNb(_) => "multinomial_nb",
            Estimator::KNeighbors(_) => "k_neighbors",
            Estimator::DecisionTree(_) => "decision_tree",
            Estimator::RandomForest(_) => "random_forest",
            Estimator::Voting(_) => "voting",
            Estimator::OneVsRest(_) => "one_vs_rest",
            Estimator::MultiOutput(_) => "multi_output",
        }
    }

    fn as_classifier(&self) -> Option<&dyn Classifier> {
        match self {
            Estimator::Linear(model) => Some(model as &dyn Classifier),
            Estimator::MultinomialNb(model) => Some(model as &dyn Classifier),
            Estimator::KNeighbors(model) => Some(model as &dyn Classifier),
            Estimator::DecisionTree(model) => Some(model as &dyn Classifier),
            Estimator::RandomForest(model) => Some(model as &dyn Classifier),
            Estimator::Voting(model) => Some(model as &dyn Classifier),
            Estimator::OneVsRest(_) | Estimator::MultiOutput(_) => None,
        }
    }

    /// Single-label class for estimators that produce one.
    pub fn predict_class(&self, features: &FeatureVector) -> Result<ClassLabel> {
        match self.as_classifier() {
            Some(classifier) => classifier.predict_class(features),
            None => Err(ClassifierError::Inference(format!(
                "{} estimator produces multi-label output",
                self.kind()
            ))),
        }
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        match self {
            Estimator::OneVsRest(model) | Estimator::MultiOutput(model) => {
                Ok(Prediction::MultiLabel(model.predict_row(features)?))
            }
            _ => Ok(Prediction::Class(self.predict_class(features)?)),
        }
    }
}
