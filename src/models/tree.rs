// file: src/models/tree.rs
// description: decision trees and random forests stored as flat node arrays

use crate::error::{ClassifierError, Result};
use crate::features::FeatureVector;
use crate::models::estimator::Classifier;
use crate::models::prediction::{ClassLabel, argmax};
use serde::{Deserialize, Serialize};

const LEAF: i64 = -1;

/// Node `i` is a leaf when `children_left[i] == -1`; otherwise samples with
/// `x[feature[i]] <= threshold[i]` go left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class weights.
    pub value: Vec<Vec<f64>>,
    #[serde(default)]
    pub n_features: Option<usize>,
}

impl Tree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn child(index: i64, count: usize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|idx| *idx < count)
            .ok_or_else(|| ClassifierError::Inference(format!("Invalid tree node {}", index)))
    }

    fn leaf(&self, features: &FeatureVector) -> Result<usize> {
        let count = self.node_count();
        if count == 0
            || self.children_right.len() != count
            || self.feature.len() != count
            || self.threshold.len() != count
            || self.value.len() != count
        {
            return Err(ClassifierError::Inference(
                "Tree node arrays are empty or differ in length".to_string(),
            ));
        }

        let mut node = 0usize;
        // a well-formed tree reaches a leaf in fewer steps than it has nodes
        for _ in 0..count {
            if self.children_left[node] == LEAF {
                return Ok(node);
            }

            let feature = usize::try_from(self.feature[node])
                .ok()
                .filter(|f| *f < features.dim())
                .ok_or_else(|| {
                    ClassifierError::Inference(format!(
                        "Tree splits on feature {} but input has {} features",
                        self.feature[node],
                        features.dim()
                    ))
                })?;

            node = if features.get(feature) <= self.threshold[node] {
                Self::child(self.children_left[node], count)?
            } else {
                Self::child(self.children_right[node], count)?
            };
        }

        Err(ClassifierError::Inference(
            "Tree traversal did not reach a leaf".to_string(),
        ))
    }

    /// Normalized class distribution of the leaf reached by `features`.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let leaf = self.leaf(features)?;
        let weights = &self.value[leaf];
        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            Ok(weights.iter().map(|w| w / total).collect())
        } else {
            Ok(weights.clone())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub tree: Tree,
    pub classes: Vec<ClassLabel>,
}

impl Classifier for DecisionTree {
    fn classes(&self) -> &[ClassLabel] {
        &self.classes
    }

    fn n_features(&self) -> Option<usize> {
        self.tree.n_features
    }

    fn predict_position(&self, features: &FeatureVector) -> Result<usize> {
        argmax(&self.tree.predict_proba(features)?)
            .ok_or_else(|| ClassifierError::Inference("Tree leaf has no class weights".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<Tree>,
    pub classes: Vec<ClassLabel>,
}

impl Classifier for RandomForest {
    fn classes(&self) -> &[ClassLabel] {
        &self.classes
    }

    fn n_features(&self) -> Option<usize> {
        self.trees.iter().find_map(|tree| tree.n_features)
    }

    /// Average of the trees' leaf distributions.
    fn predict_position(&self, features: &FeatureVector) -> Result<usize> {
        if self.trees.is_empty() {
            return Err(ClassifierError::Inference(
                "Random forest has no trees".to_string(),
            ));
        }

        let mut mean = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            let proba = tree.predict_proba(features)?;
            if proba.len() != mean.len() {
                return Err(ClassifierError::Inference(format!(
                    "Tree leaf has {} class weights, forest has {} classes",
                    proba.len(),
                    mean.len()
                )));
            }
            for (acc, p) in mean.iter_mut().zip(proba) {
                *acc += p;
            }
        }

        argmax(&mean).ok_or_else(|| ClassifierError::Inference("Random forest has no classes".into()))
    }
}
