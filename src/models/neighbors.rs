// file: src/models/neighbors.rs
// description: k-nearest-neighbour classifier over stored training points

use crate::error::{ClassifierError, Result};
use crate::features::FeatureVector;
use crate::models::estimator::Classifier;
use crate::models::prediction::ClassLabel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KNeighbors {
    pub points: Vec<Vec<f64>>,
    /// Class position of each point.
    pub targets: Vec<usize>,
    pub k: usize,
    pub classes: Vec<ClassLabel>,
}

impl Classifier for KNeighbors {
    fn classes(&self) -> &[ClassLabel] {
        &self.classes
    }

    fn n_features(&self) -> Option<usize> {
        self.points.first().map(Vec::len)
    }

    /// Euclidean distance, uniform votes; ties go to the lowest class position.
    fn predict_position(&self, features: &FeatureVector) -> Result<usize> {
        if self.points.len() != self.targets.len() {
            return Err(ClassifierError::Inference(format!(
                "{} training points but {} targets",
                self.points.len(),
                self.targets.len()
            )));
        }
        if self.k == 0 || self.points.is_empty() {
            return Err(ClassifierError::Inference(
                "Nearest-neighbour model needs k > 0 and at least one point".to_string(),
            ));
        }

        let mut distances: Vec<(f64, usize)> = self
            .points
            .iter()
            .zip(&self.targets)
            .map(|(point, target)| (features.squared_distance(point), *target))
            .collect();
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut votes = vec![0usize; self.classes.len()];
        for (_, target) in distances.iter().take(self.k) {
            let slot = votes.get_mut(*target).ok_or_else(|| {
                ClassifierError::Inference(format!("Target position {} has no class", target))
            })?;
            *slot += 1;
        }

        let best = votes.iter().copied().max().unwrap_or(0);
        votes
            .iter()
            .position(|count| *count == best)
            .ok_or_else(|| ClassifierError::Inference("Nearest-neighbour model has no classes".into()))
    }
}
