// file: src/models/mod.rs
// description: classifier artifacts and label mapping module exports
// reference: internal module structure

pub mod estimator;
pub mod labels;
pub mod linear;
pub mod meta;
pub mod neighbors;
pub mod prediction;
pub mod tree;

pub use estimator::{Classifier, Estimator};
pub use labels::{LABELS, map_prediction};
pub use prediction::{ClassLabel, Prediction};
