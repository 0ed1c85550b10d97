// file: src/inference/mod.rs
// description: inference dispatch module exports
// reference: internal module structure

pub mod dispatch;

pub use dispatch::{
    ClassificationRequest, ClassificationResult, DEFAULT_MODEL_NAME, InferenceDispatcher,
};
