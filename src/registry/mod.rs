// file: src/registry/mod.rs
// description: model registry module exports
// reference: internal module structure

pub mod catalog;
pub mod loader;

pub use catalog::{AvailableModels, FeaturePlan, ModelCatalog, ModelCategory, ModelSpec};
pub use loader::ArtifactStore;
