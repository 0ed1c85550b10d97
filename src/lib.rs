// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod features;
pub mod inference;
pub mod models;
pub mod registry;
pub mod text;
pub mod utils;
pub mod web;

pub use config::{Config, ModelsConfig, ServerConfig};
pub use error::{ClassifierError, Result};
pub use features::{FeatureVector, TfidfVectorizer, TopicModel, WordVectors};
pub use inference::{ClassificationRequest, ClassificationResult, InferenceDispatcher};
pub use models::{Estimator, LABELS, Prediction};
pub use registry::{ArtifactStore, AvailableModels, ModelCatalog};
pub use text::{Lemmatizer, TextCleaner};
pub use utils::Validator;
pub use web::AppState;
