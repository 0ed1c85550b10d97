// file: src/registry/loader.rs
// description: reads persisted artifacts from the model directory
// reference: https://docs.rs/serde_json

use crate::config::ModelsConfig;
use crate::error::{ClassifierError, Result};
use crate::features::{TfidfVectorizer, TopicModel, WordVectors};
use crate::models::Estimator;
use crate::text::Lemmatizer;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Artifact access. Nothing is cached; every call reads from disk.
pub struct ArtifactStore {
    config: ModelsConfig,
}

impl ArtifactStore {
    pub fn new(config: ModelsConfig) -> Self {
        Self { config }
    }

    /// `Ok(None)` when the file does not exist; an error when it exists but
    /// cannot be read or parsed.
    pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Artifact not found: {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ClassifierError::FileOperation {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| ClassifierError::Artifact {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn load_estimator(&self, path: &Path) -> Result<Option<Estimator>> {
        let estimator: Option<Estimator> = Self::load_json(path)?;
        if let Some(estimator) = &estimator {
            debug!("Loaded {} estimator from {}", estimator.kind(), path.display());
        }
        Ok(estimator)
    }

    pub fn load_vectorizer(&self) -> Result<Option<TfidfVectorizer>> {
        let vectorizer: Option<TfidfVectorizer> =
            Self::load_json(&self.config.vectorizer_path())?;
        if let Some(vectorizer) = &vectorizer {
            vectorizer.validate()?;
        }
        Ok(vectorizer)
    }

    pub fn load_topic_model(&self) -> Result<Option<TopicModel>> {
        let topic_model: Option<TopicModel> = Self::load_json(&self.config.topic_model_path())?;
        if let Some(topic_model) = &topic_model {
            topic_model.validate()?;
        }
        Ok(topic_model)
    }

    /// Load failures leave an empty table, which callers treat as absent.
    pub fn load_word_vectors(&self) -> WordVectors {
        let path = self.config.word_vectors_path();
        match WordVectors::load(&path) {
            Ok(table) => table,
            Err(e) => {
                warn!("Error loading word vectors: {}", e);
                WordVectors::empty()
            }
        }
    }

    /// Lexicon-backed lemmatizer when one is configured and readable.
    pub fn load_lemmatizer(&self) -> Lemmatizer {
        let Some(path) = self.config.lemma_lexicon_path() else {
            return Lemmatizer::new();
        };

        match Lemmatizer::from_lexicon_file(&path) {
            Ok(lemmatizer) => lemmatizer,
            Err(e) => {
                warn!("Falling back to rule-based lemmatization: {}", e);
                Lemmatizer::new()
            }
        }
    }
}
