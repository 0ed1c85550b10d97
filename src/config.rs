// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ClassifierError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub models: ModelsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Embed the error cause chain in 400 responses.
    #[serde(default = "default_true")]
    pub expose_traceback: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelsConfig {
    pub root: PathBuf,
    pub extension: String,
    pub default_model: String,
    pub vectorizer: String,
    pub topic_model: String,
    pub word_vectors: String,
    #[serde(default)]
    pub lemma_lexicon: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ModelsConfig {
    pub fn preprocessing_dir(&self) -> PathBuf {
        self.root.join("preprocessing")
    }

    pub fn traditional_dir(&self) -> PathBuf {
        self.root.join("traditional")
    }

    pub fn ensemble_dir(&self) -> PathBuf {
        self.root.join("ensemble")
    }

    pub fn vectorizer_path(&self) -> PathBuf {
        self.preprocessing_dir().join(&self.vectorizer)
    }

    pub fn topic_model_path(&self) -> PathBuf {
        self.preprocessing_dir().join(&self.topic_model)
    }

    pub fn word_vectors_path(&self) -> PathBuf {
        self.preprocessing_dir().join(&self.word_vectors)
    }

    pub fn lemma_lexicon_path(&self) -> Option<PathBuf> {
        self.lemma_lexicon
            .as_ref()
            .map(|name| self.preprocessing_dir().join(name))
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PAPER_CLASSIFIER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ClassifierError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ClassifierError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                expose_traceback: true,
            },
            models: ModelsConfig {
                root: PathBuf::from("models"),
                extension: "pkl".to_string(),
                default_model: "best_svm_model".to_string(),
                vectorizer: "vectorizer.json".to_string(),
                topic_model: "lda.json".to_string(),
                word_vectors: "word_vectors.txt".to_string(),
                lemma_lexicon: None,
            },
        }
    }

    /// Defaults rooted at a different model directory.
    pub fn with_model_root(root: impl Into<PathBuf>) -> Self {
        let mut config = Self::default_config();
        config.models.root = root.into();
        config
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ClassifierError::Config(
                "port must be greater than 0".to_string(),
            ));
        }

        if self.models.extension.trim().is_empty() {
            return Err(ClassifierError::Config(
                "models.extension must not be empty".to_string(),
            ));
        }

        if self.models.default_model.trim().is_empty() {
            return Err(ClassifierError::Config(
                "models.default_model must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
