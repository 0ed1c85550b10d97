// file: src/registry/catalog.rs
// description: model directory listing and model-name resolution
// reference: https://docs.rs/walkdir

use crate::config::ModelsConfig;
use crate::error::{ClassifierError, Result};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelCategory {
    Traditional,
    Ensemble,
}

impl ModelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::Traditional => "traditional",
            ModelCategory::Ensemble => "ensemble",
        }
    }
}

/// How features are built for a resolved model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturePlan {
    Tfidf,
    TfidfTopics,
    WordVectors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub category: ModelCategory,
    pub path: PathBuf,
    pub features: FeaturePlan,
    /// The topic model must be present for this model to count as loadable,
    /// even when its features do not use it.
    pub requires_topic_model: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableModels {
    pub traditional: Vec<String>,
    pub ensemble: Vec<String>,
}

pub struct ModelCatalog {
    config: ModelsConfig,
}

impl ModelCatalog {
    pub fn new(config: ModelsConfig) -> Self {
        Self { config }
    }

    fn category_dir(&self, category: ModelCategory) -> PathBuf {
        match category {
            ModelCategory::Traditional => self.config.traditional_dir(),
            ModelCategory::Ensemble => self.config.ensemble_dir(),
        }
    }

    pub fn list(&self) -> Result<AvailableModels> {
        Ok(AvailableModels {
            traditional: self.list_category(ModelCategory::Traditional)?,
            ensemble: self.list_category(ModelCategory::Ensemble)?,
        })
    }

    /// Display names of the artifact files directly inside a category
    /// directory: file stem with `_` shown as spaces, sorted.
    pub fn list_category(&self, category: ModelCategory) -> Result<Vec<String>> {
        let dir = self.category_dir(category);
        if !dir.is_dir() {
            debug!("Model directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ClassifierError::FileOperation {
                path: dir.clone(),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = self.display_name(entry.path()) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    fn display_name(&self, path: &Path) -> Option<String> {
        let file_name = path.file_name()?.to_str()?;
        if file_name.starts_with('.') {
            return None;
        }
        let stem = file_name.strip_suffix(&format!(".{}", self.config.extension))?;
        Some(stem.replace('_', " "))
    }

    fn file_name(&self, display_name: &str) -> String {
        format!(
            "{}.{}",
            display_name.split(' ').collect::<Vec<_>>().join("_"),
            self.config.extension
        )
    }

    /// Decide where a model lives and how its features are built.
    ///
    /// A missing or empty name selects the configured default model, which
    /// reads plain TF-IDF features but still requires the topic model. For
    /// named models the directory is picked by "traditional" before
    /// "ensemble", while features are picked by "ensemble" first: any name
    /// mentioning it reads word vectors. Other traditional models whose name
    /// contains "best" read LDA topic features.
    pub fn resolve(&self, model_name: Option<&str>) -> Result<Option<ModelSpec>> {
        let Some(name) = model_name.filter(|name| !name.is_empty()) else {
            let file_name = format!("{}.{}", self.config.default_model, self.config.extension);
            Validator::validate_model_file_name(&file_name)?;
            return Ok(Some(ModelSpec {
                category: ModelCategory::Traditional,
                path: self.config.traditional_dir().join(file_name),
                features: FeaturePlan::Tfidf,
                requires_topic_model: true,
            }));
        };

        let category = if name.contains("traditional") {
            ModelCategory::Traditional
        } else if name.contains("ensemble") {
            ModelCategory::Ensemble
        } else {
            debug!("Model name '{}' names no known category", name);
            return Ok(None);
        };

        let best = category == ModelCategory::Traditional && name.contains("best");
        let features = if name.contains("ensemble") {
            FeaturePlan::WordVectors
        } else if best {
            FeaturePlan::TfidfTopics
        } else {
            FeaturePlan::Tfidf
        };

        let file_name = self.file_name(name);
        Validator::validate_model_file_name(&file_name)?;

        Ok(Some(ModelSpec {
            category,
            path: self.category_dir(category).join(file_name),
            features,
            requires_topic_model: best,
        }))
    }
}
