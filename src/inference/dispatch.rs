// file: src/inference/dispatch.rs
// description: selects artifacts and feature transforms for a model name, then classifies
// reference: request -> cleaning -> lookup -> features -> inference -> labels

use crate::config::ModelsConfig;
use crate::error::{ClassifierError, Result};
use crate::features::{FeatureVector, TopicModel};
use crate::models::map_prediction;
use crate::registry::{ArtifactStore, FeaturePlan, ModelCatalog, ModelSpec};
use crate::text::TextCleaner;
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const DEFAULT_MODEL_NAME: &str = "default";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub model: Option<String>,
}

impl ClassificationRequest {
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.abstract_text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub predicted_labels: Vec<String>,
    pub model_used: String,
}

pub struct InferenceDispatcher {
    catalog: ModelCatalog,
    store: ArtifactStore,
}

impl InferenceDispatcher {
    pub fn new(config: ModelsConfig) -> Self {
        Self {
            catalog: ModelCatalog::new(config.clone()),
            store: ArtifactStore::new(config),
        }
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResult> {
        let model_name = request.model.as_deref().filter(|name| !name.is_empty());
        let model_used = model_name.unwrap_or(DEFAULT_MODEL_NAME).to_string();
        let not_found = || ClassifierError::ModelNotFound(model_used.clone());

        let spec = self.catalog.resolve(model_name)?.ok_or_else(not_found)?;

        // loaded ahead of the classifier; without it the model is incomplete
        let topic_model = if spec.requires_topic_model {
            let loaded = self.store.load_topic_model()?;
            if loaded.is_none() {
                warn!("Topic model not found, model '{}' is incomplete", model_used);
            }
            Some(loaded.ok_or_else(not_found)?)
        } else {
            None
        };

        let estimator = self.store.load_estimator(&spec.path)?.ok_or_else(not_found)?;

        let cleaner = TextCleaner::with_lemmatizer(self.store.load_lemmatizer());
        let cleaned = cleaner.clean(&request.text());
        debug!(
            "Cleaned text ({} chars): {}",
            cleaned.len(),
            Validator::truncate_text(&cleaned, 80)
        );

        let features = self.build_features(&spec, topic_model.as_ref(), &cleaned)?;
        let prediction = estimator.predict(&features)?;
        let predicted_labels = map_prediction(&prediction)?;

        info!(
            "Model '{}' ({} {}) predicted {:?}",
            model_used,
            spec.category.as_str(),
            estimator.kind(),
            predicted_labels
        );

        Ok(ClassificationResult {
            predicted_labels,
            model_used,
        })
    }

    fn build_features(
        &self,
        spec: &ModelSpec,
        topic_model: Option<&TopicModel>,
        cleaned: &str,
    ) -> Result<FeatureVector> {
        match spec.features {
            FeaturePlan::WordVectors => {
                let word_vectors = self.store.load_word_vectors();
                if word_vectors.is_empty() {
                    return Err(ClassifierError::WordVectorsMissing);
                }
                word_vectors.sentence_vector(cleaned)
            }
            FeaturePlan::Tfidf | FeaturePlan::TfidfTopics => {
                let vectorizer = self
                    .store
                    .load_vectorizer()?
                    .ok_or(ClassifierError::VectorizerMissing)?;
                let tfidf = vectorizer.transform(cleaned);

                match (spec.features, topic_model) {
                    (FeaturePlan::TfidfTopics, Some(topic_model)) => {
                        Ok(FeatureVector::Dense(topic_model.transform(&tfidf)?))
                    }
                    _ => Ok(tfidf),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const VECTORIZER: &str = r#"{
        "vocabulary": {"quantum": 0, "spin": 1, "network": 2, "neural": 3},
        "idf": [1.0, 1.0, 1.0, 1.0]
    }"#;

    // physics-leaning vs computer-science-leaning topics
    const LDA: &str = r#"{
        "components": [[20.0, 20.0, 0.1, 0.1], [0.1, 0.1, 20.0, 20.0]]
    }"#;

    // reads raw TF-IDF: class 1 (Physics) for quantum/spin terms, else class 0
    const DEFAULT_MODEL: &str = r#"{
        "kind": "linear",
        "coef": [[1.0, 1.0, -1.0, -1.0]],
        "intercept": [0.0],
        "classes": [0, 1]
    }"#;

    // class 1 (Physics) when the first topic dominates, else class 0
    const BEST_MODEL: &str = r#"{
        "kind": "linear",
        "coef": [[1.0, -1.0]],
        "intercept": [0.0],
        "classes": [0, 1]
    }"#;

    const MULTI_LABEL: &str = r#"{
        "kind": "one_vs_rest",
        "estimators": [
            {"kind": "linear", "coef": [[0.0, 0.0, 1.0, 1.0]], "intercept": [-0.1], "classes": [0, 1]},
            {"kind": "linear", "coef": [[1.0, 1.0, 0.0, 0.0]], "intercept": [-0.1], "classes": [0, 1]},
            {"kind": "linear", "coef": [[0.0, 0.0, 0.0, 0.0]], "intercept": [-1.0], "classes": [0, 1]},
            {"kind": "linear", "coef": [[0.0, 0.0, 0.0, 0.0]], "intercept": [-1.0], "classes": [0, 1]},
            {"kind": "linear", "coef": [[0.0, 0.0, 0.0, 0.0]], "intercept": [-1.0], "classes": [0, 1]},
            {"kind": "linear", "coef": [[0.0, 0.0, 0.0, 0.0]], "intercept": [-1.0], "classes": [0, 1]}
        ]
    }"#;

    const ENSEMBLE: &str = r#"{
        "kind": "linear",
        "coef": [[1.0, 0.0], [0.0, 1.0]],
        "intercept": [0.0, 0.0],
        "classes": ["Physics", "Computer Science"]
    }"#;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(&root.join("preprocessing/vectorizer.json"), VECTORIZER);
        write(&root.join("preprocessing/lda.json"), LDA);
        write(
            &root.join("preprocessing/word_vectors.txt"),
            "quantum 1.0 0.0\nneural 0.0 1.0\nnetwork 0.0 1.0\n",
        );
        write(&root.join("traditional/best_svm_model.pkl"), DEFAULT_MODEL);
        write(&root.join("traditional/traditional_best_svm.pkl"), BEST_MODEL);
        write(&root.join("traditional/traditional_ovr.pkl"), MULTI_LABEL);
        write(&root.join("ensemble/ensemble_linear.pkl"), ENSEMBLE);
        write(&root.join("traditional/traditional_ensemble_linear.pkl"), ENSEMBLE);
        temp
    }

    fn dispatcher(root: &Path) -> InferenceDispatcher {
        InferenceDispatcher::new(Config::with_model_root(root).models)
    }

    fn request(title: &str, abstract_text: &str, model: Option<&str>) -> ClassificationRequest {
        ClassificationRequest {
            title: title.to_string(),
            abstract_text: abstract_text.to_string(),
            model: model.map(str::to_string),
        }
    }

    #[test]
    fn test_default_model_reads_tfidf() {
        let temp = fixture();
        let result = dispatcher(temp.path())
            .classify(&request("Quantum spin", "Spin chains and quantum order", None))
            .unwrap();

        assert_eq!(
            result,
            ClassificationResult {
                predicted_labels: vec!["Physics".to_string()],
                model_used: "default".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_model_name_uses_default() {
        let temp = fixture();
        let result = dispatcher(temp.path())
            .classify(&request("Neural networks", "", Some("")))
            .unwrap();

        assert_eq!(
            result,
            ClassificationResult {
                predicted_labels: vec!["Computer Science".to_string()],
                model_used: "default".to_string(),
            }
        );
    }

    #[test]
    fn test_ensemble_mention_selects_word_vectors() {
        let temp = fixture();
        let result = dispatcher(temp.path())
            .classify(&request("Neural networks", "", Some("traditional ensemble linear")))
            .unwrap();

        assert_eq!(result.predicted_labels, vec!["Computer Science"]);
    }

    #[test]
    fn test_best_traditional_model() {
        let temp = fixture();
        let result = dispatcher(temp.path())
            .classify(&request(
                "Neural networks",
                "Deep neural network training",
                Some("traditional best svm"),
            ))
            .unwrap();

        assert_eq!(result.predicted_labels, vec!["Computer Science"]);
        assert_eq!(result.model_used, "traditional best svm");
    }

    #[test]
    fn test_multi_label_tfidf_model() {
        let temp = fixture();
        let result = dispatcher(temp.path())
            .classify(&request(
                "Quantum neural networks",
                "",
                Some("traditional ovr"),
            ))
            .unwrap();

        assert_eq!(result.predicted_labels, vec!["Computer Science", "Physics"]);
    }

    #[test]
    fn test_ensemble_model_uses_word_vectors() {
        let temp = fixture();
        let result = dispatcher(temp.path())
            .classify(&request("Neural networks", "", Some("ensemble linear")))
            .unwrap();

        assert_eq!(result.predicted_labels, vec!["Computer Science"]);
    }

    #[test]
    fn test_unknown_model_is_not_found() {
        let temp = fixture();
        let dispatcher = dispatcher(temp.path());

        let err = dispatcher
            .classify(&request("a", "b", Some("traditional missing")))
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Model 'traditional missing' not found or incomplete");

        let err = dispatcher
            .classify(&request("a", "b", Some("mystery")))
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_missing_vectorizer() {
        let temp = fixture();
        fs::remove_file(temp.path().join("preprocessing/vectorizer.json")).unwrap();

        let err = dispatcher(temp.path())
            .classify(&request("a", "b", Some("traditional ovr")))
            .unwrap_err();
        assert!(matches!(err, ClassifierError::VectorizerMissing));
    }

    #[test]
    fn test_missing_word_vectors() {
        let temp = fixture();
        fs::remove_file(temp.path().join("preprocessing/word_vectors.txt")).unwrap();

        let err = dispatcher(temp.path())
            .classify(&request("a", "b", Some("ensemble linear")))
            .unwrap_err();
        assert!(matches!(err, ClassifierError::WordVectorsMissing));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_missing_topic_model_makes_model_incomplete() {
        let temp = fixture();
        fs::remove_file(temp.path().join("preprocessing/lda.json")).unwrap();
        let dispatcher = dispatcher(temp.path());

        let err = dispatcher
            .classify(&request("quantum", "", Some("traditional best svm")))
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            err.to_string(),
            "Model 'traditional best svm' not found or incomplete"
        );

        let err = dispatcher.classify(&request("quantum", "", None)).unwrap_err();
        assert_eq!(err.to_string(), "Model 'default' not found or incomplete");

        // models that never read topics are unaffected
        let result = dispatcher
            .classify(&request("quantum", "", Some("traditional ovr")))
            .unwrap();
        assert_eq!(result.predicted_labels, vec!["Physics"]);
    }

    #[test]
    fn test_empty_text_still_classifies() {
        let temp = fixture();
        let result = dispatcher(temp.path())
            .classify(&request("", "", Some("traditional ovr")))
            .unwrap();
        assert!(result.predicted_labels.is_empty());

        let result = dispatcher(temp.path())
            .classify(&request("", "", Some("ensemble linear")))
            .unwrap();
        assert_eq!(result.predicted_labels, vec!["Physics"]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let temp = fixture();
        let dispatcher = dispatcher(temp.path());
        let req = request("Quantum spin", "Neural network ansatz", Some("traditional best svm"));

        assert_eq!(
            dispatcher.classify(&req).unwrap(),
            dispatcher.classify(&req).unwrap()
        );
    }
}
