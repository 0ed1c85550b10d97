// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model '{0}' not found or incomplete")]
    ModelNotFound(String),

    #[error("Vectorizer not found")]
    VectorizerMissing,

    #[error("Word vectors not found for ensemble model")]
    WordVectorsMissing,

    #[error("Error creating vector from text: {0}")]
    Vectorization(String),

    #[error("Failed to load artifact {path}: {source}")]
    Artifact {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ClassifierError {
    /// HTTP status code used when this error ends a classify request.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ModelNotFound(_) | Self::VectorizerMissing | Self::WordVectorsMissing => 404,
            _ => 400,
        }
    }

    /// Render the error with its full cause chain, one cause per line.
    pub fn chain(&self) -> String {
        let mut out = format!("{}: {}", self.kind(), self);
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(&format!("\nCaused by: {}", cause));
            source = cause.source();
        }
        out
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::ModelNotFound(_) => "ModelNotFound",
            Self::VectorizerMissing => "VectorizerMissing",
            Self::WordVectorsMissing => "WordVectorsMissing",
            Self::Vectorization(_) => "Vectorization",
            Self::Artifact { .. } => "Artifact",
            Self::Validation(_) => "Validation",
            Self::Inference(_) => "Inference",
            Self::InvalidRequest(_) => "InvalidRequest",
            Self::FileOperation { .. } => "FileOperation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_statuses() {
        assert_eq!(ClassifierError::ModelNotFound("x".into()).status_code(), 404);
        assert_eq!(ClassifierError::VectorizerMissing.status_code(), 404);
        assert_eq!(ClassifierError::WordVectorsMissing.status_code(), 404);
        assert_eq!(ClassifierError::Inference("bad".into()).status_code(), 400);
    }

    #[test]
    fn test_chain_includes_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClassifierError::Artifact {
            path: PathBuf::from("models/lda.json"),
            source,
        };

        let chain = err.chain();
        assert!(chain.starts_with("Artifact: Failed to load artifact models/lda.json"));
        assert!(chain.contains("Caused by: EOF"));
    }

    #[test]
    fn test_io_failures_carry_their_path() {
        let err = ClassifierError::FileOperation {
            path: PathBuf::from("models/preprocessing/word_vectors.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.status_code(), 400);
        assert!(err.chain().starts_with(
            "FileOperation: File operation failed for models/preprocessing/word_vectors.txt"
        ));
        assert!(err.chain().ends_with("Caused by: denied"));
    }
}
