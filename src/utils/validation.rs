// file: src/utils/validation.rs
// description: path and text validation helpers
// reference: input validation patterns

use crate::error::{ClassifierError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ClassifierError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(ClassifierError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// A model file name must stay inside its category directory.
    pub fn validate_model_file_name(file_name: &str) -> Result<()> {
        if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
            return Err(ClassifierError::Validation(format!(
                "Invalid model name: {}",
                file_name
            )));
        }

        if file_name.contains('\0') {
            return Err(ClassifierError::Validation(
                "Model name contains a NUL byte".to_string(),
            ));
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}
