// file: src/models/labels.rs
// description: subject-area label set and prediction-to-label mapping

use crate::error::{ClassifierError, Result};
use crate::models::prediction::{ClassLabel, Prediction};

/// Output positions of every shipped classifier, in order.
pub const LABELS: [&str; 6] = [
    "Computer Science",
    "Physics",
    "Mathematics",
    "Statistics",
    "Quantitative Biology",
    "Quantitative Finance",
];

fn label_at(position: i64) -> Result<String> {
    usize::try_from(position)
        .ok()
        .and_then(|idx| LABELS.get(idx))
        .map(|label| label.to_string())
        .ok_or_else(|| {
            ClassifierError::Inference(format!(
                "Class index {} is outside the label set of {} labels",
                position,
                LABELS.len()
            ))
        })
}

/// Map a classifier output to human-readable labels.
pub fn map_prediction(prediction: &Prediction) -> Result<Vec<String>> {
    match prediction {
        Prediction::MultiLabel(row) => row
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag == 1)
            .map(|(idx, _)| label_at(idx as i64))
            .collect(),
        Prediction::Class(ClassLabel::Index(idx)) => Ok(vec![label_at(*idx)?]),
        Prediction::Class(ClassLabel::Name(name)) => Ok(vec![name.clone()]),
    }
}
