// file: src/models/prediction.rs
// description: classifier outputs and class identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A class as stored in a model artifact: a numeric code or a literal name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    Index(i64),
    Name(String),
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::Index(idx) => write!(f, "{}", idx),
            ClassLabel::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Output for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Prediction {
    /// Single-label output.
    Class(ClassLabel),
    /// Multi-label output, one 0/1 entry per label position.
    MultiLabel(Vec<u8>),
}

pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, value) in values.iter().copied().enumerate() {
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}
