//! Error types for the risk engine

use std::fmt;

/// Errors that can occur while scoring a modality
///
/// These never escape [`compute_risk`](crate::compute_risk): collaborator
/// failures are absorbed at the modality-scorer boundary and converted to a
/// zero score, surfacing only in logs and result diagnostics.
#[derive(Debug, Clone)]
pub enum ScoreError {
    /// Classifier handle not available (failed to load at startup, not injected)
    ClassifierUnavailable(String),

    /// Classifier raised during inference
    InferenceError(String),

    /// Input file could not be read or decoded by the collaborator
    UnreadableInput(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::ClassifierUnavailable(msg) => write!(f, "Classifier unavailable: {}", msg),
            ScoreError::InferenceError(msg) => write!(f, "Inference error: {}", msg),
            ScoreError::UnreadableInput(msg) => write!(f, "Unreadable input: {}", msg),
        }
    }
}

impl std::error::Error for ScoreError {}
