//! External classifier collaborators
//!
//! The engine never runs model inference itself. Audio and imaging inputs are
//! opaque file handles passed to black-box classifiers that return ranked
//! (label, confidence) pairs. Classifiers are injected as trait objects so
//! callers can substitute process-wide model handles, remote services, or
//! test doubles without touching the scoring logic.
//!
//! Handles are read-only after construction and safe to share across
//! concurrent aggregation calls.

use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One ranked classifier output: a label with its confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledScore {
    /// Classifier label text (free-form, vocabulary is model-dependent)
    pub label: String,

    /// Confidence in [0.0, 1.0]
    pub confidence: f32,
}

impl LabeledScore {
    /// Create a labeled score
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Ranked classifier output, ordered by descending confidence
///
/// Labels are not guaranteed unique.
pub type ClassificationResult = Vec<LabeledScore>;

/// Audio-event classifier collaborator
///
/// Expected to return labels whose lower-cased text may contain
/// respiratory-distress vocabulary (wheeze, cough, gasp, ...).
pub trait AudioClassifier {
    /// Classify an audio sample, returning up to `top_k` ranked labels
    ///
    /// # Errors
    ///
    /// Returns `ScoreError` if the sample cannot be read or inference fails.
    /// The scorers absorb these errors; they never reach the caller.
    fn classify(&self, sample: &Path, top_k: usize) -> Result<ClassificationResult, ScoreError>;
}

/// Image classifier collaborator
///
/// Expected to return labels whose upper-cased text may contain anomaly
/// vocabulary (PNEUMONIA, OPACITY, NODULE, ...). The number of labels
/// returned is implementation-defined.
pub trait ImageClassifier {
    /// Classify an image, returning ranked labels
    ///
    /// # Errors
    ///
    /// Returns `ScoreError` if the image cannot be read or inference fails.
    fn classify(&self, image: &Path) -> Result<ClassificationResult, ScoreError>;
}

/// The set of classifier handles available to one aggregation call
///
/// A `None` handle models a classifier that failed to load at startup: the
/// corresponding modality still contributes its full weight when input is
/// supplied, but scores 0.0 (see the error-as-zero contract in
/// [`scoring`](crate::scoring)).
#[derive(Clone, Copy, Default)]
pub struct ClassifierSet<'a> {
    /// Audio-event classifier, if loaded
    pub audio: Option<&'a dyn AudioClassifier>,

    /// Image classifier, if loaded
    pub image: Option<&'a dyn ImageClassifier>,
}

impl<'a> ClassifierSet<'a> {
    /// Build a set with both classifiers present
    pub fn new(audio: &'a dyn AudioClassifier, image: &'a dyn ImageClassifier) -> Self {
        Self {
            audio: Some(audio),
            image: Some(image),
        }
    }
}
