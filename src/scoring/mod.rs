//! Per-modality risk scorers
//!
//! Each scorer turns one raw input into a normalized risk score in
//! [0.0, 1.0]. Scorers are independent and share no state:
//! - Audio: keyword risk table over ranked classifier labels (accumulating)
//! - Imaging: anomaly-proxy match over classifier labels (short-circuiting)
//! - Symptoms: keyword containment count over free text
//!
//! # Error-as-zero contract
//!
//! Collaborator failures are absorbed here and converted to a score of 0.0
//! at full modality weight — externally indistinguishable from a classifier
//! that saw nothing. The absorbed error is kept as a tag on
//! [`ScoredModality`] so the aggregator can surface it in logs and result
//! diagnostics without it ever changing the math.

pub mod audio;
pub mod imaging;
pub mod symptoms;

use crate::error::ScoreError;

/// A modality score with the absorbed failure, if any
///
/// `score` is always valid for aggregation; `failure` is diagnostic only.
#[derive(Debug, Clone)]
pub struct ScoredModality {
    /// Normalized risk score in [0.0, 1.0]
    pub score: f32,

    /// The collaborator failure this score absorbed, if any
    pub failure: Option<ScoreError>,
}

impl ScoredModality {
    /// A successfully computed score
    pub fn ok(score: f32) -> Self {
        Self {
            score,
            failure: None,
        }
    }

    /// A zero score standing in for a collaborator failure
    pub fn failed(err: ScoreError) -> Self {
        Self {
            score: 0.0,
            failure: Some(err),
        }
    }
}
