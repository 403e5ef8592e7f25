//! Chest-imaging modality scorer
//!
//! Scores a chest image by testing the classifier's labels against a fixed
//! set of anomaly proxies. Lung opacity is the shared visual indicator for
//! pneumonia, tuberculosis and malignancy, so opacity-family labels stand in
//! for all three absent a purpose-built classifier.
//!
//! Unlike the audio scorer this one SHORT-CIRCUITS: the first qualifying
//! match wins and no aggregation happens across matches. The asymmetry is
//! part of the calibration; do not unify the two.

use crate::classifiers::{ImageClassifier, LabeledScore};
use crate::config::RiskConfig;
use crate::error::ScoreError;
use crate::scoring::ScoredModality;
use std::path::Path;

/// Anomaly-proxy vocabulary, matched by substring containment against
/// upper-cased labels
const ANOMALY_PROXIES: [&str; 5] = ["PNEUMONIA", "OPACITY", "NODULE", "MASS", "INFILTRATION"];

/// Score a chest image for anomaly risk
///
/// Invokes the image classifier once and walks its labels in rank order.
/// The first label containing an anomaly proxy with confidence above
/// `config.imaging_match_threshold` is returned as the score immediately.
///
/// # Returns
///
/// - First qualifying anomaly-proxy label: its confidence, as-is
/// - No qualifying label: exactly `config.imaging_baseline` ("clean but
///   not zero")
/// - Classifier unavailable, unreadable image, or inference failure: 0.0,
///   with the failure tagged on the result (never propagated)
pub fn score_imaging(
    image: &Path,
    classifier: Option<&dyn ImageClassifier>,
    config: &RiskConfig,
) -> ScoredModality {
    let classifier = match classifier {
        Some(c) => c,
        None => {
            log::warn!("Image classifier not loaded, scoring 0.0 for {:?}", image);
            return ScoredModality::failed(ScoreError::ClassifierUnavailable(
                "image classifier not loaded".to_string(),
            ));
        }
    };

    match classifier.classify(image) {
        Ok(ranked) => {
            log::debug!(
                "Image classifier returned {} labels for {:?}",
                ranked.len(),
                image
            );
            ScoredModality::ok(proxy_score(&ranked, config))
        }
        Err(err) => {
            log::warn!(
                "Imaging scoring failed for {:?}, scoring 0.0: {}",
                image,
                err
            );
            ScoredModality::failed(err)
        }
    }
}

/// First qualifying anomaly-proxy confidence, or the clean baseline
fn proxy_score(ranked: &[LabeledScore], config: &RiskConfig) -> f32 {
    for entry in ranked {
        let label = entry.label.to_uppercase();
        let is_anomaly = ANOMALY_PROXIES.iter().any(|proxy| label.contains(proxy));

        if is_anomaly && entry.confidence > config.imaging_match_threshold {
            return entry.confidence;
        }
    }
    config.imaging_baseline
}
