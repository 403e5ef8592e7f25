//! Respiratory-audio modality scorer
//!
//! Scores an audio sample for respiratory-distress markers by matching the
//! classifier's ranked labels against a fixed keyword risk table. Unlike the
//! imaging scorer, matches ACCUMULATE: a label may hit several keywords and
//! every hit contributes confidence × weight. The two behaviors are
//! intentionally different and calibrated independently.

use crate::classifiers::{AudioClassifier, LabeledScore};
use crate::config::RiskConfig;
use crate::error::ScoreError;
use crate::scoring::ScoredModality;
use std::path::Path;

/// Keyword risk table for respiratory distress
///
/// Matched by substring containment against lower-cased labels.
const AUDIO_RISK_TABLE: [(&str, f32); 7] = [
    ("wheeze", 4.0),      // high obstruction
    ("cough", 2.0),       // standard
    ("respiratory", 1.5), // general
    ("hiccup", 0.5),      // low
    ("breath", 1.2),      // heavy breathing
    ("gasp", 1.5),        // shortness of breath
    ("sneeze", 0.1),
];

/// Score an audio sample for respiratory-distress risk
///
/// Invokes the audio classifier requesting `config.audio_top_k` ranked
/// labels, gates out entries below `config.noise_gate`, and accumulates
/// confidence × weight for every keyword contained in each surviving label.
///
/// # Returns
///
/// - No keyword matched any surviving label: exactly `config.audio_floor`
///   (signal present but unclassified — slight residual risk)
/// - Otherwise `min(total, config.audio_cap)` — the audio channel never
///   reports certainty
/// - Classifier unavailable or inference failed: 0.0, with the failure
///   tagged on the result (never propagated)
pub fn score_audio(
    sample: &Path,
    classifier: Option<&dyn AudioClassifier>,
    config: &RiskConfig,
) -> ScoredModality {
    let classifier = match classifier {
        Some(c) => c,
        None => {
            log::warn!("Audio classifier not loaded, scoring 0.0 for {:?}", sample);
            return ScoredModality::failed(ScoreError::ClassifierUnavailable(
                "audio classifier not loaded".to_string(),
            ));
        }
    };

    match classifier.classify(sample, config.audio_top_k) {
        Ok(ranked) => {
            log::debug!(
                "Audio classifier returned {} labels for {:?}",
                ranked.len(),
                sample
            );
            ScoredModality::ok(accumulate_risk(&ranked, config))
        }
        Err(err) => {
            log::warn!("Audio scoring failed for {:?}, scoring 0.0: {}", sample, err);
            ScoredModality::failed(err)
        }
    }
}

/// Accumulate keyword risk over ranked labels
fn accumulate_risk(ranked: &[LabeledScore], config: &RiskConfig) -> f32 {
    let mut total_risk = 0.0f32;
    let mut found_risk = false;

    for entry in ranked {
        if entry.confidence < config.noise_gate {
            continue;
        }
        let label = entry.label.to_lowercase();

        for (keyword, weight) in AUDIO_RISK_TABLE {
            if label.contains(keyword) {
                total_risk += entry.confidence * weight;
                found_risk = true;
            }
        }
    }

    if !found_risk {
        return config.audio_floor;
    }
    total_risk.min(config.audio_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::ClassificationResult;

    struct StubAudioClassifier {
        ranked: ClassificationResult,
    }

    impl AudioClassifier for StubAudioClassifier {
        fn classify(
            &self,
            _sample: &Path,
            _top_k: usize,
        ) -> Result<ClassificationResult, ScoreError> {
            Ok(self.ranked.clone())
        }
    }

    struct FailingAudioClassifier;

    impl AudioClassifier for FailingAudioClassifier {
        fn classify(
            &self,
            _sample: &Path,
            _top_k: usize,
        ) -> Result<ClassificationResult, ScoreError> {
            Err(ScoreError::InferenceError("decoder choked".to_string()))
        }
    }

    fn score_with(ranked: Vec<LabeledScore>) -> f32 {
        let stub = StubAudioClassifier { ranked };
        score_audio(Path::new("cough.wav"), Some(&stub), &RiskConfig::default()).score
    }

    #[test]
    fn test_no_match_returns_floor() {
        let score = score_with(vec![
            LabeledScore::new("Speech", 0.8),
            LabeledScore::new("Music", 0.15),
        ]);
        assert_eq!(score, 0.05);
    }

    #[test]
    fn test_below_noise_gate_is_ignored() {
        // Wheeze at 0.01 sits under the gate; nothing else matches
        let score = score_with(vec![
            LabeledScore::new("Speech", 0.9),
            LabeledScore::new("Wheeze", 0.01),
        ]);
        assert_eq!(score, 0.05);
    }

    #[test]
    fn test_single_match_accumulates_confidence_times_weight() {
        let score = score_with(vec![LabeledScore::new("Cough", 0.3)]);
        assert!((score - 0.6).abs() < 1e-6); // 0.3 * 2.0
    }

    #[test]
    fn test_label_can_match_multiple_keywords() {
        // "wheeze breath" hits wheeze (4.0) and breath (1.2): 0.1 * 5.2
        let score = score_with(vec![LabeledScore::new("Wheeze breath", 0.1)]);
        assert!((score - 0.52).abs() < 1e-6);
    }

    #[test]
    fn test_inflected_label_matches_only_contained_keywords() {
        // "wheezing" does not contain "wheeze"; only "breath" matches
        let score = score_with(vec![LabeledScore::new("Wheezing breath", 0.1)]);
        assert!((score - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_accumulation_is_monotonic() {
        let base = score_with(vec![LabeledScore::new("Cough", 0.2)]);
        let more = score_with(vec![
            LabeledScore::new("Cough", 0.2),
            LabeledScore::new("Sneeze", 0.1),
        ]);
        assert!(more >= base);
    }

    #[test]
    fn test_total_is_capped() {
        let score = score_with(vec![
            LabeledScore::new("Wheeze", 0.9),
            LabeledScore::new("Cough", 0.8),
        ]);
        assert_eq!(score, 0.99);
    }

    #[test]
    fn test_inference_failure_scores_zero_with_tag() {
        let scored = score_audio(
            Path::new("bad.wav"),
            Some(&FailingAudioClassifier),
            &RiskConfig::default(),
        );
        assert_eq!(scored.score, 0.0);
        assert!(scored.failure.is_some());
    }

    #[test]
    fn test_missing_classifier_scores_zero() {
        let scored = score_audio(Path::new("cough.wav"), None, &RiskConfig::default());
        assert_eq!(scored.score, 0.0);
        assert!(scored.failure.is_some());
    }
}
