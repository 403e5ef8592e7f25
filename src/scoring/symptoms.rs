//! Symptom-text modality scorer
//!
//! Counts containment of a fixed symptom vocabulary in free transcript text.
//! Three or more distinct keyword matches saturate the score; there is no
//! per-term weighting.

use crate::config::RiskConfig;

/// Symptom vocabulary spanning malignancy, tuberculosis and general
/// distress, matched by substring containment against lower-cased text
const SYMPTOM_KEYWORDS: [&str; 11] = [
    "blood",
    "weight loss",
    "night sweats",
    "fever",
    "chills",
    "chest pain",
    "lump",
    "fatigue",
    "cough",
    "breath",
    "hoarse",
];

/// Score transcript text for symptom risk
///
/// Each distinct keyword contained in the lower-cased text counts once,
/// regardless of how often it appears. Score is
/// `min(matches / config.symptom_saturation, 1.0)`; empty text scores 0.0.
///
/// This scorer has no collaborator and cannot fail.
///
/// # Example
///
/// ```
/// use medrisk::{scoring::symptoms::score_symptoms, RiskConfig};
///
/// let config = RiskConfig::default();
/// let score = score_symptoms("coughing blood, severe fatigue", &config);
/// assert_eq!(score, 1.0); // 3 matches saturate
/// ```
pub fn score_symptoms(transcript: &str, config: &RiskConfig) -> f32 {
    if transcript.is_empty() {
        return 0.0;
    }
    let text = transcript.to_lowercase();

    let matches = SYMPTOM_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count();

    (matches as f32 / config.symptom_saturation as f32).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f32 {
        score_symptoms(text, &RiskConfig::default())
    }

    #[test]
    fn test_empty_transcript_scores_zero() {
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn test_no_keywords_scores_zero() {
        assert_eq!(score("feeling fine, slept well"), 0.0);
    }

    #[test]
    fn test_one_keyword_scores_one_third() {
        let s = score("persistent cough for two weeks");
        assert!((s - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_three_keywords_saturate() {
        assert_eq!(score("blood, cough, fatigue"), 1.0);
    }

    #[test]
    fn test_more_than_three_keywords_stay_saturated() {
        assert_eq!(score("blood, cough, fatigue, fever, night sweats"), 1.0);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let s = score("cough cough cough");
        assert!((s - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let s = score("COUGHING up BLOOD");
        assert!((s - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_multiword_keywords_match() {
        let s = score("unexplained weight loss and night sweats");
        assert!((s - 2.0 / 3.0).abs() < 1e-6);
    }
}
