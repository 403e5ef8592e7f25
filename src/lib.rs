//! # medrisk
//!
//! A multi-modal disease-risk triangulation engine, combining up to three
//! noisy signals into one discrete risk label:
//!
//! - **Imaging**: anomaly-proxy matching over chest X-ray classifier labels
//! - **Bio-Acoustics**: respiratory-distress keyword scoring over ranked
//!   audio classifier labels
//! - **Symptoms**: keyword containment scoring over transcript text
//!
//! This is a decision-support heuristic, not a diagnostic system. The
//! classifiers themselves are external black boxes injected as traits; the
//! engine only extracts, weighs and renormalizes their outputs.
//!
//! ## Quick Start
//!
//! ```
//! use medrisk::{compute_risk, ClassifierSet, RiskConfig};
//!
//! // No classifiers loaded, symptom text only
//! let classifiers = ClassifierSet::default();
//! let result = compute_risk(
//!     None,
//!     None,
//!     Some("coughing blood, night sweats, fatigue"),
//!     &classifiers,
//!     &RiskConfig::default(),
//! );
//!
//! println!("{}: {}", result.status.label(), result.score_percent());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Raw Inputs → Modality Scorers → Weighted Renormalization → Status + Breakdown
//! ```
//!
//! Absent inputs contribute no weight; a collaborator failure is absorbed at
//! the scorer boundary as a zero score at full weight, surfaced only in logs
//! and [`AssessmentMetadata::diagnostics`](analysis::result::AssessmentMetadata).
//! [`compute_risk`] cannot fail for any input combination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod classifiers;
pub mod config;
pub mod error;
pub mod scoring;

// Re-export main types
pub use analysis::formatter::format_breakdown;
pub use analysis::result::{
    AggregateResult, AssessmentMetadata, ImagingFinding, Modality, ModalityBreakdown, RiskStatus,
};
pub use classifiers::{
    AudioClassifier, ClassificationResult, ClassifierSet, ImageClassifier, LabeledScore,
};
pub use config::RiskConfig;
pub use error::ScoreError;

use scoring::ScoredModality;
use std::path::Path;
use std::time::Instant;

/// Main aggregation entry point
///
/// Scores each present modality, accumulates `score × weight` and `weight`
/// over the modalities actually supplied, and renormalizes so an absent
/// modality never drags the result toward zero.
///
/// # Arguments
///
/// * `audio_sample` - Path to a respiratory audio sample, if supplied
/// * `image_sample` - Path to a chest image, if supplied
/// * `transcript` - Symptom transcript text, if supplied (empty text is
///   treated as absent, matching the UI contract)
/// * `classifiers` - Injected collaborator handles; a missing handle scores
///   its modality 0.0 at full weight
/// * `config` - Weights, gates and thresholds
///
/// # Returns
///
/// An [`AggregateResult`] with the renormalized final score, status label
/// and fixed-order per-modality breakdown. With no modality present the
/// status is [`RiskStatus::NoData`], the score is 0.0 and the breakdown is
/// empty; no scorer is invoked.
///
/// This function never fails: input absence contributes zero weight and
/// collaborator failures are absorbed inside the scorers.
///
/// # Example
///
/// ```
/// use medrisk::{compute_risk, ClassifierSet, RiskConfig, RiskStatus};
///
/// let result = compute_risk(None, None, None, &ClassifierSet::default(), &RiskConfig::default());
/// assert_eq!(result.status, RiskStatus::NoData);
/// ```
pub fn compute_risk(
    audio_sample: Option<&Path>,
    image_sample: Option<&Path>,
    transcript: Option<&str>,
    classifiers: &ClassifierSet<'_>,
    config: &RiskConfig,
) -> AggregateResult {
    let start_time = Instant::now();

    log::debug!(
        "Computing risk: audio={} image={} transcript={}",
        audio_sample.is_some(),
        image_sample.is_some(),
        transcript.is_some()
    );

    let mut total_score = 0.0f32;
    let mut total_weight = 0.0f32;
    let mut breakdown: Vec<ModalityBreakdown> = Vec::with_capacity(3);
    let mut modalities_evaluated: Vec<Modality> = Vec::with_capacity(3);
    let mut diagnostics: Vec<String> = Vec::new();

    let mut record = |modality: Modality,
                      scored: ScoredModality,
                      weight: f32,
                      finding: Option<ImagingFinding>| {
        total_score += scored.score * weight;
        total_weight += weight;
        breakdown.push(ModalityBreakdown {
            modality,
            score: scored.score,
            finding,
        });
        modalities_evaluated.push(modality);
        if let Some(err) = scored.failure {
            diagnostics.push(format!("{}: {}", modality.name(), err));
        }
    };

    // Fixed evaluation and presentation order: imaging, audio, symptoms
    if let Some(image) = image_sample {
        let scored = scoring::imaging::score_imaging(image, classifiers.image, config);
        let finding = ImagingFinding::from_score(scored.score, config);
        record(Modality::Imaging, scored, config.imaging_weight, Some(finding));
    }

    if let Some(audio) = audio_sample {
        let scored = scoring::audio::score_audio(audio, classifiers.audio, config);
        record(Modality::Audio, scored, config.audio_weight, None);
    }

    // Empty transcript text is treated as absent: no score, no weight
    if let Some(text) = transcript.filter(|t| !t.is_empty()) {
        let score = scoring::symptoms::score_symptoms(text, config);
        record(
            Modality::Symptoms,
            ScoredModality::ok(score),
            config.symptom_weight,
            None,
        );
    }

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    if total_weight == 0.0 {
        log::debug!("No modality present, returning NoData");
        return AggregateResult {
            final_score: 0.0,
            status: RiskStatus::NoData,
            breakdown: vec![],
            metadata: AssessmentMetadata {
                processing_time_ms,
                modalities_evaluated: vec![],
                diagnostics: vec![],
            },
        };
    }

    // Renormalize over present modalities only
    let final_score = total_score / total_weight;
    let status = RiskStatus::from_score(final_score, config);

    log::debug!(
        "Risk computed: score={:.3} status={:?} ({} modalities, {} absorbed failures)",
        final_score,
        status,
        modalities_evaluated.len(),
        diagnostics.len()
    );

    AggregateResult {
        final_score,
        status,
        breakdown,
        metadata: AssessmentMetadata {
            processing_time_ms,
            modalities_evaluated,
            diagnostics,
        },
    }
}
