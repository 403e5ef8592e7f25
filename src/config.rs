//! Configuration parameters for risk aggregation

/// Risk engine configuration parameters
///
/// Defaults reproduce the calibration of the reference triage heuristic.
/// Weights are renormalized over the modalities actually present, so they
/// only need to sum to 1.0 when all three inputs are supplied.
#[derive(Debug, Clone)]
pub struct RiskConfig {
    // Modality weights
    /// Weight of the chest-imaging score (default: 0.6)
    pub imaging_weight: f32,

    /// Weight of the respiratory-audio score (default: 0.2)
    pub audio_weight: f32,

    /// Weight of the symptom-text score (default: 0.2)
    pub symptom_weight: f32,

    // Audio scoring
    /// Number of ranked labels requested from the audio classifier (default: 5)
    pub audio_top_k: usize,

    /// Minimum confidence for an audio label to be considered (default: 0.02)
    /// Labels below this gate are treated as classifier noise
    pub noise_gate: f32,

    /// Score returned when audio is present but nothing risk-relevant matched
    /// (default: 0.05) — signal present but unclassified, slight residual risk
    pub audio_floor: f32,

    /// Hard cap on the accumulated audio score (default: 0.99)
    /// The audio channel never reports certainty
    pub audio_cap: f32,

    // Imaging scoring
    /// Minimum confidence for an anomaly-proxy label to qualify (default: 0.5)
    pub imaging_match_threshold: f32,

    /// Score returned when no anomaly proxy qualifies (default: 0.1)
    /// "Clean but not zero"
    pub imaging_baseline: f32,

    /// Imaging score above which the finding is reported as a critical
    /// anomaly (default: 0.8)
    pub critical_finding_threshold: f32,

    /// Imaging score above which the finding is reported as opacities
    /// (default: 0.5)
    pub opacity_finding_threshold: f32,

    // Symptom scoring
    /// Number of distinct keyword matches that saturates the symptom score
    /// (default: 3)
    pub symptom_saturation: u32,

    // Status thresholds (strict comparisons, highest exceeded wins)
    /// Final score above which status is HIGH (default: 0.75)
    pub high_threshold: f32,

    /// Final score above which status is MODERATE (default: 0.4)
    pub moderate_threshold: f32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            imaging_weight: 0.6,
            audio_weight: 0.2,
            symptom_weight: 0.2,
            audio_top_k: 5,
            noise_gate: 0.02,
            audio_floor: 0.05,
            audio_cap: 0.99,
            imaging_match_threshold: 0.5,
            imaging_baseline: 0.1,
            critical_finding_threshold: 0.8,
            opacity_finding_threshold: 0.5,
            symptom_saturation: 3,
            high_threshold: 0.75,
            moderate_threshold: 0.4,
        }
    }
}
