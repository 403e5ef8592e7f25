//! Aggregate result types

use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};

/// Input channel contributing an independent risk estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Chest imaging (X-ray)
    Imaging,
    /// Respiratory audio
    Audio,
    /// Symptom transcript text
    Symptoms,
}

impl Modality {
    /// Display name used in the breakdown string
    ///
    /// # Example
    ///
    /// ```
    /// use medrisk::analysis::result::Modality;
    ///
    /// assert_eq!(Modality::Imaging.name(), "Imaging");
    /// assert_eq!(Modality::Audio.name(), "Bio-Acoustics");
    /// assert_eq!(Modality::Symptoms.name(), "Symptoms");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Modality::Imaging => "Imaging",
            Modality::Audio => "Bio-Acoustics",
            Modality::Symptoms => "Symptoms",
        }
    }
}

/// Qualitative finding attached to the imaging breakdown entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImagingFinding {
    /// No qualifying anomaly proxy
    Clear,
    /// Imaging score above the opacity threshold
    OpacitiesDetected,
    /// Imaging score above the critical threshold
    CriticalAnomaly,
}

impl ImagingFinding {
    /// Classify an imaging score into a finding using the configured
    /// thresholds (strict comparisons, highest exceeded wins)
    pub fn from_score(score: f32, config: &RiskConfig) -> Self {
        if score > config.critical_finding_threshold {
            ImagingFinding::CriticalAnomaly
        } else if score > config.opacity_finding_threshold {
            ImagingFinding::OpacitiesDetected
        } else {
            ImagingFinding::Clear
        }
    }

    /// User-facing finding label
    pub fn label(&self) -> &'static str {
        match self {
            ImagingFinding::Clear => "Clear",
            ImagingFinding::OpacitiesDetected => "Opacities Detected",
            ImagingFinding::CriticalAnomaly => "CRITICAL ANOMALY (Mass/Nodule)",
        }
    }
}

/// Discrete risk label for the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    /// No modality was supplied
    NoData,
    /// Final score <= 0.4
    Low,
    /// Final score in (0.4, 0.75]
    Moderate,
    /// Final score > 0.75
    High,
}

impl RiskStatus {
    /// Map a renormalized final score to a status
    ///
    /// Comparisons are strict: a score sitting exactly on a threshold stays
    /// in the lower band.
    ///
    /// # Example
    ///
    /// ```
    /// use medrisk::{analysis::result::RiskStatus, RiskConfig};
    ///
    /// let config = RiskConfig::default();
    /// assert_eq!(RiskStatus::from_score(0.4, &config), RiskStatus::Low);
    /// assert_eq!(RiskStatus::from_score(0.75, &config), RiskStatus::Moderate);
    /// assert_eq!(RiskStatus::from_score(0.76, &config), RiskStatus::High);
    /// ```
    pub fn from_score(score: f32, config: &RiskConfig) -> Self {
        if score > config.high_threshold {
            RiskStatus::High
        } else if score > config.moderate_threshold {
            RiskStatus::Moderate
        } else {
            RiskStatus::Low
        }
    }

    /// User-facing status label
    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::NoData => "NO DATA",
            RiskStatus::Low => "LOW RISK",
            RiskStatus::Moderate => "MODERATE RISK",
            RiskStatus::High => "HIGH RISK (ONCOLOGY/TB)",
        }
    }
}

/// One evaluated modality in the breakdown, in presentation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalityBreakdown {
    /// Which modality was evaluated
    pub modality: Modality,

    /// Its normalized risk score in [0.0, 1.0]
    pub score: f32,

    /// Qualitative finding; populated for imaging only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finding: Option<ImagingFinding>,
}

/// Assessment metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentMetadata {
    /// Wall-clock time spent in the aggregation call, in milliseconds
    pub processing_time_ms: f32,

    /// Modalities that were evaluated, in evaluation order
    pub modalities_evaluated: Vec<Modality>,

    /// Absorbed collaborator failures, one message per failed modality
    ///
    /// Diagnostics never affect the aggregate math: a failed modality scores
    /// 0.0 at full weight, exactly like a classifier returning nothing
    /// risk-relevant. This is the only place the distinction between
    /// "absent" and "failed" is surfaced.
    pub diagnostics: Vec<String>,
}

/// Complete aggregation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Weighted mean risk over the modalities present, in [0.0, 1.0]
    pub final_score: f32,

    /// Discrete risk label
    pub status: RiskStatus,

    /// Per-modality breakdown, fixed order: imaging, audio, symptoms.
    /// Empty when status is `NoData`.
    pub breakdown: Vec<ModalityBreakdown>,

    /// Assessment metadata
    pub metadata: AssessmentMetadata,
}

impl AggregateResult {
    /// Total score rendered to a tenth of a percent (e.g. "72.4%");
    /// a `NoData` result renders as "0%"
    pub fn score_percent(&self) -> String {
        if self.status == RiskStatus::NoData {
            return "0%".to_string();
        }
        format!("{:.1}%", self.final_score * 100.0)
    }
}
