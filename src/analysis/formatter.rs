//! Breakdown string rendering
//!
//! Deterministic, side-effect-free presentation of an [`AggregateResult`]
//! for the UI layer. Segments appear in fixed order (imaging, audio,
//! symptoms) and only for modalities that were actually evaluated.

use super::result::{AggregateResult, RiskStatus};

/// Render the per-modality breakdown as a pipe-delimited string
///
/// Percentages are rounded to whole percent. The imaging segment carries
/// its qualitative finding label.
///
/// # Example
///
/// ```text
/// Imaging (Opacities Detected): 72% | Bio-Acoustics: 31% | Symptoms: 67%
/// ```
///
/// A `NoData` result renders as `Awaiting inputs...`.
pub fn format_breakdown(result: &AggregateResult) -> String {
    if result.status == RiskStatus::NoData {
        return "Awaiting inputs...".to_string();
    }

    let segments: Vec<String> = result
        .breakdown
        .iter()
        .map(|entry| {
            let pct = format!("{:.0}%", entry.score * 100.0);
            match entry.finding {
                Some(finding) => format!("{} ({}): {}", entry.modality.name(), finding.label(), pct),
                None => format!("{}: {}", entry.modality.name(), pct),
            }
        })
        .collect();

    segments.join(" | ")
}
