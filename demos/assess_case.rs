//! Example: assess a case with canned classifier responses
//!
//! This example demonstrates wiring classifier collaborators into the engine
//! and printing the aggregate result. Real deployments implement the
//! classifier traits over loaded model handles or remote inference services.

use medrisk::{
    compute_risk, format_breakdown, AudioClassifier, ClassificationResult, ClassifierSet,
    ImageClassifier, LabeledScore, RiskConfig, ScoreError,
};
use std::path::Path;

/// Stand-in for an audio-event model handle
struct DemoAudioClassifier;

impl AudioClassifier for DemoAudioClassifier {
    fn classify(&self, _sample: &Path, top_k: usize) -> Result<ClassificationResult, ScoreError> {
        Ok(vec![
            LabeledScore::new("Cough", 0.58),
            LabeledScore::new("Wheeze", 0.12),
            LabeledScore::new("Speech", 0.11),
            LabeledScore::new("Breathing", 0.08),
            LabeledScore::new("Hum", 0.01),
        ]
        .into_iter()
        .take(top_k)
        .collect())
    }
}

/// Stand-in for a chest X-ray model handle
struct DemoImageClassifier;

impl ImageClassifier for DemoImageClassifier {
    fn classify(&self, _image: &Path) -> Result<ClassificationResult, ScoreError> {
        Ok(vec![
            LabeledScore::new("PNEUMONIA", 0.77),
            LabeledScore::new("NORMAL", 0.23),
        ])
    }
}

fn main() {
    // Initialize logger
    env_logger::init();

    let audio = DemoAudioClassifier;
    let image = DemoImageClassifier;
    let classifiers = ClassifierSet::new(&audio, &image);
    let config = RiskConfig::default();

    let result = compute_risk(
        Some(Path::new("cough_recording.wav")),
        Some(Path::new("chest_pa_view.png")),
        Some("coughing for three weeks, night sweats, always tired"),
        &classifiers,
        &config,
    );

    // Print results
    println!("Assessment:");
    println!("  Status:     {}", result.status.label());
    println!("  Confidence: {}", result.score_percent());
    println!("  Breakdown:  {}", format_breakdown(&result));
    println!(
        "  Processing: {:.2} ms",
        result.metadata.processing_time_ms
    );
    for note in &result.metadata.diagnostics {
        println!("  Diagnostic: {}", note);
    }
}
