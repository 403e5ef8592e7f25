//! Result aggregation and presentation
//!
//! Turns per-modality scores into the final aggregate:
//! - Result types and status mapping
//! - Human-readable breakdown formatting

pub mod formatter;
pub mod result;
