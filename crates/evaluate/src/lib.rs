//! Layout evaluation: nearest-facility assignment, distance and load
//! statistics, and classification scores.
//!
//! ```text
//! assign_to_facilities()  -> Assignment   (labels, distances, loads)
//! score_predictions()     -> ClassScores  (per-facility P/R/F1, macro-F1, accuracy)
//! Metrics::new()          -> Metrics      (unrounded)
//! MetricsOutput::new()    -> MetricsOutput (rounded for presentation)
//! ```
//!
//! The predictions fed to [`score_predictions`] come from the leave-one-out
//! classifier in `siting-knn`; this crate does not depend on how they were
//! produced.

mod assignment;
mod classification;
mod config;
mod error;
mod metrics;
mod output;

pub use assignment::{Assignment, assign_to_facilities};
pub use classification::{ClassScores, score_predictions};
pub use config::OutputConfig;
pub use error::EvaluateError;
pub use metrics::Metrics;
pub use output::{MetricsOutput, to_json};
