//! JSON output structures for layout metrics.

use serde::Serialize;
use siting_stats::round_to;

use crate::config::OutputConfig;
use crate::error::EvaluateError;
use crate::metrics::Metrics;

/// Rounded, serialisable view of [`Metrics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsOutput {
    pub mean_distance: f64,
    pub max_distance: f64,
    pub distance_sd: f64,
    pub load_cv: f64,
    pub loads: Vec<usize>,
    pub macro_f1: f64,
    pub accuracy: f64,
    pub precision_per_facility: Vec<f64>,
    pub recall_per_facility: Vec<f64>,
    pub f1_per_facility: Vec<f64>,
}

impl MetricsOutput {
    /// Rounds `metrics` according to `config`.
    pub fn new(metrics: &Metrics, config: &OutputConfig) -> Self {
        let per = |values: &[f64]| -> Vec<f64> {
            values
                .iter()
                .map(|&v| round_to(v, config.per_facility_decimals()))
                .collect()
        };
        Self {
            mean_distance: round_to(metrics.mean_distance, config.distance_decimals()),
            max_distance: round_to(metrics.max_distance, config.distance_decimals()),
            distance_sd: round_to(metrics.distance_sd, config.distance_decimals()),
            load_cv: round_to(metrics.load_cv, config.balance_decimals()),
            loads: metrics.loads.clone(),
            macro_f1: round_to(metrics.macro_f1, config.summary_decimals()),
            accuracy: round_to(metrics.accuracy, config.summary_decimals()),
            precision_per_facility: per(&metrics.precision),
            recall_per_facility: per(&metrics.recall),
            f1_per_facility: per(&metrics.f1),
        }
    }
}

/// Serialize any output structure to a JSON string.
pub fn to_json<T: Serialize>(output: &T, config: &OutputConfig) -> Result<String, EvaluateError> {
    let result = if config.pretty() {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };
    result.map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}
