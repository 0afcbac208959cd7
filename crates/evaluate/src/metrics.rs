//! Unrounded metrics of one layout.

use crate::assignment::Assignment;
use crate::classification::ClassScores;

/// Everything measured about a layout. Values are unrounded; rounding
/// happens only in [`MetricsOutput`](crate::MetricsOutput).
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub mean_distance: f64,
    pub max_distance: f64,
    pub distance_sd: f64,
    pub load_cv: f64,
    /// Demand points served per facility.
    pub loads: Vec<usize>,
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub f1: Vec<f64>,
    pub macro_f1: f64,
    pub accuracy: f64,
}

impl Metrics {
    /// Combines assignment statistics with classification scores.
    pub fn new(assignment: &Assignment, scores: &ClassScores) -> Self {
        Self {
            mean_distance: assignment.mean_distance(),
            max_distance: assignment.max_distance(),
            distance_sd: assignment.distance_sd(),
            load_cv: assignment.load_cv(),
            loads: assignment.loads().to_vec(),
            precision: scores.precision().to_vec(),
            recall: scores.recall().to_vec(),
            f1: scores.f1().to_vec(),
            macro_f1: scores.macro_f1(),
            accuracy: scores.accuracy(),
        }
    }
}
