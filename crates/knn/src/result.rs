//! Output type for leave-one-out classification.

/// Result of [`leave_one_out`](crate::leave_one_out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooResult {
    /// Predicted label per point, parallel to the input points.
    predictions: Vec<usize>,
    /// Neighbour count actually used after clamping to `n - 1`.
    k_effective: usize,
}

impl LooResult {
    pub(crate) fn new(predictions: Vec<usize>, k_effective: usize) -> Self {
        Self {
            predictions,
            k_effective,
        }
    }

    /// Returns the predicted label of every point.
    pub fn predictions(&self) -> &[usize] {
        &self.predictions
    }

    /// Returns the neighbour count used for every vote.
    pub fn k_effective(&self) -> usize {
        self.k_effective
    }
}
