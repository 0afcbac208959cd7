//! Configuration for leave-one-out classification.

use crate::error::KnnError;

/// Configuration for [`leave_one_out`](crate::leave_one_out).
///
/// # Example
///
/// ```
/// use siting_knn::KnnConfig;
///
/// let config = KnnConfig::new(5);
/// assert_eq!(config.k(), 5);
/// assert_eq!(config.effective_k(4), 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnnConfig {
    /// Requested number of nearest neighbours.
    k: usize,
}

impl KnnConfig {
    /// Creates a configuration with the given k.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Returns the requested number of nearest neighbours.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns `k` clamped to the `n_points - 1` neighbours available once a
    /// point is left out.
    pub fn effective_k(&self, n_points: usize) -> usize {
        self.k.min(n_points.saturating_sub(1))
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        Ok(())
    }
}
