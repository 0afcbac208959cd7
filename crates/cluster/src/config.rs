//! Configuration for centroid relaxation.

use crate::error::ClusterError;

/// Configuration for [`place_centroids`](crate::place_centroids).
///
/// # Example
///
/// ```
/// use siting_cluster::CentroidConfig;
///
/// let config = CentroidConfig::new(3)
///     .with_tolerance(1e-4)
///     .with_max_iterations(250);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CentroidConfig {
    /// Number of centroids (facilities) to place.
    n_centroids: usize,
    /// Convergence threshold on the largest per-coordinate shift.
    tolerance: f64,
    /// Iteration cap.
    max_iterations: usize,
}

impl CentroidConfig {
    /// Creates a configuration for `n_centroids` centroids.
    ///
    /// Defaults: `tolerance = 0.001`, `max_iterations = 100`.
    pub fn new(n_centroids: usize) -> Self {
        Self {
            n_centroids,
            tolerance: 1e-3,
            max_iterations: 100,
        }
    }

    /// Sets the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn n_centroids(&self) -> usize {
        self.n_centroids
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Validates this configuration.
    ///
    /// Returns an error if there are no centroids, the tolerance is not a
    /// finite positive number, or the iteration cap is zero.
    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.n_centroids < 1 {
            return Err(ClusterError::InvalidCentroidCount {
                n_centroids: self.n_centroids,
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ClusterError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        if self.max_iterations < 1 {
            return Err(ClusterError::InvalidMaxIterations {
                max_iterations: self.max_iterations,
            });
        }
        Ok(())
    }
}
