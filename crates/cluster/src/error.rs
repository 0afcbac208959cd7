//! Error types for the siting-cluster crate.

/// Error type for all fallible operations in the siting-cluster crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClusterError {
    /// Returned when no points are supplied.
    #[error("no points provided")]
    EmptyData,

    /// Returned when zero centroids are requested.
    #[error("number of centroids must be >= 1, got {n_centroids}")]
    InvalidCentroidCount {
        /// The invalid centroid count.
        n_centroids: usize,
    },

    /// Returned when more centroids are requested than there are points.
    #[error("cannot seed {n_centroids} centroids from {n_points} points")]
    TooManyCentroids {
        /// Requested centroid count.
        n_centroids: usize,
        /// Available points.
        n_points: usize,
    },

    /// Returned when the tolerance is non-finite or non-positive.
    #[error("tolerance must be finite and positive, got {tolerance}")]
    InvalidTolerance {
        /// The invalid tolerance.
        tolerance: f64,
    },

    /// Returned when the iteration cap is zero.
    #[error("max_iterations must be >= 1, got {max_iterations}")]
    InvalidMaxIterations {
        /// The invalid cap.
        max_iterations: usize,
    },
}
