//! Error types for the siting-layout crate.

use siting_cluster::ClusterError;
use siting_evaluate::EvaluateError;
use siting_grid::GridError;
use siting_knn::KnnError;

/// Error type for layout generation and metric recomputation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A count or size that must be positive is zero.
    #[error("{name} must be positive, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// Demand points and facilities do not fit on the grid together.
    #[error("layout needs {required} cells but the grid only has {available}")]
    Capacity {
        /// Demand points plus facilities.
        required: usize,
        /// Cells on the grid.
        available: usize,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Knn(#[from] KnnError),

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}
