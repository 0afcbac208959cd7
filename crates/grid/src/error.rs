//! Error types for the siting-grid crate.

/// Error type for all fallible operations in the siting-grid crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Returned when the grid side length is zero or too large to index.
    #[error("invalid grid size {grid_size}")]
    InvalidGridSize {
        /// The rejected side length.
        grid_size: usize,
    },

    /// Returned when more cells are requested than the grid holds.
    #[error("requested {requested} cells but the grid only has {available}")]
    CapacityExceeded {
        /// Number of cells requested.
        requested: usize,
        /// Number of cells on the grid.
        available: usize,
    },
}

/// Returns `grid_size²`, rejecting empty grids and side lengths whose cell
/// count does not fit the coordinate type.
pub(crate) fn cell_count(grid_size: usize) -> Result<usize, GridError> {
    if grid_size == 0 || i64::try_from(grid_size).is_err() {
        return Err(GridError::InvalidGridSize { grid_size });
    }
    grid_size
        .checked_mul(grid_size)
        .ok_or(GridError::InvalidGridSize { grid_size })
}
