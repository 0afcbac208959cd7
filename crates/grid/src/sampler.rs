//! Uniform sampling of distinct grid cells.

use rand::Rng;
use rand::seq::index;

use crate::error::{GridError, cell_count};
use crate::point::Point;

/// Draws `n` distinct cells uniformly without replacement from a
/// `grid_size × grid_size` grid.
///
/// The cells are returned in draw order, not grid order.
///
/// # Errors
///
/// Returns [`GridError::InvalidGridSize`] for an empty grid and
/// [`GridError::CapacityExceeded`] if `n > grid_size²`.
pub fn sample_cells(
    grid_size: usize,
    n: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Point>, GridError> {
    let available = cell_count(grid_size)?;
    if n > available {
        return Err(GridError::CapacityExceeded {
            requested: n,
            available,
        });
    }

    Ok(index::sample(rng, available, n)
        .into_iter()
        .map(|i| Point::from_index(i, grid_size))
        .collect())
}
