//! Integer grid cell.

use serde::{Deserialize, Serialize};

/// A cell on the grid, addressed by `(row, col)`.
///
/// Serialises as a two-element array so layouts read as `[[0, 1], [3, 2]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Point {
    row: i64,
    col: i64,
}

impl Point {
    /// Creates a point at `(row, col)`.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Builds the point for a row-major cell index on a `grid_size`-wide grid.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size` is zero.
    pub fn from_index(index: usize, grid_size: usize) -> Self {
        Self::new((index / grid_size) as i64, (index % grid_size) as i64)
    }

    pub fn row(&self) -> i64 {
        self.row
    }

    pub fn col(&self) -> i64 {
        self.col
    }

    /// Returns the coordinates as floats.
    pub fn coords(&self) -> (f64, f64) {
        (self.row as f64, self.col as f64)
    }

    /// Whether the point lies inside `[0, grid_size)²`.
    pub fn in_grid(&self, grid_size: usize) -> bool {
        let m = grid_size as i64;
        (0..m).contains(&self.row) && (0..m).contains(&self.col)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_to(other.coords())
    }

    /// Euclidean distance to a continuous coordinate.
    pub fn distance_to(&self, (row, col): (f64, f64)) -> f64 {
        let dr = self.row as f64 - row;
        let dc = self.col as f64 - col;
        (dr * dr + dc * dc).sqrt()
    }

    /// Returns the point shifted by `(dr, dc)`.
    pub(crate) fn offset(&self, dr: i64, dc: i64) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }
}

impl From<(i64, i64)> for Point {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.row, p.col)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
