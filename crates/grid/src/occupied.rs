//! Set of grid cells already taken by demand points or placed facilities.

use std::collections::HashSet;

use crate::point::Point;

/// Cells that a new facility must not land on.
///
/// Grows monotonically while facilities are placed: each resolved facility
/// is inserted before the next proposal is resolved.
#[derive(Debug, Clone, Default)]
pub struct OccupiedCells {
    cells: HashSet<Point>,
}

impl OccupiedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `point` as occupied. Returns `false` if it already was.
    pub fn insert(&mut self, point: Point) -> bool {
        self.cells.insert(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.cells.contains(point)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Point> for OccupiedCells {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
