//! Collision resolution: snap a proposed coordinate onto a free grid cell.

use tracing::{debug, warn};

use crate::error::{GridError, cell_count};
use crate::occupied::OccupiedCells;
use crate::point::Point;

/// Outcome of resolving one proposed coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The rounded proposal was already free.
    Free(Point),
    /// The rounded proposal was taken; `to` is the first free cell found.
    Relocated {
        /// Rounded, clamped proposal.
        from: Point,
        /// Free cell returned instead.
        to: Point,
    },
    /// Every cell is occupied; the rounded proposal is returned as is.
    Exhausted(Point),
}

impl Resolution {
    /// The cell the facility ends up on.
    pub fn point(&self) -> Point {
        match *self {
            Resolution::Free(p) | Resolution::Exhausted(p) => p,
            Resolution::Relocated { to, .. } => to,
        }
    }
}

/// Rounds half-to-even and clamps into `[0, grid_size - 1]`.
fn snap(value: f64, grid_size: i64) -> i64 {
    (value.round_ties_even() as i64).clamp(0, grid_size - 1)
}

/// Maps a continuous proposal to the nearest free cell.
///
/// The proposal is rounded (ties to even) and clamped per axis. If that cell
/// is occupied, square rings of radius `r = 1, 2, ..., grid_size - 1` are
/// scanned with offsets `di` (outer) and `dj` (inner) both ascending over
/// `[-r, r]`; the first in-grid free cell wins. When the rings find nothing a
/// row-major scan of the whole grid follows, and a full grid yields
/// [`Resolution::Exhausted`].
///
/// # Errors
///
/// Returns [`GridError::InvalidGridSize`] if `grid_size` is zero.
pub fn resolve_free_cell(
    proposal: (f64, f64),
    occupied: &OccupiedCells,
    grid_size: usize,
) -> Result<Resolution, GridError> {
    let available = cell_count(grid_size)?;
    let m = grid_size as i64;
    let origin = Point::new(snap(proposal.0, m), snap(proposal.1, m));

    if !occupied.contains(&origin) {
        return Ok(Resolution::Free(origin));
    }

    for r in 1..m {
        for di in -r..=r {
            for dj in -r..=r {
                let candidate = origin.offset(di, dj);
                if candidate.in_grid(grid_size) && !occupied.contains(&candidate) {
                    return Ok(Resolution::Relocated {
                        from: origin,
                        to: candidate,
                    });
                }
            }
        }
    }

    let fallback = (0..available)
        .map(|i| Point::from_index(i, grid_size))
        .find(|p| !occupied.contains(p));

    Ok(match fallback {
        Some(to) => Resolution::Relocated { from: origin, to },
        None => Resolution::Exhausted(origin),
    })
}

/// Resolves each proposal in order, treating `demand` and every facility
/// placed so far as occupied.
///
/// Unless the grid runs out of cells, the returned facilities are pairwise
/// distinct and disjoint from `demand`.
///
/// # Errors
///
/// Returns [`GridError::InvalidGridSize`] if `grid_size` is zero.
pub fn place_facilities(
    proposals: &[(f64, f64)],
    demand: &[Point],
    grid_size: usize,
) -> Result<Vec<Point>, GridError> {
    let mut occupied: OccupiedCells = demand.iter().copied().collect();
    let mut facilities = Vec::with_capacity(proposals.len());

    for (idx, &proposal) in proposals.iter().enumerate() {
        let resolution = resolve_free_cell(proposal, &occupied, grid_size)?;
        match resolution {
            Resolution::Free(_) => {}
            Resolution::Relocated { from, to } => {
                debug!(facility = idx, %from, %to, "relocated onto free cell");
            }
            Resolution::Exhausted(at) => {
                warn!(facility = idx, %at, "grid full: facility shares an occupied cell");
            }
        }
        let point = resolution.point();
        occupied.insert(point);
        facilities.push(point);
    }

    Ok(facilities)
}
