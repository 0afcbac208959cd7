//! Integer grid primitives for facility siting.
//!
//! This crate owns everything that touches discrete grid cells:
//!
//! | Item | Role |
//! |------|------|
//! | [`Point`] | `(row, col)` cell, serialised as `[row, col]` |
//! | [`sample_cells`] | demand points drawn without replacement |
//! | [`OccupiedCells`] | set of cells already taken |
//! | [`resolve_free_cell`] | nearest free cell for a proposed coordinate |
//! | [`place_facilities`] | resolves a sequence of proposals without collisions |
//!
//! # Quick start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use siting_grid::{place_facilities, sample_cells};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let demand = sample_cells(5, 6, &mut rng).unwrap();
//! let facilities = place_facilities(&[(2.0, 2.0), (2.4, 1.6)], &demand, 5).unwrap();
//! assert_eq!(facilities.len(), 2);
//! assert_ne!(facilities[0], facilities[1]);
//! ```

mod error;
mod occupied;
mod point;
mod resolve;
mod sampler;

pub use error::GridError;
pub use occupied::OccupiedCells;
pub use point::Point;
pub use resolve::{Resolution, place_facilities, resolve_free_cell};
pub use sampler::sample_cells;
