//! End-to-end facility layout generation.
//!
//! | Entry point | Randomness | Steps |
//! |-------------|------------|-------|
//! | [`generate_layout`] | caller's `Rng` | sample demand, relax centroids, snap to free cells, score |
//! | [`recompute_metrics`] | none | assign, leave-one-out KNN, score |
//!
//! # Quick start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use siting_layout::{LayoutConfig, generate_layout, recompute_metrics};
//!
//! let config = LayoutConfig::new(6, 10, 2);
//! let mut rng = StdRng::seed_from_u64(42);
//! let layout = generate_layout(&config, &mut rng).unwrap();
//!
//! assert_eq!(layout.facility_points().len(), 2);
//!
//! let again = recompute_metrics(
//!     layout.demand_points(),
//!     layout.facility_points(),
//!     layout.k_used(),
//! )
//! .unwrap();
//! assert_eq!(again.metrics(), layout.metrics());
//! ```

mod config;
mod error;
mod generate;
mod recompute;
mod result;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use generate::generate_layout;
pub use recompute::recompute_metrics;
pub use result::{Layout, Recomputed};
