//! Lloyd centroid relaxation for proposing facility sites.
//!
//! Given the demand points of a layout, [`place_centroids`] runs a k-means
//! style relaxation and returns one continuous centroid per facility. The
//! centroids are snapped onto free grid cells afterwards by
//! `siting_grid::place_facilities`.
//!
//! # Quick start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use siting_cluster::{CentroidConfig, place_centroids};
//! use siting_grid::Point;
//!
//! let points = [Point::new(0, 0), Point::new(0, 1), Point::new(8, 8), Point::new(8, 9)];
//! let config = CentroidConfig::new(2);
//! let mut rng = StdRng::seed_from_u64(3);
//!
//! let result = place_centroids(&points, &config, &mut rng).unwrap();
//! assert_eq!(result.centroids().len(), 2);
//! assert!(result.iterations() <= config.max_iterations());
//! ```
//!
//! # Algorithm
//!
//! ```text
//! place_centroids()
//!   ├─ validate inputs
//!   ├─ seed centroids from distinct random points
//!   └─ relax() up to max_iterations times
//!        ├─ assign_nearest()      (ties → lowest centroid index)
//!        ├─ recompute means       (empty cluster → random point)
//!        └─ max coordinate shift < tolerance → Converged
//! ```

mod config;
mod error;
mod lloyd;
mod result;

pub use config::CentroidConfig;
pub use error::ClusterError;
pub use lloyd::{assign_nearest, place_centroids};
pub use result::{CentroidResult, Termination};
