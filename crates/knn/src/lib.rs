//! Leave-one-out K-nearest neighbor classification on grid points.
//!
//! Each demand point carries a label (the facility it is assigned to). The
//! classifier predicts every point's label from its `k` nearest *other*
//! points and reports the predictions, so the caller can measure how well
//! the assignment is explained by local geometry.
//!
//! | Step | Rule |
//! |------|------|
//! | Neighbours | squared Euclidean distance, stable sort (ties keep input order) |
//! | `k` | clamped to `min(k, n - 1)` |
//! | Vote | most frequent label; ties go to the label seen first among the neighbours |
//!
//! # Quick start
//!
//! ```
//! use siting_grid::Point;
//! use siting_knn::{KnnConfig, leave_one_out, suggest_k};
//!
//! let points = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 0),
//!               Point::new(7, 7), Point::new(7, 8), Point::new(8, 7)];
//! let labels = [0, 0, 0, 1, 1, 1];
//! let config = KnnConfig::new(suggest_k(points.len(), 2));
//!
//! let result = leave_one_out(&points, &labels, &config).unwrap();
//! assert_eq!(result.predictions(), &labels);
//! ```
//!
//! # Architecture
//!
//! ```text
//! leave_one_out()
//!   ├─ validate inputs
//!   └─ per point (rayon)
//!        ├─ sq_distances_excluding()   (distance.rs)
//!        ├─ nearest_labels()           (select.rs)
//!        └─ majority_label()           (vote.rs)
//! ```

pub mod config;
pub mod error;
pub mod loo;
pub mod result;

pub(crate) mod distance;
pub(crate) mod select;
pub(crate) mod vote;

pub use config::KnnConfig;
pub use error::KnnError;
pub use loo::leave_one_out;
pub use result::LooResult;

/// Suggests a neighbour count for `n_points` points split over `n_classes`
/// facilities.
///
/// `max_k = min(15, n_points / 2)`, then `k = max(3, min(2·n_classes + 1, max_k))`,
/// bumped to the next odd number when even. The bump is applied after the
/// ceiling, so the result can exceed `max_k` (e.g. `suggest_k(4, 3) == 3`
/// while `max_k == 2`).
pub fn suggest_k(n_points: usize, n_classes: usize) -> usize {
    let max_k = (n_points / 2).min(15);
    let k = (2 * n_classes + 1).min(max_k).max(3);
    if k % 2 == 0 { k + 1 } else { k }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_k_known_values() {
        assert_eq!(suggest_k(10, 1), 3);
        assert_eq!(suggest_k(20, 3), 7);
        assert_eq!(suggest_k(100, 4), 9);
        assert_eq!(suggest_k(100, 10), 15); // capped by 15
    }

    #[test]
    fn test_suggest_k_even_ceiling_bumped() {
        // max_k = 8, 2*5+1 = 11 -> min = 8 -> even -> 9
        assert_eq!(suggest_k(16, 5), 9);
        // max_k = 4, floor of 3 not reached -> 4 -> 5
        assert_eq!(suggest_k(8, 2), 5);
    }

    #[test]
    fn test_suggest_k_exceeds_ceiling() {
        // max_k = min(15, 2) = 2, floor lifts to 3, which is above max_k.
        assert_eq!(suggest_k(4, 3), 3);
        assert_eq!(suggest_k(1, 1), 3);
    }

    #[test]
    fn test_suggest_k_always_odd_and_at_least_three() {
        for n in 0..60 {
            for c in 1..12 {
                let k = suggest_k(n, c);
                assert!(k >= 3, "suggest_k({n}, {c}) = {k}");
                assert_eq!(k % 2, 1, "suggest_k({n}, {c}) = {k}");
            }
        }
    }
}
