//! Metric recomputation for a fixed layout.

use tracing::debug;

use siting_evaluate::{Metrics, assign_to_facilities, score_predictions};
use siting_grid::Point;
use siting_knn::{KnnConfig, leave_one_out};

use crate::error::LayoutError;
use crate::result::Recomputed;

/// Recomputes the metrics of a layout whose points are already placed.
///
/// Demand points are assigned to their nearest facility, the assignment is
/// predicted back by leave-one-out KNN with `k` neighbours, and both are
/// summarised in [`Metrics`]. No randomness is involved, so repeated calls
/// return identical results.
///
/// # Errors
///
/// Returns [`LayoutError`] if either point set is empty, there are fewer than
/// two demand points, or `k` is zero.
#[tracing::instrument(skip_all, fields(n_demand = demand.len(), n_facilities = facilities.len(), k = k))]
pub fn recompute_metrics(
    demand: &[Point],
    facilities: &[Point],
    k: usize,
) -> Result<Recomputed, LayoutError> {
    let assignment = assign_to_facilities(demand, facilities)?;
    let loo = leave_one_out(demand, assignment.labels(), &KnnConfig::new(k))?;
    debug!(k_effective = loo.k_effective(), "leave-one-out complete");

    let scores = score_predictions(assignment.labels(), loo.predictions(), facilities.len())?;
    Ok(Recomputed {
        metrics: Metrics::new(&assignment, &scores),
        k_used: k,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use siting_evaluate::EvaluateError;
    use siting_knn::KnnError;

    fn pts(cells: &[(i64, i64)]) -> Vec<Point> {
        cells.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn test_two_clear_groups() {
        let demand = pts(&[(0, 0), (0, 1), (1, 0), (7, 7), (7, 8), (8, 7)]);
        let facilities = pts(&[(1, 1), (8, 8)]);
        let out = recompute_metrics(&demand, &facilities, 3).unwrap();

        assert_eq!(out.k_used(), 3);
        assert_eq!(out.metrics().loads, vec![3, 3]);
        assert_eq!(out.metrics().accuracy, 1.0);
        assert_eq!(out.metrics().macro_f1, 1.0);
        assert_abs_diff_eq!(out.metrics().load_cv, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_k_used_is_as_supplied() {
        let demand = pts(&[(0, 0), (0, 1), (5, 5)]);
        let facilities = pts(&[(0, 2)]);
        // k larger than n - 1 is clamped internally but reported as given.
        let out = recompute_metrics(&demand, &facilities, 9).unwrap();
        assert_eq!(out.k_used(), 9);
    }

    #[test]
    fn test_far_apart_demand() {
        let demand = pts(&[(0, 0), (3_100_000_000, 0), (0, 1)]);
        let facilities = pts(&[(0, 2)]);
        let out = recompute_metrics(&demand, &facilities, 1).unwrap();

        assert_eq!(out.metrics().loads, vec![3]);
        assert_eq!(out.metrics().accuracy, 1.0);
        assert_abs_diff_eq!(out.metrics().max_distance, 3.1e9, epsilon = 1e-3);
    }

    #[test]
    fn test_errors_propagate() {
        let demand = pts(&[(0, 0), (0, 1)]);
        let facilities = pts(&[(1, 1)]);

        assert_eq!(
            recompute_metrics(&demand, &facilities, 0),
            Err(LayoutError::Knn(KnnError::InvalidK { k: 0 }))
        );
        assert_eq!(
            recompute_metrics(&demand[..1], &facilities, 1),
            Err(LayoutError::Knn(KnnError::InsufficientPoints { n: 1 }))
        );
        assert_eq!(
            recompute_metrics(&demand, &[], 1),
            Err(LayoutError::Evaluate(EvaluateError::NoFacilities))
        );
    }
}
