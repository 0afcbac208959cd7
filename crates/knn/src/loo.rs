//! Leave-one-out classification entry point and scratch buffers.

use rayon::prelude::*;

use siting_grid::Point;

use crate::config::KnnConfig;
use crate::distance::sq_distances_excluding;
use crate::error::KnnError;
use crate::result::LooResult;
use crate::select::nearest_labels;
use crate::vote::majority_label;

/// Per-worker buffers reused across the points one worker classifies.
#[derive(Debug)]
struct LooScratch {
    /// (squared distance, label) of every other point.
    pairs: Vec<(u128, usize)>,
    /// Labels of the k nearest neighbours.
    nn_labels: Vec<usize>,
    /// (label, count) in first-seen order.
    tally: Vec<(usize, usize)>,
}

impl LooScratch {
    fn new(n_points: usize, k: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(n_points),
            nn_labels: Vec::with_capacity(k),
            tally: Vec::with_capacity(k),
        }
    }
}

/// Validates inputs and returns the effective k.
fn validate_inputs(
    points: &[Point],
    labels: &[usize],
    config: &KnnConfig,
) -> Result<usize, KnnError> {
    config.validate()?;

    if points.len() != labels.len() {
        return Err(KnnError::LengthMismatch {
            points: points.len(),
            labels: labels.len(),
        });
    }
    if points.len() < 2 {
        return Err(KnnError::InsufficientPoints { n: points.len() });
    }

    Ok(config.effective_k(points.len()))
}

/// Classifies point `i` from every other point.
fn predict_one(
    points: &[Point],
    labels: &[usize],
    i: usize,
    k: usize,
    scratch: &mut LooScratch,
) -> usize {
    sq_distances_excluding(points, labels, i, &mut scratch.pairs);
    nearest_labels(&mut scratch.pairs, k, &mut scratch.nn_labels);
    majority_label(&scratch.nn_labels, &mut scratch.tally)
}

/// Predicts each point's label from its `k` nearest other points.
///
/// `k` is clamped to `points.len() - 1`. Points are classified in parallel;
/// no randomness is involved, so the output matches a sequential run.
///
/// # Arguments
///
/// * `points` - labelled points, in training order
/// * `labels` - ground-truth label per point
/// * `config` - neighbour count
///
/// # Errors
///
/// Returns [`KnnError`] if `k` is zero, the slices differ in length, or
/// fewer than two points are supplied.
pub fn leave_one_out(
    points: &[Point],
    labels: &[usize],
    config: &KnnConfig,
) -> Result<LooResult, KnnError> {
    let k = validate_inputs(points, labels, config)?;
    let n = points.len();

    let predictions: Vec<usize> = (0..n)
        .into_par_iter()
        .map_init(
            || LooScratch::new(n, k),
            |scratch, i| predict_one(points, labels, i, k, scratch),
        )
        .collect();

    Ok(LooResult::new(predictions, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(cells: &[(i64, i64)]) -> Vec<Point> {
        cells.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn test_predict_one_excludes_self() {
        // Point 0 is alone in class 5; its neighbours are all class 1.
        let points = pts(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let labels = [5, 1, 1, 1];
        let mut scratch = LooScratch::new(4, 3);
        assert_eq!(predict_one(&points, &labels, 0, 3, &mut scratch), 1);
    }

    #[test]
    fn test_two_points() {
        let points = pts(&[(0, 0), (5, 5)]);
        let result = leave_one_out(&points, &[0, 1], &KnnConfig::new(3)).unwrap();
        assert_eq!(result.k_effective(), 1);
        assert_eq!(result.predictions(), &[1, 0]);
    }

    #[test]
    fn test_tie_uses_nearest_order() {
        // Line of points; k = 2 gives a 1-1 tie, broken by the nearer
        // neighbour, which comes first after the stable sort.
        let points = pts(&[(0, 0), (0, 1), (0, 3)]);
        let labels = [0, 1, 2];
        let result = leave_one_out(&points, &labels, &KnnConfig::new(2)).unwrap();
        // p0: neighbours p1 (d²=1, label 1), p2 (d²=9, label 2) -> 1
        // p1: p0 (1, label 0), p2 (4, label 2) -> 0
        // p2: p1 (4, label 1), p0 (9, label 0) -> 1
        assert_eq!(result.predictions(), &[1, 0, 1]);
    }

    #[test]
    fn test_equidistant_keeps_training_order() {
        // p0 at the centre, p1 and p2 equidistant; k = 1 picks p1 (earlier).
        let points = pts(&[(1, 1), (1, 0), (1, 2)]);
        let labels = [0, 7, 9];
        let result = leave_one_out(&points, &labels, &KnnConfig::new(1)).unwrap();
        assert_eq!(result.predictions()[0], 7);
    }

    #[test]
    fn test_errors() {
        let points = pts(&[(0, 0), (1, 1)]);
        assert_eq!(
            leave_one_out(&points, &[0, 0], &KnnConfig::new(0)).unwrap_err(),
            KnnError::InvalidK { k: 0 }
        );
        assert_eq!(
            leave_one_out(&points, &[0], &KnnConfig::new(1)).unwrap_err(),
            KnnError::LengthMismatch {
                points: 2,
                labels: 1
            }
        );
        assert_eq!(
            leave_one_out(&points[..1], &[0], &KnnConfig::new(1)).unwrap_err(),
            KnnError::InsufficientPoints { n: 1 }
        );
    }
}
