//! Squared Euclidean distances on integer grid points.

use siting_grid::Point;

/// Squared Euclidean distance between two grid points.
///
/// Integer arithmetic keeps equal distances exactly equal, so tie-breaking
/// never depends on floating-point rounding. Per-axis differences are taken
/// with `abs_diff` and squared in `u128`, so any pair of `i64` coordinates is
/// accepted; the sum saturates only when both axes differ by more than
/// about `1.3e19`.
#[inline]
pub(crate) fn sq_distance(a: &Point, b: &Point) -> u128 {
    let dr = u128::from(a.row().abs_diff(b.row()));
    let dc = u128::from(a.col().abs_diff(b.col()));
    (dr * dr).saturating_add(dc * dc)
}

/// Fills `out` with `(squared distance, label)` for every point except
/// `exclude`, preserving input order.
///
/// # Panics
///
/// Debug-asserts that `points` and `labels` have equal length.
pub(crate) fn sq_distances_excluding(
    points: &[Point],
    labels: &[usize],
    exclude: usize,
    out: &mut Vec<(u128, usize)>,
) {
    debug_assert_eq!(points.len(), labels.len());
    let target = points[exclude];

    out.clear();
    out.extend(
        points
            .iter()
            .zip(labels.iter())
            .enumerate()
            .filter(|&(j, _)| j != exclude)
            .map(|(_, (p, &label))| (sq_distance(&target, p), label)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sq_distance() {
        assert_eq!(sq_distance(&Point::new(0, 0), &Point::new(3, 4)), 25);
        assert_eq!(sq_distance(&Point::new(2, 2), &Point::new(2, 2)), 0);
        assert_eq!(sq_distance(&Point::new(5, 1), &Point::new(4, 3)), 5);
    }

    #[test]
    fn test_sq_distance_far_apart() {
        let a = Point::new(0, 0);
        let b = Point::new(3_100_000_000, 0);
        assert_eq!(sq_distance(&a, &b), 9_610_000_000_000_000_000);
        assert_eq!(sq_distance(&b, &a), sq_distance(&a, &b));
    }

    #[test]
    fn test_sq_distance_full_range() {
        let lo = Point::new(i64::MIN, 0);
        let hi = Point::new(i64::MAX, 0);
        let span = u128::from(u64::MAX);
        assert_eq!(sq_distance(&lo, &hi), span * span);

        let corner_lo = Point::new(i64::MIN, i64::MIN);
        let corner_hi = Point::new(i64::MAX, i64::MAX);
        assert_eq!(sq_distance(&corner_lo, &corner_hi), u128::MAX);
    }

    #[test]
    fn test_excludes_target_and_keeps_order() {
        let points = [Point::new(0, 0), Point::new(0, 1), Point::new(2, 0)];
        let labels = [7, 8, 9];
        let mut out = Vec::new();
        sq_distances_excluding(&points, &labels, 1, &mut out);
        assert_eq!(out, vec![(1, 7), (5, 9)]);
    }

    #[test]
    fn test_buffer_cleared() {
        let points = [Point::new(0, 0), Point::new(1, 1)];
        let labels = [0, 1];
        let mut out = vec![(99, 99); 5];
        sq_distances_excluding(&points, &labels, 0, &mut out);
        assert_eq!(out, vec![(2, 1)]);
    }
}
