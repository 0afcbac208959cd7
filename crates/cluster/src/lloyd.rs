//! Lloyd relaxation loop.

use rand::Rng;
use rand::seq::index;
use tracing::{debug, trace};

use siting_grid::Point;

use crate::config::CentroidConfig;
use crate::error::ClusterError;
use crate::result::{CentroidResult, Termination};

/// Assigns every point to its nearest centroid by Euclidean distance.
///
/// Ties go to the lowest centroid index. `out` is cleared and refilled with
/// one centroid index per point.
pub fn assign_nearest(points: &[Point], centroids: &[(f64, f64)], out: &mut Vec<usize>) {
    out.clear();
    out.extend(points.iter().map(|p| {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (c, &centroid) in centroids.iter().enumerate() {
            let d = p.distance_to(centroid);
            if d < best_dist {
                best = c;
                best_dist = d;
            }
        }
        best
    }));
}

/// Proposes `config.n_centroids()` facility sites from `points`.
///
/// Centroids start on distinct points drawn uniformly from `points`, then
/// alternate between nearest-centroid assignment and mean update. A centroid
/// left without points is reseeded onto a uniformly drawn point. The loop
/// stops once the largest per-coordinate shift is below the tolerance, or
/// after `max_iterations` rounds.
///
/// # Errors
///
/// Returns [`ClusterError`] if the configuration is invalid, `points` is
/// empty, or more centroids are requested than there are points.
#[tracing::instrument(skip_all, fields(n_points = points.len(), n_centroids = config.n_centroids()))]
pub fn place_centroids(
    points: &[Point],
    config: &CentroidConfig,
    rng: &mut impl Rng,
) -> Result<CentroidResult, ClusterError> {
    config.validate()?;
    if points.is_empty() {
        return Err(ClusterError::EmptyData);
    }
    if config.n_centroids() > points.len() {
        return Err(ClusterError::TooManyCentroids {
            n_centroids: config.n_centroids(),
            n_points: points.len(),
        });
    }

    let initial: Vec<(f64, f64)> = index::sample(rng, points.len(), config.n_centroids())
        .into_iter()
        .map(|i| points[i].coords())
        .collect();

    Ok(relax(points, initial, config, rng))
}

/// Runs the relaxation from the given starting centroids.
fn relax(
    points: &[Point],
    mut centroids: Vec<(f64, f64)>,
    config: &CentroidConfig,
    rng: &mut impl Rng,
) -> CentroidResult {
    let k = centroids.len();
    let mut assignment = Vec::with_capacity(points.len());
    let mut sums = vec![(0.0, 0.0); k];
    let mut counts = vec![0usize; k];
    let mut shift = f64::INFINITY;

    for iteration in 1..=config.max_iterations() {
        assign_nearest(points, &centroids, &mut assignment);

        sums.fill((0.0, 0.0));
        counts.fill(0);
        for (p, &c) in points.iter().zip(assignment.iter()) {
            let (r, col) = p.coords();
            sums[c].0 += r;
            sums[c].1 += col;
            counts[c] += 1;
        }

        shift = 0.0;
        for c in 0..k {
            let updated = if counts[c] > 0 {
                let n = counts[c] as f64;
                (sums[c].0 / n, sums[c].1 / n)
            } else {
                let reseed = points[rng.random_range(0..points.len())].coords();
                trace!(centroid = c, iteration, "empty cluster reseeded");
                reseed
            };
            shift = shift
                .max((updated.0 - centroids[c].0).abs())
                .max((updated.1 - centroids[c].1).abs());
            centroids[c] = updated;
        }

        if shift < config.tolerance() {
            debug!(iteration, shift, "centroids converged");
            return CentroidResult::new(centroids, iteration, Termination::Converged, shift);
        }
        trace!(iteration, shift, "relaxation step");
    }

    debug!(
        iterations = config.max_iterations(),
        shift, "iteration cap reached before convergence"
    );
    CentroidResult::new(
        centroids,
        config.max_iterations(),
        Termination::MaxIterExceeded,
        shift,
    )
}
