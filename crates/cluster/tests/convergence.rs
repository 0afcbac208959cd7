//! Integration tests for centroid relaxation.

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use siting_cluster::{CentroidConfig, Termination, assign_nearest, place_centroids};
use siting_grid::{Point, sample_cells};

/// Two pairs far apart end up with one centroid each, whichever points the
/// centroids start on.
#[test]
fn separated_groups() {
    let points: Vec<Point> = [(0, 0), (0, 1), (20, 20), (20, 21)]
        .into_iter()
        .map(Point::from)
        .collect();
    let config = CentroidConfig::new(2);

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = place_centroids(&points, &config, &mut rng).unwrap();
        assert_eq!(result.termination(), Termination::Converged);

        let mut centroids = result.centroids().to_vec();
        centroids.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_abs_diff_eq!(centroids[0].0, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(centroids[0].1, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(centroids[1].0, 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(centroids[1].1, 20.5, epsilon = 1e-12);
    }
}

/// Same seed, same centroids.
#[test]
fn reproducibility() {
    let mut rng = StdRng::seed_from_u64(21);
    let points = sample_cells(12, 40, &mut rng).unwrap();
    let config = CentroidConfig::new(4);

    let a = place_centroids(&points, &config, &mut StdRng::seed_from_u64(5)).unwrap();
    let b = place_centroids(&points, &config, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a.centroids(), b.centroids());
    assert_eq!(a.iterations(), b.iterations());
}

/// Random layouts respect the iteration cap and stay inside the grid hull.
#[test]
fn bounded_iterations_and_hull() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let m = 8;
        let points = sample_cells(m, 20, &mut rng).unwrap();
        let config = CentroidConfig::new(3);
        let result = place_centroids(&points, &config, &mut rng).unwrap();

        assert!(result.iterations() >= 1);
        assert!(result.iterations() <= 100);
        for &(r, c) in result.centroids() {
            assert!((0.0..=(m - 1) as f64).contains(&r));
            assert!((0.0..=(m - 1) as f64).contains(&c));
        }
        if result.termination() == Termination::Converged {
            assert!(result.final_shift() < config.tolerance());
        }
    }
}

/// At convergence every point is assigned to a centroid that is a mean of
/// its own cluster.
#[test]
fn converged_centroids_are_cluster_means() {
    let mut rng = StdRng::seed_from_u64(77);
    let points = sample_cells(10, 30, &mut rng).unwrap();
    let result = place_centroids(&points, &CentroidConfig::new(3), &mut rng).unwrap();
    assert_eq!(result.termination(), Termination::Converged);

    let mut assignment = Vec::new();
    assign_nearest(&points, result.centroids(), &mut assignment);
    for (c, &(row, col)) in result.centroids().iter().enumerate() {
        let members: Vec<&Point> = points
            .iter()
            .zip(assignment.iter())
            .filter(|&(_, &a)| a == c)
            .map(|(p, _)| p)
            .collect();
        if members.is_empty() {
            continue;
        }
        let n = members.len() as f64;
        let mean_row = members.iter().map(|p| p.coords().0).sum::<f64>() / n;
        let mean_col = members.iter().map(|p| p.coords().1).sum::<f64>() / n;
        assert_abs_diff_eq!(row, mean_row, epsilon = 1e-3);
        assert_abs_diff_eq!(col, mean_col, epsilon = 1e-3);
    }
}

/// A tolerance larger than any possible shift stops after one iteration.
#[test]
fn loose_tolerance_stops_early() {
    let mut rng = StdRng::seed_from_u64(2);
    let points = sample_cells(6, 12, &mut rng).unwrap();
    let config = CentroidConfig::new(2).with_tolerance(100.0);
    let result = place_centroids(&points, &config, &mut rng).unwrap();
    assert_eq!(result.iterations(), 1);
    assert_eq!(result.termination(), Termination::Converged);
}
