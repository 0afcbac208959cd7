//! Nearest-facility assignment of demand points.

use siting_grid::Point;

use crate::error::EvaluateError;

/// Every demand point's nearest facility, with the distances and loads that
/// follow from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Facility index per demand point.
    labels: Vec<usize>,
    /// Distance from each demand point to its facility.
    distances: Vec<f64>,
    /// Number of demand points served by each facility.
    loads: Vec<usize>,
}

impl Assignment {
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn loads(&self) -> &[usize] {
        &self.loads
    }

    /// Mean distance to the nearest facility.
    pub fn mean_distance(&self) -> f64 {
        siting_stats::mean(&self.distances)
    }

    /// Largest distance to the nearest facility.
    pub fn max_distance(&self) -> f64 {
        siting_stats::max(&self.distances)
    }

    /// Population standard deviation of nearest-facility distances.
    pub fn distance_sd(&self) -> f64 {
        siting_stats::population_sd(&self.distances)
    }

    /// Coefficient of variation of the facility loads (0 when no load).
    pub fn load_cv(&self) -> f64 {
        let loads: Vec<f64> = self.loads.iter().map(|&l| l as f64).collect();
        siting_stats::coefficient_of_variation(&loads)
    }
}

/// Assigns each demand point to its nearest facility.
///
/// Distances are Euclidean; ties go to the lowest facility index.
///
/// # Errors
///
/// Returns [`EvaluateError::EmptyDemand`] or [`EvaluateError::NoFacilities`]
/// if either input is empty.
pub fn assign_to_facilities(
    demand: &[Point],
    facilities: &[Point],
) -> Result<Assignment, EvaluateError> {
    if demand.is_empty() {
        return Err(EvaluateError::EmptyDemand);
    }
    if facilities.is_empty() {
        return Err(EvaluateError::NoFacilities);
    }

    let mut labels = Vec::with_capacity(demand.len());
    let mut distances = Vec::with_capacity(demand.len());
    let mut loads = vec![0usize; facilities.len()];

    for point in demand {
        let (nearest, dist) = facilities
            .iter()
            .map(|f| point.distance(f))
            .enumerate()
            .fold((0, f64::INFINITY), |best, (h, d)| {
                if d < best.1 { (h, d) } else { best }
            });
        labels.push(nearest);
        distances.push(dist);
        loads[nearest] += 1;
    }

    Ok(Assignment {
        labels,
        distances,
        loads,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pts(cells: &[(i64, i64)]) -> Vec<Point> {
        cells.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn test_two_groups() {
        let demand = pts(&[(0, 0), (0, 1), (4, 4), (4, 5)]);
        let facilities = pts(&[(0, 0), (4, 4)]);
        let a = assign_to_facilities(&demand, &facilities).unwrap();

        assert_eq!(a.labels(), &[0, 0, 1, 1]);
        assert_eq!(a.distances(), &[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(a.loads(), &[2, 2]);
        assert_abs_diff_eq!(a.mean_distance(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a.max_distance(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.distance_sd(), 0.5, epsilon = 1e-12);
        assert_eq!(a.load_cv(), 0.0);
    }

    #[test]
    fn test_tie_lowest_index() {
        let demand = pts(&[(0, 1)]);
        let facilities = pts(&[(0, 2), (0, 0)]);
        let a = assign_to_facilities(&demand, &facilities).unwrap();
        assert_eq!(a.labels(), &[0]);
    }

    #[test]
    fn test_idle_facility() {
        let demand = pts(&[(0, 0), (0, 1), (1, 0)]);
        let facilities = pts(&[(1, 1), (9, 9)]);
        let a = assign_to_facilities(&demand, &facilities).unwrap();
        assert_eq!(a.loads(), &[3, 0]);
        // loads [3, 0]: mean 1.5, sd 1.5
        assert_abs_diff_eq!(a.load_cv(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_errors() {
        let p = pts(&[(0, 0)]);
        assert_eq!(
            assign_to_facilities(&[], &p).unwrap_err(),
            EvaluateError::EmptyDemand
        );
        assert_eq!(
            assign_to_facilities(&p, &[]).unwrap_err(),
            EvaluateError::NoFacilities
        );
    }
}
