//! Output types of the layout pipeline.

use siting_cluster::Termination;
use siting_evaluate::Metrics;
use siting_grid::Point;

/// A generated layout together with its metrics.
#[derive(Debug, Clone)]
pub struct Layout {
    pub(crate) grid_size: usize,
    pub(crate) demand_points: Vec<Point>,
    pub(crate) facility_points: Vec<Point>,
    pub(crate) metrics: Metrics,
    pub(crate) k_suggested: usize,
    pub(crate) k_used: usize,
    pub(crate) iterations: usize,
    pub(crate) termination: Termination,
}

impl Layout {
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Sampled demand points, pairwise distinct.
    pub fn demand_points(&self) -> &[Point] {
        &self.demand_points
    }

    /// Facility cells, in centroid order.
    pub fn facility_points(&self) -> &[Point] {
        &self.facility_points
    }

    /// Unrounded metrics of the layout.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Neighbour count suggested for this demand/facility split.
    pub fn k_suggested(&self) -> usize {
        self.k_suggested
    }

    /// Neighbour count the classifier was asked to use.
    pub fn k_used(&self) -> usize {
        self.k_used
    }

    /// Centroid relaxation rounds performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }
}

/// Metrics recomputed for an existing layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Recomputed {
    pub(crate) metrics: Metrics,
    pub(crate) k_used: usize,
}

impl Recomputed {
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn k_used(&self) -> usize {
        self.k_used
    }
}
