//! Output type for centroid relaxation.

/// How the relaxation loop ended. Both outcomes are successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The largest centroid shift dropped below the tolerance.
    Converged,
    /// The iteration cap was reached first.
    MaxIterExceeded,
}

impl Termination {
    /// Stable lowercase name, used in logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Converged => "converged",
            Termination::MaxIterExceeded => "max_iter_exceeded",
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`place_centroids`](crate::place_centroids).
#[derive(Debug, Clone)]
pub struct CentroidResult {
    /// Final `(row, col)` centroid coordinates, one per facility.
    centroids: Vec<(f64, f64)>,
    /// Number of relaxation iterations executed (1-based).
    iterations: usize,
    termination: Termination,
    /// Largest per-coordinate shift of the final iteration.
    final_shift: f64,
}

impl CentroidResult {
    pub(crate) fn new(
        centroids: Vec<(f64, f64)>,
        iterations: usize,
        termination: Termination,
        final_shift: f64,
    ) -> Self {
        Self {
            centroids,
            iterations,
            termination,
            final_shift,
        }
    }

    pub fn centroids(&self) -> &[(f64, f64)] {
        &self.centroids
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn final_shift(&self) -> f64 {
        self.final_shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let r = CentroidResult::new(vec![(1.0, 2.0)], 4, Termination::Converged, 0.0);
        assert_eq!(r.centroids(), &[(1.0, 2.0)]);
        assert_eq!(r.iterations(), 4);
        assert_eq!(r.termination(), Termination::Converged);
        assert_eq!(r.final_shift(), 0.0);
    }

    #[test]
    fn test_termination_names() {
        assert_eq!(Termination::Converged.to_string(), "converged");
        assert_eq!(Termination::MaxIterExceeded.to_string(), "max_iter_exceeded");
    }
}
