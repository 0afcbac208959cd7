//! Configuration for layout generation.

use siting_cluster::CentroidConfig;

use crate::error::LayoutError;

/// Parameters of one generated layout.
///
/// # Example
///
/// ```
/// use siting_layout::LayoutConfig;
///
/// let config = LayoutConfig::new(10, 20, 3).with_k(5);
/// assert_eq!(config.k_override(), Some(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Side length of the square grid.
    grid_size: usize,
    /// Number of demand points to sample.
    num_demand: usize,
    /// Number of facilities to place.
    num_facilities: usize,
    /// Neighbour count for classification; `None` uses the suggestion.
    k_override: Option<usize>,
    /// Centroid convergence threshold.
    tolerance: f64,
    /// Centroid iteration cap.
    max_iterations: usize,
}

impl LayoutConfig {
    /// Creates a configuration with the default relaxation settings
    /// (`tolerance = 0.001`, `max_iterations = 100`) and no `k` override.
    pub fn new(grid_size: usize, num_demand: usize, num_facilities: usize) -> Self {
        Self {
            grid_size,
            num_demand,
            num_facilities,
            k_override: None,
            tolerance: 1e-3,
            max_iterations: 100,
        }
    }

    /// Overrides the suggested neighbour count. Zero clears the override.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k_override = (k > 0).then_some(k);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn num_demand(&self) -> usize {
        self.num_demand
    }

    pub fn num_facilities(&self) -> usize {
        self.num_facilities
    }

    pub fn k_override(&self) -> Option<usize> {
        self.k_override
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Centroid settings derived from this layout.
    pub fn centroid_config(&self) -> CentroidConfig {
        CentroidConfig::new(self.num_facilities)
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
    }

    /// Validates this configuration.
    ///
    /// Sizes and counts must be positive and demand plus facilities must
    /// fit on the grid. Relaxation settings are checked as in
    /// [`CentroidConfig::validate`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("grid_size", self.grid_size),
            ("num_demand", self.num_demand),
            ("num_facilities", self.num_facilities),
        ] {
            if value == 0 {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }

        let available = self.grid_size.saturating_mul(self.grid_size);
        let required = self.num_demand.saturating_add(self.num_facilities);
        if required > available {
            return Err(LayoutError::Capacity {
                required,
                available,
            });
        }

        self.centroid_config().validate()?;
        Ok(())
    }
}
