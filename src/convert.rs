//! Pure conversion functions: TOML config structs -> crate API config types.

use siting_evaluate::OutputConfig;
use siting_layout::LayoutConfig;

use crate::cli::GenerateArgs;
use crate::config::{ClusterToml, LayoutToml, OutputToml, SitingConfig};

/// Applies command-line overrides on top of the file configuration.
pub fn apply_overrides(config: &mut SitingConfig, args: &GenerateArgs) {
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(grid_size) = args.grid_size {
        config.layout.grid_size = grid_size;
    }
    if let Some(demand) = args.demand {
        config.layout.num_demand = demand;
    }
    if let Some(facilities) = args.facilities {
        config.layout.num_facilities = facilities;
    }
    if let Some(k) = args.k {
        config.layout.k = Some(k);
    }
}

/// Builds a [`LayoutConfig`] from the TOML layout and cluster sections.
pub fn build_layout_config(layout: &LayoutToml, cluster: &ClusterToml) -> LayoutConfig {
    LayoutConfig::new(layout.grid_size, layout.num_demand, layout.num_facilities)
        .with_k(layout.k.unwrap_or(0))
        .with_tolerance(cluster.tolerance)
        .with_max_iterations(cluster.max_iterations)
}

/// Builds an [`OutputConfig`] from the TOML output section.
pub fn build_output_config(output: &OutputToml) -> OutputConfig {
    OutputConfig::default().with_pretty(output.pretty)
}
