//! JSON documents written by the subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use siting_evaluate::{Metrics, MetricsOutput, OutputConfig};
use siting_grid::Point;
use siting_layout::Layout;

/// Result of `siting generate`.
#[derive(Debug, Serialize)]
pub struct GenerateOutput<'a> {
    pub grid_size: usize,
    pub demand_points: &'a [Point],
    pub facility_points: &'a [Point],
    pub metrics: MetricsOutput,
    pub k_suggested: usize,
    pub k_used: usize,
    pub iterations: usize,
    pub termination: &'static str,
}

impl<'a> GenerateOutput<'a> {
    pub fn new(layout: &'a Layout, config: &OutputConfig) -> Self {
        Self {
            grid_size: layout.grid_size(),
            demand_points: layout.demand_points(),
            facility_points: layout.facility_points(),
            metrics: MetricsOutput::new(layout.metrics(), config),
            k_suggested: layout.k_suggested(),
            k_used: layout.k_used(),
            iterations: layout.iterations(),
            termination: layout.termination().as_str(),
        }
    }
}

/// Result of `siting recompute`.
#[derive(Debug, Serialize)]
pub struct RecomputeOutput {
    pub metrics: MetricsOutput,
    pub k_used: usize,
}

impl RecomputeOutput {
    pub fn new(metrics: &Metrics, k_used: usize, config: &OutputConfig) -> Self {
        Self {
            metrics: MetricsOutput::new(metrics, config),
            k_used,
        }
    }
}

/// Writes `json` to `path`, or to stdout when no path is given.
pub fn write_json(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
