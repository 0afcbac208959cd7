use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, info_span};

use siting_evaluate::{OutputConfig, to_json};
use siting_grid::Point;
use siting_layout::recompute_metrics;

use crate::cli::RecomputeArgs;
use crate::output::{RecomputeOutput, write_json};

/// Points of an existing layout. Extra fields, such as those of a
/// `generate` result, are ignored.
#[derive(Debug, Deserialize)]
struct LayoutInput {
    demand_points: Vec<Point>,
    facility_points: Vec<Point>,
}

fn read_layout(path: &Path) -> Result<LayoutInput> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read layout file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse layout JSON: {}", path.display()))
}

/// Recompute metrics for the layout in `args.input`.
pub fn run(args: RecomputeArgs) -> Result<()> {
    let _cmd = info_span!("recompute").entered();

    let input = read_layout(&args.input)?;
    info!(
        n_demand = input.demand_points.len(),
        n_facilities = input.facility_points.len(),
        "layout loaded"
    );

    let recomputed = recompute_metrics(&input.demand_points, &input.facility_points, args.k)
        .context("metric recomputation failed")?;

    let output_cfg = OutputConfig::default();
    let out = RecomputeOutput::new(recomputed.metrics(), recomputed.k_used(), &output_cfg);
    let json = to_json(&out, &output_cfg)?;
    write_json(args.output.as_deref(), &json)
}
