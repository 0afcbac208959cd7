//! Full layout generation pipeline.

use rand::Rng;
use tracing::info;

use siting_cluster::place_centroids;
use siting_grid::{place_facilities, sample_cells};
use siting_knn::suggest_k;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::recompute::recompute_metrics;
use crate::result::Layout;

/// Generates a random layout and measures it.
///
/// Demand points are sampled without replacement, facility sites are
/// proposed by centroid relaxation over the demand points and snapped onto
/// free cells, then [`recompute_metrics`] scores the result. The neighbour
/// count is the configured override, or [`suggest_k`] when none is set.
///
/// All randomness comes from `rng`, so a seeded generator gives a
/// reproducible layout.
///
/// # Errors
///
/// Returns [`LayoutError`] if the configuration is invalid, there are more
/// facilities than demand points, or there is only one demand point.
#[tracing::instrument(
    skip_all,
    fields(
        grid_size = config.grid_size(),
        num_demand = config.num_demand(),
        num_facilities = config.num_facilities()
    )
)]
pub fn generate_layout(config: &LayoutConfig, rng: &mut impl Rng) -> Result<Layout, LayoutError> {
    config.validate()?;

    let k_suggested = suggest_k(config.num_demand(), config.num_facilities());
    let k_used = config.k_override().unwrap_or(k_suggested);

    let demand = sample_cells(config.grid_size(), config.num_demand(), rng)?;
    let relaxed = place_centroids(&demand, &config.centroid_config(), rng)?;
    info!(
        iterations = relaxed.iterations(),
        termination = %relaxed.termination(),
        "centroids placed"
    );

    let facilities = place_facilities(relaxed.centroids(), &demand, config.grid_size())?;
    let recomputed = recompute_metrics(&demand, &facilities, k_used)?;
    info!(
        accuracy = recomputed.metrics.accuracy,
        macro_f1 = recomputed.metrics.macro_f1,
        "layout scored"
    );

    Ok(Layout {
        grid_size: config.grid_size(),
        demand_points: demand,
        facility_points: facilities,
        metrics: recomputed.metrics,
        k_suggested,
        k_used,
        iterations: relaxed.iterations(),
        termination: relaxed.termination(),
    })
}
