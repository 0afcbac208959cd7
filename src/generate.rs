use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use siting_evaluate::to_json;
use siting_layout::generate_layout;

use crate::cli::GenerateArgs;
use crate::config::SitingConfig;
use crate::convert;
use crate::output::{GenerateOutput, write_json};

/// Run the layout generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // Step 1: Load config and apply command-line overrides
    let mut config = match &args.config {
        Some(path) => SitingConfig::load(path)?,
        None => SitingConfig::default(),
    };
    convert::apply_overrides(&mut config, &args);

    // Step 2: Build and check crate configs before any work
    let layout_cfg = convert::build_layout_config(&config.layout, &config.cluster);
    layout_cfg
        .validate()
        .context("invalid layout configuration")?;
    let output_cfg = convert::build_output_config(&config.output);

    // Step 3: Create seeded RNG
    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // Step 4: Generate and score
    let layout = generate_layout(&layout_cfg, &mut rng).context("layout generation failed")?;
    info!(
        k_used = layout.k_used(),
        iterations = layout.iterations(),
        "layout generated"
    );

    // Step 5: Write JSON
    let json = to_json(&GenerateOutput::new(&layout, &output_cfg), &output_cfg)?;
    write_json(args.output.as_deref(), &json)
}
