use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Facility siting simulator on a square grid.
#[derive(Parser)]
#[command(
    name = "siting",
    version,
    about = "Random facility layouts scored by distance, balance and KNN separability"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a random layout and score it.
    Generate(GenerateArgs),
    /// Recompute metrics for an existing layout.
    Recompute(RecomputeArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args, Default)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override grid side length.
    #[arg(long)]
    pub grid_size: Option<usize>,

    /// Override number of demand points.
    #[arg(long)]
    pub demand: Option<usize>,

    /// Override number of facilities.
    #[arg(long)]
    pub facilities: Option<usize>,

    /// Override neighbour count (0 uses the suggested value).
    #[arg(short, long)]
    pub k: Option<usize>,
}

/// Arguments for the `recompute` subcommand.
#[derive(clap::Args)]
pub struct RecomputeArgs {
    /// JSON file with `demand_points` and `facility_points`.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Neighbour count for leave-one-out classification.
    #[arg(short, long)]
    pub k: usize,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
