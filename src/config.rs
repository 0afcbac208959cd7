use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level siting configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SitingConfig {
    /// RNG seed; seeded from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Grid and point counts.
    #[serde(default)]
    pub layout: LayoutToml,

    /// Centroid relaxation settings.
    #[serde(default)]
    pub cluster: ClusterToml,

    /// JSON output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl SitingConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    #[serde(default = "default_num_demand")]
    pub num_demand: usize,
    #[serde(default = "default_num_facilities")]
    pub num_facilities: usize,
    #[serde(default)]
    pub k: Option<usize>,
}

impl Default for LayoutToml {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            num_demand: default_num_demand(),
            num_facilities: default_num_facilities(),
            k: None,
        }
    }
}

fn default_grid_size() -> usize {
    10
}
fn default_num_demand() -> usize {
    20
}
fn default_num_facilities() -> usize {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterToml {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for ClusterToml {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_tolerance() -> f64 {
    1e-3
}
fn default_max_iterations() -> usize {
    100
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            pretty: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
