//! Configuration for the projector.
//!
//! Every field has a default, so a partial or missing `projector.toml` works.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tennis_core::{BestOf, ProjectionConfig, DEFAULT_SIMULATIONS};
use tracing::warn;

/// Where the match history lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory holding the yearly match files
    pub history_dir: PathBuf,
    /// Yearly files are `<file_prefix>*.csv` inside `history_dir`
    pub file_prefix: String,
    /// Additional files appended to the history, e.g. the current season
    pub extra_files: Vec<PathBuf>,
    /// Daily matchup file with `Player1,Player2,Surface` columns
    pub matchups: Option<PathBuf>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from("data/tennis_atp"),
            file_prefix: "atp_matches_".to_string(),
            extra_files: Vec::new(),
            matchups: None,
        }
    }
}

/// Monte Carlo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub simulations: u32,
    pub best_of: BestOf,
    /// Fixed seed for reproducible runs; random when unset
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            best_of: BestOf::THREE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    pub corpus: CorpusConfig,
    pub projection: ProjectionConfig,
    pub simulation: SimulationConfig,
}

impl ProjectorConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: ProjectorConfig = toml::from_str(contents)?;
        config.projection.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
