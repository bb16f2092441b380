//! Optional TOML configuration
//!
//! Supplies the same tuning knobs as the command line: simulated delay
//! bounds, pass probability, and the session marker location. Command-line
//! flags always win over file values.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::SimulationSettings;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Root of the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub simulation: SimulationTable,
    #[serde(default)]
    pub gate: GateTable,
}

/// `[simulation]` table: per-case delay bounds and pass probability
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationTable {
    pub delay_min_ms: Option<u64>,
    pub delay_max_ms: Option<u64>,
    pub pass_probability: Option<f64>,
}

/// `[gate]` table: where the session marker lives
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GateTable {
    pub session_file: Option<PathBuf>,
}

impl FileConfig {
    /// Read and parse the file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults overlaid with whatever the `[simulation]` table sets
    ///
    /// Bounds are validated later, after CLI overrides are applied on top.
    pub fn simulation_settings(&self) -> SimulationSettings {
        let mut settings = SimulationSettings::default();
        if let Some(min) = self.simulation.delay_min_ms {
            settings.delay_min_ms = min;
        }
        if let Some(max) = self.simulation.delay_max_ms {
            settings.delay_max_ms = max;
        }
        if let Some(p) = self.simulation.pass_probability {
            settings.pass_probability = p;
        }
        settings
    }
}
