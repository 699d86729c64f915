//! Dashboard settings.
//!
//! Every field has a default, so a JSON file only needs the keys it changes.

use crate::trigger::DEBOUNCE_MS;
use crate::viewport::Viewport;
use mcd_data::bar::BinSpec;
use mcd_data::stream::StreamConfig;
use mcd_data::POPULARITY_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_DATA_PATH: &str = "data/spotify_data clean.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Source table: a file path for the CLI, a URL for the web app.
    pub data_path: String,
    pub width: f64,
    pub height: f64,
    pub popularity_threshold: f64,
    pub debounce_ms: u64,
    pub bin_width: f64,
    pub stream: StreamConfig,
    /// Fixed scatter jitter seed. `None` draws fresh jitter on every render.
    pub jitter_seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            data_path: DEFAULT_DATA_PATH.to_string(),
            width: 1200.0,
            height: 900.0,
            popularity_threshold: POPULARITY_THRESHOLD,
            debounce_ms: DEBOUNCE_MS,
            bin_width: 10.0,
            stream: StreamConfig::default(),
            jitter_seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Json(e) => write!(f, "invalid config JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("config: loaded {}", path.as_ref().display());
        Ok(config)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Popularity bins over [0, 100].
    pub fn bin_spec(&self) -> BinSpec {
        BinSpec {
            width: self.bin_width,
            ..BinSpec::default()
        }
    }
}
