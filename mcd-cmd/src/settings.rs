//! Settings resolution: defaults, then the JSON file, then command-line flags.

use anyhow::Context;
use mcd_chart::DashboardConfig;
use mcd_data::bar::MAX_BINS;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct Overrides {
    pub data: Option<PathBuf>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub seed: Option<u64>,
}

pub fn resolve(
    config_path: Option<&Path>,
    overrides: Overrides,
) -> anyhow::Result<DashboardConfig> {
    let mut config = match config_path {
        Some(path) => DashboardConfig::from_json_path(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    if let Some(data) = overrides.data {
        config.data_path = data.to_string_lossy().into_owned();
    }
    if let Some(width) = overrides.width {
        config.width = width;
    }
    if let Some(height) = overrides.height {
        config.height = height;
    }
    if overrides.seed.is_some() {
        config.jitter_seed = overrides.seed;
    }

    let valid = |v: f64| v.is_finite() && v >= 0.0;
    anyhow::ensure!(
        valid(config.width) && valid(config.height),
        "width and height must be non-negative numbers, got {}x{}",
        config.width,
        config.height
    );
    anyhow::ensure!(
        config.bin_spec().is_valid(),
        "bin_width must be positive and give at most {} bins over [0, 100], got {}",
        MAX_BINS,
        config.bin_width
    );
    Ok(config)
}
