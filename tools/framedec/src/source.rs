use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use framedecode::core::FrameConfig;

const WEATHER_STATION: &str = include_str!("../assets/weather_station.json");

/// Where the sensor configuration comes from.
#[derive(Args)]
pub struct ConfigSource {
    /// Frame configuration JSON (the bundled weather station layout if not specified)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ConfigSource {
    pub fn load(&self) -> Result<FrameConfig> {
        match &self.config {
            Some(path) => FrameConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display())),
            None => FrameConfig::from_json_str(WEATHER_STATION)
                .context("bundled weather station config"),
        }
    }
}
