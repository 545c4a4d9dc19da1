use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;

use crate::source::ConfigSource;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    source: ConfigSource,

    /// Show a single sensor instead of the whole configuration
    #[arg(long)]
    field: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn run(self) -> Result<()> {
        let config = self.source.load()?;
        let text = match &self.field {
            Some(name) => config.sensor_json(name)?,
            None => config.to_json_pretty()?,
        };

        match self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
