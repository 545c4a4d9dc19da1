use anyhow::Result;
use clap::Args;

use crate::source::ConfigSource;

#[derive(Args)]
pub struct SamplesArgs {
    #[command(flatten)]
    source: ConfigSource,
}

impl SamplesArgs {
    pub fn run(self) -> Result<()> {
        let config = self.source.load()?;
        if config.samples.is_empty() {
            println!("no sample frames in configuration");
        }
        for (index, sample) in config.samples.iter().enumerate() {
            println!("{:>2}. {sample}", index + 1);
        }
        Ok(())
    }
}
