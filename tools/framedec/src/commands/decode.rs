use std::{fs, path::PathBuf};

use anyhow::{Result, bail};
use clap::Args;
use framedecode::{DecodeOptions, FrameDecoder, MissingFieldPolicy};

use crate::{format::OutputFormat, source::ConfigSource};

#[derive(Args)]
pub struct DecodeArgs {
    /// Frames as hex strings
    frames: Vec<String>,

    #[command(flatten)]
    source: ConfigSource,

    /// Override the frame sequence (comma separated field names)
    #[arg(long, value_delimiter = ',')]
    order: Option<Vec<String>>,

    /// Read frames from a file, one hex frame per line
    #[arg(short, long, conflicts_with = "frames")]
    input: Option<PathBuf>,

    /// Treat the --input file as a single binary frame
    #[arg(long, requires = "input")]
    binary: bool,

    /// Decode the sample frames from the configuration
    #[arg(long, conflicts_with_all = ["frames", "input"])]
    samples: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Keep fields whose decoded value is zero
    #[arg(long)]
    keep_zero: bool,

    /// Reproduce the original decoder: unsigned int16, big-endian floats,
    /// missing fields skipped
    #[arg(long)]
    legacy: bool,

    /// Skip fields missing from the configuration instead of failing
    #[arg(long)]
    skip_missing: bool,
}

enum FrameInput {
    Hex(String),
    Binary(Vec<u8>),
}

impl DecodeArgs {
    pub fn run(self) -> Result<()> {
        let config = self.source.load()?;
        let inputs = self.inputs(&config.samples)?;
        if inputs.is_empty() {
            bail!("no frames given; pass hex strings, --input or --samples");
        }

        let mut decoder = FrameDecoder::with_options(&config.sensors, self.options());
        match &self.order {
            Some(order) => decoder.set_order(order.iter().map(String::as_str)),
            None => decoder.set_order(config.order.iter().map(String::as_str)),
        }
        if let Some(width) = decoder.frame_width() {
            tracing::info!(width, "expected frame width in bytes");
        }

        let mut failures = 0usize;
        for (index, input) in inputs.iter().enumerate() {
            let result = match input {
                FrameInput::Hex(hex) => decoder.decode(hex),
                FrameInput::Binary(data) => decoder.decode_bytes(data),
            };
            match result {
                Ok(Some(frame)) => {
                    if inputs.len() > 1 && matches!(self.format, OutputFormat::Table) {
                        println!("# frame {}", index + 1);
                    }
                    println!("{}", self.format.render(&frame, &config.sensors)?);
                }
                Ok(None) => tracing::warn!(frame = index + 1, "nothing to decode"),
                Err(err) => {
                    failures += 1;
                    eprintln!("frame {}: {err}", index + 1);
                }
            }
        }

        if failures > 0 {
            bail!("{failures} of {} frame(s) failed to decode", inputs.len());
        }
        Ok(())
    }

    fn options(&self) -> DecodeOptions {
        let mut options = if self.legacy {
            DecodeOptions::legacy()
        } else {
            DecodeOptions::default()
        };
        if self.keep_zero {
            options.omit_zero_values = false;
        }
        if self.skip_missing {
            options.missing_field = MissingFieldPolicy::Skip;
        }
        options
    }

    fn inputs(&self, samples: &[String]) -> Result<Vec<FrameInput>> {
        if self.samples {
            return Ok(samples.iter().cloned().map(FrameInput::Hex).collect());
        }
        match &self.input {
            Some(path) if self.binary => Ok(vec![FrameInput::Binary(fs::read(path)?)]),
            Some(path) => Ok(fs::read_to_string(path)?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(|line| FrameInput::Hex(line.to_string()))
                .collect()),
            None => Ok(self
                .frames
                .iter()
                .map(|frame| FrameInput::Hex(frame.trim().to_string()))
                .collect()),
        }
    }
}
