mod commands;
mod format;
mod logging;
mod source;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{
    config::ConfigArgs, decode::DecodeArgs, order::OrderArgs, samples::SamplesArgs,
};

#[derive(Parser)]
#[command(name = "framedec", about = "Decode fixed-layout telemetry frames")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode hex frames into named values
    Decode(DecodeArgs),
    /// Print the sensor configuration as JSON
    Config(ConfigArgs),
    /// Print the frame sequence with offsets
    Order(OrderArgs),
    /// List the sample frames shipped with the configuration
    Samples(SamplesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Decode(args) => args.run(),
        Commands::Config(args) => args.run(),
        Commands::Order(args) => args.run(),
        Commands::Samples(args) => args.run(),
    }
}
