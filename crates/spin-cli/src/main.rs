use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    decode::{self, DecodeArgs},
    enumerate::{self, EnumerateArgs},
    parse::{self, ParseArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "spin-sim", about = "One-dimensional binary spin lattice toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Materialize the configuration addressed by a decimal index.
    Decode(DecodeArgs),
    /// Materialize a configuration from a '+'/'-' sign string.
    Parse(ParseArgs),
    /// Enumerate a range of configurations and report magnetization statistics.
    Enumerate(EnumerateArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Decode(args) => decode::run(&args),
        Command::Parse(args) => parse::run(&args),
        Command::Enumerate(args) => enumerate::run(&args),
    }
}
