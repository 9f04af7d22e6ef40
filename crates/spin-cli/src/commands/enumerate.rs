use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use spin_enum::{enumerate, EnumerationConfig};
use tracing::info;

use super::{print_json, write_json};

#[derive(Args, Debug)]
pub struct EnumerateArgs {
    /// YAML configuration describing the enumeration run.
    #[arg(long, conflicts_with = "sites", required_unless_present = "sites")]
    pub config: Option<PathBuf>,
    /// Enumerate the full configuration space of this many sites.
    #[arg(long)]
    pub sites: Option<u32>,
    /// Write the summary to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &EnumerateArgs) -> Result<(), Box<dyn Error>> {
    let config = match (&args.config, args.sites) {
        (Some(path), _) => EnumerationConfig::load(path)?,
        (None, Some(sites)) => EnumerationConfig::full(sites),
        (None, None) => return Err("either --config or --sites is required".into()),
    };
    let summary = enumerate(&config)?;
    match &args.out {
        Some(path) => {
            write_json(path, &summary)?;
            info!(path = %path.display(), "wrote enumeration summary");
            Ok(())
        }
        None => print_json(&summary),
    }
}
