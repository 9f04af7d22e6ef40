use std::error::Error;

use clap::Args;
use serde::Serialize;
use spin_lattice::SpinConfiguration;
use tracing::debug;

use super::print_json;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Sign string; '+' is up, '-' is down, other characters are ignored.
    /// The decimal index is omitted from the report when it does not fit in 64 bits.
    #[arg(long, allow_hyphen_values = true)]
    pub signs: String,
    /// Number of lattice sites (informational; not checked against the string).
    #[arg(long, default_value_t = 0)]
    pub sites: u32,
}

#[derive(Debug, Serialize)]
struct ParseReport {
    site_count: u32,
    configuration: Vec<u8>,
    magnetization: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<u64>,
}

pub fn run(args: &ParseArgs) -> Result<(), Box<dyn Error>> {
    let mut spins = SpinConfiguration::new(args.sites)?;
    let configuration = spins.init_from_signs(&args.signs).to_vec();
    let index = match spins.to_index() {
        Ok(index) => Some(index),
        Err(err) => {
            debug!(error = %err, "omitting decimal index from parse report");
            None
        }
    };
    let report = ParseReport {
        site_count: args.sites,
        configuration,
        magnetization: spins.magnetization()?,
        index,
    };
    print_json(&report)
}
