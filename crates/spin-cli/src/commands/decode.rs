use std::error::Error;

use clap::Args;
use serde::Serialize;
use spin_lattice::SpinConfiguration;

use super::print_json;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Number of lattice sites.
    #[arg(long)]
    pub sites: u32,
    /// Decimal index in [0, 2^sites).
    #[arg(long)]
    pub index: u64,
}

#[derive(Debug, Serialize)]
struct DecodeReport {
    site_count: u32,
    index: u64,
    configuration: Vec<u8>,
    signs: String,
    magnetization: i64,
}

pub fn run(args: &DecodeArgs) -> Result<(), Box<dyn Error>> {
    let mut spins = SpinConfiguration::new(args.sites)?;
    let configuration = spins.init_from_index(args.index)?.to_vec();
    let report = DecodeReport {
        site_count: args.sites,
        index: args.index,
        configuration,
        signs: spins.to_sign_string()?,
        magnetization: spins.magnetization()?,
    };
    print_json(&report)
}
