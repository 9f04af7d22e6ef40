use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use spin_core::SpinError;
use spin_lattice::SpinConfiguration;
use tracing::{info, warn};

use crate::config::EnumerationConfig;
use crate::histogram::MagnetizationHistogram;

/// Magnetization observed at a single decimal index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagnetizationSample {
    /// Decimal index of the configuration.
    pub index: u64,
    /// Magnetization of the configuration.
    pub magnetization: i64,
}

/// Result of an enumeration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumerationSummary {
    /// Number of lattice sites.
    pub site_count: u32,
    /// First visited index.
    pub range_start: u64,
    /// One past the last visited index.
    pub range_end: u64,
    /// Number of configurations visited.
    pub configurations: u64,
    /// Magnetization to configuration count.
    pub histogram: BTreeMap<i64, u64>,
    /// Mean magnetization over visited configurations.
    pub mean_magnetization: f64,
    /// Mean absolute magnetization over visited configurations.
    pub mean_abs_magnetization: f64,
    /// Mean squared magnetization over visited configurations.
    pub mean_square_magnetization: f64,
    /// Thinned per-index samples, empty unless tracing was requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<MagnetizationSample>,
}

/// Visits every index in the configured range on a single reused configuration.
pub fn enumerate(config: &EnumerationConfig) -> Result<EnumerationSummary, SpinError> {
    let (start, end) = config.resolved_range()?;
    let mut spins = SpinConfiguration::new(config.site_count)?;
    info!(
        site_count = config.site_count,
        start,
        end,
        "starting enumeration"
    );
    if start == end {
        warn!(site_count = config.site_count, start, "enumeration range is empty");
    }

    let mut histogram = MagnetizationHistogram::default();
    let mut trace = Vec::new();
    for index in start..end {
        spins.init_from_index(index)?;
        let magnetization = spins.magnetization()?;
        histogram.record(magnetization);
        if config.record_trace && (index - start) % config.thinning == 0 {
            trace.push(MagnetizationSample {
                index,
                magnetization,
            });
        }
    }

    info!(
        site_count = config.site_count,
        configurations = histogram.total(),
        "enumeration finished"
    );

    Ok(EnumerationSummary {
        site_count: config.site_count,
        range_start: start,
        range_end: end,
        configurations: histogram.total(),
        mean_magnetization: histogram.mean(),
        mean_abs_magnetization: histogram.mean_abs(),
        mean_square_magnetization: histogram.mean_square(),
        histogram: histogram.into_counts(),
        trace,
    })
}
