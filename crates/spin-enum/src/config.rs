use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spin_core::{config_space_size, ErrorInfo, SpinError};

/// YAML-configurable parameters governing an enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Number of lattice sites.
    pub site_count: u32,
    /// Half-open range of decimal indices to visit.
    #[serde(default)]
    pub range: IndexRange,
    /// Interval at which to record trace samples.
    #[serde(default = "default_thinning")]
    pub thinning: u64,
    /// Whether to keep per-index magnetization samples in the summary.
    #[serde(default)]
    pub record_trace: bool,
}

fn default_thinning() -> u64 {
    1
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            site_count: 8,
            range: IndexRange::default(),
            thinning: default_thinning(),
            record_trace: false,
        }
    }
}

/// Index range specification. Missing bounds cover the full configuration space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    /// First index visited.
    #[serde(default)]
    pub start: u64,
    /// One past the last index visited; defaults to `2^site_count`.
    #[serde(default)]
    pub end: Option<u64>,
}

impl EnumerationConfig {
    /// Full-space enumeration of a lattice with `site_count` sites.
    pub fn full(site_count: u32) -> Self {
        Self {
            site_count,
            ..Self::default()
        }
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml_str(contents: &str) -> Result<Self, SpinError> {
        serde_yaml::from_str(contents).map_err(|err| {
            SpinError::Config(ErrorInfo::new("yaml-deserialize", err.to_string()))
        })
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, SpinError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            SpinError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Validates the configuration and resolves the index range to `(start, end)`.
    pub fn resolved_range(&self) -> Result<(u64, u64), SpinError> {
        let size = config_space_size(self.site_count)?;
        if self.thinning == 0 {
            return Err(SpinError::invalid_run_config("thinning must be >= 1"));
        }
        let start = self.range.start;
        let end = self.range.end.unwrap_or(size);
        if end > size {
            return Err(SpinError::Config(
                ErrorInfo::new(
                    spin_core::codes::INVALID_RUN_CONFIG,
                    "range end exceeds the configuration space",
                )
                .with_context("end", end)
                .with_context("config_space_size", size),
            ));
        }
        if start > end {
            return Err(SpinError::Config(
                ErrorInfo::new(
                    spin_core::codes::INVALID_RUN_CONFIG,
                    "range start lies after range end",
                )
                .with_context("start", start)
                .with_context("end", end),
            ));
        }
        Ok((start, end))
    }
}
