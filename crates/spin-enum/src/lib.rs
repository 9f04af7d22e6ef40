#![deny(missing_docs)]

//! Exhaustive enumeration of spin configurations with magnetization statistics.

/// YAML configuration schema and defaults.
pub mod config;
/// Magnetization histogram accumulation and the closed-form reference.
pub mod histogram;
/// Enumeration kernel and run summary.
pub mod kernel;

pub use config::{EnumerationConfig, IndexRange};
pub use histogram::{binomial_histogram, MagnetizationHistogram};
pub use kernel::{enumerate, EnumerationSummary, MagnetizationSample};
