use std::fmt;

use spin_core::{codes, config_space_size, spin_sign, ErrorInfo, SpinError, SPIN_UP};
use tracing::debug;

use crate::signs;

/// Binary spin configuration on a one-dimensional lattice of `site_count` sites.
///
/// The configuration starts unset and is materialized by either
/// [`init_from_index`](Self::init_from_index) or
/// [`init_from_signs`](Self::init_from_signs). Both initializers may be called
/// any number of times; each call overwrites the previous configuration, so a
/// single value can be reused while enumerating the configuration space.
///
/// Elements are stored as raw bytes where `0` is a down spin and `1` an up
/// spin. Queries validate every element and report anything else as
/// corruption rather than skipping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinConfiguration {
    site_count: u32,
    config_space_size: u64,
    configuration: Option<Vec<u8>>,
}

impl SpinConfiguration {
    /// Creates an unset configuration for a lattice with `site_count` sites.
    pub fn new(site_count: u32) -> Result<Self, SpinError> {
        let config_space_size = config_space_size(site_count)?;
        Ok(Self {
            site_count,
            config_space_size,
            configuration: None,
        })
    }

    /// Returns the number of lattice sites.
    pub fn site_count(&self) -> u32 {
        self.site_count
    }

    /// Returns `2^site_count`, the number of addressable configurations.
    pub fn config_space_size(&self) -> u64 {
        self.config_space_size
    }

    /// Returns the materialized configuration, if any.
    pub fn configuration(&self) -> Option<&[u8]> {
        self.configuration.as_deref()
    }

    /// Returns `true` once an initializer has run.
    pub fn is_set(&self) -> bool {
        self.configuration.is_some()
    }

    /// Materializes the configuration addressed by `index`.
    ///
    /// The result is the binary representation of `index`, most significant
    /// bit first, left-padded with down spins to `site_count` elements.
    /// Reading it back as a base-2 number reproduces `index`.
    pub fn init_from_index(&mut self, index: u64) -> Result<&[u8], SpinError> {
        if index >= self.config_space_size {
            return Err(SpinError::invalid_index(index, self.config_space_size));
        }
        let bit_length = u64::BITS - index.leading_zeros();
        let width = self.site_count.max(bit_length);
        let bits: Vec<u8> = (0..width)
            .rev()
            .map(|shift| ((index >> shift) & 1) as u8)
            .collect();
        debug!(site_count = self.site_count, index, "materialized configuration from index");
        let spins = self.configuration.insert(bits);
        Ok(spins.as_slice())
    }

    /// Materializes the configuration described by a sign string.
    ///
    /// `'+'` maps to an up spin and `'-'` to a down spin; every other
    /// character is skipped. The length of the result is the number of sign
    /// characters and is not checked against `site_count`.
    pub fn init_from_signs(&mut self, sign_string: &str) -> &[u8] {
        let spins = signs::parse(sign_string);
        if spins.len() != self.site_count as usize {
            debug!(
                site_count = self.site_count,
                parsed = spins.len(),
                "sign string length differs from site count"
            );
        }
        self.configuration.insert(spins).as_slice()
    }

    /// Installs a raw configuration without validating its elements.
    ///
    /// Intended for values produced outside the two initializers. Corrupted values are
    /// reported by the queries that consume them.
    pub fn load_raw(&mut self, values: impl Into<Vec<u8>>) -> &[u8] {
        self.configuration.insert(values.into()).as_slice()
    }

    /// Clears the configuration back to the unset state.
    pub fn reset(&mut self) {
        self.configuration = None;
    }

    /// Sums the spins using `+1` for up and `-1` for down.
    pub fn magnetization(&self) -> Result<i64, SpinError> {
        let spins = self.require("magnetization")?;
        spins
            .iter()
            .enumerate()
            .try_fold(0i64, |acc, (position, &value)| {
                spin_sign(value)
                    .map(|sign| acc + sign)
                    .ok_or_else(|| SpinError::invalid_element(position, value))
            })
    }

    /// Number of up spins in the configuration.
    pub fn count_up(&self) -> Result<usize, SpinError> {
        let spins = self.validated("count_up")?;
        Ok(spins.iter().filter(|&&value| value == SPIN_UP).count())
    }

    /// Number of down spins in the configuration.
    pub fn count_down(&self) -> Result<usize, SpinError> {
        let spins = self.validated("count_down")?;
        Ok(spins.len() - spins.iter().filter(|&&value| value == SPIN_UP).count())
    }

    /// Reads the configuration as a base-2 number, most significant bit first.
    pub fn to_index(&self) -> Result<u64, SpinError> {
        let spins = self.validated("to_index")?;
        spins.iter().try_fold(0u64, |acc, &bit| {
            acc.checked_mul(2)
                .map(|shifted| shifted | u64::from(bit))
                .ok_or_else(|| {
                    SpinError::Index(
                        ErrorInfo::new(
                            codes::INDEX_OVERFLOW,
                            "configuration does not fit in a 64-bit index",
                        )
                        .with_context("length", spins.len()),
                    )
                })
        })
    }

    /// Renders the configuration as a sign string.
    pub fn to_sign_string(&self) -> Result<String, SpinError> {
        let spins = self.require("to_sign_string")?;
        signs::render(spins)
    }

    fn require(&self, operation: &str) -> Result<&[u8], SpinError> {
        self.configuration
            .as_deref()
            .ok_or_else(|| SpinError::unset_configuration(operation))
    }

    fn validated(&self, operation: &str) -> Result<&[u8], SpinError> {
        let spins = self.require(operation)?;
        if let Some((position, &value)) = spins
            .iter()
            .enumerate()
            .find(|(_, value)| spin_sign(**value).is_none())
        {
            return Err(SpinError::invalid_element(position, value));
        }
        Ok(spins)
    }
}

impl Default for SpinConfiguration {
    fn default() -> Self {
        Self {
            site_count: 0,
            config_space_size: 1,
            configuration: None,
        }
    }
}

impl fmt::Display for SpinConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpinConfiguration(N={}, ", self.site_count)?;
        match self.configuration.as_deref() {
            None => write!(f, "unset)"),
            Some(spins) => match signs::render(spins) {
                Ok(rendered) => write!(f, "{rendered})"),
                Err(_) => write!(f, "{spins:?})"),
            },
        }
    }
}
