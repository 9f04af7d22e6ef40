#![deny(missing_docs)]
#![doc = "Shared error taxonomy and spin encoding for one-dimensional binary spin lattices."]

pub mod errors;

pub use errors::{codes, ErrorInfo, SpinError};

/// Encoded value of a down spin.
pub const SPIN_DOWN: u8 = 0;

/// Encoded value of an up spin.
pub const SPIN_UP: u8 = 1;

/// Sign-string character for an up spin.
pub const UP_CHAR: char = '+';

/// Sign-string character for a down spin.
pub const DOWN_CHAR: char = '-';

/// Largest site count whose configuration space `2^N` fits in a `u64`.
pub const MAX_SITE_COUNT: u32 = u64::BITS - 1;

/// Returns `2^site_count`, or an error if it does not fit in a `u64`.
pub fn config_space_size(site_count: u32) -> Result<u64, SpinError> {
    if site_count > MAX_SITE_COUNT {
        return Err(SpinError::invalid_site_count(site_count, MAX_SITE_COUNT));
    }
    Ok(1u64 << site_count)
}

/// Contribution of a single encoded spin to the magnetization.
///
/// Returns `None` for values outside `{0, 1}`.
#[inline]
pub fn spin_sign(value: u8) -> Option<i64> {
    match value {
        SPIN_UP => Some(1),
        SPIN_DOWN => Some(-1),
        _ => None,
    }
}
