use std::collections::BTreeMap;

use spin_core::{config_space_size, SpinError};

/// Running magnetization statistics over visited configurations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MagnetizationHistogram {
    counts: BTreeMap<i64, u64>,
    total: u64,
    sum: i128,
    sum_abs: u128,
    sum_square: u128,
}

impl MagnetizationHistogram {
    /// Records one configuration with magnetization `m`.
    pub fn record(&mut self, m: i64) {
        *self.counts.entry(m).or_insert(0) += 1;
        self.total += 1;
        self.sum += i128::from(m);
        self.sum_abs += u128::from(m.unsigned_abs());
        self.sum_square += u128::from(m.unsigned_abs()) * u128::from(m.unsigned_abs());
    }

    /// Number of configurations per magnetization value.
    pub fn counts(&self) -> &BTreeMap<i64, u64> {
        &self.counts
    }

    /// Consumes the histogram, returning the per-magnetization counts.
    pub fn into_counts(self) -> BTreeMap<i64, u64> {
        self.counts
    }

    /// Number of recorded configurations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Mean magnetization, `0.0` when empty.
    pub fn mean(&self) -> f64 {
        self.average(self.sum as f64)
    }

    /// Mean absolute magnetization, `0.0` when empty.
    pub fn mean_abs(&self) -> f64 {
        self.average(self.sum_abs as f64)
    }

    /// Mean squared magnetization, `0.0` when empty.
    pub fn mean_square(&self) -> f64 {
        self.average(self.sum_square as f64)
    }

    fn average(&self, sum: f64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            sum / self.total as f64
        }
    }
}

/// Closed-form histogram of the full configuration space of `site_count` sites.
///
/// A configuration with `k` up spins has magnetization `2k - N`, and there
/// are `C(N, k)` of them. Fails for lattices whose configuration space does
/// not fit in a `u64`, which also bounds every count.
pub fn binomial_histogram(site_count: u32) -> Result<BTreeMap<i64, u64>, SpinError> {
    config_space_size(site_count)?;
    let n = u128::from(site_count);
    let mut counts = BTreeMap::new();
    let mut coefficient: u128 = 1;
    for k in 0..=n {
        counts.insert(2 * k as i64 - n as i64, coefficient as u64);
        coefficient = coefficient * (n - k) / (k + 1);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_row_four() {
        let expected: BTreeMap<i64, u64> =
            [(-4, 1), (-2, 4), (0, 6), (2, 4), (4, 1)].into_iter().collect();
        assert_eq!(binomial_histogram(4).unwrap(), expected);
        assert_eq!(binomial_histogram(0).unwrap(), [(0, 1)].into_iter().collect());
    }

    #[test]
    fn largest_lattice_counts_are_exact() {
        let counts = binomial_histogram(63).unwrap();
        assert_eq!(counts.len(), 64);
        assert_eq!(counts.get(&-63), Some(&1));
        // C(63, 31)
        assert_eq!(counts.get(&-1), Some(&916_312_070_471_295_267));
        assert_eq!(counts.values().map(|&c| u128::from(c)).sum::<u128>(), 1u128 << 63);
    }

    #[test]
    fn oversized_lattice_is_rejected() {
        for site_count in [64, 70, 130, u32::MAX] {
            let err = binomial_histogram(site_count).unwrap_err();
            assert_eq!(err.code(), "invalid-site-count");
        }
    }

    #[test]
    fn moments_of_small_sample() {
        let mut histogram = MagnetizationHistogram::default();
        for m in [-2, 0, 0, 2] {
            histogram.record(m);
        }
        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram.counts().get(&0), Some(&2));
        assert_eq!(histogram.counts().values().sum::<u64>(), histogram.total());
        assert_eq!(histogram.mean(), 0.0);
        assert_eq!(histogram.mean_abs(), 1.0);
        assert_eq!(histogram.mean_square(), 2.0);
        assert_eq!(MagnetizationHistogram::default().mean(), 0.0);
    }
}
