use proptest::prelude::*;
use spin_enum::{binomial_histogram, enumerate, EnumerationConfig, IndexRange};

#[test]
fn full_space_matches_binomial_distribution() {
    for n in 0..=12u32 {
        let summary = enumerate(&EnumerationConfig::full(n)).unwrap();
        assert_eq!(summary.configurations, 1u64 << n);
        assert_eq!(summary.histogram, binomial_histogram(n).unwrap());
        assert_eq!(summary.mean_magnetization, 0.0);
        assert_eq!(summary.mean_square_magnetization, n as f64);
        assert!(summary.trace.is_empty());
    }
}

#[test]
fn empty_lattice_visits_single_configuration() {
    let summary = enumerate(&EnumerationConfig::full(0)).unwrap();
    assert_eq!(summary.configurations, 1);
    assert_eq!(summary.histogram.get(&0), Some(&1));
}

#[test]
fn partial_range_with_thinned_trace() {
    let config = EnumerationConfig {
        site_count: 4,
        range: IndexRange {
            start: 2,
            end: Some(9),
        },
        thinning: 3,
        record_trace: true,
    };
    let summary = enumerate(&config).unwrap();
    assert_eq!(summary.configurations, 7);
    let indices: Vec<u64> = summary.trace.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![2, 5, 8]);
    // 0010 -> -2, 0101 -> 0, 1000 -> -2
    let magnetizations: Vec<i64> = summary.trace.iter().map(|s| s.magnetization).collect();
    assert_eq!(magnetizations, vec![-2, 0, -2]);
}

#[test]
fn empty_range_yields_zeroed_summary() {
    let mut config = EnumerationConfig::full(3);
    config.range = IndexRange {
        start: 5,
        end: Some(5),
    };
    let summary = enumerate(&config).unwrap();
    assert_eq!(summary.configurations, 0);
    assert!(summary.histogram.is_empty());
    assert_eq!(summary.mean_abs_magnetization, 0.0);
}

#[test]
fn summary_serializes_to_json() {
    let summary = enumerate(&EnumerationConfig::full(2)).unwrap();
    let json = serde_json::to_string_pretty(&summary).unwrap();
    let decoded: spin_enum::EnumerationSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, summary);
}

proptest! {
    #[test]
    fn histogram_total_equals_range_length(n in 1u32..=10, a in any::<u64>(), b in any::<u64>()) {
        let size = 1u64 << n;
        let (lo, hi) = {
            let (x, y) = (a % (size + 1), b % (size + 1));
            (x.min(y), x.max(y))
        };
        let mut config = EnumerationConfig::full(n);
        config.range = IndexRange { start: lo, end: Some(hi) };
        let summary = enumerate(&config).unwrap();
        prop_assert_eq!(summary.configurations, hi - lo);
        prop_assert_eq!(summary.histogram.values().sum::<u64>(), hi - lo);
        for m in summary.histogram.keys() {
            prop_assert_eq!((m + n as i64).rem_euclid(2), 0);
        }
    }
}
