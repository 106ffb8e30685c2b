use super::jenks::{solve_tables, validate_series};
use super::*;
use crate::EngineError;
use proptest::prelude::*;

fn breaks_of(values: &[f64], k: usize) -> Vec<f64> {
    compute_breaks(values, k).unwrap().into_vec()
}

fn sse(xs: &[f64]) -> f64 {
    let mean = xs.iter().sum::<f64>() / xs.len() as f64;
    xs.iter().map(|x| (x - mean) * (x - mean)).sum()
}

/// Least SSE over all partitions of `sorted` into exactly `k` non-empty runs.
fn brute_force_min_sse(sorted: &[f64], k: usize) -> f64 {
    if k == 1 {
        return sse(sorted);
    }
    (1..=sorted.len() + 1 - k)
        .map(|cut| sse(&sorted[..cut]) + brute_force_min_sse(&sorted[cut..], k - 1))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn three_clusters_are_separated() {
    let values = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 50.0];
    assert_eq!(breaks_of(&values, 3), vec![1.0, 3.0, 12.0, 50.0]);
}

#[test]
fn input_order_does_not_matter() {
    let shuffled = [50.0, 11.0, 1.0, 12.0, 3.0, 10.0, 2.0];
    assert_eq!(breaks_of(&shuffled, 3), vec![1.0, 3.0, 12.0, 50.0]);
}

#[test]
fn passthrough_returns_sorted_distinct_values() {
    assert_eq!(breaks_of(&[5.0, 5.0, 5.0, 5.0], 5), vec![5.0]);
    assert_eq!(breaks_of(&[9.0, 2.0, 4.0], 3), vec![2.0, 4.0, 9.0]);
    assert_eq!(breaks_of(&[3.5], 1), vec![3.5]);
}

#[test]
fn single_class_spans_min_to_max() {
    assert_eq!(breaks_of(&[1.0, 2.0, 3.0, 4.0, 5.0], 1), vec![1.0, 5.0]);
}

#[test]
fn constant_series_collapses_to_one_break() {
    assert_eq!(breaks_of(&[7.0; 6], 3), vec![7.0]);
}

#[test]
fn golden_values_lock_tie_breaking() {
    // Equal-cost splits: {1,1}{2,2,3,3} vs {1,1,2,2}{3,3}; the shorter final class wins.
    assert_eq!(breaks_of(&[1.0, 1.0, 2.0, 2.0, 3.0, 3.0], 2), vec![1.0, 2.0, 3.0]);
    assert_eq!(
        breaks_of(&[0.0, 5.0, 3.0, 2.0, 5.0, 1.0, 4.0], 5),
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
    );
    assert_eq!(breaks_of(&[1.0, 2.0, 3.0, 4.0], 2), vec![1.0, 2.0, 4.0]);
    assert_eq!(
        breaks_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3),
        vec![1.0, 2.0, 4.0, 6.0]
    );
    assert_eq!(
        breaks_of(&[0.0, 0.0, 1.0, 1.0, 1.0, 9.0, 9.0, 20.0], 3),
        vec![0.0, 1.0, 9.0, 20.0]
    );
    assert_eq!(
        breaks_of(&[4.0, 1.0, 9.0, 1.0, 4.0, 9.0, 16.0], 3),
        vec![1.0, 4.0, 9.0, 16.0]
    );
    // Duplicate-heavy data collapses below k+1 boundaries.
    assert_eq!(breaks_of(&[2.0, 2.0, 2.0, 8.0, 8.0, 8.0, 8.0], 4), vec![2.0, 8.0]);
    assert_eq!(breaks_of(&[0.0, 0.0, 0.0, 0.0, 1.0], 2), vec![0.0, 1.0]);
}

#[test]
fn evenly_spaced_decades() {
    let values: Vec<f64> = (1..=10).map(|v| (v * 10) as f64).collect();
    assert_eq!(
        breaks_of(&values, 5),
        vec![10.0, 20.0, 40.0, 60.0, 80.0, 100.0]
    );
}

#[test]
fn rejects_invalid_input() {
    assert!(matches!(
        compute_breaks(&[], 3),
        Err(EngineError::InvalidInput { .. })
    ));
    assert!(matches!(
        compute_breaks(&[1.0, 2.0], 0),
        Err(EngineError::InvalidInput { .. })
    ));
    let err = compute_breaks(&[1.0, f64::NAN, 3.0], 2).unwrap_err();
    assert!(err.to_string().contains("index 1"), "{err}");
    assert!(validate_series(&[0.0, f64::INFINITY]).is_err());
}

#[test]
fn dp_matches_brute_force_on_small_series() {
    let series: [&[f64]; 4] = [
        &[1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 50.0],
        &[0.0, 0.0, 1.0, 4.0, 4.0, 5.0, 9.0, 30.0],
        &[3.0, 3.0, 3.0, 3.0, 3.0],
        &[1.0, 100.0, 101.0, 102.0, 250.0, 251.0],
    ];
    for values in series {
        for k in 1..values.len() {
            let tables = solve_tables(values, k);
            let dp = tables.min_variance[(k, values.len())];
            let brute = brute_force_min_sse(values, k);
            assert!(
                (dp - brute).abs() < 1e-9,
                "k={k} values={values:?}: dp={dp} brute={brute}"
            );
        }
    }
}

#[test]
fn break_set_rejects_decreasing_bounds() {
    assert!(BreakSet::new(vec![0.0, 10.0, 5.0]).is_err());
    assert!(BreakSet::new(vec![]).is_err());
    assert!(BreakSet::new(vec![0.0, f64::NAN]).is_err());
    // Repeated boundaries are accepted (non-decreasing).
    assert!(BreakSet::new(vec![0.0, 10.0, 10.0, 20.0]).is_ok());
}

#[test]
fn interval_lookup_is_half_open_with_closed_tail() {
    let b = BreakSet::new(vec![0.0, 10.0, 50.0, 100.0]).unwrap();
    assert_eq!(b.intervals(), 3);
    assert_eq!(b.interval_of(-5.0), 0);
    assert_eq!(b.interval_of(0.0), 0);
    assert_eq!(b.interval_of(9.999), 0);
    assert_eq!(b.interval_of(10.0), 1);
    assert_eq!(b.interval_of(50.0), 2);
    assert_eq!(b.interval_of(75.0), 2);
    assert_eq!(b.interval_of(100.0), 2);
    assert_eq!(b.interval_of(1e9), 2);
    assert_eq!(b.interval_of(f64::NAN), 0);

    let single = BreakSet::new(vec![5.0]).unwrap();
    assert_eq!(single.intervals(), 1);
    assert_eq!(single.interval_of(5.0), 0);
    assert_eq!(single.interval_of(6.0), 0);
}

#[test]
fn break_set_serializes_as_plain_array() {
    let b = BreakSet::new(vec![1.0, 3.0, 12.0]).unwrap();
    assert_eq!(serde_json::to_string(&b).unwrap(), "[1.0,3.0,12.0]");
}

fn series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0u32..500, 1..40).prop_map(|v| v.into_iter().map(f64::from).collect())
}

proptest! {
    #[test]
    fn breaks_frame_the_series(values in series(), k in 1usize..8) {
        let b = breaks_of(&values, k);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(b[0], min);
        prop_assert_eq!(*b.last().unwrap(), max);
        prop_assert!(b.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(b.len() <= k + 1);
        prop_assert!(values.iter().all(|v| *v >= b[0] && *v <= b[b.len() - 1]));
    }

    #[test]
    fn small_series_pass_through(values in series(), extra in 0usize..4) {
        let k = values.len() + extra;
        let mut expected = values.clone();
        expected.sort_by(f64::total_cmp);
        expected.dedup();
        prop_assert_eq!(breaks_of(&values, k), expected);
    }

    #[test]
    fn solve_is_deterministic(values in series(), k in 1usize..8) {
        prop_assert_eq!(breaks_of(&values, k), breaks_of(&values, k));
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(breaks_of(&values, k), breaks_of(&reversed, k));
    }

    #[test]
    fn every_break_is_a_data_value(values in series(), k in 1usize..8) {
        for b in breaks_of(&values, k) {
            prop_assert!(values.contains(&b));
        }
    }
}
