//! Dynamic program and backtrack for Jenks natural breaks.
//!
//! Tables are `(k+1) x (n+1)` column-major `DMatrix`es indexed `(classes, prefix)`, so
//! all class counts for one prefix length sit contiguously while the inner loop sweeps
//! them. Row/column 0 are unused padding that keeps the recurrence 1-based.

use std::time::Instant;

use nalgebra::DMatrix;
use tracing::debug;

use super::types::BreakSet;
use crate::EngineError;

/// Filled DP tables for a sorted series.
pub(super) struct JenksTables {
    /// `min_variance[(j, i)]`: least total within-class SSE of the first `i` values in `j` classes.
    pub(super) min_variance: DMatrix<f64>,
    /// `class_start[(j, i)]`: 1-based start of the `j`-th class in that optimum.
    pub(super) class_start: DMatrix<usize>,
}

/// Compute Jenks natural breaks for `values` with `k` classes.
///
/// Returns at most `k+1` strictly increasing boundaries from `min(values)` to
/// `max(values)`. Runs in O(n² k) time and O(n k) memory.
pub fn compute_breaks(values: &[f64], k: usize) -> Result<BreakSet, EngineError> {
    validate_series(values)?;
    if k < 1 {
        return Err(EngineError::invalid("class count must be at least 1"));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();

    if n <= k {
        sorted.dedup();
        return Ok(BreakSet::from_sorted(sorted));
    }

    let started = Instant::now();
    let tables = solve_tables(&sorted, k);
    let mut breaks = backtrack(&sorted, &tables, k);
    breaks.sort_by(f64::total_cmp);
    breaks.dedup();
    debug!(
        n,
        k,
        breaks = breaks.len(),
        sse = tables.min_variance[(k, n)],
        elapsed_us = started.elapsed().as_micros() as u64,
        "jenks breaks"
    );
    Ok(BreakSet::from_sorted(breaks))
}

pub(super) fn validate_series(values: &[f64]) -> Result<(), EngineError> {
    if values.is_empty() {
        return Err(EngineError::invalid("value series is empty"));
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(EngineError::invalid(format!(
            "value at index {idx} is not finite ({})",
            values[idx]
        ))),
        None => Ok(()),
    }
}

/// Fill the DP tables for an ascending `sorted` series and `k >= 1` classes.
pub(super) fn solve_tables(sorted: &[f64], k: usize) -> JenksTables {
    let n = sorted.len();
    debug_assert!(n >= 1 && k >= 1, "solve_tables needs a non-empty series");
    let mut min_variance = DMatrix::from_element(k + 1, n + 1, f64::INFINITY);
    let mut class_start = DMatrix::from_element(k + 1, n + 1, 0usize);
    min_variance[(1, 1)] = 0.0;
    class_start[(1, 1)] = 1;

    for i in 2..=n {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        // Grow the trailing class [start..=i] leftwards; running sums keep each step O(1).
        for start in (1..=i).rev() {
            let x = sorted[start - 1];
            sum_sq += x * x;
            sum += x;
            let count = (i - start + 1) as f64;
            let variance = sum_sq - (sum * sum) / count;
            if start > 1 {
                // j classes need at least j values before the trailing class ends.
                for j in 2..=k.min(start) {
                    let candidate = variance + min_variance[(j - 1, start - 1)];
                    if candidate < min_variance[(j, i)] {
                        min_variance[(j, i)] = candidate;
                        class_start[(j, i)] = start;
                    }
                }
            }
        }
        class_start[(1, i)] = 1;
        min_variance[(1, i)] = sum_sq - (sum * sum) / i as f64;
    }

    JenksTables {
        min_variance,
        class_start,
    }
}

/// Walk class starts back from `(k, n)`, emitting the upper limit of each class.
///
/// Output is unsorted and may contain duplicates: `[max, upper(k-1), .., upper(1), min]`.
pub(super) fn backtrack(sorted: &[f64], tables: &JenksTables, k: usize) -> Vec<f64> {
    let n = sorted.len();
    let mut breaks = Vec::with_capacity(k + 1);
    breaks.push(sorted[n - 1]);
    let mut end = n;
    for j in (2..=k).rev() {
        // Every cell with end >= j is finite, so its class start is >= j >= 2.
        let start = tables.class_start[(j, end)];
        debug_assert!(start >= 2, "class {j} ending at {end} has no start");
        breaks.push(sorted[start - 2]);
        end = start - 1;
    }
    breaks.push(sorted[0]);
    breaks
}
