//! `BreakSet`: validated, ascending class boundaries.

use serde::Serialize;

use crate::EngineError;

/// Ascending class boundaries; consecutive pairs delimit step-color intervals.
///
/// Invariants:
/// - Non-empty, finite, non-decreasing.
/// - Sets produced by `compute_breaks` are strictly increasing, start at the series
///   minimum and end at its maximum.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BreakSet(Vec<f64>);

impl BreakSet {
    /// Validate caller-supplied boundaries (e.g. a legend reused across passes).
    pub fn new(bounds: Vec<f64>) -> Result<Self, EngineError> {
        if bounds.is_empty() {
            return Err(EngineError::invalid("break set is empty"));
        }
        if let Some((idx, b)) = bounds.iter().enumerate().find(|(_, b)| !b.is_finite()) {
            return Err(EngineError::invalid(format!(
                "break at index {idx} is not finite ({b})"
            )));
        }
        if let Some(idx) = bounds.windows(2).position(|w| w[1] < w[0]) {
            return Err(EngineError::invalid(format!(
                "breaks are not non-decreasing at index {}: {} > {}",
                idx + 1,
                bounds[idx],
                bounds[idx + 1]
            )));
        }
        Ok(Self(bounds))
    }

    /// Wrap boundaries the solver already sorted and de-duplicated.
    pub(crate) fn from_sorted(bounds: Vec<f64>) -> Self {
        debug_assert!(!bounds.is_empty());
        debug_assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        Self(bounds)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Number of step intervals. A single boundary is one closed, zero-width interval.
    #[inline]
    pub fn intervals(&self) -> usize {
        self.0.len().saturating_sub(1).max(1)
    }

    /// Index of the interval containing `value`.
    ///
    /// Intervals are `[b[i], b[i+1])` except the last, which is closed. Values below
    /// the first boundary (and NaN) land in the first interval, values above the last
    /// boundary in the last one.
    pub fn interval_of(&self, value: f64) -> usize {
        let last = self.intervals() - 1;
        if value.is_nan() || value <= self.min() {
            return 0;
        }
        if value >= self.max() {
            return last;
        }
        // min < value < max, so at least one and at most len-1 boundaries are <= value.
        (self.0.partition_point(|&b| b <= value) - 1).min(last)
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for BreakSet {
    type Error = EngineError;

    fn try_from(bounds: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(bounds)
    }
}

impl AsRef<[f64]> for BreakSet {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
