//! Jenks natural breaks binding.

use crate::common::map_engine_err;
use hexstyle::{compute_breaks, spawn_breaks};
use pyo3::prelude::*;
use std::time::Duration;

/// Jenks natural breaks of `values` into `n_classes` classes.
///
/// Returns ascending boundaries from min to max. With `timeout_ms`, raises
/// `TimeoutError` if the solve takes longer.
#[pyfunction]
#[pyo3(signature = (values, n_classes = 5, timeout_ms = None))]
pub fn jenks_breaks(
    py: Python<'_>,
    values: Vec<f64>,
    n_classes: usize,
    timeout_ms: Option<u64>,
) -> PyResult<Vec<f64>> {
    let breaks = py.allow_threads(|| match timeout_ms {
        Some(ms) => spawn_breaks(values, n_classes).wait_timeout(Duration::from_millis(ms)),
        None => compute_breaks(&values, n_classes),
    });
    breaks.map(|b| b.into_vec()).map_err(map_engine_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(jenks_breaks, m)?)?;
    Ok(())
}
