//! Palette and per-feature style bindings.

use crate::common::map_engine_err;
use hexstyle::{build_style_context, compute_breaks, EngineError, Palette, PaletteName};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Colors of a built-in palette; unknown names fall back to `grey_blue`.
#[pyfunction]
pub fn palette(name: &str) -> Vec<&'static str> {
    name.parse::<PaletteName>()
        .unwrap_or_default()
        .colors()
        .to_vec()
}

#[pyfunction]
pub fn palette_names() -> Vec<&'static str> {
    PaletteName::ALL.iter().map(|p| p.as_str()).collect()
}

/// Classify `values` and return one style dict per value, in input order.
///
/// Keys: `fillColor`, `color`, `weight`, `fillOpacity`.
#[pyfunction]
#[pyo3(signature = (values, palette = "grey_blue", n_classes = 5))]
pub fn style_for_values(
    py: Python<'_>,
    values: Vec<f64>,
    palette: &str,
    n_classes: usize,
) -> PyResult<Vec<Py<PyDict>>> {
    let palette = Palette::by_name(palette);
    let styles = py
        .allow_threads(|| -> Result<_, EngineError> {
            let breaks = compute_breaks(&values, n_classes)?;
            let (min, max) = (breaks.min(), breaks.max());
            let ctx = build_style_context(breaks, min, max, palette)?;
            Ok(ctx.style_all(&values))
        })
        .map_err(map_engine_err)?;

    styles
        .into_iter()
        .map(|s| {
            let d = PyDict::new_bound(py);
            d.set_item("fillColor", s.fill_color)?;
            d.set_item("color", s.stroke_color)?;
            d.set_item("weight", s.stroke_weight)?;
            d.set_item("fillOpacity", s.fill_opacity)?;
            Ok(d.unbind())
        })
        .collect()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(palette, m)?)?;
    m.add_function(wrap_pyfunction!(palette_names, m)?)?;
    m.add_function(wrap_pyfunction!(style_for_values, m)?)?;
    Ok(())
}
