//! PyO3 bindings for the `hexstyle` engine.
//!
//! Notes
//! - Keep bindings thin: plain lists in, plain lists/dicts out. Dataframe and map
//!   plumbing stays on the Python side.
//! - The breaks solve releases the GIL so dashboards stay responsive on large areas.

use pyo3::prelude::*;

mod breaks;
mod common;
mod style;

#[pymodule]
fn hexstyle_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", hexstyle::VERSION)?;
    breaks::register(m)?;
    style::register(m)?;
    Ok(())
}
