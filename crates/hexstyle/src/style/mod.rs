//! Style Mapper: per-feature fill color, opacity and stroke weight.
//!
//! Purpose
//! - Build one read-only `StyleContext` per rendering pass (breaks, global range,
//!   palette) and evaluate it once per feature. Evaluation is pure, so features can be
//!   styled from any number of threads sharing the context.
//!
//! Model
//! - Fill color: step lookup of the value's interval in the `BreakSet`, then the
//!   interval's palette entry `floor(i * P / m)` for `m` intervals and `P` colors.
//!   `m == P` is the identity; `m < P` samples the ramp at even positions; `m > P`
//!   repeats colors (logged once per context).
//! - Opacity and stroke weight grow linearly with the value's position in
//!   `[global_min, global_max]`; a zero-width range pins both to their base.
//!
//! Code cross-refs: `BreakSet::interval_of`, `Palette`, `StyleCfg`.

mod mapper;
mod types;

pub use mapper::{build_style_context, style_for, StyleContext};
pub use types::{StyleCfg, StyleSpec, STROKE_COLOR};
