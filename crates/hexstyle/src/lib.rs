//! Classification and styling engine for hexagon choropleths.
//!
//! Pipeline
//! - `breaks`: Jenks natural breaks over a value column (one solve per dataset).
//! - `style`: step-color lookup plus continuous opacity/stroke weights (one call per
//!   feature, shared read-only context).
//! - `palette`: the closed set of built-in palettes and validated custom ones.
//! - `layer`: assembles a renderer-ready layer (breaks, legend, per-feature styles).
//! - `task`: runs the breaks solve on a worker thread with an optional deadline.
//!
//! The engine never fetches, caches, or projects data; callers hand it plain values.

pub mod breaks;
mod error;
pub mod layer;
pub mod palette;
pub mod style;
pub mod task;

pub use breaks::{compute_breaks, BreakSet};
pub use error::EngineError;
pub use layer::{
    build_layer, style_layer, Bounds, Feature, LayerCfg, Legend, StyledFeature, StyledLayer,
};
pub use palette::{Palette, PaletteName};
pub use style::{build_style_context, style_for, StyleCfg, StyleContext, StyleSpec};
pub use task::{spawn_breaks, BreaksTask};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::breaks::{compute_breaks, BreakSet};
    pub use crate::layer::{build_layer, Feature, LayerCfg, StyledLayer};
    pub use crate::palette::{Palette, PaletteName};
    pub use crate::style::{build_style_context, style_for, StyleContext, StyleSpec};
    pub use crate::EngineError;
}
