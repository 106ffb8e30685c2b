//! Choropleth layer assembly.
//!
//! Turns a feature table (id, value, optional bounds) into everything a map renderer
//! needs for one pass: breaks (solved once), a step legend, per-feature styles, the
//! tooltip field list, and the framing bounds/center. Geometry itself stays with the
//! caller; features are matched back by id.

use serde::Serialize;
use tracing::debug;

use crate::breaks::{compute_breaks, BreakSet};
use crate::palette::Palette;
use crate::style::{StyleCfg, StyleContext, StyleSpec};
use crate::EngineError;

/// Axis-aligned bounds in the caller's coordinates (`x` = lon, `y` = lat for WGS84).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Midpoint as `(lat, lon)`, the order map widgets take.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_y + self.max_y) / 2.0,
            (self.min_x + self.max_x) / 2.0,
        )
    }
}

/// One input row, e.g. a hexagon and its pipe count.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub id: String,
    pub value: f64,
    pub bounds: Option<Bounds>,
}

impl Feature {
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

/// Layer configuration; defaults mirror the hex summary table.
#[derive(Clone, Debug)]
pub struct LayerCfg {
    /// Name of the classified column; drives the legend caption and default tooltip.
    pub value_column: String,
    pub palette: Palette,
    pub classes: usize,
    /// Tooltip fields; `None` shows only the value column.
    pub tooltip_fields: Option<Vec<String>>,
    /// Explicit `(lat, lon)` center; `None` uses the center of the total bounds.
    pub center: Option<(f64, f64)>,
    pub style: StyleCfg,
}

impl Default for LayerCfg {
    fn default() -> Self {
        Self {
            value_column: "pipe_count".to_string(),
            palette: Palette::default(),
            classes: 5,
            tooltip_fields: None,
            center: None,
            style: StyleCfg::default(),
        }
    }
}

/// Step legend: `colors[i]` covers `[index[i], index[i+1])`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub caption: String,
    pub colors: Vec<String>,
    pub index: Vec<f64>,
    pub vmin: f64,
    pub vmax: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyledFeature {
    pub id: String,
    pub value: f64,
    pub style: StyleSpec,
}

/// Renderer-ready output of one pass. Empty input yields no breaks and no legend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyledLayer {
    pub breaks: Option<BreakSet>,
    pub legend: Option<Legend>,
    pub features: Vec<StyledFeature>,
    pub tooltip_fields: Vec<String>,
    pub bounds: Option<Bounds>,
    pub center: Option<(f64, f64)>,
}

/// Classify and style `features` in one pass.
pub fn build_layer(features: &[Feature], cfg: &LayerCfg) -> Result<StyledLayer, EngineError> {
    if features.is_empty() {
        return Ok(empty_layer(features, cfg));
    }
    let values: Vec<f64> = features.iter().map(|f| f.value).collect();
    let breaks = compute_breaks(&values, cfg.classes)?;
    style_layer(features, breaks, cfg)
}

/// Style `features` against breaks solved elsewhere (e.g. by a background `BreaksTask`).
///
/// Opacity and weight are measured against the min/max of the feature values.
pub fn style_layer(
    features: &[Feature],
    breaks: BreakSet,
    cfg: &LayerCfg,
) -> Result<StyledLayer, EngineError> {
    if features.is_empty() {
        return Ok(empty_layer(features, cfg));
    }
    let values: Vec<f64> = features.iter().map(|f| f.value).collect();
    let vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
    let vmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let ctx = StyleContext::new(breaks.clone(), vmin, vmax, cfg.palette.clone(), cfg.style)?;

    let legend = Legend {
        caption: caption_for(&cfg.value_column),
        colors: ctx.interval_colors().into_iter().map(String::from).collect(),
        index: breaks.as_slice().to_vec(),
        vmin,
        vmax,
    };
    let styled = features
        .iter()
        .zip(ctx.style_all(&values))
        .map(|(f, style)| StyledFeature {
            id: f.id.clone(),
            value: f.value,
            style,
        })
        .collect();

    debug!(
        features = features.len(),
        classes = cfg.classes,
        breaks = breaks.len(),
        "layer styled"
    );
    let (bounds, center) = framing(features, cfg);
    Ok(StyledLayer {
        breaks: Some(breaks),
        legend: Some(legend),
        features: styled,
        tooltip_fields: tooltip_fields(cfg),
        bounds,
        center,
    })
}

fn empty_layer(features: &[Feature], cfg: &LayerCfg) -> StyledLayer {
    let (bounds, center) = framing(features, cfg);
    StyledLayer {
        breaks: None,
        legend: None,
        features: Vec::new(),
        tooltip_fields: tooltip_fields(cfg),
        bounds,
        center,
    }
}

fn tooltip_fields(cfg: &LayerCfg) -> Vec<String> {
    cfg.tooltip_fields
        .clone()
        .unwrap_or_else(|| vec![cfg.value_column.clone()])
}

/// Total bounds of the features and the center to open the map at.
fn framing(features: &[Feature], cfg: &LayerCfg) -> (Option<Bounds>, Option<(f64, f64)>) {
    let bounds = features
        .iter()
        .filter_map(|f| f.bounds)
        .reduce(Bounds::union);
    let center = cfg.center.or_else(|| bounds.map(|b| b.center()));
    (bounds, center)
}

/// `pipe_count` -> `Pipe Count`.
pub fn caption_for(column: &str) -> String {
    column
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
