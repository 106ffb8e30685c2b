//! Output and configuration types for the Style Mapper.

use serde::Serialize;

/// Stroke color shared by every feature.
pub const STROKE_COLOR: &str = "#555555";

/// Visual weights of the continuous styling channel.
///
/// `fill_opacity = opacity_base + ratio * opacity_span` and
/// `stroke_weight = weight_base + ratio * weight_span`, with `ratio` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleCfg {
    pub opacity_base: f64,
    pub opacity_span: f64,
    pub weight_base: f64,
    pub weight_span: f64,
    pub stroke_color: &'static str,
}

impl Default for StyleCfg {
    fn default() -> Self {
        Self {
            opacity_base: 0.4,
            opacity_span: 0.5,
            weight_base: 0.3,
            weight_span: 1.2,
            stroke_color: STROKE_COLOR,
        }
    }
}

/// Style attributes for one feature, named the way map renderers expect them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleSpec {
    #[serde(rename = "fillColor")]
    pub fill_color: String,
    #[serde(rename = "color")]
    pub stroke_color: String,
    #[serde(rename = "weight")]
    pub stroke_weight: f64,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: f64,
}
