use tracing::warn;

use super::types::{StyleCfg, StyleSpec};
use crate::breaks::BreakSet;
use crate::palette::Palette;
use crate::EngineError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Read-only styling state for one rendering pass.
#[derive(Clone, Debug)]
pub struct StyleContext {
    breaks: BreakSet,
    global_min: f64,
    global_max: f64,
    palette: Palette,
    /// Palette index for each step interval.
    interval_colors: Vec<usize>,
    cfg: StyleCfg,
}

impl StyleContext {
    pub fn new(
        breaks: BreakSet,
        global_min: f64,
        global_max: f64,
        palette: Palette,
        cfg: StyleCfg,
    ) -> Result<Self, EngineError> {
        if !global_min.is_finite() || !global_max.is_finite() {
            return Err(EngineError::invalid(format!(
                "value range must be finite, got [{global_min}, {global_max}]"
            )));
        }
        if global_min > global_max {
            return Err(EngineError::invalid(format!(
                "value range is inverted: min {global_min} > max {global_max}"
            )));
        }
        if palette.is_empty() {
            return Err(EngineError::invalid("palette has no colors"));
        }

        let intervals = breaks.intervals();
        let colors = palette.len();
        if colors < intervals {
            warn!(
                intervals,
                colors, "palette shorter than class count; repeating colors"
            );
        }
        let interval_colors = (0..intervals).map(|i| i * colors / intervals).collect();

        Ok(Self {
            breaks,
            global_min,
            global_max,
            palette,
            interval_colors,
            cfg,
        })
    }

    #[inline]
    pub fn breaks(&self) -> &BreakSet {
        &self.breaks
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn global_min(&self) -> f64 {
        self.global_min
    }

    #[inline]
    pub fn global_max(&self) -> f64 {
        self.global_max
    }

    #[inline]
    pub fn cfg(&self) -> StyleCfg {
        self.cfg
    }

    /// Position of `value` within `[global_min, global_max]`, clamped to `[0, 1]`.
    ///
    /// Zero when the range has no width or the value is NaN.
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.global_max - self.global_min;
        if span <= 0.0 || value.is_nan() {
            return 0.0;
        }
        ((value - self.global_min) / span).clamp(0.0, 1.0)
    }

    /// Step color of the interval containing `value`.
    ///
    /// Values below `global_min` (and NaN) take the first interval, values above
    /// `global_max` the last.
    pub fn fill_color(&self, value: f64) -> &str {
        let interval = if value.is_nan() || value < self.global_min {
            0
        } else if value > self.global_max {
            self.breaks.intervals() - 1
        } else {
            self.breaks.interval_of(value)
        };
        self.interval_color(interval)
    }

    /// Colors of every interval in ascending order (legend swatches).
    pub fn interval_colors(&self) -> Vec<&str> {
        (0..self.interval_colors.len())
            .map(|i| self.interval_color(i))
            .collect()
    }

    fn interval_color(&self, interval: usize) -> &str {
        // Indices are computed below `palette.len()` in `new`.
        self.palette
            .get(self.interval_colors[interval])
            .unwrap_or_default()
    }

    pub fn style(&self, value: f64) -> StyleSpec {
        let ratio = self.ratio(value);
        StyleSpec {
            fill_color: self.fill_color(value).to_string(),
            stroke_color: self.cfg.stroke_color.to_string(),
            stroke_weight: self.cfg.weight_base + ratio * self.cfg.weight_span,
            fill_opacity: self.cfg.opacity_base + ratio * self.cfg.opacity_span,
        }
    }

    /// Style every value, in order.
    #[cfg(feature = "parallel")]
    pub fn style_all(&self, values: &[f64]) -> Vec<StyleSpec> {
        values.par_iter().map(|&v| self.style(v)).collect()
    }

    /// Style every value, in order.
    #[cfg(not(feature = "parallel"))]
    pub fn style_all(&self, values: &[f64]) -> Vec<StyleSpec> {
        values.iter().map(|&v| self.style(v)).collect()
    }
}

/// Build a context with the default visual weights.
pub fn build_style_context(
    breaks: BreakSet,
    global_min: f64,
    global_max: f64,
    palette: Palette,
) -> Result<StyleContext, EngineError> {
    StyleContext::new(breaks, global_min, global_max, palette, StyleCfg::default())
}

/// Style one feature value against a shared context.
#[inline]
pub fn style_for(ctx: &StyleContext, value: f64) -> StyleSpec {
    ctx.style(value)
}
