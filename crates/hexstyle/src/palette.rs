//! Step-color palettes.
//!
//! Built-ins are a closed set of 5-color sequential ramps (light to dark). Unknown
//! names resolve to `grey_blue` through `Palette::by_name`; `PaletteName::from_str`
//! is the strict variant for callers that want to reject typos.

use std::fmt;
use std::str::FromStr;

use crate::EngineError;

const GREY: [&str; 5] = ["#d0d0d0", "#a0a0a0", "#707070", "#404040", "#101010"];
const BLUES: [&str; 5] = ["#deebf7", "#9ecae1", "#4292c6", "#2171b5", "#08306b"];
const HEAT: [&str; 5] = ["#ffffb2", "#fecc5c", "#fd8d3c", "#f03b20", "#bd0026"];
const GREENS: [&str; 5] = ["#edf8e9", "#bae4b3", "#74c476", "#31a354", "#006d2c"];
const PURPLES: [&str; 5] = ["#efedf5", "#bcbddc", "#807dba", "#6a51a3", "#4a1486"];
const GREY_BLUE: [&str; 5] = ["#e0e0e0", "#a8c5d8", "#6a9fc0", "#3a7ca5", "#08519c"];

/// Identifier of a built-in palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PaletteName {
    Grey,
    Blues,
    Heat,
    Greens,
    Purples,
    #[default]
    GreyBlue,
}

impl PaletteName {
    pub const ALL: [PaletteName; 6] = [
        PaletteName::Grey,
        PaletteName::Blues,
        PaletteName::Heat,
        PaletteName::Greens,
        PaletteName::Purples,
        PaletteName::GreyBlue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteName::Grey => "grey",
            PaletteName::Blues => "blues",
            PaletteName::Heat => "heat",
            PaletteName::Greens => "greens",
            PaletteName::Purples => "purples",
            PaletteName::GreyBlue => "grey_blue",
        }
    }

    pub fn colors(self) -> &'static [&'static str] {
        match self {
            PaletteName::Grey => &GREY,
            PaletteName::Blues => &BLUES,
            PaletteName::Heat => &HEAT,
            PaletteName::Greens => &GREENS,
            PaletteName::Purples => &PURPLES,
            PaletteName::GreyBlue => &GREY_BLUE,
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteName::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| EngineError::invalid(format!("unknown palette '{s}'")))
    }
}

/// Ordered color ramp used by the step-color lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Named(PaletteName),
    /// Caller-supplied colors; never empty.
    Custom(Vec<String>),
}

impl Palette {
    /// Resolve a palette by name, falling back to `grey_blue` for unknown names.
    pub fn by_name(name: &str) -> Self {
        Palette::Named(name.parse().unwrap_or_default())
    }

    pub fn custom<S: Into<String>>(
        colors: impl IntoIterator<Item = S>,
    ) -> Result<Self, EngineError> {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(EngineError::invalid("custom palette has no colors"));
        }
        Ok(Palette::Custom(colors))
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Palette::Named(name) => name.colors().len(),
            Palette::Custom(colors) => colors.len(),
        }
    }

    /// Always false: built-ins have 5 colors and custom palettes are validated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        match self {
            Palette::Named(name) => name.colors().get(idx).copied(),
            Palette::Custom(colors) => colors.get(idx).map(String::as_str),
        }
    }

    pub fn colors(&self) -> Vec<&str> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Named(PaletteName::default())
    }
}

impl From<PaletteName> for Palette {
    fn from(name: PaletteName) -> Self {
        Palette::Named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_has_five_colors() {
        for name in PaletteName::ALL {
            assert_eq!(name.colors().len(), 5, "{name}");
            assert_eq!(name.as_str().parse::<PaletteName>().unwrap(), name);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_grey_blue() {
        assert_eq!(Palette::by_name("heat"), Palette::Named(PaletteName::Heat));
        assert_eq!(
            Palette::by_name("viridis"),
            Palette::Named(PaletteName::GreyBlue)
        );
        assert!("viridis".parse::<PaletteName>().is_err());
    }

    #[test]
    fn grey_blue_entries() {
        let p = Palette::default();
        assert_eq!(p.get(3), Some("#3a7ca5"));
        assert_eq!(p.get(5), None);
        assert_eq!(p.colors().len(), 5);
    }

    #[test]
    fn custom_palette_must_not_be_empty() {
        assert!(Palette::custom(Vec::<String>::new()).is_err());
        let p = Palette::custom(["#000", "#fff"]).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.get(1), Some("#fff"));
    }
}
