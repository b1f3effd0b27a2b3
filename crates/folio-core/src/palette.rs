//! Color palette
//!
//! Color families indexed by shade level. The built-in values live in
//! [`default_color`] and never change; a [`Palette`] layers validated
//! overrides from a theme file on top of them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ThemeError, ThemeResult};

/// Color family names used across the site
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ColorFamily {
    Gray,
    Blue,
    Lime,
    Pink,
    Red,
    Yellow,
}

impl ColorFamily {
    pub const ALL: [ColorFamily; 6] = [
        ColorFamily::Gray,
        ColorFamily::Blue,
        ColorFamily::Lime,
        ColorFamily::Pink,
        ColorFamily::Red,
        ColorFamily::Yellow,
    ];

    /// Lower-case name as used in theme files
    pub fn name(&self) -> &'static str {
        match self {
            ColorFamily::Gray => "gray",
            ColorFamily::Blue => "blue",
            ColorFamily::Lime => "lime",
            ColorFamily::Pink => "pink",
            ColorFamily::Red => "red",
            ColorFamily::Yellow => "yellow",
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFamily {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| ThemeError::UnknownFamily(s.to_string()))
    }
}

/// Shade level within a color family. Lower is lighter.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Shade {
    S100,
    S300,
    S500,
    S700,
    S900,
}

impl Shade {
    pub const ALL: [Shade; 5] = [Shade::S100, Shade::S300, Shade::S500, Shade::S700, Shade::S900];

    pub fn level(&self) -> u16 {
        match self {
            Shade::S100 => 100,
            Shade::S300 => 300,
            Shade::S500 => 500,
            Shade::S700 => 700,
            Shade::S900 => 900,
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

impl TryFrom<u16> for Shade {
    type Error = u16;

    fn try_from(level: u16) -> Result<Self, Self::Error> {
        Shade::ALL
            .into_iter()
            .find(|shade| shade.level() == level)
            .ok_or(level)
    }
}

/// Built-in color for a family and shade.
pub const fn default_color(family: ColorFamily, shade: Shade) -> &'static str {
    use ColorFamily::*;
    use Shade::*;

    match (family, shade) {
        // === GRAY (Text, Borders) ===
        (Gray, S100) => "#f5f5f7",
        (Gray, S300) => "#cfcfd6",
        (Gray, S500) => "#8e8e99",
        (Gray, S700) => "#4a4a55",
        (Gray, S900) => "#18181d",

        // === BLUE (Links) ===
        (Blue, S100) => "#e6ecff",
        (Blue, S300) => "#8aa4ff",
        (Blue, S500) => "#3355ff",
        (Blue, S700) => "#1f35b8",
        (Blue, S900) => "#0d1a5c",

        // === LIME (Selection, Highlights) ===
        (Lime, S100) => "#f4ffd6",
        (Lime, S300) => "#ddff80",
        (Lime, S500) => "#c2ff2e",
        (Lime, S700) => "#8cc70a",
        (Lime, S900) => "#46660a",

        // === PINK ===
        (Pink, S100) => "#ffe6f2",
        (Pink, S300) => "#ff99cc",
        (Pink, S500) => "#ff3399",
        (Pink, S700) => "#c2185b",
        (Pink, S900) => "#660a33",

        // === RED (Errors) ===
        (Red, S100) => "#ffe5e5",
        (Red, S300) => "#ff8a8a",
        (Red, S500) => "#ff3333",
        (Red, S700) => "#c20f0f",
        (Red, S900) => "#5c0808",

        // === YELLOW (Warnings) ===
        (Yellow, S100) => "#fff9db",
        (Yellow, S300) => "#ffe680",
        (Yellow, S500) => "#ffd21f",
        (Yellow, S700) => "#c79c00",
        (Yellow, S900) => "#5c4700",
    }
}

/// Check that a color value can be spliced into a CSS declaration.
pub fn validate_color(value: &str) -> ThemeResult<()> {
    let invalid = |reason| ThemeError::InvalidColor {
        value: value.to_string(),
        reason,
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("color is empty"));
    }
    if trimmed.contains([';', '{', '}', '<', '>', '\\']) {
        return Err(invalid("color contains CSS delimiters"));
    }
    if trimmed.contains("/*") || trimmed.contains("*/") {
        return Err(invalid("color contains a CSS comment marker"));
    }
    // An open string would swallow the rest of the sheet
    if trimmed.matches('\'').count() % 2 != 0 || trimmed.matches('"').count() % 2 != 0 {
        return Err(invalid("color has unbalanced quotes"));
    }
    if let Some(hex) = trimmed.strip_prefix('#') {
        if !matches!(hex.len(), 3 | 4 | 6 | 8) {
            return Err(invalid("hex color must have 3, 4, 6 or 8 digits"));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("hex color has non-hex digits"));
        }
    }
    Ok(())
}

/// Palette with optional overrides on top of the built-in colors
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    overrides: BTreeMap<(ColorFamily, Shade), String>,
}

impl Palette {
    /// Built-in palette with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from `{family: {shade: color}}` maps, as found in theme files.
    pub fn from_overrides(map: &BTreeMap<String, BTreeMap<String, String>>) -> ThemeResult<Self> {
        let mut palette = Self::new();
        for (family_name, shades) in map {
            let family: ColorFamily = family_name.parse()?;
            for (shade_key, value) in shades {
                let level: u16 = shade_key
                    .trim()
                    .parse()
                    .map_err(|_| ThemeError::InvalidShadeKey(shade_key.clone()))?;
                let shade = Shade::try_from(level).map_err(|shade| ThemeError::UnknownShade {
                    family: family_name.clone(),
                    shade,
                })?;
                palette.set(family, shade, value)?;
            }
        }
        Ok(palette)
    }

    /// Color for a family and shade, taking overrides into account
    pub fn color(&self, family: ColorFamily, shade: Shade) -> &str {
        self.overrides
            .get(&(family, shade))
            .map(String::as_str)
            .unwrap_or_else(|| default_color(family, shade))
    }

    /// Lookup by name and level.
    ///
    /// Unlike indexing a plain map, a missing key is reported instead of
    /// producing an empty value.
    pub fn lookup(&self, family: &str, shade: u16) -> ThemeResult<&str> {
        let family_enum: ColorFamily = family.parse()?;
        let shade = Shade::try_from(shade).map_err(|shade| ThemeError::UnknownShade {
            family: family.to_string(),
            shade,
        })?;
        Ok(self.color(family_enum, shade))
    }

    /// Override one entry after validating the value
    pub fn set(&mut self, family: ColorFamily, shade: Shade, value: &str) -> ThemeResult<()> {
        validate_color(value)?;
        self.overrides
            .insert((family, shade), value.trim().to_string());
        Ok(())
    }

    /// Number of overridden entries
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
