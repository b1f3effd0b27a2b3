//! Theme configuration.
//!
//! A theme file is JSON with two optional sections:
//!
//! ```json
//! {
//!   "palette": { "blue": { "500": "#1111FF" } },
//!   "typography": { "root_font_size_px": 16, "body_line_height": 1.4 }
//! }
//! ```
//!
//! Palette entries not named in the file keep their built-in values.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ThemeResult;
use crate::palette::Palette;
use crate::styles::Typography;

/// Resolved theme: palette plus base typography
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
}

/// On-disk theme description, before validation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// `{family: {shade: color}}` overrides
    pub palette: BTreeMap<String, BTreeMap<String, String>>,
    pub typography: Typography,
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            families = config.palette.len(),
            "Loaded theme config"
        );
        Ok(config)
    }

    /// Validate every entry and build the theme
    pub fn into_theme(self) -> ThemeResult<Theme> {
        self.typography.validate()?;
        let palette = Palette::from_overrides(&self.palette)?;
        Ok(Theme {
            palette,
            typography: self.typography,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::palette::{ColorFamily, Shade};

    #[test]
    fn empty_config_is_default_theme() {
        let theme = ThemeConfig::from_json("{}").unwrap().into_theme().unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn partial_typography_keeps_defaults() {
        let theme = ThemeConfig::from_json(r#"{"typography": {"body_line_height": 1.6}}"#)
            .unwrap()
            .into_theme()
            .unwrap();
        assert_eq!(theme.typography.root_font_size_px, 16);
        assert_eq!(theme.typography.body_line_height, 1.6);
    }

    #[test]
    fn palette_section_overrides_entries() {
        let theme = ThemeConfig::from_json(r##"{"palette": {"pink": {"300": "#ffc0cb"}}}"##)
            .unwrap()
            .into_theme()
            .unwrap();
        assert_eq!(theme.palette.color(ColorFamily::Pink, Shade::S300), "#ffc0cb");
        assert_eq!(theme.palette.override_count(), 1);
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let err = ThemeConfig::from_json(r#"{"colours": {}}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn misspelled_typography_field_is_rejected() {
        let err = ThemeConfig::from_json(r#"{"typography": {"line_heigth": 9}}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn invalid_entries_fail_conversion() {
        let unknown = ThemeConfig::from_json(r##"{"palette": {"teal": {"500": "#008080"}}}"##)
            .unwrap()
            .into_theme();
        assert!(matches!(unknown, Err(ThemeError::UnknownFamily(_))));

        let bad_typography = ThemeConfig::from_json(r#"{"typography": {"root_font_size_px": 0}}"#)
            .unwrap()
            .into_theme();
        assert!(matches!(bad_typography, Err(ThemeError::InvalidTypography(_))));
    }
}
