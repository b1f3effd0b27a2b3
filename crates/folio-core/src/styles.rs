//! Global stylesheet assembly.
//!
//! The document-wide CSS is built from four sources, in order:
//!
//! ```text
//! reset   bundled reset.css
//! fonts   bundled fonts.css (@font-face rules)
//! global  bundled global.css (box sizing, font stack)
//! base    generated from the theme: font size, line height, link and selection colors
//! ```
//!
//! Building a [`Stylesheet`] has no side effects. Installing it into the
//! document happens once, through [`crate::registry`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::palette::{ColorFamily, Palette, Shade};
use crate::theme::Theme;

pub const RESET_CSS: &str = include_str!("../assets/reset.css");
pub const FONTS_CSS: &str = include_str!("../assets/fonts.css");
pub const GLOBAL_CSS: &str = include_str!("../assets/global.css");

/// Palette entry used for anchor text
pub const LINK_COLOR: (ColorFamily, Shade) = (ColorFamily::Blue, Shade::S500);
/// Palette entry used for the text selection highlight
pub const SELECTION_COLOR: (ColorFamily, Shade) = (ColorFamily::Lime, Shade::S500);

/// Base typography applied to `html` and `body`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Typography {
    /// Root font size in pixels; `rem` units resolve against it
    pub root_font_size_px: u16,
    /// Unitless body line height
    pub body_line_height: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            root_font_size_px: 16,
            body_line_height: 1.4,
        }
    }
}

impl Typography {
    pub fn validate(&self) -> ThemeResult<()> {
        if !(1..=96).contains(&self.root_font_size_px) {
            return Err(ThemeError::InvalidTypography(format!(
                "root font size {}px is outside 1..=96",
                self.root_font_size_px
            )));
        }
        let lh = self.body_line_height;
        if !lh.is_finite() || lh <= 0.0 || lh > 4.0 {
            return Err(ThemeError::InvalidTypography(format!(
                "body line height {} is outside (0, 4]",
                lh
            )));
        }
        Ok(())
    }
}

/// Generate the base rules for a palette and typography.
pub fn base_rules(palette: &Palette, typography: &Typography) -> String {
    let (link_family, link_shade) = LINK_COLOR;
    let (selection_family, selection_shade) = SELECTION_COLOR;

    format!(
        r#"html {{
  font-size: {font_size}px;
}}

body {{
  line-height: {line_height};
}}

a {{
  color: {link};
}}

::selection {{
  background-color: {selection};
}}
"#,
        font_size = typography.root_font_size_px,
        line_height = typography.body_line_height,
        link = palette.color(link_family, link_shade),
        selection = palette.color(selection_family, selection_shade),
    )
}

/// One named chunk of CSS inside a [`Stylesheet`]
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSource {
    pub name: &'static str,
    pub css: Cow<'static, str>,
}

/// Ordered collection of CSS sources rendered as one style block
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    sources: Vec<StyleSource>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The site stylesheet: bundled reset, fonts and global CSS plus the
    /// generated base rules for `theme`.
    pub fn standard(theme: &Theme) -> Self {
        Self::new()
            .with_source("reset", RESET_CSS)
            .with_source("fonts", FONTS_CSS)
            .with_source("global", GLOBAL_CSS)
            .with_source("base", base_rules(&theme.palette, &theme.typography))
    }

    /// Append a source. Later sources win on equal specificity.
    pub fn with_source(mut self, name: &'static str, css: impl Into<Cow<'static, str>>) -> Self {
        self.sources.push(StyleSource {
            name,
            css: css.into(),
        });
        self
    }

    pub fn sources(&self) -> &[StyleSource] {
        &self.sources
    }

    pub fn source(&self, name: &str) -> Option<&StyleSource> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Render every source into one block of CSS text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for source in &self.sources {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("/* {} */\n", source.name));
            out.push_str(source.css.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rules_use_palette_entries() {
        let mut palette = Palette::new();
        palette.set(ColorFamily::Blue, Shade::S500, "#1111FF").unwrap();
        palette.set(ColorFamily::Lime, Shade::S500, "#22FF22").unwrap();

        let css = base_rules(&palette, &Typography::default());
        assert!(css.contains("font-size: 16px;"));
        assert!(css.contains("line-height: 1.4;"));
        assert!(css.contains("color: #1111FF;"));
        assert!(css.contains("background-color: #22FF22;"));
    }

    #[test]
    fn base_rules_follow_typography() {
        let typography = Typography {
            root_font_size_px: 18,
            body_line_height: 1.6,
        };
        let css = base_rules(&Palette::new(), &typography);
        assert!(css.contains("font-size: 18px;"));
        assert!(css.contains("line-height: 1.6;"));
    }

    #[test]
    fn typography_validation() {
        assert!(Typography::default().validate().is_ok());

        let zero = Typography {
            root_font_size_px: 0,
            ..Typography::default()
        };
        assert!(matches!(zero.validate(), Err(ThemeError::InvalidTypography(_))));

        let nan = Typography {
            body_line_height: f32::NAN,
            ..Typography::default()
        };
        assert!(nan.validate().is_err());

        let tall = Typography {
            body_line_height: 4.5,
            ..Typography::default()
        };
        assert!(tall.validate().is_err());
    }

    #[test]
    fn standard_sheet_order() {
        let sheet = Stylesheet::standard(&Theme::default());
        let names: Vec<_> = sheet.sources().iter().map(|s| s.name).collect();
        assert_eq!(names, ["reset", "fonts", "global", "base"]);

        assert_eq!(sheet.source("reset").unwrap().css, RESET_CSS);
        assert!(sheet.source("base").unwrap().css.contains("::selection"));
        assert!(sheet.source("missing").is_none());
    }

    #[test]
    fn render_keeps_source_order() {
        let css = Stylesheet::new()
            .with_source("first", "a { color: red; }")
            .with_source("second", String::from("a { color: blue; }\n\n"))
            .render();

        assert_eq!(
            css,
            "/* first */\na { color: red; }\n\n/* second */\na { color: blue; }\n"
        );
    }

    #[test]
    fn rendered_standard_sheet_has_base_rules_last() {
        let css = Stylesheet::standard(&Theme::default()).render();
        let reset_at = css.find("/* reset */").unwrap();
        let base_at = css.find("/* base */").unwrap();
        assert!(reset_at < base_at);
        assert!(css[base_at..].contains("::selection"));
        assert!(css.contains("@font-face"));
    }
}
