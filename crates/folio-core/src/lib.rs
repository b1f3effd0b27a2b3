//! folio core library
//!
//! Palette, theme configuration and global stylesheet assembly for the
//! folio site shell.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{initialize_global_styles, ThemeConfig};
//!
//! let theme = ThemeConfig::from_json(r##"{"palette": {"blue": {"500": "#1111FF"}}}"##)
//!     .and_then(ThemeConfig::into_theme)
//!     .unwrap();
//!
//! let css = initialize_global_styles(&theme).stylesheet().render();
//! assert!(css.contains("color: #1111FF"));
//! ```

pub mod error;
pub mod palette;
pub mod registry;
pub mod styles;
pub mod theme;

// Re-exports
pub use error::{ThemeError, ThemeResult};
pub use palette::{default_color, validate_color, ColorFamily, Palette, Shade};
pub use registry::{global_stylesheet, initialize_global_styles, Injection, StyleRegistry};
pub use styles::{base_rules, StyleSource, Stylesheet, Typography};
pub use theme::{Theme, ThemeConfig};
