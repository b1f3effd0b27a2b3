//! Theme context provider for folio.
//!
//! Provides the startup theme to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_theme);
//!
//! // In child components
//! let theme = use_theme();
//! let link = theme.palette.color(ColorFamily::Blue, Shade::S500);
//! ```

use dioxus::prelude::*;
use folio_core::Theme;

/// Get the theme chosen at startup.
pub fn get_theme() -> Theme {
    crate::get_theme()
}

/// Hook to access the theme from context.
///
/// The theme never changes after launch; global styles were already
/// generated from it by the time any component renders.
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}
