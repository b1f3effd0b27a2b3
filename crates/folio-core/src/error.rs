//! Error types for folio theming

use thiserror::Error;

/// Main error type for palette, typography and theme config operations
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Color family name is not part of the palette
    #[error("Unknown color family: {0}")]
    UnknownFamily(String),

    /// Shade level does not exist for the family
    #[error("Unknown shade {shade} for color family {family}")]
    UnknownShade { family: String, shade: u16 },

    /// Shade key in a config file is not a number
    #[error("Invalid shade key: {0}")]
    InvalidShadeKey(String),

    /// Color value cannot be spliced into a stylesheet
    #[error("Invalid color value {value:?}: {reason}")]
    InvalidColor { value: String, reason: &'static str },

    /// Typography settings out of range
    #[error("Invalid typography: {0}")]
    InvalidTypography(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file is not valid JSON for [`crate::ThemeConfig`]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ThemeError
pub type ThemeResult<T> = Result<T, ThemeError>;
