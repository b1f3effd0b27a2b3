//! folio UI Components
//!
//! Dioxus components for the site shell:
//! - **Layout**: container around caller-supplied page content
//! - **MaxWidthWrapper**: centered column with gutters
//! - **GlobalStyle**: the installed global stylesheet as a `<style>` element
//!
//! Global styles are installed by the host with
//! [`folio_core::initialize_global_styles`] before launch. None of these
//! components install styles themselves.

pub mod components;

pub use components::*;
