//! Centered content column

use dioxus::prelude::*;

/// Horizontal gutter on each side, in pixels
pub const GUTTER_PX: u32 = 32;

/// Caps content width and centers it, with gutters on narrow screens
///
/// `max_width` is in pixels.
#[component]
pub fn MaxWidthWrapper(
    #[props(default = 1100)]
    max_width: u32,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "max-width-wrapper",
            style: "max-width: {max_width}px; margin-left: auto; margin-right: auto; padding-left: {GUTTER_PX}px; padding-right: {GUTTER_PX}px;",
            {children}
        }
    }
}
