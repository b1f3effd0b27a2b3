//! Home page - theme preview.
//!
//! Shows every palette entry so a theme file can be checked at a glance.

use dioxus::prelude::*;
use folio_core::{ColorFamily, Shade};
use folio_ui::MaxWidthWrapper;

use crate::context::use_theme;

#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let swatches = ColorFamily::ALL.map(|family| {
        let shades = Shade::ALL.map(|shade| (shade, theme.palette.color(family, shade).to_string()));
        (family, shades)
    });

    rsx! {
        MaxWidthWrapper {
            h1 { "folio" }
            p {
                "Links look "
                a { href: "#", "like this" }
                ". Select some text to see the highlight."
            }
            for (family, shades) in swatches {
                div { key: "{family}", class: "swatch-row",
                    span { class: "swatch-family", "{family}" }
                    for (shade, color) in shades {
                        span {
                            key: "{shade}",
                            class: "swatch",
                            title: "{family}-{shade}",
                            style: "display: inline-block; width: 48px; height: 24px; background-color: {color};",
                        }
                    }
                }
            }
        }
    }
}
