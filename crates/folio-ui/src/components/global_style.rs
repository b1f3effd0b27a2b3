//! Global stylesheet element
//!
//! Renders whatever [`folio_core::initialize_global_styles`] installed.
//! Mount it once, at the application root.

use dioxus::prelude::*;
use folio_core::{global_stylesheet, Stylesheet};

/// Installed global styles as a single `<style>` element
///
/// Renders nothing when styles were never installed.
#[component]
pub fn GlobalStyle() -> Element {
    let css = use_hook(|| global_stylesheet().map(Stylesheet::render));

    match css {
        Some(css) => rsx! {
            style { {css} }
        },
        None => {
            tracing::warn!("GlobalStyle mounted before global styles were installed");
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::{initialize_global_styles, Theme};

    use super::*;
    use crate::Layout;

    #[test]
    fn single_style_element_for_many_layouts() {
        initialize_global_styles(&Theme::default());

        fn app() -> Element {
            rsx! {
                GlobalStyle {}
                Layout { content: move |_| rsx! { "first" } }
                Layout { content: move |_| rsx! { "second" } }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches("<style").count(), 1);
        assert!(html.contains("::selection"));
        assert!(html.contains("background-color: #c2ff2e;"));
    }
}
