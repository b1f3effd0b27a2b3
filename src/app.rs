use dioxus::prelude::*;
use folio_ui::{GlobalStyle, Layout};

use crate::context::get_theme;
use crate::pages::Home;

/// Root application component.
///
/// Provides the theme context, mounts the global stylesheet once and renders
/// the page inside the layout shell.
#[component]
pub fn App() -> Element {
    use_context_provider(get_theme);

    rsx! {
        GlobalStyle {}
        Layout {
            content: move |_| rsx! { Home {} },
        }
    }
}
