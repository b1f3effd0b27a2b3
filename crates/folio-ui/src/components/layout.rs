//! Layout shell
//!
//! Wraps page content in a single container element.

use dioxus::prelude::*;

/// Properties for the Layout component
#[derive(Clone, PartialEq, Props)]
pub struct LayoutProps {
    /// Produces the page content. Called once per render.
    pub content: Callback<(), Element>,
}

/// Site layout shell
///
/// `content` is required, so leaving it out fails at compile time in the
/// props builder instead of at render time.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Layout {
///         content: move |_| rsx! { Home {} },
///     }
/// }
/// ```
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    rsx! {
        div { {props.content.call(())} }
    }
}
