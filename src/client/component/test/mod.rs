mod header;

use super::*;
use dioxus::prelude::*;

/// Renders an element tree to HTML without hydration markers.
fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

fn render_header() -> String {
    render(rsx! { Header {} })
}
