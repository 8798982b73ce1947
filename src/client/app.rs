use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::Layout,
    constant::{PLATFORMS, SITE_DESCRIPTION, SITE_NAME},
    route::Home,
};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // Launch has installed the logger by the time the root renders
    use_hook(|| tracing::info!("Starting {} on {}", SITE_NAME, PLATFORMS.join(", ")));

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: SITE_DESCRIPTION
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Layout {
            Home {}
        }
    }
}
