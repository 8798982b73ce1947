use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaHouse, Icon};

use crate::client::constant::SITE_NAME;

#[component]
pub fn Header() -> Element {
    rsx!(header {
        class: "site-header",
        a {
            href: "/",
            Icon {
                width: 22,
                height: 22,
                icon: FaHouse
            }
            p {
                {SITE_NAME}
            }
        }
    })
}
