use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::{SITE_DESCRIPTION, SITE_NAME},
};

#[component]
pub fn Home() -> Element {
    rsx! {
        Page {
            title: SITE_NAME,
            class: "home",
            p {
                {SITE_DESCRIPTION}
            }
        }
    }
}
