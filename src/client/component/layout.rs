use dioxus::prelude::*;

use crate::client::component::Header;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx!(main {
        Header {  }
        {children}
    })
}
