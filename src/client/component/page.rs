use dioxus::prelude::*;

#[component]
pub fn Page(
    title: Option<&'static str>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class = match class {
        Some(extra) => format!("page {extra}"),
        None => "page".to_string(),
    };

    rsx!(
        section {
            class,
            if let Some(title) = title {
                h1 { {title} }
            }
            {children}
        }
    )
}
