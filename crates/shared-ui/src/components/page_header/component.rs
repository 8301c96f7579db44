use dioxus::prelude::*;

/// Title block at the top of a view, with optional actions on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] summary: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if !summary.is_empty() {
                    p { class: "page-summary", "{summary}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
