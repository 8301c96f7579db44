use dioxus::prelude::*;

/// Pulsing placeholder block shown while content loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of text-line skeletons, the last one shorter.
#[component]
pub fn SkeletonLines(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "skeleton-lines", "aria-busy": "true",
            for i in 0..lines {
                Skeleton {
                    key: "{i}",
                    class: if i + 1 == lines { "skeleton-line skeleton-line-short" } else { "skeleton-line" },
                }
            }
        }
    }
}
