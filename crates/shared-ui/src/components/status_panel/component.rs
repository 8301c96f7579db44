use crate::{Button, ButtonVariant, SkeletonLines};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdConstruction, LdTriangleAlert};
use dioxus_free_icons::Icon;

/// Shown for a view id that has no registered page in the current role.
#[component]
pub fn PlaceholderPanel(view_id: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "status-panel", "data-kind": "placeholder",
            Icon::<LdConstruction> { icon: LdConstruction, width: 40, height: 40 }
            h2 { class: "status-panel-title", "Coming Soon" }
            p { class: "status-panel-message",
                "This feature is not available yet. "
                code { "{view_id}" }
                " is still being built."
            }
        }
    }
}

/// Failure panel with a single Reload remedy.
///
/// `full_page` fills the viewport (startup failures); otherwise the panel sits
/// inside the dashboard's content region.
#[component]
pub fn ErrorPanel(
    #[props(default = "Application Error".to_string())] title: String,
    message: String,
    on_reload: EventHandler<()>,
    #[props(default = false)] full_page: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "status-panel",
            "data-kind": "error",
            "data-full-page": if full_page { "true" } else { "false" },
            role: "alert",
            Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 40, height: 40 }
            h2 { class: "status-panel-title", "{title}" }
            p { class: "status-panel-message", "{message}" }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_reload.call(()),
                "Reload"
            }
        }
    }
}

#[component]
pub fn LoadingPanel(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "status-panel", "data-kind": "loading", "aria-busy": "true",
            p { class: "status-panel-message", "{message}" }
            SkeletonLines { lines: 3 }
        }
    }
}
