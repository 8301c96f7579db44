//! View content for the dashboard's main region.
//!
//! Each role module parses the active view id into the role's view enum and
//! matches on it exhaustively. Ids outside the registry render the
//! placeholder panel.

mod admin;
mod management;
mod parent;
mod student;
mod teacher;

use crate::auth::use_session;
use crate::components::InsightPanel;
use dioxus::prelude::*;
use shared_types::registry::ViewMeta;
use shared_types::Role;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, StatCard};

/// Render the content for `view_id` in `role`'s registry.
#[component]
pub fn ViewContent(role: Role, view_id: String) -> Element {
    match role {
        Role::Admin => admin::render(&view_id),
        Role::Teacher => teacher::render(&view_id),
        Role::Student => student::render(&view_id),
        Role::Parent => parent::render(&view_id),
        Role::Management => management::render(&view_id),
    }
}

/// One headline figure on a dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

/// A labelled row in a section listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// Landing view for a role: headline stats, a short list and an insight card.
#[component]
pub fn DashboardPage(
    role: Role,
    meta: ViewMeta,
    stats: &'static [Stat],
    list_title: &'static str,
    rows: &'static [Row],
) -> Element {
    let gate = use_session();
    let first_name = gate
        .phase
        .read()
        .active()
        .and_then(|s| s.user.name.split_whitespace().next().map(str::to_string))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }
        PageHeader { title: meta.title.to_string(), summary: format!("Welcome back, {first_name}. {}", meta.summary) }
        div { class: "stat-grid",
            for stat in stats.iter() {
                StatCard {
                    key: "{stat.label}",
                    label: stat.label.to_string(),
                    value: stat.value.to_string(),
                    caption: stat.caption.to_string(),
                }
            }
        }
        div { class: "view-columns",
            RowList { title: list_title, rows: rows }
            InsightPanel { role: role, topic: meta.id.to_string() }
        }
    }
}

/// A registered view without bespoke widgets: header plus a listing.
/// `with_insight` adds the AI card for the "AI" pages.
#[component]
pub fn SectionPage(
    role: Role,
    meta: ViewMeta,
    list_title: &'static str,
    rows: &'static [Row],
    #[props(default = false)] with_insight: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }
        PageHeader { title: meta.title.to_string(), summary: meta.summary.to_string() }
        div { class: "view-columns",
            if with_insight {
                InsightPanel { role: role, topic: meta.id.to_string() }
            }
            RowList { title: list_title, rows: rows }
        }
    }
}

#[component]
fn RowList(title: &'static str, rows: &'static [Row]) -> Element {
    rsx! {
        Card {
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                if rows.is_empty() {
                    p { class: "row-list-empty", "Nothing here yet." }
                } else {
                    ul { class: "row-list",
                        for row in rows.iter() {
                            li { key: "{row.primary}", class: "row-list-item",
                                span { class: "row-list-primary", "{row.primary}" }
                                span { class: "row-list-secondary", "{row.secondary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Account details of the signed-in user. Registered in every role.
#[component]
pub fn ProfilePage(meta: ViewMeta) -> Element {
    let gate = use_session();
    let phase = gate.phase.read();
    let Some(session) = phase.active() else {
        return rsx! {};
    };
    let user = session.user.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }
        PageHeader { title: meta.title.to_string(), summary: meta.summary.to_string() }
        Card {
            CardContent {
                dl { class: "profile-details",
                    dt { "Name" }
                    dd { "{user.name}" }
                    dt { "Email" }
                    dd { "{user.email}" }
                    dt { "Role" }
                    dd { "{user.role}" }
                }
            }
        }
    }
}

const fn stat(label: &'static str, value: &'static str, caption: &'static str) -> Stat {
    Stat {
        label,
        value,
        caption,
    }
}

const fn row(primary: &'static str, secondary: &'static str) -> Row {
    Row { primary, secondary }
}
