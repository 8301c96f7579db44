//! Server-side renders of the sidebar router.

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::menu::STUDENT_MENU;
use shared_types::{NavigationState, Role};
use shared_ui::SidebarRouter;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn sidebar_for(nav: NavigationState) -> Element {
    rsx! {
        SidebarRouter {
            menu: STUDENT_MENU,
            nav: nav,
            on_activate: move |_| {},
            on_toggle_collapse: move |_| {},
        }
    }
}

fn active_count(html: &str) -> usize {
    html.matches(r#"data-active="true""#).count()
}

#[test]
fn fresh_sidebar_highlights_dashboard_only() {
    let html = render(|| sidebar_for(NavigationState::for_role(Role::Student)));
    assert_eq!(active_count(&html), 1);
    assert!(html.contains(r#"data-state="open""#));
    assert!(html.contains(r#"data-collapsed="false""#));
    assert!(html.contains("Dashboard"));
    assert!(html.contains("IntelliSkool"));
}

#[test]
fn selected_leaf_is_the_only_active_entry() {
    let html = render(|| {
        let mut nav = NavigationState::for_role(Role::Student);
        nav.select_view("studyMaterials");
        sidebar_for(nav)
    });
    assert_eq!(active_count(&html), 1);
    let active_at = html.find(r#"data-active="true""#).unwrap();
    let label_at = html[active_at..].find("Study Materials").unwrap();
    let next_button = html[active_at..].find("</button>").unwrap();
    assert!(label_at < next_button);
}

#[test]
fn closed_groups_render_no_children() {
    let html = render(|| sidebar_for(NavigationState::for_role(Role::Student)));
    assert!(html.contains("AI Study Tools"));
    assert!(!html.contains("sidebar-menu-sub"));
    assert!(!html.contains("AI Tutor"));
}

#[test]
fn expanded_group_lists_children() {
    let html = render(|| {
        let mut nav = NavigationState::for_role(Role::Student);
        nav.toggle_submenu("AI Study Tools");
        sidebar_for(nav)
    });
    assert!(html.contains("sidebar-menu-sub"));
    assert!(html.contains("AI Tutor"));
    assert!(html.contains("Quiz Generator"));
    assert!(html.contains("Study Planner"));
    assert!(html.contains(r#"aria-expanded="true""#));
}

#[test]
fn active_child_does_not_highlight_its_group() {
    let html = render(|| {
        let mut nav = NavigationState::for_role(Role::Student);
        nav.toggle_submenu("AI Study Tools");
        nav.select_view("aiTutor");
        sidebar_for(nav)
    });
    assert_eq!(active_count(&html), 1);
    let active_at = html.find(r#"data-active="true""#).unwrap();
    assert!(html[active_at..].contains("AI Tutor"));
    assert!(!html[active_at..].contains("AI Study Tools"));
}

#[test]
fn collapsed_sidebar_draws_icons_only() {
    let html = render(|| {
        let mut nav = NavigationState::for_role(Role::Student);
        nav.toggle_submenu("AI Study Tools");
        nav.toggle_collapse();
        sidebar_for(nav)
    });
    assert!(html.contains(r#"data-collapsed="true""#));
    assert!(!html.contains("sidebar-label"));
    assert!(!html.contains("sidebar-menu-sub"));
    assert!(!html.contains("sidebar-brand-name"));
    // Labels survive as tooltips.
    assert!(html.contains(r#"title="Study Materials""#));
}

#[test]
fn hidden_sidebar_is_marked_closed_without_backdrop() {
    let html = render(|| {
        let mut nav = NavigationState::for_role(Role::Student);
        nav.toggle_visibility();
        sidebar_for(nav)
    });
    assert!(html.contains(r#"data-state="closed""#));
    assert!(!html.contains("sidebar-backdrop"));
}

#[test]
fn fresh_sidebar_renders_the_backdrop_until_dismissed() {
    let html = render(|| sidebar_for(NavigationState::for_role(Role::Student)));
    assert_eq!(html.matches("sidebar-backdrop").count(), 1);
}
