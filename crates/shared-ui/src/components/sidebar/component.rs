use crate::MenuIconGlyph;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChevronDown, LdChevronRight, LdChevronsLeft, LdChevronsRight,
};
use dioxus_free_icons::Icon;
use shared_types::{MenuGroup, MenuItem, MenuLeaf, NavigationState};

// ─── Router ────────────────────────────────────────────────────────────

/// Renders a role menu against the current navigation state.
///
/// The component owns no state. Every click is reported through
/// `on_activate` with the clicked item (group children are reported as
/// leaves), and the owner applies `NavigationState::activate`.
///
/// In collapsed mode only icons are drawn: labels, chevrons and submenu
/// lists are omitted.
#[component]
pub fn SidebarRouter(
    menu: &'static [MenuItem],
    nav: NavigationState,
    on_activate: EventHandler<MenuItem>,
    on_toggle_collapse: EventHandler<()>,
    /// Called when the mobile backdrop is tapped.
    #[props(default)]
    on_dismiss: Option<EventHandler<()>>,
    #[props(default = "IntelliSkool".to_string())] brand: String,
) -> Element {
    let collapsed = nav.sidebar_collapsed;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if nav.sidebar_visible {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| {
                    if let Some(handler) = &on_dismiss {
                        handler.call(());
                    }
                },
            }
        }
        aside {
            class: "sidebar",
            "data-state": if nav.sidebar_visible { "open" } else { "closed" },
            "data-collapsed": if collapsed { "true" } else { "false" },

            div { class: "sidebar-header",
                if !collapsed {
                    span { class: "sidebar-brand-name", "{brand}" }
                }
                button {
                    class: "sidebar-collapse-toggle",
                    r#type: "button",
                    "aria-label": if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| on_toggle_collapse.call(()),
                    if collapsed {
                        Icon::<LdChevronsRight> { icon: LdChevronsRight, width: 18, height: 18 }
                    } else {
                        Icon::<LdChevronsLeft> { icon: LdChevronsLeft, width: 18, height: 18 }
                    }
                }
            }

            div { class: "sidebar-content",
                ul { class: "sidebar-menu",
                    for item in menu.iter().copied() {
                        {match item {
                            MenuItem::Leaf(leaf) => rsx! {
                                SidebarLeaf {
                                    key: "{leaf.view}",
                                    leaf: leaf,
                                    active: nav.is_active(&leaf),
                                    show_label: !collapsed,
                                    on_activate: on_activate,
                                }
                            },
                            MenuItem::Group(group) => rsx! {
                                SidebarGroup {
                                    key: "{group.label}",
                                    group: group,
                                    nav: nav.clone(),
                                    on_activate: on_activate,
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}

// ─── Menu entries ──────────────────────────────────────────────────────

#[component]
fn SidebarLeaf(
    leaf: MenuLeaf,
    active: bool,
    show_label: bool,
    on_activate: EventHandler<MenuItem>,
) -> Element {
    rsx! {
        li { class: "sidebar-menu-item",
            SidebarMenuButton {
                active: active,
                label: leaf.label,
                onclick: move |_| on_activate.call(MenuItem::Leaf(leaf)),
                MenuIconGlyph { icon: leaf.icon }
                if show_label {
                    span { class: "sidebar-label", "{leaf.label}" }
                }
            }
        }
    }
}

/// A group header plus, while open, its children. The header itself is
/// never marked active.
#[component]
fn SidebarGroup(
    group: MenuGroup,
    nav: NavigationState,
    on_activate: EventHandler<MenuItem>,
) -> Element {
    let collapsed = nav.sidebar_collapsed;
    let open = nav.submenu_open(group.label);

    rsx! {
        li { class: "sidebar-menu-item",
            SidebarMenuButton {
                active: false,
                label: group.label,
                expanded: open,
                onclick: move |_| on_activate.call(MenuItem::Group(group)),
                MenuIconGlyph { icon: group.icon }
                if !collapsed {
                    span { class: "sidebar-label", "{group.label}" }
                    span { class: "sidebar-chevron",
                        if open {
                            Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                        } else {
                            Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                        }
                    }
                }
            }
            if open {
                ul { class: "sidebar-menu-sub",
                    for child in group.children.iter().copied() {
                        li { key: "{child.view}", class: "sidebar-menu-sub-item",
                            SidebarMenuButton {
                                active: nav.is_active(&child),
                                label: child.label,
                                sub: true,
                                onclick: move |_| on_activate.call(MenuItem::Leaf(child)),
                                MenuIconGlyph { icon: child.icon, size: 16 }
                                span { class: "sidebar-label", "{child.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Clickable row inside the sidebar. `label` doubles as the tooltip so that
/// icon-only rows stay identifiable.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    label: &'static str,
    /// `Some` for group headers, reported as `aria-expanded`.
    #[props(default)]
    expanded: Option<bool>,
    #[props(default = false)] sub: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: if sub { "sidebar-menu-sub-button" } else { "sidebar-menu-button" },
            r#type: "button",
            title: label,
            "data-active": if active { "true" } else { "false" },
            "aria-current": if active { "page" } else { "false" },
            "aria-expanded": expanded.map(|open| if open { "true" } else { "false" }),
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
