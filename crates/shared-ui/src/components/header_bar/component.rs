use crate::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, CountBadge};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdLogOut, LdMenu};
use dioxus_free_icons::Icon;
use shared_types::{unread_count, Notification, SessionUser};

/// Top bar of the dashboard: sidebar trigger, page title, notification bell,
/// user chip and sign-out.
#[component]
pub fn HeaderBar(
    title: String,
    user: SessionUser,
    unread: usize,
    notifications_open: bool,
    on_toggle_sidebar: EventHandler<()>,
    on_toggle_notifications: EventHandler<()>,
    on_logout: EventHandler<()>,
    /// Opens the user's profile view when the user chip is clicked.
    #[props(default)]
    on_profile: Option<EventHandler<()>>,
) -> Element {
    let initials = user.initials();
    let role = user.role.display_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "header-bar",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                class: "header-bar-trigger",
                "aria-label": "Toggle sidebar",
                onclick: move |_| on_toggle_sidebar.call(()),
                Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
            }

            h1 { class: "header-bar-title", "{title}" }

            div { class: "header-bar-spacer" }

            div { class: "header-bar-bell",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    "aria-label": "Notifications",
                    "aria-expanded": if notifications_open { "true" } else { "false" },
                    onclick: move |_| on_toggle_notifications.call(()),
                    Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                }
                CountBadge { count: unread }
            }

            button {
                class: "header-bar-user",
                r#type: "button",
                title: "My Profile",
                onclick: move |_| {
                    if let Some(handler) = &on_profile {
                        handler.call(());
                    }
                },
                span { class: "header-bar-avatar", "{initials}" }
                div { class: "header-bar-user-text",
                    span { class: "header-bar-user-name", "{user.name}" }
                    Badge { variant: BadgeVariant::Secondary, "{role}" }
                }
            }

            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                class: "header-bar-logout",
                onclick: move |_| on_logout.call(()),
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                "Sign Out"
            }
        }
    }
}

/// Dropdown list of notifications anchored under the header bell.
#[component]
pub fn NotificationFlyout(notifications: Vec<Notification>, on_close: EventHandler<()>) -> Element {
    let unread = unread_count(&notifications);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "notification-flyout", role: "dialog", "aria-label": "Notifications",
            div { class: "notification-flyout-header",
                span { class: "notification-flyout-title", "Notifications" }
                if unread > 0 {
                    Badge { variant: BadgeVariant::Primary, "{unread} new" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
            if notifications.is_empty() {
                p { class: "notification-flyout-empty", "You're all caught up." }
            } else {
                ul { class: "notification-flyout-list",
                    for note in notifications {
                        li {
                            key: "{note.id}",
                            class: "notification-flyout-item",
                            "data-unread": if note.unread { "true" } else { "false" },
                            div { class: "notification-flyout-item-title", "{note.title}" }
                            div { class: "notification-flyout-item-body", "{note.body}" }
                            div { class: "notification-flyout-item-age", "{note.age}" }
                        }
                    }
                }
            }
        }
    }
}
