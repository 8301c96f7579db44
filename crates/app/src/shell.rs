use crate::auth::use_session;
use crate::views::ViewContent;
use dioxus::prelude::*;
use shared_types::registry::view_title;
use shared_types::{menu_for, unread_count, ActiveSession, MenuItem, Notification};
use shared_ui::{ErrorPanel, HeaderBar, NotificationFlyout, SidebarRouter};

/// Signed-in layout: sidebar, header bar, notification flyout and the active
/// view. Render failures inside the view are caught here and replaced with an
/// inline error panel.
#[component]
pub fn DashboardShell(session: ActiveSession) -> Element {
    let mut gate = use_session();
    let mut notifications_open = use_signal(|| false);
    let role = session.role();

    let notifications = use_resource(move || async move {
        server::api::notifications(role).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load notifications");
            Vec::new()
        })
    });
    let feed: Vec<Notification> = notifications.read().as_ref().cloned().unwrap_or_default();
    let unread = unread_count(&feed);

    let nav = session.navigation.clone();
    let title = view_title(role, &nav.active_view).to_string();
    let inset = nav.content_inset().class();
    let view_id = nav.active_view.clone();

    let toggle_notifications = move |_: ()| {
        let open = notifications_open();
        notifications_open.set(!open);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }

        div { class: "dashboard-shell",
            SidebarRouter {
                menu: menu_for(role),
                nav: nav,
                on_activate: move |item: MenuItem| gate.navigate(item),
                on_toggle_collapse: move |_| gate.toggle_collapse(),
                on_dismiss: move |_| gate.toggle_visibility(),
            }

            div { class: "dashboard-main {inset}",
                HeaderBar {
                    title: title,
                    user: session.user.clone(),
                    unread: unread,
                    notifications_open: notifications_open(),
                    on_toggle_sidebar: move |_| gate.toggle_visibility(),
                    on_toggle_notifications: toggle_notifications,
                    on_logout: move |_| gate.logout(),
                    on_profile: move |_| gate.open_view("profile"),
                }

                if notifications_open() {
                    NotificationFlyout {
                        notifications: feed.clone(),
                        on_close: move |_| notifications_open.set(false),
                    }
                }

                main { class: "dashboard-content",
                    ViewBoundary { on_reload: move |_| gate.reload(),
                        ViewContent { key: "{view_id}", role: role, view_id: view_id.clone() }
                    }
                }
            }
        }
    }
}

/// Catches a view that fails to render and shows an inline error panel in its
/// place.
#[component]
pub fn ViewBoundary(on_reload: EventHandler<()>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_: ErrorContext| {
                tracing::error!("view failed to render");
                rsx! {
                    ErrorPanel {
                        title: "Something went wrong".to_string(),
                        message: "This page failed to render. Reload to start again from your dashboard.".to_string(),
                        on_reload: move |_| on_reload.call(()),
                    }
                }
            },
            {children}
        }
    }
}
