use dioxus::prelude::*;
use shared_types::{FeatureFlags, SessionPhase};
use shared_ui::{ErrorPanel, LoadingPanel};

mod auth;
mod components;
mod login;
mod session_store;
mod shell;
mod views;


use auth::{use_session, SessionGate};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();

        let router = dioxus::server::router(App)
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    let mut gate = use_context_provider(|| SessionGate::new(session_store::platform_store()));

    // Runs on the client only: at startup and again after every reload.
    use_effect(move || {
        if gate.is_loading() {
            gate.resolve_startup();
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! { LoadingPanel {} },
            SessionView {}
        }
    }
}

/// Top-level switch on the session phase.
#[component]
fn SessionView() -> Element {
    let mut gate = use_session();
    let phase = gate.phase.read().clone();

    match phase {
        SessionPhase::Loading => rsx! {
            LoadingPanel { message: "Checking your session...".to_string() }
        },
        SessionPhase::LoggedOut => rsx! { login::LoginPage {} },
        SessionPhase::LoggedIn(session) => rsx! { shell::DashboardShell { session: session } },
        SessionPhase::Failed(err) => rsx! {
            ErrorPanel {
                message: err.message,
                full_page: true,
                on_reload: move |_| gate.reload(),
            }
        },
    }
}
