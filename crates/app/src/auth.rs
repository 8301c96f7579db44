use crate::session_store::SessionStore;
use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use shared_types::{MenuItem, SessionPhase, SessionUser};
use std::future::Future;
use std::rc::Rc;

/// Session gate: owns the top-level `SessionPhase` and the store that
/// persists the signed-in user between runs.
#[derive(Clone, Copy)]
pub struct SessionGate {
    pub phase: Signal<SessionPhase>,
    store: Signal<Rc<dyn SessionStore>>,
}

impl SessionGate {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            phase: Signal::new(SessionPhase::Loading),
            store: Signal::new(store),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.phase.read(), SessionPhase::Loading)
    }

    /// Resolve `Loading` from the persisted session. A no-op in any other phase.
    pub fn resolve_startup(&mut self) {
        if !self.is_loading() {
            return;
        }
        let check = self.store.read().load();
        match &check {
            Ok(Some(user)) => tracing::info!(email = %user.email, role = %user.role, "restored session"),
            Ok(None) => tracing::debug!("no stored session"),
            Err(e) => tracing::error!(error = %e, "session check failed"),
        }
        self.phase.set(SessionPhase::from_startup(check));
    }

    /// Persist `user` and enter their dashboard with fresh navigation state.
    /// Ignored unless the gate is logged out; the store is only written once
    /// the phase has accepted the user.
    pub fn sign_in(&mut self, user: SessionUser) {
        if !self.phase.write().sign_in(user.clone()) {
            tracing::warn!(email = %user.email, "sign-in ignored outside the logged-out phase");
            return;
        }
        if let Err(e) = self.store.read().save(&user) {
            // Signed in for this run only.
            tracing::error!(error = %e, "failed to persist session");
        }
        tracing::info!(email = %user.email, role = %user.role, "session started");
    }

    /// Forget the session immediately. The server is told afterwards and its
    /// answer is ignored.
    pub fn logout(&mut self) {
        let Some(email) = self.phase.read().active().map(|s| s.user.email.clone()) else {
            return;
        };
        if let Err(e) = self.store.read().clear() {
            tracing::error!(error = %e, "failed to clear stored session");
        }
        self.phase.write().sign_out();
        tracing::info!(%email, "session ended");

        // The shell that handled the click unmounts on sign-out.
        detach(async move {
            if let Err(e) = server::api::logout(email).await {
                tracing::warn!(error = %e, "logout notification failed");
            }
        });
    }

    /// Start over from `Loading`; the startup check then runs again.
    pub fn reload(&mut self) {
        self.phase.write().reload();
    }

    /// Apply a sidebar click to the active navigation state.
    pub fn navigate(&mut self, item: MenuItem) {
        let mut phase = self.phase.write();
        if let Some(nav) = phase.navigation_mut() {
            if nav.activate(&item) {
                tracing::debug!(label = item.label(), view = %nav.active_view, "navigation");
            }
        }
    }

    /// Jump straight to a view id, e.g. from the header's profile link.
    pub fn open_view(&mut self, view_id: &str) {
        if let Some(nav) = self.phase.write().navigation_mut() {
            nav.select_view(view_id);
        }
    }

    pub fn toggle_collapse(&mut self) {
        if let Some(nav) = self.phase.write().navigation_mut() {
            nav.toggle_collapse();
        }
    }

    pub fn toggle_visibility(&mut self) {
        if let Some(nav) = self.phase.write().navigation_mut() {
            nav.toggle_visibility();
        }
    }
}

/// Run `fut` on the root scope so it outlives the component that started it.
pub(crate) fn detach(fut: impl Future<Output = ()> + 'static) {
    let _ = spawn_forever(fut);
}

/// Hook to access the session gate.
pub fn use_session() -> SessionGate {
    use_context::<SessionGate>()
}
