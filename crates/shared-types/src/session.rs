//! Top-level session state machine.
//!
//! `Loading` is resolved once at startup from the persisted session check.
//! `LoggedOut` and `LoggedIn` are steady states reachable from each other.
//! `Failed` is terminal until the user reloads.

use crate::navigation::NavigationState;
use crate::{AppError, Role, SessionUser};

/// A signed-in user together with the navigation state of their dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub user: SessionUser,
    pub navigation: NavigationState,
}

impl ActiveSession {
    /// Every sign-in starts from the role's default navigation state.
    pub fn start(user: SessionUser) -> Self {
        let navigation = NavigationState::for_role(user.role);
        Self { user, navigation }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    #[default]
    Loading,
    LoggedOut,
    LoggedIn(ActiveSession),
    /// The startup session check itself failed.
    Failed(AppError),
}

impl SessionPhase {
    /// Resolve `Loading` from the result of reading the persisted session.
    pub fn from_startup(check: Result<Option<SessionUser>, AppError>) -> Self {
        match check {
            Ok(Some(user)) => SessionPhase::LoggedIn(ActiveSession::start(user)),
            Ok(None) => SessionPhase::LoggedOut,
            Err(err) => SessionPhase::Failed(err),
        }
    }

    /// `LoggedOut → LoggedIn`. Ignored in every other phase.
    pub fn sign_in(&mut self, user: SessionUser) -> bool {
        if !matches!(self, SessionPhase::LoggedOut) {
            return false;
        }
        *self = SessionPhase::LoggedIn(ActiveSession::start(user));
        true
    }

    /// `LoggedIn → LoggedOut`, discarding the navigation state.
    pub fn sign_out(&mut self) -> bool {
        if !matches!(self, SessionPhase::LoggedIn(_)) {
            return false;
        }
        *self = SessionPhase::LoggedOut;
        true
    }

    /// Manual reload: start over from `Loading`.
    pub fn reload(&mut self) {
        *self = SessionPhase::Loading;
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        match self {
            SessionPhase::LoggedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn navigation_mut(&mut self) -> Option<&mut NavigationState> {
        match self {
            SessionPhase::LoggedIn(session) => Some(&mut session.navigation),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.active().map(ActiveSession::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.active().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_ROLES;
    use pretty_assertions::assert_eq;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            name: format!("{} User", role.display_name()),
            email: format!("{}@intelliskool.edu", role.as_str()),
            role,
        }
    }

    #[test]
    fn starts_loading() {
        assert_eq!(SessionPhase::default(), SessionPhase::Loading);
    }

    #[test]
    fn startup_with_stored_user_logs_in() {
        let phase = SessionPhase::from_startup(Ok(Some(user(Role::Parent))));
        assert_eq!(phase.role(), Some(Role::Parent));
        assert_eq!(phase.active().unwrap().navigation.active_view, "dashboard");
    }

    #[test]
    fn startup_without_stored_user_logs_out() {
        assert_eq!(SessionPhase::from_startup(Ok(None)), SessionPhase::LoggedOut);
    }

    #[test]
    fn startup_failure_is_distinct_from_logged_out() {
        let phase = SessionPhase::from_startup(Err(AppError::storage("unreadable session")));
        assert!(matches!(phase, SessionPhase::Failed(_)));
        assert_ne!(phase, SessionPhase::LoggedOut);
        assert!(!phase.is_authenticated());
    }

    #[test]
    fn failed_is_terminal_until_reload() {
        let mut phase = SessionPhase::from_startup(Err(AppError::storage("boom")));
        assert!(!phase.sign_in(user(Role::Admin)));
        assert!(!phase.sign_out());
        assert!(matches!(phase, SessionPhase::Failed(_)));
        phase.reload();
        assert_eq!(phase, SessionPhase::Loading);
    }

    #[test]
    fn sign_in_only_from_logged_out() {
        let mut phase = SessionPhase::Loading;
        assert!(!phase.sign_in(user(Role::Admin)));
        let mut phase = SessionPhase::LoggedOut;
        assert!(phase.sign_in(user(Role::Admin)));
        assert!(!phase.sign_in(user(Role::Teacher)));
        assert_eq!(phase.role(), Some(Role::Admin));
    }

    #[test]
    fn logout_then_login_resets_to_new_role_default() {
        for first in ALL_ROLES {
            for second in ALL_ROLES {
                let mut phase = SessionPhase::LoggedOut;
                phase.sign_in(user(*first));
                {
                    let nav = phase.navigation_mut().unwrap();
                    nav.select_view("profile");
                    nav.toggle_collapse();
                    nav.toggle_submenu("Anything");
                }
                assert!(phase.sign_out());
                assert_eq!(phase, SessionPhase::LoggedOut);
                assert!(phase.navigation_mut().is_none());

                phase.sign_in(user(*second));
                let session = phase.active().unwrap();
                assert_eq!(session.role(), *second);
                assert_eq!(session.navigation, NavigationState::for_role(*second));
            }
        }
    }
}
