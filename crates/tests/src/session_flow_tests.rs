use crate::common::sign_in_as;
use pretty_assertions::assert_eq;
use shared_types::menu::{find_leaf, leaves};
use shared_types::registry::view_title;
use shared_types::{menu_for, MenuItem, NavigationState, Role, SessionPhase, ALL_ROLES};

#[test]
fn sign_in_lands_on_the_role_dashboard() {
    for role in ALL_ROLES {
        let mut phase = SessionPhase::from_startup(Ok(None));
        assert!(phase.sign_in(sign_in_as(*role)));

        let session = phase.active().unwrap();
        assert_eq!(session.navigation, NavigationState::for_role(*role));
        assert_ne!(view_title(*role, &session.navigation.active_view), "Coming Soon");
    }
}

#[test]
fn navigating_every_menu_leaf_lands_on_a_registered_view() {
    for role in ALL_ROLES {
        let mut phase = SessionPhase::LoggedOut;
        phase.sign_in(sign_in_as(*role));
        let menu = menu_for(*role);

        for leaf in leaves(menu) {
            let nav = phase.navigation_mut().unwrap();
            nav.activate(&MenuItem::Leaf(*leaf));
            assert_eq!(nav.active_view, leaf.view);
            assert_eq!(view_title(*role, leaf.view), leaf_title(*role, leaf.view));
        }
    }
}

fn leaf_title(role: Role, view: &str) -> &'static str {
    shared_types::registry::view_meta(role, view)
        .map(|meta| meta.title)
        .unwrap_or_else(|| panic!("{role}: {view} is not registered"))
}

#[test]
fn teacher_opens_ai_tools_and_picks_a_child() {
    let mut phase = SessionPhase::LoggedOut;
    phase.sign_in(sign_in_as(Role::Teacher));

    let group = menu_for(Role::Teacher)
        .iter()
        .find(|item| matches!(item, MenuItem::Group(_)))
        .unwrap();
    let label = group.label();

    let nav = phase.navigation_mut().unwrap();
    assert!(nav.activate(group));
    assert!(nav.submenu_open(label));
    assert_eq!(nav.active_view, "dashboard");

    let MenuItem::Group(inner) = group else {
        unreachable!()
    };
    let child = inner.children[0];
    nav.activate(&MenuItem::Leaf(child));
    assert_eq!(nav.active_view, child.view);
    assert!(nav.submenu_open(label));
    assert!(!nav.is_item_active(group));
}

#[test]
fn logout_discards_navigation_and_next_role_starts_fresh() {
    let mut phase = SessionPhase::LoggedOut;
    phase.sign_in(sign_in_as(Role::Student));
    {
        let nav = phase.navigation_mut().unwrap();
        let grades = find_leaf(menu_for(Role::Student), "grades").unwrap();
        nav.select_leaf(grades);
        nav.toggle_collapse();
        nav.toggle_visibility();
    }

    assert!(phase.sign_out());
    assert_eq!(phase, SessionPhase::LoggedOut);

    phase.sign_in(sign_in_as(Role::Parent));
    let session = phase.active().unwrap();
    assert_eq!(session.user.role, Role::Parent);
    assert_eq!(session.navigation, NavigationState::for_role(Role::Parent));
}

#[test]
fn persisted_user_json_restores_the_session() {
    let user = sign_in_as(Role::Management);
    let stored = serde_json::to_string(&user).unwrap();

    let restored = serde_json::from_str(&stored).map_err(|e| {
        shared_types::AppError::storage(format!("unreadable session: {e}"))
    });
    let phase = SessionPhase::from_startup(restored.map(Some));
    assert_eq!(phase.role(), Some(Role::Management));
}

#[test]
fn corrupt_persisted_session_fails_startup() {
    let restored: Result<Option<shared_types::SessionUser>, _> = serde_json::from_str("{not json")
        .map(Some)
        .map_err(|e: serde_json::Error| shared_types::AppError::storage(e.to_string()));
    let phase = SessionPhase::from_startup(restored);
    assert!(matches!(phase, SessionPhase::Failed(_)));
}
