use crate::common::{demo_account, login_request, sign_in_as};
use pretty_assertions::assert_eq;
use server::directory;
use server::error_convert::{AppErrorExt, ValidateRequest};
use shared_types::{AppError, AppErrorKind, Role, ALL_ROLES};

#[test]
fn every_demo_account_signs_in_with_its_role() {
    for role in ALL_ROLES {
        let user = sign_in_as(*role);
        assert_eq!(user.role, *role);
        assert_eq!(user.email, demo_account(*role).email);
        assert!(!user.name.is_empty());
    }
}

#[test]
fn email_match_ignores_case() {
    let account = demo_account(Role::Teacher);
    let user = directory::authenticate(&login_request(
        &account.email.to_uppercase(),
        &account.password,
        Role::Teacher,
    ))
    .unwrap();
    assert_eq!(user.role, Role::Teacher);
}

#[test]
fn password_match_is_exact() {
    let account = demo_account(Role::Student);
    let err = directory::authenticate(&login_request(
        &account.email,
        &account.password.to_uppercase(),
        Role::Student,
    ))
    .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[test]
fn unknown_email_is_unauthorized() {
    let err = directory::authenticate(&login_request(
        "nobody@intelliskool.edu",
        "whatever",
        Role::Admin,
    ))
    .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[test]
fn role_mismatch_is_forbidden() {
    let account = demo_account(Role::Parent);
    let err = directory::authenticate(&login_request(
        &account.email,
        &account.password,
        Role::Teacher,
    ))
    .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "This account is not a Teacher account");
}

#[test]
fn malformed_request_fails_validation_before_lookup() {
    let err = login_request("", "", Role::Admin)
        .validate_request()
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
}

#[test]
fn rejected_login_reaches_the_client_as_friendly_text() {
    let account = demo_account(Role::Management);
    let err = directory::authenticate(&login_request(&account.email, "wrong", Role::Management))
        .unwrap_err();
    let wire = err.into_server_fn_error().to_string();

    let parsed = AppError::from_server_error(&wire).unwrap();
    assert_eq!(parsed.kind, AppErrorKind::Unauthorized);
    assert_eq!(AppError::friendly_message(&wire), "Invalid email or password");
}
