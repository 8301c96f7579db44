use server::directory;
use shared_types::{DemoAccount, LoginRequest, Role, SessionUser};

/// The advertised demo account for `role`.
pub fn demo_account(role: Role) -> DemoAccount {
    directory::demo_accounts()
        .into_iter()
        .find(|a| a.role == role)
        .unwrap_or_else(|| panic!("no demo account for {role}"))
}

pub fn login_request(email: &str, password: &str, role: Role) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

/// Sign in with the demo credentials for `role`.
pub fn sign_in_as(role: Role) -> SessionUser {
    let account = demo_account(role);
    directory::authenticate(&login_request(&account.email, &account.password, role))
        .unwrap_or_else(|e| panic!("demo login for {role} failed: {e}"))
}
