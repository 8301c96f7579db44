use dioxus::prelude::*;
use shared_types::{DemoAccount, FeatureFlags, Insight, Notification, Role, SessionUser};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Get the current feature flags. No auth required, flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Mock sign-in against the demo directory. The selected role must match the
/// account's role.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(
    email: String,
    password: String,
    role: Role,
) -> Result<SessionUser, ServerFnError> {
    let req = shared_types::LoginRequest {
        email: email.trim().to_lowercase(),
        password,
        role,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let user = crate::directory::authenticate(&req).map_err(|e| {
        tracing::warn!(email = %req.email, role = %role, error = %e, "sign-in rejected");
        e.into_server_fn_error()
    })?;
    tracing::info!(email = %user.email, role = %user.role, "signed in");
    Ok(user)
}

/// Sign-out is client-side only; the server just records it.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout(email: String) -> Result<(), ServerFnError> {
    tracing::info!(%email, "signed out");
    Ok(())
}

/// Demo credentials shown on the sign-in screen.
#[server]
pub async fn demo_accounts() -> Result<Vec<DemoAccount>, ServerFnError> {
    Ok(crate::directory::demo_accounts())
}

/// Notification feed for the header flyout. Empty when the
/// `notifications` flag is off.
#[server]
pub async fn notifications(role: Role) -> Result<Vec<Notification>, ServerFnError> {
    if !crate::config::feature_flags().notifications {
        return Ok(Vec::new());
    }
    Ok(crate::notifications::for_role(role))
}

/// Insight text for a view. Falls back to canned text on any upstream failure.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn generate_insight(role: Role, topic: String) -> Result<Insight, ServerFnError> {
    if topic.trim().is_empty() {
        return Err(shared_types::AppError::bad_request("Insight topic is required")
            .into_server_fn_error());
    }
    Ok(crate::insights::generate(role, topic.trim()).await)
}
