//! Hardcoded demo accounts standing in for a user store.

use shared_types::{AppError, DemoAccount, LoginRequest, Role, SessionUser};

struct Account {
    role: Role,
    name: &'static str,
    email: &'static str,
    password: &'static str,
}

const ACCOUNTS: &[Account] = &[
    Account {
        role: Role::Admin,
        name: "Grace Mensah",
        email: "admin@intelliskool.edu",
        password: "admin123",
    },
    Account {
        role: Role::Teacher,
        name: "Daniel Reyes",
        email: "teacher@intelliskool.edu",
        password: "teacher123",
    },
    Account {
        role: Role::Student,
        name: "Amara Okafor",
        email: "student@intelliskool.edu",
        password: "student123",
    },
    Account {
        role: Role::Parent,
        name: "Helen Okafor",
        email: "parent@intelliskool.edu",
        password: "parent123",
    },
    Account {
        role: Role::Management,
        name: "Vikram Shah",
        email: "principal@intelliskool.edu",
        password: "manage123",
    },
];

impl Account {
    fn session_user(&self) -> SessionUser {
        SessionUser {
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role,
        }
    }
}

/// Check credentials against the directory.
///
/// Email matches case-insensitively, password exactly. The account must
/// belong to the role picked on the sign-in screen.
pub fn authenticate(req: &LoginRequest) -> Result<SessionUser, AppError> {
    let email = req.email.trim();
    let account = ACCOUNTS
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == req.password)
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    if account.role != req.role {
        return Err(AppError::forbidden(format!(
            "This account is not a {} account",
            req.role
        )));
    }
    Ok(account.session_user())
}

/// Accounts listed on the sign-in screen, in role order.
pub fn demo_accounts() -> Vec<DemoAccount> {
    ACCOUNTS
        .iter()
        .map(|a| DemoAccount {
            role: a.role,
            name: a.name.to_string(),
            email: a.email.to_string(),
            password: a.password.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, ALL_ROLES};

    #[test]
    fn every_role_has_a_demo_account() {
        let accounts = demo_accounts();
        for role in ALL_ROLES {
            assert!(accounts.iter().any(|a| a.role == *role), "no account for {role}");
        }
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let err = authenticate(&LoginRequest {
            email: "admin@intelliskool.edu".into(),
            password: "nope".into(),
            role: Role::Admin,
        })
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }
}
