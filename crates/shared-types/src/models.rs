use serde::{Deserialize, Serialize};
use std::fmt;

/// Institution role. Each role owns one menu and one view registry.
///
/// - `Admin`: school office: users, classes, admissions, fees.
/// - `Teacher`: classes, attendance, grading, lesson planning.
/// - `Student`: courses, assignments, study materials and tools.
/// - `Parent`: children's progress, attendance, fees, school contact.
/// - `Management`: institution-wide analytics and forecasts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Parent,
    Management,
}

/// All roles in role-selection display order.
pub const ALL_ROLES: &[Role] = &[
    Role::Admin,
    Role::Teacher,
    Role::Student,
    Role::Parent,
    Role::Management,
];

/// View every role lands on after sign-in.
pub const DEFAULT_VIEW: &str = "dashboard";

impl Role {
    /// Lowercase key used for storage and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Management => "management",
        }
    }

    /// Parse a role key, case-insensitive. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            "parent" => Some(Role::Parent),
            "management" => Some(Role::Management),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Management => "Management",
        }
    }

    /// The view a fresh navigation state starts on.
    pub fn default_view(&self) -> &'static str {
        DEFAULT_VIEW
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The signed-in user as seen by the navigation core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    /// Up to two uppercase initials for the header avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Credentials submitted from the role-selection screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    pub role: Role,
}

/// A demo account advertised on the sign-in screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoAccount {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// One entry in the header notification flyout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub body: String,
    /// Human-readable age, e.g. "2h ago".
    pub age: String,
    pub unread: bool,
}

/// Count of unread notifications, shown on the bell badge.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| n.unread).count()
}

/// Where an insight's text came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InsightSource {
    /// Returned by the remote text-generation service.
    Generated,
    /// Pre-written text shipped with the app.
    Canned,
}

/// An "AI insight" text block shown inside a view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub role: Role,
    pub topic: String,
    pub text: String,
    pub source: InsightSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_known_values() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Teacher"), Some(Role::Teacher));
        assert_eq!(Role::parse(" STUDENT "), Some(Role::Student));
        assert_eq!(Role::parse("parent"), Some(Role::Parent));
        assert_eq!(Role::parse("Management"), Some(Role::Management));
    }

    #[test]
    fn role_parse_unknown_is_none() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("principal"), None);
    }

    #[test]
    fn role_as_str_parses_back() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn every_role_defaults_to_dashboard() {
        for role in ALL_ROLES {
            assert_eq!(role.default_view(), "dashboard");
        }
    }

    #[test]
    fn session_user_deserializes_from_stored_json() {
        let json = r#"{"name":"Amara Okafor","email":"student@intelliskool.edu","role":"Student"}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.initials(), "AO");
    }

    #[test]
    fn unread_count_ignores_read_items() {
        let make = |id, unread| Notification {
            id,
            title: "t".into(),
            body: "b".into(),
            age: "1h ago".into(),
            unread,
        };
        assert_eq!(unread_count(&[make(1, true), make(2, false), make(3, true)]), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn initials_handles_single_and_empty_names() {
        let mut user = SessionUser {
            name: "principal".into(),
            email: "p@intelliskool.edu".into(),
            role: Role::Management,
        };
        assert_eq!(user.initials(), "P");
        user.name = String::new();
        assert_eq!(user.initials(), "");
    }
}
