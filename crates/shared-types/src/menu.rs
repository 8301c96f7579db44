//! Per-role navigation menus.
//!
//! Menus are static tables built once at compile time. A menu is at most two
//! levels deep: top-level items are either navigable leaves or groups whose
//! children are leaves.

use crate::Role;

/// Icon reference for a menu entry. Not interpreted by navigation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    People,
    Person,
    Enroll,
    Book,
    Checklist,
    Calendar,
    Clock,
    Document,
    Folder,
    Message,
    Sparkles,
    Trend,
    Wallet,
    Settings,
    Shield,
    Graduation,
}

/// A navigable entry bound to a view id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLeaf {
    pub label: &'static str,
    pub icon: MenuIcon,
    pub view: &'static str,
}

/// An expandable header. It has no view of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: &'static str,
    pub icon: MenuIcon,
    pub children: &'static [MenuLeaf],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Leaf(MenuLeaf),
    Group(MenuGroup),
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Leaf(leaf) => leaf.label,
            MenuItem::Group(group) => group.label,
        }
    }

    pub fn icon(&self) -> MenuIcon {
        match self {
            MenuItem::Leaf(leaf) => leaf.icon,
            MenuItem::Group(group) => group.icon,
        }
    }

    /// The view id for leaves; groups have none.
    pub fn view(&self) -> Option<&'static str> {
        match self {
            MenuItem::Leaf(leaf) => Some(leaf.view),
            MenuItem::Group(_) => None,
        }
    }
}

const fn leaf(label: &'static str, icon: MenuIcon, view: &'static str) -> MenuItem {
    MenuItem::Leaf(MenuLeaf { label, icon, view })
}

const fn group(label: &'static str, icon: MenuIcon, children: &'static [MenuLeaf]) -> MenuItem {
    MenuItem::Group(MenuGroup {
        label,
        icon,
        children,
    })
}

pub const ADMIN_MENU: &[MenuItem] = &[
    leaf("Dashboard", MenuIcon::Dashboard, "dashboard"),
    group(
        "User Management",
        MenuIcon::People,
        &[
            MenuLeaf { label: "Students", icon: MenuIcon::Graduation, view: "students" },
            MenuLeaf { label: "Teachers", icon: MenuIcon::Person, view: "teachers" },
            MenuLeaf { label: "Parents", icon: MenuIcon::People, view: "parents" },
        ],
    ),
    leaf("Classes", MenuIcon::Book, "classes"),
    leaf("Admissions", MenuIcon::Enroll, "admissions"),
    leaf("Fee Management", MenuIcon::Wallet, "fees"),
    leaf("Reports", MenuIcon::Document, "reports"),
    leaf("Settings", MenuIcon::Settings, "settings"),
];

pub const TEACHER_MENU: &[MenuItem] = &[
    leaf("Dashboard", MenuIcon::Dashboard, "dashboard"),
    leaf("My Classes", MenuIcon::Book, "classes"),
    leaf("Attendance", MenuIcon::Checklist, "attendance"),
    leaf("Gradebook", MenuIcon::Graduation, "gradebook"),
    leaf("Assignments", MenuIcon::Document, "assignments"),
    leaf("Lesson Plans", MenuIcon::Calendar, "lessonPlans"),
    group(
        "AI Teaching Tools",
        MenuIcon::Sparkles,
        &[
            MenuLeaf { label: "Lesson Generator", icon: MenuIcon::Sparkles, view: "lessonGenerator" },
            MenuLeaf { label: "Question Bank", icon: MenuIcon::Folder, view: "questionBank" },
            MenuLeaf { label: "Student Insights", icon: MenuIcon::Trend, view: "studentInsights" },
        ],
    ),
    leaf("Messages", MenuIcon::Message, "messages"),
];

pub const STUDENT_MENU: &[MenuItem] = &[
    leaf("Dashboard", MenuIcon::Dashboard, "dashboard"),
    leaf("My Courses", MenuIcon::Book, "courses"),
    leaf("Assignments", MenuIcon::Document, "assignments"),
    leaf("Study Materials", MenuIcon::Folder, "studyMaterials"),
    group(
        "AI Study Tools",
        MenuIcon::Sparkles,
        &[
            MenuLeaf { label: "AI Tutor", icon: MenuIcon::Sparkles, view: "aiTutor" },
            MenuLeaf { label: "Quiz Generator", icon: MenuIcon::Checklist, view: "quizGenerator" },
            MenuLeaf { label: "Study Planner", icon: MenuIcon::Calendar, view: "studyPlanner" },
        ],
    ),
    leaf("Grades", MenuIcon::Graduation, "grades"),
    leaf("Attendance", MenuIcon::Checklist, "attendance"),
    leaf("Timetable", MenuIcon::Clock, "timetable"),
];

pub const PARENT_MENU: &[MenuItem] = &[
    leaf("Dashboard", MenuIcon::Dashboard, "dashboard"),
    leaf("My Children", MenuIcon::People, "children"),
    leaf("Academic Progress", MenuIcon::Trend, "progress"),
    leaf("Attendance", MenuIcon::Checklist, "attendance"),
    leaf("Fee Payments", MenuIcon::Wallet, "fees"),
    group(
        "Communication",
        MenuIcon::Message,
        &[
            MenuLeaf { label: "Messages", icon: MenuIcon::Message, view: "messages" },
            MenuLeaf { label: "Meetings", icon: MenuIcon::Calendar, view: "meetings" },
        ],
    ),
    leaf("AI Insights", MenuIcon::Sparkles, "aiInsights"),
];

pub const MANAGEMENT_MENU: &[MenuItem] = &[
    leaf("Dashboard", MenuIcon::Dashboard, "dashboard"),
    group(
        "Analytics",
        MenuIcon::Trend,
        &[
            MenuLeaf { label: "Academic Analytics", icon: MenuIcon::Graduation, view: "academicAnalytics" },
            MenuLeaf { label: "Financial Analytics", icon: MenuIcon::Wallet, view: "financialAnalytics" },
            MenuLeaf { label: "Staff Analytics", icon: MenuIcon::People, view: "staffAnalytics" },
        ],
    ),
    leaf("Reports", MenuIcon::Document, "reports"),
    leaf("Budget", MenuIcon::Wallet, "budget"),
    leaf("Compliance", MenuIcon::Shield, "compliance"),
    leaf("AI Forecasts", MenuIcon::Sparkles, "aiForecasts"),
];

/// The static menu for a role.
pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Teacher => TEACHER_MENU,
        Role::Student => STUDENT_MENU,
        Role::Parent => PARENT_MENU,
        Role::Management => MANAGEMENT_MENU,
    }
}

/// Every leaf in a menu, top-level leaves and group children, in order.
pub fn leaves(menu: &'static [MenuItem]) -> impl Iterator<Item = &'static MenuLeaf> {
    menu.iter().flat_map(|item| match item {
        MenuItem::Leaf(leaf) => std::slice::from_ref(leaf).iter(),
        MenuItem::Group(group) => group.children.iter(),
    })
}

/// Find the leaf bound to `view`, if the menu has one.
pub fn find_leaf(menu: &'static [MenuItem], view: &str) -> Option<&'static MenuLeaf> {
    leaves(menu).find(|leaf| leaf.view == view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_ROLES;
    use std::collections::HashSet;

    #[test]
    fn sibling_labels_are_unique() {
        for role in ALL_ROLES {
            let menu = menu_for(*role);
            let mut top = HashSet::new();
            for item in menu {
                assert!(top.insert(item.label()), "{role}: duplicate {}", item.label());
                if let MenuItem::Group(group) = item {
                    let mut inner = HashSet::new();
                    for leaf in group.children {
                        assert!(inner.insert(leaf.label), "{role}: duplicate {}", leaf.label);
                    }
                }
            }
        }
    }

    #[test]
    fn groups_are_never_empty() {
        for role in ALL_ROLES {
            for item in menu_for(*role) {
                if let MenuItem::Group(group) = item {
                    assert!(!group.children.is_empty(), "{role}: empty {}", group.label);
                }
            }
        }
    }

    #[test]
    fn every_menu_starts_at_the_default_view() {
        for role in ALL_ROLES {
            let first = menu_for(*role)[0];
            assert_eq!(first.view(), Some(role.default_view()));
        }
    }

    #[test]
    fn leaves_include_group_children() {
        let views: Vec<&str> = leaves(STUDENT_MENU).map(|l| l.view).collect();
        assert!(views.contains(&"studyMaterials"));
        assert!(views.contains(&"aiTutor"));
        assert!(!views.iter().any(|v| *v == "AI Study Tools"));
    }

    #[test]
    fn find_leaf_by_view() {
        let leaf = find_leaf(STUDENT_MENU, "studyMaterials").unwrap();
        assert_eq!(leaf.label, "Study Materials");
        assert!(find_leaf(STUDENT_MENU, "gradebook").is_none());
    }

    #[test]
    fn group_has_no_view() {
        let group = STUDENT_MENU
            .iter()
            .find(|item| item.label() == "AI Study Tools")
            .unwrap();
        assert_eq!(group.view(), None);
    }
}
