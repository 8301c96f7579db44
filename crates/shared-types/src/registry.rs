//! Per-role view registries.
//!
//! Each role has a closed enum of the views its dashboard can render. The
//! navigation state stores the active view as a string id; dispatch parses it
//! back into the role's enum and matches exhaustively. Ids that do not parse
//! resolve to a placeholder instead of failing.

use crate::Role;

/// Static description of a registered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

/// A role's closed set of renderable views.
pub trait ViewSet: Copy + PartialEq + 'static {
    const ROLE: Role;
    const ALL: &'static [Self];

    fn meta(self) -> ViewMeta;

    fn id(self) -> &'static str {
        self.meta().id
    }

    fn title(self) -> &'static str {
        self.meta().title
    }

    fn summary(self) -> &'static str {
        self.meta().summary
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|view| view.id() == id)
    }
}

/// Outcome of resolving a view id against a registry. Always defined.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<V> {
    View(V),
    /// The id is not registered for this role; render the generic
    /// "feature not implemented" page.
    Placeholder { view_id: String },
}

impl<V> Resolved<V> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Resolved::Placeholder { .. })
    }
}

/// Resolve a view id. Total: unknown ids become a placeholder.
pub fn resolve<V: ViewSet>(view_id: &str) -> Resolved<V> {
    match V::from_id(view_id) {
        Some(view) => Resolved::View(view),
        None => Resolved::Placeholder {
            view_id: view_id.to_string(),
        },
    }
}

fn lookup<V: ViewSet>(view_id: &str) -> Option<ViewMeta> {
    V::from_id(view_id).map(ViewSet::meta)
}

/// Role-erased lookup of a registered view's metadata.
pub fn view_meta(role: Role, view_id: &str) -> Option<ViewMeta> {
    match role {
        Role::Admin => lookup::<AdminView>(view_id),
        Role::Teacher => lookup::<TeacherView>(view_id),
        Role::Student => lookup::<StudentView>(view_id),
        Role::Parent => lookup::<ParentView>(view_id),
        Role::Management => lookup::<ManagementView>(view_id),
    }
}

/// Whether `view_id` has a registry entry for `role`.
pub fn registry_contains(role: Role, view_id: &str) -> bool {
    view_meta(role, view_id).is_some()
}

/// Title for the header bar. Unregistered ids fall back to the placeholder title.
pub fn view_title(role: Role, view_id: &str) -> &'static str {
    view_meta(role, view_id)
        .map(|meta| meta.title)
        .unwrap_or(PLACEHOLDER_TITLE)
}

pub const PLACEHOLDER_TITLE: &str = "Coming Soon";

const fn meta(id: &'static str, title: &'static str, summary: &'static str) -> ViewMeta {
    ViewMeta { id, title, summary }
}

// ── Admin ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Dashboard,
    Students,
    Teachers,
    Parents,
    Classes,
    Admissions,
    Fees,
    Reports,
    Settings,
    Profile,
}

impl ViewSet for AdminView {
    const ROLE: Role = Role::Admin;
    const ALL: &'static [Self] = &[
        AdminView::Dashboard,
        AdminView::Students,
        AdminView::Teachers,
        AdminView::Parents,
        AdminView::Classes,
        AdminView::Admissions,
        AdminView::Fees,
        AdminView::Reports,
        AdminView::Settings,
        AdminView::Profile,
    ];

    fn meta(self) -> ViewMeta {
        match self {
            AdminView::Dashboard => meta("dashboard", "Admin Dashboard", "School-wide enrollment, staffing and fee collection at a glance."),
            AdminView::Students => meta("students", "Students", "Add, edit and deactivate student records across all classes."),
            AdminView::Teachers => meta("teachers", "Teachers", "Manage teaching staff, subjects and class assignments."),
            AdminView::Parents => meta("parents", "Parents", "Manage guardian accounts and their links to students."),
            AdminView::Classes => meta("classes", "Classes", "Class sections, homeroom teachers and room allocation."),
            AdminView::Admissions => meta("admissions", "Admissions", "Review applications and enroll new students."),
            AdminView::Fees => meta("fees", "Fee Management", "Fee structures, invoices and outstanding balances."),
            AdminView::Reports => meta("reports", "Reports", "Generate enrollment, attendance and finance reports."),
            AdminView::Settings => meta("settings", "Settings", "Academic year, grading scales and school profile."),
            AdminView::Profile => meta("profile", "My Profile", "Your account details."),
        }
    }
}

// ── Teacher ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherView {
    Dashboard,
    Classes,
    Attendance,
    Gradebook,
    Assignments,
    LessonPlans,
    LessonGenerator,
    QuestionBank,
    StudentInsights,
    Messages,
    Profile,
}

impl ViewSet for TeacherView {
    const ROLE: Role = Role::Teacher;
    const ALL: &'static [Self] = &[
        TeacherView::Dashboard,
        TeacherView::Classes,
        TeacherView::Attendance,
        TeacherView::Gradebook,
        TeacherView::Assignments,
        TeacherView::LessonPlans,
        TeacherView::LessonGenerator,
        TeacherView::QuestionBank,
        TeacherView::StudentInsights,
        TeacherView::Messages,
        TeacherView::Profile,
    ];

    fn meta(self) -> ViewMeta {
        match self {
            TeacherView::Dashboard => meta("dashboard", "Teacher Dashboard", "Today's classes, pending grading and attendance alerts."),
            TeacherView::Classes => meta("classes", "My Classes", "Rosters and subject details for the classes you teach."),
            TeacherView::Attendance => meta("attendance", "Attendance", "Mark and review daily attendance per class."),
            TeacherView::Gradebook => meta("gradebook", "Gradebook", "Enter marks and track per-subject averages."),
            TeacherView::Assignments => meta("assignments", "Assignments", "Create assignments and review submissions."),
            TeacherView::LessonPlans => meta("lessonPlans", "Lesson Plans", "Plan lessons across the term."),
            TeacherView::LessonGenerator => meta("lessonGenerator", "Lesson Generator", "Draft a lesson outline for a topic."),
            TeacherView::QuestionBank => meta("questionBank", "Question Bank", "Reusable questions grouped by subject and difficulty."),
            TeacherView::StudentInsights => meta("studentInsights", "Student Insights", "Patterns in performance and attendance for your classes."),
            TeacherView::Messages => meta("messages", "Messages", "Conversations with students and parents."),
            TeacherView::Profile => meta("profile", "My Profile", "Your account details."),
        }
    }
}

// ── Student ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentView {
    Dashboard,
    Courses,
    Assignments,
    StudyMaterials,
    AiTutor,
    QuizGenerator,
    StudyPlanner,
    Grades,
    Attendance,
    Timetable,
    Profile,
}

impl ViewSet for StudentView {
    const ROLE: Role = Role::Student;
    const ALL: &'static [Self] = &[
        StudentView::Dashboard,
        StudentView::Courses,
        StudentView::Assignments,
        StudentView::StudyMaterials,
        StudentView::AiTutor,
        StudentView::QuizGenerator,
        StudentView::StudyPlanner,
        StudentView::Grades,
        StudentView::Attendance,
        StudentView::Timetable,
        StudentView::Profile,
    ];

    fn meta(self) -> ViewMeta {
        match self {
            StudentView::Dashboard => meta("dashboard", "Student Dashboard", "Upcoming work, recent grades and your attendance."),
            StudentView::Courses => meta("courses", "My Courses", "Subjects you are enrolled in this term."),
            StudentView::Assignments => meta("assignments", "Assignments", "Due dates, submissions and feedback."),
            StudentView::StudyMaterials => meta("studyMaterials", "Study Materials", "Notes and resources shared by your teachers."),
            StudentView::AiTutor => meta("aiTutor", "AI Tutor", "Ask for an explanation of a topic."),
            StudentView::QuizGenerator => meta("quizGenerator", "Quiz Generator", "Practice questions for a topic."),
            StudentView::StudyPlanner => meta("studyPlanner", "Study Planner", "A weekly plan built around your deadlines."),
            StudentView::Grades => meta("grades", "Grades", "Marks per subject and term."),
            StudentView::Attendance => meta("attendance", "Attendance", "Your attendance record."),
            StudentView::Timetable => meta("timetable", "Timetable", "Your weekly class schedule."),
            StudentView::Profile => meta("profile", "My Profile", "Your account details."),
        }
    }
}

// ── Parent ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentView {
    Dashboard,
    Children,
    Progress,
    Attendance,
    Fees,
    Messages,
    Meetings,
    AiInsights,
    Profile,
}

impl ViewSet for ParentView {
    const ROLE: Role = Role::Parent;
    const ALL: &'static [Self] = &[
        ParentView::Dashboard,
        ParentView::Children,
        ParentView::Progress,
        ParentView::Attendance,
        ParentView::Fees,
        ParentView::Messages,
        ParentView::Meetings,
        ParentView::AiInsights,
        ParentView::Profile,
    ];

    fn meta(self) -> ViewMeta {
        match self {
            ParentView::Dashboard => meta("dashboard", "Parent Dashboard", "Your children's week at school."),
            ParentView::Children => meta("children", "My Children", "Profiles and class details for each child."),
            ParentView::Progress => meta("progress", "Academic Progress", "Grades and teacher comments over the term."),
            ParentView::Attendance => meta("attendance", "Attendance", "Daily attendance and absence notes."),
            ParentView::Fees => meta("fees", "Fee Payments", "Invoices, receipts and balances."),
            ParentView::Messages => meta("messages", "Messages", "Conversations with teachers and the school office."),
            ParentView::Meetings => meta("meetings", "Meetings", "Parent-teacher meeting bookings."),
            ParentView::AiInsights => meta("aiInsights", "AI Insights", "A summary of how your children are doing."),
            ParentView::Profile => meta("profile", "My Profile", "Your account details."),
        }
    }
}

// ── Management ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagementView {
    Dashboard,
    AcademicAnalytics,
    FinancialAnalytics,
    StaffAnalytics,
    Reports,
    Budget,
    Compliance,
    AiForecasts,
    Profile,
}

impl ViewSet for ManagementView {
    const ROLE: Role = Role::Management;
    const ALL: &'static [Self] = &[
        ManagementView::Dashboard,
        ManagementView::AcademicAnalytics,
        ManagementView::FinancialAnalytics,
        ManagementView::StaffAnalytics,
        ManagementView::Reports,
        ManagementView::Budget,
        ManagementView::Compliance,
        ManagementView::AiForecasts,
        ManagementView::Profile,
    ];

    fn meta(self) -> ViewMeta {
        match self {
            ManagementView::Dashboard => meta("dashboard", "Management Dashboard", "Institution health across academics, finance and staff."),
            ManagementView::AcademicAnalytics => meta("academicAnalytics", "Academic Analytics", "Performance trends by class cohort and subject."),
            ManagementView::FinancialAnalytics => meta("financialAnalytics", "Financial Analytics", "Revenue, expenses and collection rates."),
            ManagementView::StaffAnalytics => meta("staffAnalytics", "Staff Analytics", "Staffing levels, workload and retention."),
            ManagementView::Reports => meta("reports", "Reports", "Board and regulator reports."),
            ManagementView::Budget => meta("budget", "Budget", "Departmental budgets against actuals."),
            ManagementView::Compliance => meta("compliance", "Compliance", "Accreditation and policy compliance status."),
            ManagementView::AiForecasts => meta("aiForecasts", "AI Forecasts", "Projected enrollment and revenue."),
            ManagementView::Profile => meta("profile", "My Profile", "Your account details."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{leaves, menu_for};
    use crate::ALL_ROLES;
    use std::collections::HashSet;

    fn assert_ids_unique<V: ViewSet + std::fmt::Debug>() {
        let mut seen = HashSet::new();
        for view in V::ALL {
            assert!(seen.insert(view.id()), "{:?}: duplicate id {}", V::ROLE, view.id());
        }
    }

    #[test]
    fn view_ids_unique_within_each_registry() {
        assert_ids_unique::<AdminView>();
        assert_ids_unique::<TeacherView>();
        assert_ids_unique::<StudentView>();
        assert_ids_unique::<ParentView>();
        assert_ids_unique::<ManagementView>();
    }

    #[test]
    fn every_menu_leaf_resolves_in_its_role_registry() {
        for role in ALL_ROLES {
            for leaf in leaves(menu_for(*role)) {
                assert!(
                    registry_contains(*role, leaf.view),
                    "{role}: menu item {:?} points at unregistered view {:?}",
                    leaf.label,
                    leaf.view
                );
            }
        }
    }

    #[test]
    fn unknown_view_resolves_to_placeholder_for_every_role() {
        assert!(resolve::<AdminView>("nonexistentView").is_placeholder());
        assert!(resolve::<TeacherView>("nonexistentView").is_placeholder());
        assert!(resolve::<StudentView>("nonexistentView").is_placeholder());
        assert!(resolve::<ParentView>("nonexistentView").is_placeholder());
        assert!(resolve::<ManagementView>("nonexistentView").is_placeholder());
        for role in ALL_ROLES {
            assert!(!registry_contains(*role, "nonexistentView"));
            assert_eq!(view_title(*role, "nonexistentView"), PLACEHOLDER_TITLE);
        }
    }

    #[test]
    fn placeholder_keeps_the_requested_id() {
        assert_eq!(
            resolve::<StudentView>("gradebook"),
            Resolved::Placeholder {
                view_id: "gradebook".to_string()
            }
        );
    }

    #[test]
    fn resolution_is_exact_and_case_sensitive() {
        assert_eq!(
            resolve::<StudentView>("studyMaterials"),
            Resolved::View(StudentView::StudyMaterials)
        );
        assert!(resolve::<StudentView>("studymaterials").is_placeholder());
        assert!(resolve::<StudentView>("").is_placeholder());
    }

    #[test]
    fn same_id_resolves_per_role() {
        assert_eq!(resolve::<AdminView>("classes"), Resolved::View(AdminView::Classes));
        assert_eq!(resolve::<TeacherView>("classes"), Resolved::View(TeacherView::Classes));
        assert!(resolve::<ManagementView>("classes").is_placeholder());
    }

    #[test]
    fn every_registry_has_dashboard_and_profile() {
        for role in ALL_ROLES {
            assert!(registry_contains(*role, role.default_view()));
            assert!(registry_contains(*role, "profile"));
        }
    }
}
