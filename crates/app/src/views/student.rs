use super::{row, stat, DashboardPage, ProfilePage, Row, SectionPage, Stat};
use dioxus::prelude::*;
use shared_types::registry::ViewMeta;
use shared_types::{resolve, Resolved, Role, StudentView, ViewSet};
use shared_ui::PlaceholderPanel;

const STATS: &[Stat] = &[
    stat("Courses", "6", "Term 2"),
    stat("Due this week", "3", "Next: Algebra worksheet 4"),
    stat("Attendance", "96%", "2 absences this term"),
    stat("Average grade", "B+", "Up from B last term"),
];

const UPCOMING: &[Row] = &[
    row("Algebra worksheet 4", "Due tomorrow, 9:00 AM"),
    row("History essay", "Due Friday"),
    row("Biology quiz", "Next Tuesday"),
];

const COURSES: &[Row] = &[
    row("Mathematics", "Mr. Reyes"),
    row("Biology", "Ms. Patel"),
    row("History", "Mr. Bell"),
    row("English", "Ms. Adeyemi"),
];

const MATERIALS: &[Row] = &[
    row("Cell Structure notes", "Biology, shared 5h ago"),
    row("Ratios cheat sheet", "Mathematics"),
];

const GRADES: &[Row] = &[
    row("Mathematics", "B"),
    row("Biology", "A-"),
    row("History", "B+"),
];

const ATTENDANCE: &[Row] = &[
    row("This term", "96% present"),
    row("Last absence", "Excused, medical"),
];

const TIMETABLE: &[Row] = &[
    row("Monday", "Maths, Biology, English, PE"),
    row("Tuesday", "History, Maths, Chemistry, Art"),
];

const NONE: &[Row] = &[];

pub(super) fn render(view_id: &str) -> Element {
    let view = match resolve::<StudentView>(view_id) {
        Resolved::View(view) => view,
        Resolved::Placeholder { view_id } => return rsx! { PlaceholderPanel { view_id: view_id } },
    };
    let meta = view.meta();

    match view {
        StudentView::Dashboard => rsx! {
            DashboardPage {
                role: Role::Student,
                meta: meta,
                stats: STATS,
                list_title: "Coming up",
                rows: UPCOMING,
            }
        },
        StudentView::Courses => section(meta, "Enrolled courses", COURSES, false),
        StudentView::Assignments => section(meta, "Assignments", UPCOMING, false),
        StudentView::StudyMaterials => section(meta, "Latest materials", MATERIALS, false),
        StudentView::AiTutor => section(meta, "Recent questions", NONE, true),
        StudentView::QuizGenerator => section(meta, "Saved quizzes", NONE, true),
        StudentView::StudyPlanner => section(meta, "Deadlines", UPCOMING, true),
        StudentView::Grades => section(meta, "Current grades", GRADES, false),
        StudentView::Attendance => section(meta, "Attendance record", ATTENDANCE, false),
        StudentView::Timetable => section(meta, "This week", TIMETABLE, false),
        StudentView::Profile => rsx! { ProfilePage { meta: meta } },
    }
}

fn section(meta: ViewMeta, list_title: &'static str, rows: &'static [Row], with_insight: bool) -> Element {
    rsx! {
        SectionPage {
            role: Role::Student,
            meta: meta,
            list_title: list_title,
            rows: rows,
            with_insight: with_insight,
        }
    }
}
