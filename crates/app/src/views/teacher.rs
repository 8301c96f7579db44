use super::{row, stat, DashboardPage, ProfilePage, Row, SectionPage, Stat};
use dioxus::prelude::*;
use shared_types::registry::ViewMeta;
use shared_types::{resolve, Resolved, Role, TeacherView, ViewSet};
use shared_ui::PlaceholderPanel;

const STATS: &[Stat] = &[
    stat("Classes today", "4", "Next: Grade 8B at 10:30"),
    stat("To grade", "18", "Photosynthesis lab report"),
    stat("Attendance", "94%", "Across your classes this week"),
    stat("Class average", "78%", "Up 2% on last month"),
];

const SCHEDULE: &[Row] = &[
    row("08:30 Grade 7A", "Mathematics, Room 201"),
    row("10:30 Grade 8B", "Mathematics, Room 204"),
    row("13:00 Grade 9C", "Statistics, Room 204"),
    row("14:45 Grade 8A", "Mathematics, Room 203"),
];

const CLASSES: &[Row] = &[
    row("Grade 7A", "31 students"),
    row("Grade 8A", "29 students"),
    row("Grade 8B", "30 students"),
    row("Grade 9C", "27 students"),
];

const ATTENDANCE: &[Row] = &[
    row("Grade 8B, Period 3", "Not yet marked"),
    row("Grade 7A, Period 1", "29 of 31 present"),
];

const GRADEBOOK: &[Row] = &[
    row("Algebra quiz 3", "Average 81%"),
    row("Fractions test", "Average 64%"),
];

const ASSIGNMENTS: &[Row] = &[
    row("Photosynthesis lab report", "18 submissions to grade"),
    row("Algebra worksheet 4", "Due tomorrow"),
];

const LESSON_PLANS: &[Row] = &[
    row("Week 6: Ratios", "Draft"),
    row("Week 7: Percentages", "Not started"),
];

const QUESTION_BANK: &[Row] = &[
    row("Fractions", "42 questions"),
    row("Algebraic expressions", "35 questions"),
];

const MESSAGES: &[Row] = &[
    row("Helen Okafor", "Question about Amara's homework"),
    row("Front office", "Staff meeting moved to Thursday"),
];

const NONE: &[Row] = &[];

pub(super) fn render(view_id: &str) -> Element {
    let view = match resolve::<TeacherView>(view_id) {
        Resolved::View(view) => view,
        Resolved::Placeholder { view_id } => return rsx! { PlaceholderPanel { view_id: view_id } },
    };
    let meta = view.meta();

    match view {
        TeacherView::Dashboard => rsx! {
            DashboardPage {
                role: Role::Teacher,
                meta: meta,
                stats: STATS,
                list_title: "Today's schedule",
                rows: SCHEDULE,
            }
        },
        TeacherView::Classes => section(meta, "Your classes", CLASSES, false),
        TeacherView::Attendance => section(meta, "Registers", ATTENDANCE, false),
        TeacherView::Gradebook => section(meta, "Recent assessments", GRADEBOOK, false),
        TeacherView::Assignments => section(meta, "Open assignments", ASSIGNMENTS, false),
        TeacherView::LessonPlans => section(meta, "Upcoming lessons", LESSON_PLANS, false),
        TeacherView::LessonGenerator => section(meta, "Saved outlines", NONE, true),
        TeacherView::QuestionBank => section(meta, "Topics", QUESTION_BANK, true),
        TeacherView::StudentInsights => section(meta, "Students to watch", NONE, true),
        TeacherView::Messages => section(meta, "Inbox", MESSAGES, false),
        TeacherView::Profile => rsx! { ProfilePage { meta: meta } },
    }
}

fn section(meta: ViewMeta, list_title: &'static str, rows: &'static [Row], with_insight: bool) -> Element {
    rsx! {
        SectionPage {
            role: Role::Teacher,
            meta: meta,
            list_title: list_title,
            rows: rows,
            with_insight: with_insight,
        }
    }
}
