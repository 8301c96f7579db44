use super::{row, stat, DashboardPage, ProfilePage, Row, SectionPage, Stat};
use dioxus::prelude::*;
use shared_types::registry::ViewMeta;
use shared_types::{resolve, AdminView, Resolved, Role, ViewSet};
use shared_ui::PlaceholderPanel;

const STATS: &[Stat] = &[
    stat("Students", "412", "+18 this term"),
    stat("Teachers", "28", "2 positions open"),
    stat("Classes", "18", "Grades 6 to 12"),
    stat("Fee collection", "86%", "Term 2 to date"),
];

const RECENT_ADMISSIONS: &[Row] = &[
    row("Kofi Asante", "Grade 7, awaiting interview"),
    row("Lina Haddad", "Grade 9, documents received"),
    row("Mateo Silva", "Grade 6, offer sent"),
];

const STUDENTS: &[Row] = &[
    row("Amara Okafor", "Grade 8B"),
    row("Jonah Whitfield", "Grade 8B"),
    row("Priya Nair", "Grade 10A"),
];

const TEACHERS: &[Row] = &[
    row("Daniel Reyes", "Mathematics, Grade 8"),
    row("Sunita Patel", "Biology, Grades 9 to 10"),
    row("Marcus Bell", "History, Grade 11"),
];

const PARENTS: &[Row] = &[
    row("Helen Okafor", "Guardian of Amara Okafor"),
    row("Tomas Whitfield", "Guardian of Jonah Whitfield"),
];

const CLASSES: &[Row] = &[
    row("Grade 8B", "Homeroom: Daniel Reyes, Room 204"),
    row("Grade 10A", "Homeroom: Sunita Patel, Lab 2"),
];

const FEES: &[Row] = &[
    row("Term 2 tuition", "42 balances outstanding"),
    row("Transport", "All invoices settled"),
];

const REPORTS: &[Row] = &[
    row("Enrollment summary", "Generated weekly"),
    row("Attendance by class", "Generated daily"),
    row("Fee collection", "Generated monthly"),
];

const SETTINGS: &[Row] = &[
    row("Academic year", "2026 to 2027"),
    row("Grading scale", "A to F with plus and minus"),
];

pub(super) fn render(view_id: &str) -> Element {
    let view = match resolve::<AdminView>(view_id) {
        Resolved::View(view) => view,
        Resolved::Placeholder { view_id } => return rsx! { PlaceholderPanel { view_id: view_id } },
    };
    let meta = view.meta();

    match view {
        AdminView::Dashboard => rsx! {
            DashboardPage {
                role: Role::Admin,
                meta: meta,
                stats: STATS,
                list_title: "Recent admissions",
                rows: RECENT_ADMISSIONS,
            }
        },
        AdminView::Students => section(meta, "Enrolled students", STUDENTS, false),
        AdminView::Teachers => section(meta, "Teaching staff", TEACHERS, false),
        AdminView::Parents => section(meta, "Guardian accounts", PARENTS, false),
        AdminView::Classes => section(meta, "Class sections", CLASSES, false),
        AdminView::Admissions => section(meta, "Open applications", RECENT_ADMISSIONS, true),
        AdminView::Fees => section(meta, "Fee status", FEES, true),
        AdminView::Reports => section(meta, "Available reports", REPORTS, false),
        AdminView::Settings => section(meta, "School settings", SETTINGS, false),
        AdminView::Profile => rsx! { ProfilePage { meta: meta } },
    }
}

fn section(meta: ViewMeta, list_title: &'static str, rows: &'static [Row], with_insight: bool) -> Element {
    rsx! {
        SectionPage {
            role: Role::Admin,
            meta: meta,
            list_title: list_title,
            rows: rows,
            with_insight: with_insight,
        }
    }
}
