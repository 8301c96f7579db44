use super::{row, stat, DashboardPage, ProfilePage, Row, SectionPage, Stat};
use dioxus::prelude::*;
use shared_types::registry::ViewMeta;
use shared_types::{resolve, ParentView, Resolved, Role, ViewSet};
use shared_ui::PlaceholderPanel;

const STATS: &[Stat] = &[
    stat("Children", "1", "Amara, Grade 8B"),
    stat("Attendance", "96%", "This term"),
    stat("Balance due", "$240", "Term 2 tuition"),
    stat("Next meeting", "Thu", "Parent-teacher, 4:00 PM"),
];

const THIS_WEEK: &[Row] = &[
    row("Algebra worksheet 4", "Due tomorrow"),
    row("Science fair", "Friday, main hall"),
];

const CHILDREN: &[Row] = &[row("Amara Okafor", "Grade 8B, homeroom Mr. Reyes")];

const PROGRESS: &[Row] = &[
    row("Mathematics", "B, needs practice with fractions"),
    row("Biology", "A-, excellent lab work"),
    row("English", "B+, improving"),
];

const ATTENDANCE: &[Row] = &[
    row("This term", "96% present"),
    row("Absences", "2, both excused"),
];

const FEES: &[Row] = &[
    row("Term 2 tuition", "$240 outstanding"),
    row("Term 1 tuition", "Paid"),
];

const MESSAGES: &[Row] = &[row("Daniel Reyes", "Re: homework support")];

const MEETINGS: &[Row] = &[row("Parent-teacher conference", "Thursday 4:00 PM, Room 204")];

pub(super) fn render(view_id: &str) -> Element {
    let view = match resolve::<ParentView>(view_id) {
        Resolved::View(view) => view,
        Resolved::Placeholder { view_id } => return rsx! { PlaceholderPanel { view_id: view_id } },
    };
    let meta = view.meta();

    match view {
        ParentView::Dashboard => rsx! {
            DashboardPage {
                role: Role::Parent,
                meta: meta,
                stats: STATS,
                list_title: "This week",
                rows: THIS_WEEK,
            }
        },
        ParentView::Children => section(meta, "Linked children", CHILDREN, false),
        ParentView::Progress => section(meta, "Subjects", PROGRESS, false),
        ParentView::Attendance => section(meta, "Attendance", ATTENDANCE, false),
        ParentView::Fees => section(meta, "Invoices", FEES, false),
        ParentView::Messages => section(meta, "Inbox", MESSAGES, false),
        ParentView::Meetings => section(meta, "Booked meetings", MEETINGS, false),
        ParentView::AiInsights => section(meta, "Highlights", PROGRESS, true),
        ParentView::Profile => rsx! { ProfilePage { meta: meta } },
    }
}

fn section(meta: ViewMeta, list_title: &'static str, rows: &'static [Row], with_insight: bool) -> Element {
    rsx! {
        SectionPage {
            role: Role::Parent,
            meta: meta,
            list_title: list_title,
            rows: rows,
            with_insight: with_insight,
        }
    }
}
