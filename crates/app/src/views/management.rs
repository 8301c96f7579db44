use super::{row, stat, DashboardPage, ProfilePage, Row, SectionPage, Stat};
use dioxus::prelude::*;
use shared_types::registry::ViewMeta;
use shared_types::{resolve, ManagementView, Resolved, Role, ViewSet};
use shared_ui::PlaceholderPanel;

const STATS: &[Stat] = &[
    stat("Enrollment", "412", "+4% year over year"),
    stat("Revenue", "$1.84M", "Ahead of target"),
    stat("Staff", "46", "28 teaching, 18 support"),
    stat("Pass rate", "91%", "+3% year over year"),
];

const HIGHLIGHTS: &[Row] = &[
    row("Science lab expansion", "Approved, starts next term"),
    row("Substitute cover", "4% over budget"),
    row("Accreditation review", "Scheduled for March"),
];

const ACADEMIC: &[Row] = &[
    row("Grade 12 exam results", "Average 74%"),
    row("Weakest subject", "Chemistry, Grade 9"),
];

const FINANCIAL: &[Row] = &[
    row("Fee collection", "86% of term invoices"),
    row("Operating costs", "Within 2% of budget"),
];

const STAFF: &[Row] = &[
    row("Retention", "93% over 12 months"),
    row("Open positions", "2 teaching"),
];

const REPORTS: &[Row] = &[
    row("Board pack", "Quarterly"),
    row("Regulator return", "Annual"),
];

const BUDGET: &[Row] = &[
    row("Academics", "On budget"),
    row("Facilities", "6% under budget"),
    row("Staffing", "4% over budget"),
];

const COMPLIANCE: &[Row] = &[
    row("Safeguarding policy", "Reviewed"),
    row("Fire safety audit", "Due in 30 days"),
];

pub(super) fn render(view_id: &str) -> Element {
    let view = match resolve::<ManagementView>(view_id) {
        Resolved::View(view) => view,
        Resolved::Placeholder { view_id } => return rsx! { PlaceholderPanel { view_id: view_id } },
    };
    let meta = view.meta();

    match view {
        ManagementView::Dashboard => rsx! {
            DashboardPage {
                role: Role::Management,
                meta: meta,
                stats: STATS,
                list_title: "Highlights",
                rows: HIGHLIGHTS,
            }
        },
        ManagementView::AcademicAnalytics => section(meta, "Academic trends", ACADEMIC, false),
        ManagementView::FinancialAnalytics => section(meta, "Financial position", FINANCIAL, false),
        ManagementView::StaffAnalytics => section(meta, "Staffing", STAFF, false),
        ManagementView::Reports => section(meta, "Scheduled reports", REPORTS, false),
        ManagementView::Budget => section(meta, "Departments", BUDGET, false),
        ManagementView::Compliance => section(meta, "Checks", COMPLIANCE, false),
        ManagementView::AiForecasts => section(meta, "Assumptions", HIGHLIGHTS, true),
        ManagementView::Profile => rsx! { ProfilePage { meta: meta } },
    }
}

fn section(meta: ViewMeta, list_title: &'static str, rows: &'static [Row], with_insight: bool) -> Element {
    rsx! {
        SectionPage {
            role: Role::Management,
            meta: meta,
            list_title: list_title,
            rows: rows,
            with_insight: with_insight,
        }
    }
}
