//! Role-specific notification feed for the header flyout. Display-only.

use shared_types::{Notification, Role};

fn note(id: u32, title: &str, body: &str, age: &str, unread: bool) -> Notification {
    Notification {
        id,
        title: title.to_string(),
        body: body.to_string(),
        age: age.to_string(),
        unread,
    }
}

pub fn for_role(role: Role) -> Vec<Notification> {
    match role {
        Role::Admin => vec![
            note(1, "New admission application", "Three applications are awaiting review for Grade 7.", "15m ago", true),
            note(2, "Fee reminder batch sent", "Reminders went to 42 families with overdue balances.", "2h ago", true),
            note(3, "Timetable published", "The term timetable is now visible to staff and students.", "1d ago", false),
        ],
        Role::Teacher => vec![
            note(1, "Assignments to grade", "18 submissions for 'Photosynthesis Lab Report' are waiting.", "30m ago", true),
            note(2, "Attendance not marked", "Period 3 attendance for Grade 8B is still open.", "3h ago", false),
        ],
        Role::Student => vec![
            note(1, "Assignment due tomorrow", "Algebra worksheet 4 is due at 9:00 AM.", "1h ago", true),
            note(2, "New study material", "Ms. Patel shared 'Cell Structure' notes in Biology.", "5h ago", true),
            note(3, "Grade posted", "Your History essay has been graded.", "2d ago", false),
        ],
        Role::Parent => vec![
            note(1, "Parent-teacher meeting", "Meeting with Mr. Reyes confirmed for Friday 4:00 PM.", "2h ago", true),
            note(2, "Fee receipt", "Payment for Term 2 tuition was received.", "3d ago", false),
        ],
        Role::Management => vec![
            note(1, "Monthly finance report", "The October finance report is ready for review.", "4h ago", true),
            note(2, "Compliance deadline", "Accreditation self-assessment is due in 14 days.", "1d ago", true),
            note(3, "Staffing update", "Two science teaching positions were filled.", "3d ago", false),
        ],
    }
}
