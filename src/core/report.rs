// Text rendering of rankings, leaderboards and notifications.

use crate::core::leaderboard::Leaderboard;
use crate::core::notification::NotificationReport;
use crate::core::ranking::CohortStatistics;
use crate::domain::model::{Course, StudentProfile};

pub fn render_statistics(stats: &CohortStatistics) -> String {
    [
        format!("Most popular: {}", stats.most_popular),
        format!("Least popular: {}", stats.least_popular),
        format!("Highest activity: {}", stats.highest_activity),
        format!("Lowest activity: {}", stats.lowest_activity),
        format!("Easiest course: {}", stats.easiest),
        format!("Hardest course: {}", stats.hardest),
    ]
    .join("\n")
}

pub fn render_leaderboard(board: &Leaderboard) -> String {
    let mut lines = vec![
        board.course.name().to_string(),
        format!("{:<5} {:<9} {:<8}", "id", "points", "completed"),
    ];
    lines.extend(
        board
            .rows
            .iter()
            .map(|row| format!("{:<5} {:<9} {}", row.student_id, row.points, row.completion)),
    );
    lines.join("\n")
}

pub fn render_notifications(report: &NotificationReport, subject: &str) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        out.push_str(&format!(
            "To: {}\nRe: {}\nHello, {}! You have accomplished our {} course!\n",
            entry.email, subject, entry.full_name, entry.course
        ));
    }
    out.push_str(&format!(
        "Total {} students have been notified.",
        report.students_notified
    ));
    out
}

pub fn render_student_points(profile: &StudentProfile) -> String {
    let per_course: Vec<String> = Course::ALL
        .iter()
        .map(|c| format!("{}={}", c.name(), profile.points(*c)))
        .collect();
    format!("{} points: {}", profile.id(), per_course.join("; "))
}

pub fn render_student_list(ids: impl IntoIterator<Item = u32>) -> String {
    let ids: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
    if ids.is_empty() {
        return "No students found".to_string();
    }
    format!("Students:\n{}", ids.join("\n"))
}
