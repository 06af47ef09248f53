use crate::domain::model::{Course, StudentProfile};
use serde::Serialize;

/// A progress message owed to one student for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub email: String,
    pub full_name: String,
    pub course: Course,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationReport {
    pub entries: Vec<Notification>,
    /// Students with at least one entry in this scan.
    pub students_notified: usize,
}

/// Emits one notification per record with positive, not yet reported points
/// and flags those records so later scans skip them.
///
/// Entries follow roster order, then course id order.
pub fn scan_and_notify(profiles: &mut [StudentProfile]) -> NotificationReport {
    let mut report = NotificationReport::default();

    for profile in profiles.iter_mut() {
        let email = profile.email().to_string();
        let full_name = profile.full_name();
        let before = report.entries.len();

        for record in profile
            .records_mut()
            .iter_mut()
            .filter(|r| r.awaits_notification())
        {
            record.mark_notified();
            report.entries.push(Notification {
                email: email.clone(),
                full_name: full_name.clone(),
                course: record.course(),
            });
        }

        if report.entries.len() > before {
            report.students_notified += 1;
        }
    }

    tracing::info!(
        notifications = report.entries.len(),
        students = report.students_notified,
        "Notification scan finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: u32, points: [i64; 4]) -> StudentProfile {
        let mut profile = StudentProfile::new(id, "John", "Doe", format!("jd{}@mail.com", id));
        profile.update_points(&[1, 2, 3, 4], &points);
        profile
    }

    #[test]
    fn test_scan_reports_each_positive_record_once() {
        let mut profiles = vec![student(1, [600, 0, 5, 0]), student(2, [0, 0, 0, 0])];

        let report = scan_and_notify(&mut profiles);
        assert_eq!(report.students_notified, 1);
        let courses: Vec<_> = report.entries.iter().map(|n| n.course).collect();
        assert_eq!(courses, vec![Course::Java, Course::Databases]);
        assert_eq!(report.entries[0].email, "jd1@mail.com");
        assert_eq!(report.entries[0].full_name, "John Doe");

        let again = scan_and_notify(&mut profiles);
        assert!(again.entries.is_empty());
        assert_eq!(again.students_notified, 0);
    }

    #[test]
    fn test_new_progress_after_scan_is_reported() {
        let mut profiles = vec![student(1, [10, 0, 0, 0]), student(2, [0, 0, 0, 0])];
        scan_and_notify(&mut profiles);

        profiles[0].update_points(&[1, 4], &[5, 3]);
        profiles[1].update_points(&[2], &[1]);

        let report = scan_and_notify(&mut profiles);
        let pairs: Vec<_> = report
            .entries
            .iter()
            .map(|n| (n.email.as_str(), n.course))
            .collect();
        assert_eq!(
            pairs,
            vec![("jd1@mail.com", Course::Spring), ("jd2@mail.com", Course::Dsa)]
        );
        assert_eq!(report.students_notified, 2);
    }

    #[test]
    fn test_empty_roster() {
        let report = scan_and_notify(&mut []);
        assert_eq!(report, NotificationReport::default());
    }
}
