use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed courses of the programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    Java,
    Dsa,
    Databases,
    Spring,
}

impl Course {
    /// Catalog order, which is also course id order.
    pub const ALL: [Course; 4] = [Course::Java, Course::Dsa, Course::Databases, Course::Spring];

    pub const fn id(self) -> u8 {
        match self {
            Course::Java => 1,
            Course::Dsa => 2,
            Course::Databases => 3,
            Course::Spring => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Course::Java => "Java",
            Course::Dsa => "DSA",
            Course::Databases => "Databases",
            Course::Spring => "Spring",
        }
    }

    pub const fn max_points(self) -> u64 {
        match self {
            Course::Java => 600,
            Course::Dsa => 400,
            Course::Databases => 480,
            Course::Spring => 550,
        }
    }

    pub fn from_id(id: i64) -> Option<Course> {
        Course::ALL.into_iter().find(|c| i64::from(c.id()) == id)
    }

    /// Case-insensitive lookup. Callers trim the input beforehand.
    pub fn from_name(name: &str) -> Option<Course> {
        Course::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A student's progress in a single course.
///
/// Invariant: `points <= course.max_points()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    course: Course,
    points: u64,
    notified: bool,
}

impl CourseRecord {
    pub fn new(course: Course) -> Self {
        Self {
            course,
            points: 0,
            notified: false,
        }
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn is_notified(&self) -> bool {
        self.notified
    }

    /// Adds `delta` points, saturating at the course cap.
    pub fn add_points(&mut self, delta: u64) {
        self.points = self
            .points
            .saturating_add(delta)
            .min(self.course.max_points());
    }

    /// Flags the record as notified. Returns `true` only on the first call.
    pub fn mark_notified(&mut self) -> bool {
        !std::mem::replace(&mut self.notified, true)
    }

    /// Positive progress that has not been reported yet.
    pub fn awaits_notification(&self) -> bool {
        self.points > 0 && !self.notified
    }
}

/// A registered student with exactly one record per course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    id: u32,
    first_name: String,
    last_name: String,
    email: String,
    records: [CourseRecord; 4],
}

impl StudentProfile {
    pub fn new(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            records: Course::ALL.map(CourseRecord::new),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Records in course id order.
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [CourseRecord] {
        &mut self.records
    }

    pub fn record(&self, course: Course) -> &CourseRecord {
        &self.records[usize::from(course.id() - 1)]
    }

    pub fn points(&self, course: Course) -> u64 {
        self.record(course).points()
    }

    pub fn is_enrolled(&self) -> bool {
        self.records.iter().any(|r| r.points() > 0)
    }

    /// Applies `points[i]` to the course with id `course_ids[i]`.
    ///
    /// Nothing is applied when the slices differ in length. Unknown ids and
    /// negative values are skipped. Returns whether any pair was applied.
    pub fn update_points(&mut self, course_ids: &[i64], points: &[i64]) -> bool {
        if course_ids.len() != points.len() {
            tracing::debug!(
                student_id = self.id,
                ids = course_ids.len(),
                values = points.len(),
                "Rejected point update with mismatched lengths"
            );
            return false;
        }

        let mut updated = false;
        for (&course_id, &delta) in course_ids.iter().zip(points) {
            let Some(course) = Course::from_id(course_id) else {
                continue;
            };
            let Ok(delta) = u64::try_from(delta) else {
                continue;
            };
            self.records[usize::from(course.id() - 1)].add_points(delta);
            updated = true;
        }

        if updated {
            tracing::debug!(student_id = self.id, "Points updated");
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_points(profile: &StudentProfile) -> Vec<u64> {
        profile.records().iter().map(CourseRecord::points).collect()
    }

    #[test]
    fn test_catalog_ids_names_and_caps() {
        let summary: Vec<_> = Course::ALL
            .iter()
            .map(|c| (c.id(), c.name(), c.max_points()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "Java", 600),
                (2, "DSA", 400),
                (3, "Databases", 480),
                (4, "Spring", 550)
            ]
        );
    }

    #[test]
    fn test_course_lookup() {
        assert_eq!(Course::from_name("java"), Some(Course::Java));
        assert_eq!(Course::from_name("dsa"), Some(Course::Dsa));
        assert_eq!(Course::from_name("DATABASES"), Some(Course::Databases));
        assert_eq!(Course::from_name("Unknown"), None);
        assert_eq!(Course::from_name(""), None);
        assert_eq!(Course::from_id(4), Some(Course::Spring));
        assert_eq!(Course::from_id(0), None);
        assert_eq!(Course::from_id(5), None);
    }

    #[test]
    fn test_add_points_saturates_at_cap() {
        let mut record = CourseRecord::new(Course::Dsa);
        record.add_points(150);
        assert_eq!(record.points(), 150);
        record.add_points(300);
        assert_eq!(record.points(), 400);
        record.add_points(1);
        assert_eq!(record.points(), 400);
    }

    #[test]
    fn test_add_points_never_wraps() {
        let mut record = CourseRecord::new(Course::Java);
        for _ in 0..3 {
            record.add_points(u64::MAX);
            assert_eq!(record.points(), 600);
        }
    }

    #[test]
    fn test_add_points_property_over_range() {
        for course in Course::ALL {
            let max = course.max_points();
            for start in [0, 1, max / 2, max - 1, max] {
                for delta in [0, 1, 7, max, max + 1, u64::MAX / 2] {
                    let mut record = CourseRecord::new(course);
                    record.add_points(start);
                    record.add_points(delta);
                    assert_eq!(record.points(), start.saturating_add(delta).min(max));
                }
            }
        }
    }

    #[test]
    fn test_add_points_leaves_notified_flag() {
        let mut record = CourseRecord::new(Course::Spring);
        record.add_points(10);
        assert!(!record.is_notified());
        assert!(record.awaits_notification());
        assert!(record.mark_notified());
        assert!(!record.mark_notified());
        record.add_points(10);
        assert!(record.is_notified());
        assert!(!record.awaits_notification());
    }

    #[test]
    fn test_new_profile_has_four_empty_records() {
        let profile = StudentProfile::new(1, "John", "Doe", "jd@mail.com");
        let courses: Vec<_> = profile.records().iter().map(|r| r.course()).collect();
        assert_eq!(courses, Course::ALL.to_vec());
        assert_eq!(all_points(&profile), vec![0, 0, 0, 0]);
        assert!(!profile.is_enrolled());
        assert_eq!(profile.full_name(), "John Doe");
    }

    #[test]
    fn test_update_points_accumulates() {
        let mut profile = StudentProfile::new(1, "John", "Doe", "jd@mail.com");
        assert!(profile.update_points(&[1, 2, 3, 4], &[10, 2, 3, 5]));
        assert_eq!(all_points(&profile), vec![10, 2, 3, 5]);
        assert!(profile.update_points(&[1, 2, 3, 4], &[10, 2, 3, 5]));
        assert_eq!(all_points(&profile), vec![20, 4, 6, 10]);
        assert!(profile.is_enrolled());
    }

    #[test]
    fn test_update_points_length_mismatch_applies_nothing() {
        let mut profile = StudentProfile::new(1, "John", "Doe", "jd@mail.com");
        assert!(!profile.update_points(&[1, 2, 3, 4], &[10, 2, 3]));
        assert!(!profile.update_points(&[1, 2], &[10, 2, 3, 5]));
        assert_eq!(all_points(&profile), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_update_points_skips_unknown_ids_and_negative_values() {
        let mut profile = StudentProfile::new(1, "John", "Doe", "jd@mail.com");
        assert!(!profile.update_points(&[0, 5, 1], &[10, 10, -3]));
        assert_eq!(all_points(&profile), vec![0, 0, 0, 0]);

        assert!(profile.update_points(&[9, 2, 4], &[1, 7, -1]));
        assert_eq!(all_points(&profile), vec![0, 7, 0, 0]);

        assert!(!profile.update_points(&[], &[]));
    }

    #[test]
    fn test_update_points_repeated_ids_accumulate_to_cap() {
        let mut profile = StudentProfile::new(1, "John", "Doe", "jd@mail.com");
        assert!(profile.update_points(&[2, 2, 2], &[300, 300, 0]));
        assert_eq!(profile.points(Course::Dsa), 400);
    }
}
