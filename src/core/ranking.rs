use crate::domain::model::{Course, CourseRecord, StudentProfile};
use crate::domain::ports::Roster;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Shown in place of a course name when the cohort has no data for a ranking.
pub const NO_DATA: &str = "n/a";

/// Aggregated value for one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseScore<T> {
    pub course: Course,
    pub value: T,
}

/// Groups every record passing `predicate` by course name, aggregates each
/// group and orders the result by value descending, then name ascending.
///
/// Courses with no matching record are absent from the result.
pub fn rank_courses<T, P, A>(
    profiles: &[StudentProfile],
    predicate: P,
    aggregate: A,
) -> Vec<CourseScore<T>>
where
    T: PartialOrd,
    P: Fn(&CourseRecord) -> bool,
    A: Fn(&[&CourseRecord]) -> T,
{
    let mut groups: BTreeMap<&'static str, (Course, Vec<&CourseRecord>)> = BTreeMap::new();
    for record in profiles
        .iter()
        .flat_map(|p| p.records())
        .filter(|&r| predicate(r))
    {
        let course = record.course();
        groups
            .entry(course.name())
            .or_insert_with(|| (course, Vec::new()))
            .1
            .push(record);
    }

    let mut ranked: Vec<CourseScore<T>> = groups
        .into_values()
        .map(|(course, records)| CourseScore {
            course,
            value: aggregate(records.as_slice()),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.course.name().cmp(b.course.name()))
    });
    ranked
}

pub fn count(records: &[&CourseRecord]) -> u64 {
    records.len() as u64
}

pub fn sum(records: &[&CourseRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.points()))
}

pub fn mean(records: &[&CourseRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    sum(records) as f64 / records.len() as f64
}

fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_unstable();
    names.join(", ")
}

/// The six cohort-wide rankings printed by the statistics command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortStatistics {
    pub most_popular: String,
    pub least_popular: String,
    pub highest_activity: String,
    pub lowest_activity: String,
    pub easiest: String,
    pub hardest: String,
}

/// Read-only rankings over a snapshot of the roster.
#[derive(Debug, Clone, Copy)]
pub struct RankingEngine<'a> {
    profiles: &'a [StudentProfile],
}

impl<'a> RankingEngine<'a> {
    pub fn new(profiles: &'a [StudentProfile]) -> Self {
        Self { profiles }
    }

    pub fn from_roster<R: Roster + ?Sized>(roster: &'a R) -> Self {
        Self::new(roster.profiles())
    }

    pub(crate) fn profiles(&self) -> &'a [StudentProfile] {
        self.profiles
    }

    /// Number of students with positive points, per course.
    pub fn popularity(&self) -> Vec<CourseScore<u64>> {
        rank_courses(self.profiles, |r| r.points() > 0, count)
    }

    /// Total points per course.
    pub fn activity(&self) -> Vec<CourseScore<u64>> {
        rank_courses(self.profiles, |_| true, sum)
    }

    /// Mean points per course, zero-point records included.
    pub fn difficulty(&self) -> Vec<CourseScore<f64>> {
        rank_courses(self.profiles, |_| true, mean)
    }

    pub fn most_popular(&self) -> String {
        most_popular_of(&self.popularity())
    }

    pub fn least_popular(&self) -> String {
        let ranked = self.popularity();
        let least = match ranked.last() {
            None => return NO_DATA.to_string(),
            Some(_) if ranked.len() < Course::ALL.len() => join_names(
                Course::ALL
                    .into_iter()
                    .filter(|c| ranked.iter().all(|s| s.course != *c))
                    .map(Course::name),
            ),
            Some(bottom) => join_names(
                ranked
                    .iter()
                    .filter(|s| s.value == bottom.value)
                    .map(|s| s.course.name()),
            ),
        };

        if least == most_popular_of(&ranked) {
            NO_DATA.to_string()
        } else {
            least
        }
    }

    pub fn highest_activity(&self) -> String {
        self.top_of(self.activity())
    }

    pub fn lowest_activity(&self) -> String {
        self.bottom_of(self.activity())
    }

    pub fn easiest(&self) -> String {
        self.top_of(self.difficulty())
    }

    pub fn hardest(&self) -> String {
        self.bottom_of(self.difficulty())
    }

    pub fn has_enrolled_students(&self) -> bool {
        self.profiles.iter().any(StudentProfile::is_enrolled)
    }

    pub fn statistics(&self) -> CohortStatistics {
        tracing::debug!(students = self.profiles.len(), "Computing cohort statistics");
        CohortStatistics {
            most_popular: self.most_popular(),
            least_popular: self.least_popular(),
            highest_activity: self.highest_activity(),
            lowest_activity: self.lowest_activity(),
            easiest: self.easiest(),
            hardest: self.hardest(),
        }
    }

    fn top_of<T>(&self, ranked: Vec<CourseScore<T>>) -> String {
        if !self.has_enrolled_students() {
            return NO_DATA.to_string();
        }
        ranked
            .first()
            .map_or(NO_DATA, |s| s.course.name())
            .to_string()
    }

    fn bottom_of<T>(&self, ranked: Vec<CourseScore<T>>) -> String {
        if !self.has_enrolled_students() {
            return NO_DATA.to_string();
        }
        ranked
            .last()
            .map_or(NO_DATA, |s| s.course.name())
            .to_string()
    }
}

fn most_popular_of(ranked: &[CourseScore<u64>]) -> String {
    match ranked.first() {
        None => NO_DATA.to_string(),
        Some(top) => join_names(
            ranked
                .iter()
                .filter(|s| s.value == top.value)
                .map(|s| s.course.name()),
        ),
    }
}
