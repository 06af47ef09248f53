use crate::core::ranking::RankingEngine;
use crate::domain::model::{Course, StudentProfile};
use crate::utils::error::{Result, TrackerError};
use serde::Serialize;
use std::fmt;

/// Share of a course's maximum points, in tenths of a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Completion {
    tenths_of_percent: u64,
}

impl Completion {
    /// `points / max_points` as a double, rounded half-down to three decimals.
    ///
    /// Rounding works on the exact decimal expansion of the double, so a ratio
    /// such as 1/400 (stored slightly above 0.0025) rounds up.
    pub fn of(points: u64, max_points: u64) -> Self {
        if max_points == 0 {
            return Self {
                tenths_of_percent: 0,
            };
        }
        let ratio = points as f64 / max_points as f64;
        // 64 fractional digits print any ratio >= 2^-11 without loss
        let exact = format!("{:.64}", ratio);
        let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

        let whole: u64 = whole.parse().unwrap_or(0);
        let (kept, rest) = fraction.split_at(fraction.len().min(3));
        let kept: u64 = format!("{:0<3}", kept).parse().unwrap_or(0);

        let mut thousandths = whole.saturating_mul(1000).saturating_add(kept);
        if rounds_up_half_down(rest) {
            thousandths += 1;
        }
        Self {
            tenths_of_percent: thousandths,
        }
    }

    pub fn tenths_of_percent(self) -> u64 {
        self.tenths_of_percent
    }
}

/// Whether the discarded digits exceed one half; an exact half rounds down.
fn rounds_up_half_down(rest: &str) -> bool {
    let mut digits = rest.bytes();
    match digits.next() {
        Some(d) if d > b'5' => true,
        Some(b'5') => digits.any(|d| d != b'0'),
        _ => false,
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}%",
            self.tenths_of_percent / 10,
            self.tenths_of_percent % 10
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub student_id: u32,
    pub points: u64,
    pub completion: Completion,
}

/// Students with progress in one course, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    pub course: Course,
    pub rows: Vec<LeaderboardRow>,
}

/// Builds the leaderboard of `course`. Students with equal points keep roster order.
pub fn leaderboard_for(profiles: &[StudentProfile], course: Course) -> Leaderboard {
    let mut rows: Vec<LeaderboardRow> = profiles
        .iter()
        .map(|p| {
            let points = p.points(course);
            LeaderboardRow {
                student_id: p.id(),
                points,
                completion: Completion::of(points, course.max_points()),
            }
        })
        .filter(|row| row.points > 0)
        .collect();

    rows.sort_by(|a, b| b.points.cmp(&a.points));

    Leaderboard { course, rows }
}

impl RankingEngine<'_> {
    /// Leaderboard for a course given by name, matched case-insensitively.
    pub fn course_leaderboard(&self, course_name: &str) -> Result<Leaderboard> {
        let course =
            Course::from_name(course_name).ok_or_else(|| TrackerError::UnknownCourse {
                name: course_name.to_string(),
            })?;
        Ok(leaderboard_for(self.profiles(), course))
    }
}
