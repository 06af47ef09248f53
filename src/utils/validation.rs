use crate::utils::error::{Result, TrackerError};
use regex::Regex;
use std::sync::LazyLock;

// [[:word:]] is the ASCII word class; names and emails are not internationalized.
static CREDENTIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s(.+)\s(.+)$").expect("credentials pattern"));
static FIRST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:word:]]+[-']?[[:word:]]+$").expect("first name pattern"));
static LAST_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([[:word:]]+[-']?[[:word:]]+([-']?[[:word:]]+)?\s?)+$").expect("last name pattern")
});
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:word:].]+@[[:word:]]+\.[[:word:]]+$").expect("email pattern")
});
static POINTS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:word:]]+\s([0-9]+\s){3}[0-9]+$").expect("points pattern"));
static STUDENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("student id pattern"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A validated `first last email` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A validated `id p1 p2 p3 p4` line. The id is kept raw because a
/// non-numeric id is reported as "not found" rather than as a format error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsLine {
    pub student_id: String,
    pub points: Vec<i64>,
}

pub fn parse_credentials(input: &str) -> Result<Credentials> {
    let caps = CREDENTIALS
        .captures(input)
        .ok_or_else(|| invalid_credentials("credentials"))?;

    let first_name = caps[1].trim();
    let last_name = caps[2].trim();
    let email = caps[3].trim();

    if !FIRST_NAME.is_match(first_name) {
        return Err(invalid_credentials("first name"));
    }
    if !LAST_NAME.is_match(last_name) {
        return Err(invalid_credentials("last name"));
    }
    if !EMAIL.is_match(email) {
        return Err(invalid_credentials("email"));
    }

    Ok(Credentials {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
    })
}

/// Returns `None` when the line is not four non-negative integers after an id,
/// including values that do not fit in 64 bits.
pub fn parse_points_line(input: &str) -> Option<PointsLine> {
    if !POINTS_LINE.is_match(input) {
        return None;
    }
    let mut parts = input.split_whitespace();
    let student_id = parts.next()?.to_string();
    let points = parts
        .map(|p| p.parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;

    Some(PointsLine { student_id, points })
}

pub fn parse_student_id(input: &str) -> Option<u32> {
    if !STUDENT_ID.is_match(input) {
        return None;
    }
    input.parse().ok()
}

fn invalid_credentials(field: &str) -> TrackerError {
    TrackerError::InvalidCredentials {
        field: field.to_string(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
