pub mod leaderboard;
pub mod notification;
pub mod ranking;
pub mod registry;
pub mod report;

pub use crate::domain::model::{Course, CourseRecord, StudentProfile};
pub use crate::domain::ports::Roster;
pub use crate::utils::error::Result;
