pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::session::{Command, Session};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::leaderboard::{Completion, Leaderboard, LeaderboardRow};
pub use crate::core::notification::{scan_and_notify, Notification, NotificationReport};
pub use crate::core::ranking::{CohortStatistics, CourseScore, RankingEngine, NO_DATA};
pub use crate::core::registry::StudentRegistry;
pub use domain::model::{Course, CourseRecord, StudentProfile};
pub use domain::ports::Roster;
pub use utils::error::{Result, TrackerError};
