use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Learning Progress Tracker";
pub const DEFAULT_SUBJECT: &str = "Your Learning Progress";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub tracker: TrackerSection,
    #[serde(default)]
    pub notifications: NotificationSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSection {
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSection {
    #[serde(default = "default_subject")]
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

impl Default for TrackerSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for NotificationSection {
    fn default() -> Self {
        Self {
            subject: default_subject(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn title(&self) -> &str {
        &self.tracker.title
    }

    pub fn notification_subject(&self) -> &str {
        &self.notifications.subject
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("tracker.title", &self.tracker.title)?;
        validate_non_empty_string("notifications.subject", &self.notifications.subject)?;
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
