use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Unknown course: {name}")]
    UnknownCourse { name: String },

    #[error("Email already registered: {email}")]
    EmailTaken { email: String },

    #[error("No student is found for id={id}")]
    StudentNotFound { id: u32 },

    #[error("Invalid credentials: incorrect {field}")]
    InvalidCredentials { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TrackerError {
    /// Message shown to an interactive user of the session.
    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::UnknownCourse { .. } => "Unknown course".to_string(),
            TrackerError::EmailTaken { .. } => "This email is already taken.".to_string(),
            TrackerError::StudentNotFound { id } => format!("No student is found for id={}", id),
            TrackerError::InvalidCredentials { field } => format!("Incorrect {}.", field),
            TrackerError::IoError(e) => format!("Input/output failure: {}", e),
            TrackerError::ConfigError { message } => format!("Configuration problem: {}", message),
            TrackerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
