use crate::domain::model::RollNo;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("No student found with Roll No {roll_no}")]
    NotFound { roll_no: RollNo },

    #[error("A student with Roll No {roll_no} already exists")]
    DuplicateKey { roll_no: RollNo },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RosterError {
    /// Lookup misses are an ordinary outcome, everything else is not.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
