use thiserror::Error;

#[derive(Debug, Error)]
pub enum CharterError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid charter schedule: {0}")]
    InvalidSchedule(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CharterError {
    fn from(e: serde_json::Error) -> Self {
        CharterError::SerializationError(e.to_string())
    }
}
