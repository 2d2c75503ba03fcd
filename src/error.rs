use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Update/delete against an identifier absent from the store
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Build a `NotFound` error for the given entity kind and identifier.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
