use thiserror::Error;

/// Storage-layer failure raised by `UserRepository` implementations.
///
/// The service layer hands these back to its callers exactly as received.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("{message}")]
    Database { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RepositoryError {
    pub fn database(message: impl Into<String>) -> Self {
        RepositoryError::Database {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    Parse { message: String },

    #[error("Environment variable '{name}' is not set")]
    MissingEnvVar { name: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
