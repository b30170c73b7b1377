//! Error types for the earth front-end crates.

use thiserror::Error;

/// Result type alias using EarthError.
pub type EarthResult<T> = Result<T, EarthError>;

/// Primary error type for earth operations.
///
/// Lenient inputs (URL hashes, out-of-range samples) never produce one of these;
/// they are reserved for caller bugs and configuration problems.
#[derive(Debug, Error)]
pub enum EarthError {
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid color scale: {0}")]
    InvalidScale(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl EarthError {
    /// Shorthand for [`EarthError::InvalidParameter`].
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        EarthError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Whether the error stems from a caller violating a documented precondition.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            EarthError::InvalidParameter { .. } | EarthError::InvalidScale(_)
        )
    }
}

impl From<std::io::Error> for EarthError {
    fn from(err: std::io::Error) -> Self {
        EarthError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for EarthError {
    fn from(err: serde_json::Error) -> Self {
        EarthError::ConfigError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for EarthError {
    fn from(err: serde_yaml::Error) -> Self {
        EarthError::ConfigError(format!("YAML error: {}", err))
    }
}
