//! Error types for the settings layer

use docapps_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A settings document could not be parsed or did not match the schema
    #[error("Failed to parse settings: {source}")]
    ParseError {
        #[source]
        source: Box<figment::Error>,
    },

    /// Settings parsed but hold a value the apps cannot use
    #[error("Settings validation failed for '{key}': {message}")]
    ValidationError { key: String, message: String },
}

impl ConfigError {
    /// Create a validation error
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}

impl Severity for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Without settings no app can be constructed
            ConfigError::ParseError { .. } => ErrorSeverity::Critical,
            ConfigError::ValidationError { .. } => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::validation("kanban.indent", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Settings validation failed for 'kanban.indent': must be at least 1"
        );
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }
}
