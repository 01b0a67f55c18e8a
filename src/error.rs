//! Error types and handling for valuefmt
//!
//! This module defines the error types used throughout the crate,
//! providing consistent error handling and reporting.

use thiserror::Error;

/// Result type alias for valuefmt operations
pub type Result<T> = std::result::Result<T, ValueFmtError>;

/// Main error type for valuefmt
#[derive(Debug, Error)]
pub enum ValueFmtError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input that is neither text nor numeric reached the dynamic entry point
    #[error("Invalid input kind: expected string or number, got {kind}")]
    InvalidInputKind { kind: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

impl ValueFmtError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        ValueFmtError::Config {
            message: message.into(),
        }
    }

    /// Create a new invalid input kind error
    pub fn invalid_input_kind<S: Into<String>>(kind: S) -> Self {
        ValueFmtError::InvalidInputKind { kind: kind.into() }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ValueFmtError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        ValueFmtError::Io {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ValueFmtError {
    fn from(err: std::io::Error) -> Self {
        ValueFmtError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ValueFmtError {
    fn from(err: serde_yaml::Error) -> Self {
        ValueFmtError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ValueFmtError {
    fn from(err: serde_json::Error) -> Self {
        ValueFmtError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ValueFmtError::config("test config error");
        assert!(matches!(err, ValueFmtError::Config { .. }));

        let err = ValueFmtError::invalid_input_kind("boolean");
        assert!(matches!(err, ValueFmtError::InvalidInputKind { .. }));

        let err = ValueFmtError::validation("field", "test validation error");
        assert!(matches!(err, ValueFmtError::Validation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = ValueFmtError::config("test error");
        assert_eq!(format!("{}", err), "Configuration error: test error");

        let err = ValueFmtError::invalid_input_kind("null");
        assert_eq!(
            format!("{}", err),
            "Invalid input kind: expected string or number, got null"
        );

        let err = ValueFmtError::validation("test_field", "invalid value");
        assert_eq!(
            format!("{}", err),
            "Validation error: test_field - invalid value"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ValueFmtError = io.into();
        assert!(matches!(err, ValueFmtError::Io { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
