//! Error types for the reading plan library.

use thiserror::Error;

/// Comprehensive error type for all plan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by the caller's request rather than by
    /// the library itself.
    ///
    /// Front ends use this to separate rejected configurations from internal
    /// failures (the HTTP 400 versus 500 split).
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlanError::InvalidInput { .. })
    }
}

/// Extension trait mapping request decoding failures onto
/// [`PlanError::InvalidInput`].
pub trait RequestResultExt<T> {
    /// Treat a decoding failure as a malformed request for `field`.
    fn invalid_request(self, field: &str) -> Result<T>;
}

impl<T> RequestResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn invalid_request(self, field: &str) -> Result<T> {
        self.map_err(|e| PlanError::invalid_input(field).with_reason(e.to_string()))
    }
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlanError::invalid_input("chaptersPerDay").with_reason("must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'chaptersPerDay': must be at least 1"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_serialization_is_server_error() {
        let source = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = PlanError::from(source);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_invalid_request_maps_decode_errors() {
        let result = serde_json::from_str::<u32>("[]").invalid_request("request");
        match result {
            Err(PlanError::InvalidInput { field, .. }) => assert_eq!(field, "request"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
