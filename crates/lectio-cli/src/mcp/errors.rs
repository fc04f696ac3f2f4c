//! Error handling utilities for MCP server

use lectio_core::PlanError;
use rmcp::ErrorData;

/// Convert plan errors to MCP errors: rejected requests become
/// `invalid_params`, anything else `internal_error`.
pub fn to_mcp_error(message: &str, error: &PlanError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_client_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_client_errors_are_invalid_params() {
        let error = PlanError::invalid_input("chaptersPerDay").with_reason("must be at least 1");
        let data = to_mcp_error("Failed to generate plan", &error);
        assert_eq!(data.code, ErrorCode::INVALID_PARAMS);
        assert!(data.message.contains("chaptersPerDay"));
    }

    #[test]
    fn test_serialization_errors_are_internal() {
        let source = serde_json::from_str::<u32>("x").unwrap_err();
        let data = to_mcp_error("Failed to export plan", &PlanError::from(source));
        assert_eq!(data.code, ErrorCode::INTERNAL_ERROR);
    }
}
