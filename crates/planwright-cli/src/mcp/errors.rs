//! Error handling utilities for MCP server

use planwright_core::PlannerError;
use rmcp::ErrorData;

/// Convert a planner error to an MCP error.
///
/// Caller mistakes (bad input, unknown plan id) become invalid-params errors;
/// everything else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlannerError::InvalidInput { .. } | PlannerError::PlanNotFound { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_caller_errors_are_invalid_params() {
        let error = PlannerError::PlanNotFound {
            id: "abc12345".to_string(),
        };
        let data = to_mcp_error("Failed to get plan", &error);
        assert_eq!(data.code, ErrorCode::INVALID_PARAMS);
        assert!(data.message.contains("abc12345"));

        let error = PlannerError::invalid_input("goal").with_reason("must not be empty");
        assert_eq!(
            to_mcp_error("Failed to generate plan", &error).code,
            ErrorCode::INVALID_PARAMS
        );
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = PlannerError::configuration("broken");
        assert_eq!(
            to_mcp_error("Failed", &error).code,
            ErrorCode::INTERNAL_ERROR
        );
    }
}
