//! Error handling utilities for MCP server

use hurghada_core::ExcursionError;
use rmcp::ErrorData;

/// Helper to convert library errors to MCP errors.
///
/// Validation problems are reported as invalid parameters so the client can
/// correct the request; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &ExcursionError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        ExcursionError::InvalidInput { .. } | ExcursionError::Serialization { .. } => {
            ErrorData::invalid_params(text, None)
        }
        ExcursionError::FileSystem { .. } => ErrorData::internal_error(text, None),
    }
}
