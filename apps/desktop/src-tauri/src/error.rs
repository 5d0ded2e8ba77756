//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Abacus                               │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('add_digit', { digit: '#' })                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<DisplayResponse, ApiError>                               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Boundary parse? ─── CoreError::InvalidDigit ──► ApiError ─────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try { await invoke('add_digit', ...) }                                 │
//! │  catch (e) { /* e.code = "INVALID_INPUT", e.message = ... */ }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reducer and evaluator never produce errors - invalid transitions are
//! no-ops. Only malformed boundary input (a character that is not a digit,
//! an operator symbol outside the four) surfaces here.
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize` and
//! include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use abacus_core::CoreError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "INVALID_INPUT",
///   "message": "Invalid digit: '#'"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Frontend payload failed boundary validation (400)
    InvalidInput,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidDigit(_) | CoreError::UnknownOperation(_) => {
                ApiError::invalid_input(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_maps_to_invalid_input() {
        let err: ApiError = CoreError::InvalidDigit('#').into();
        assert!(matches!(err.code, ErrorCode::InvalidInput));
        assert_eq!(err.message, "Invalid digit: '#'");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::invalid_input("Unknown operation symbol: \"%\"");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_INPUT");
        assert_eq!(json["message"], "Unknown operation symbol: \"%\"");
    }
}
