//! # Error Types
//!
//! Boundary parse errors for abacus-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  abacus-core errors (this file)                                        │
//! │  └── CoreError        - Malformed boundary input (digit/operator)      │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Frontend                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reducer and evaluator themselves are total and never return errors:
//! invalid transitions are no-ops and unparseable operands evaluate to the
//! empty string. The only fallible surface is parsing frontend-supplied
//! characters and operator symbols into the typed vocabulary.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Boundary input errors.
///
/// Raised when a frontend payload cannot be parsed into the typed action
/// vocabulary. Once input is typed, no further errors are possible.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Character is not a digit `0`-`9` or the decimal point.
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    /// Operator symbol is not one of the four supported operations.
    #[error("Unknown operation symbol: {0:?}")]
    UnknownOperation(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidDigit('a');
        assert_eq!(err.to_string(), "Invalid digit: 'a'");

        let err = CoreError::UnknownOperation("%".to_string());
        assert_eq!(err.to_string(), "Unknown operation symbol: \"%\"");
    }
}
