//! # Evaluator
//!
//! Folds the pending binary operation into a result string.
//!
//! ## Evaluation Flow
//! ```text
//! previous_operand ──parse f64──┐
//!                               ├──► operation.apply(lhs, rhs) ──► to_string
//! current_operand ───parse f64──┘
//!
//! Any unset or unparseable piece short-circuits to "".
//! ```
//!
//! Results use `f64`'s `Display` rendering: the shortest decimal form that
//! round-trips (`8`, `10.5`, `0.30000000000000004`), `inf` for infinities,
//! `NaN` for NaN. No rounding or precision correction is applied beyond
//! native floating-point behavior.

use crate::types::CalculatorState;

/// Computes the result of the state's pending operation.
///
/// Pure and total. Returns the empty string when the operation or either
/// operand is unset, or when an operand fails to parse as a number.
///
/// ## Example
/// ```rust
/// use abacus_core::{evaluate, CalculatorState, Operation};
///
/// let state = CalculatorState {
///     previous_operand: Some("10".to_string()),
///     current_operand: Some("4".to_string()),
///     operation: Some(Operation::Subtract),
///     overwrite: false,
/// };
/// assert_eq!(evaluate(&state), "6");
/// ```
pub fn evaluate(state: &CalculatorState) -> String {
    let (Some(previous), Some(current), Some(operation)) = (
        state.previous_operand.as_deref(),
        state.current_operand.as_deref(),
        state.operation,
    ) else {
        return String::new();
    };

    let (Ok(lhs), Ok(rhs)) = (previous.parse::<f64>(), current.parse::<f64>()) else {
        return String::new();
    };

    operation.apply(lhs, rhs).to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operation;

    fn state(previous: &str, operation: Operation, current: &str) -> CalculatorState {
        CalculatorState {
            previous_operand: Some(previous.to_string()),
            current_operand: Some(current.to_string()),
            operation: Some(operation),
            overwrite: false,
        }
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(&state("5", Operation::Add, "3")), "8");
        assert_eq!(evaluate(&state("5", Operation::Subtract, "3")), "2");
        assert_eq!(evaluate(&state("5", Operation::Multiply, "3")), "15");
        assert_eq!(evaluate(&state("15", Operation::Divide, "3")), "5");
    }

    #[test]
    fn test_fractional_result() {
        assert_eq!(evaluate(&state("10.5", Operation::Add, "0.5")), "11");
        assert_eq!(evaluate(&state("7", Operation::Divide, "2")), "3.5");
    }

    #[test]
    fn test_negative_result() {
        assert_eq!(evaluate(&state("1", Operation::Subtract, "5")), "-4");
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert_eq!(evaluate(&state("7", Operation::Divide, "0")), "inf");
    }

    #[test]
    fn test_zero_over_zero_is_nan() {
        assert_eq!(evaluate(&state("0", Operation::Divide, "0")), "NaN");
    }

    #[test]
    fn test_float_artifacts_are_not_corrected() {
        // Native floating-point semantics, artifacts included.
        assert_eq!(
            evaluate(&state("0.1", Operation::Add, "0.2")),
            "0.30000000000000004"
        );
    }

    #[test]
    fn test_trailing_point_parses() {
        assert_eq!(evaluate(&state("5.", Operation::Add, "3")), "8");
    }

    #[test]
    fn test_missing_piece_returns_empty() {
        let mut partial = state("5", Operation::Add, "3");
        partial.operation = None;
        assert_eq!(evaluate(&partial), "");

        let mut partial = state("5", Operation::Add, "3");
        partial.previous_operand = None;
        assert_eq!(evaluate(&partial), "");

        let mut partial = state("5", Operation::Add, "3");
        partial.current_operand = None;
        assert_eq!(evaluate(&partial), "");
    }

    #[test]
    fn test_unparseable_operand_returns_empty() {
        assert_eq!(evaluate(&state("", Operation::Add, "3")), "");
        assert_eq!(evaluate(&state("5", Operation::Add, ".")), "");
    }

    #[test]
    fn test_infinite_operand_chains_through() {
        // A previous result of "inf" parses back and keeps propagating.
        assert_eq!(evaluate(&state("inf", Operation::Add, "1")), "inf");
        assert_eq!(evaluate(&state("inf", Operation::Subtract, "inf")), "NaN");
    }
}
