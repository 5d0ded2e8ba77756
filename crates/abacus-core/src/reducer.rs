//! # Input State Reducer
//!
//! The pure state-transition function at the center of the core.
//!
//! ## Transition Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Reducer Transitions                                │
//! │                                                                         │
//! │  Button Press           Action                  State Change            │
//! │  ────────────           ──────                  ────────────            │
//! │                                                                         │
//! │  Digit / Point ────────► AddDigit(d) ─────────► current ++ d           │
//! │                                                                         │
//! │  + - × ÷ ──────────────► ChooseOperation(op) ─► current → previous     │
//! │                                                  (or fold the chain)    │
//! │                                                                         │
//! │  AC ───────────────────► Clear ───────────────► empty state            │
//! │                                                                         │
//! │  = ────────────────────► Evaluate ────────────► current = result,      │
//! │                                                  overwrite set          │
//! │                                                                         │
//! │  DEL ──────────────────► DeleteDigit ─────────► current drops one char │
//! │                                                                         │
//! │  NOTE: Every transition returns a fresh state value. Invalid           │
//! │        transitions return the input state unchanged - never an error.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::evaluate::evaluate;
use crate::types::{Action, CalculatorState, Digit, Operation};

/// Applies one action to the state and returns the next state.
///
/// Pure and total: no side effects, no errors, no panics. Transitions that
/// do not apply to the current shape (a decimal point with no operand, an
/// evaluation with a missing piece) return the input state unchanged.
///
/// ## Example
/// ```rust
/// use abacus_core::{reduce, Action, CalculatorState, Digit};
///
/// let state = CalculatorState::default();
/// let state = reduce(&state, Action::AddDigit { digit: Digit::try_from('7').unwrap() });
/// assert_eq!(state.current_operand.as_deref(), Some("7"));
///
/// // A decimal point with no operand to attach to is a no-op.
/// let empty = reduce(&CalculatorState::default(), Action::AddDigit { digit: Digit::POINT });
/// assert!(empty.is_empty());
/// ```
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit { digit } => add_digit(state, digit),
        Action::ChooseOperation { operation } => choose_operation(state, operation),
        Action::Clear => CalculatorState::default(),
        Action::Evaluate => evaluate_pending(state),
        Action::DeleteDigit => delete_digit(state),
    }
}

/// Appends a digit (or the decimal point) to the current operand.
fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    // After an evaluation the next entry replaces the result wholesale.
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref();

    // "0" on top of a bare "0" would only pad it; reject.
    if digit.is_zero() && current == Some("0") {
        return state.clone();
    }

    // A point needs an operand to attach to, and one operand holds one point.
    if digit.is_point() && current.is_none() {
        return state.clone();
    }
    if digit.is_point() && current.is_some_and(|c| c.contains(crate::DECIMAL_POINT)) {
        return state.clone();
    }

    let mut appended = current.unwrap_or("").to_string();
    appended.push(digit.as_char());

    CalculatorState {
        current_operand: Some(appended),
        ..state.clone()
    }
}

/// Selects (or replaces) the pending binary operation.
fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        // Nothing entered yet - there is no operand to operate on.
        (None, None) => state.clone(),

        // Operator pressed again before typing the right-hand operand:
        // the user changed their mind about the operator.
        (None, Some(_)) => CalculatorState {
            operation: Some(operation),
            ..state.clone()
        },

        // First operator press: the typed operand becomes the left-hand side.
        (Some(_), None) => CalculatorState {
            previous_operand: state.current_operand.clone(),
            operation: Some(operation),
            current_operand: None,
            ..state.clone()
        },

        // Chained operation: fold the pending pair first, then carry the
        // result as the new left-hand side.
        (Some(_), Some(_)) => CalculatorState {
            previous_operand: Some(evaluate(state)),
            operation: Some(operation),
            current_operand: None,
            ..state.clone()
        },
    }
}

/// Folds the pending operation into the current operand.
fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(evaluate(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

/// Drops the last character of the current operand.
fn delete_digit(state: &CalculatorState) -> CalculatorState {
    // The first delete after an evaluation discards the result whole.
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    match state.current_operand.as_deref() {
        None => state.clone(),
        Some(current) if current.len() <= 1 => CalculatorState {
            current_operand: None,
            ..state.clone()
        },
        Some(current) => {
            let mut trimmed = current.to_string();
            trimmed.pop();
            CalculatorState {
                current_operand: Some(trimmed),
                ..state.clone()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(ch: char) -> Action {
        Action::AddDigit {
            digit: Digit::try_from(ch).unwrap(),
        }
    }

    fn operation(op: Operation) -> Action {
        Action::ChooseOperation { operation: op }
    }

    fn press(actions: &[Action]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::default(), |state, action| {
                reduce(&state, *action)
            })
    }

    #[test]
    fn test_add_digit_appends() {
        let state = press(&[digit('1'), digit('2'), digit('3')]);
        assert_eq!(state.current_operand.as_deref(), Some("123"));
        assert_eq!(state.previous_operand, None);
        assert_eq!(state.operation, None);
    }

    #[test]
    fn test_add_digit_rejects_second_leading_zero() {
        let state = press(&[digit('0'), digit('0')]);
        assert_eq!(state.current_operand.as_deref(), Some("0"));
    }

    #[test]
    fn test_add_digit_allows_digits_after_zero() {
        // "0" then "5" appends - exact user input is preserved, leading
        // zeros included.
        let state = press(&[digit('0'), digit('5')]);
        assert_eq!(state.current_operand.as_deref(), Some("05"));
    }

    #[test]
    fn test_add_digit_rejects_point_without_operand() {
        let state = press(&[digit('.')]);
        assert!(state.is_empty());
    }

    #[test]
    fn test_add_digit_rejects_second_point() {
        let state = press(&[digit('1'), digit('.'), digit('5'), digit('.')]);
        assert_eq!(state.current_operand.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_sequence_ten_point_five() {
        let state = press(&[digit('1'), digit('0'), digit('.'), digit('5')]);
        assert_eq!(state.current_operand.as_deref(), Some("10.5"));
    }

    #[test]
    fn test_choose_operation_with_no_input_is_noop() {
        let state = press(&[operation(Operation::Add)]);
        assert!(state.is_empty());
    }

    #[test]
    fn test_choose_operation_moves_current_to_previous() {
        let state = press(&[digit('5'), operation(Operation::Add)]);
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.operation, Some(Operation::Add));
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn test_choose_operation_replaces_pending_operator() {
        // Operator pressed twice in a row: the second one wins.
        let state = press(&[
            digit('5'),
            operation(Operation::Add),
            operation(Operation::Multiply),
        ]);
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn test_choose_operation_chains_evaluation() {
        let state = press(&[
            digit('1'),
            operation(Operation::Add),
            digit('2'),
            operation(Operation::Add),
        ]);
        assert_eq!(state.previous_operand.as_deref(), Some("3"));
        assert_eq!(state.operation, Some(Operation::Add));
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn test_evaluate_requires_all_three_fields() {
        // Empty state, lone operand, and operand+operator are all no-ops.
        let empty = press(&[Action::Evaluate]);
        assert!(empty.is_empty());

        let lone = press(&[digit('5'), Action::Evaluate]);
        assert_eq!(lone.current_operand.as_deref(), Some("5"));
        assert!(!lone.overwrite);

        let pending = press(&[digit('5'), operation(Operation::Add), Action::Evaluate]);
        assert_eq!(pending.previous_operand.as_deref(), Some("5"));
        assert_eq!(pending.operation, Some(Operation::Add));
        assert!(!pending.overwrite);
    }

    #[test]
    fn test_evaluate_five_plus_three() {
        let state = press(&[
            digit('5'),
            operation(Operation::Add),
            digit('3'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("8"));
        assert_eq!(state.previous_operand, None);
        assert_eq!(state.operation, None);
        assert!(state.overwrite);
    }

    #[test]
    fn test_division_by_zero_displays_infinity() {
        let state = press(&[
            digit('7'),
            operation(Operation::Divide),
            digit('0'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("inf"));
    }

    #[test]
    fn test_overwrite_replaces_result() {
        let state = press(&[
            digit('5'),
            operation(Operation::Add),
            digit('3'),
            Action::Evaluate,
            digit('9'),
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("9"));
        assert!(!state.overwrite);
    }

    #[test]
    fn test_overwrite_point_starts_bare_operand() {
        // The overwrite branch runs before the point-validity checks, so a
        // point right after an evaluation starts a bare "." operand.
        let state = press(&[
            digit('5'),
            operation(Operation::Add),
            digit('3'),
            Action::Evaluate,
            digit('.'),
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("."));
        assert!(!state.overwrite);
    }

    #[test]
    fn test_clear_resets_any_state() {
        let state = press(&[
            digit('5'),
            operation(Operation::Add),
            digit('3'),
            Action::Evaluate,
            Action::Clear,
        ]);
        assert_eq!(state, CalculatorState::default());

        let mid_entry = press(&[digit('1'), operation(Operation::Divide), Action::Clear]);
        assert_eq!(mid_entry, CalculatorState::default());
    }

    #[test]
    fn test_delete_digit_trims_last_char() {
        let state = press(&[digit('1'), digit('2'), digit('3'), Action::DeleteDigit]);
        assert_eq!(state.current_operand.as_deref(), Some("12"));
    }

    #[test]
    fn test_delete_digit_single_char_unsets() {
        let state = press(&[digit('7'), Action::DeleteDigit]);
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn test_delete_digit_on_unset_is_noop() {
        let state = press(&[Action::DeleteDigit]);
        assert!(state.is_empty());

        // The pending pair is untouched when there is nothing to trim.
        let pending = press(&[digit('5'), operation(Operation::Add), Action::DeleteDigit]);
        assert_eq!(pending.previous_operand.as_deref(), Some("5"));
        assert_eq!(pending.operation, Some(Operation::Add));
    }

    #[test]
    fn test_delete_digit_after_evaluate_discards_result() {
        let state = press(&[
            digit('5'),
            operation(Operation::Add),
            digit('3'),
            Action::Evaluate,
            Action::DeleteDigit,
        ]);
        assert_eq!(state.current_operand, None);
        assert!(!state.overwrite);
    }

    #[test]
    fn test_chain_carries_result_through_operations() {
        // 2 × 3 + 4 = 10, folding left to right with no precedence.
        let state = press(&[
            digit('2'),
            operation(Operation::Multiply),
            digit('3'),
            operation(Operation::Add),
            digit('4'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("10"));
    }

    #[test]
    fn test_operation_after_evaluate_reuses_result() {
        // The evaluated result can seed the next pending operation.
        let state = press(&[
            digit('5'),
            operation(Operation::Add),
            digit('3'),
            Action::Evaluate,
            operation(Operation::Multiply),
            digit('2'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("16"));
    }
}
