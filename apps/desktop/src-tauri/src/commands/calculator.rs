//! # Calculator Commands
//!
//! Tauri commands for the button grid. One command per action in the
//! reducer's vocabulary, plus a read-only display snapshot.
//!
//! ## Interaction Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Interaction Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│  Typing  │────►│ Pending  │────►│  Result  │       │
//! │  │  State   │     │ operand  │     │ operation│     │ (= shown)│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                │             │
//! │                   add_digit         choose_operation   evaluate         │
//! │                   delete_digit      (chains fold)                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear ───────────────────────────► (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use abacus_core::{Action, CalculatorState, Digit, NumberFormat, Operation};

/// Display snapshot returned from every calculator command.
///
/// The frontend composes the two display lines from these fields exactly
/// the way the grid lays them out: the previous-operand line carries the
/// pending operator symbol, the current-operand line stands alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResponse {
    /// Formatted left-hand operand of the pending operation, if any.
    pub previous_operand: Option<String>,

    /// Pending operator symbol, if one has been chosen.
    pub operation: Option<char>,

    /// Formatted operand being typed (or the last result), if any.
    pub current_operand: Option<String>,
}

impl DisplayResponse {
    /// Builds the display snapshot from a state value.
    fn from_state(state: &CalculatorState, format: &NumberFormat) -> Self {
        DisplayResponse {
            previous_operand: format.format_operand(state.previous_operand.as_deref()),
            operation: state.operation.map(|op| op.symbol()),
            current_operand: format.format_operand(state.current_operand.as_deref()),
        }
    }
}

/// Gets the current display without dispatching anything.
///
/// ## When Used
/// - Initial render after the window mounts
///
/// ## Returns
/// Formatted display lines for the current state
#[tauri::command]
pub fn get_display(
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
) -> DisplayResponse {
    debug!("get_display command");
    let format = config.number_format();
    session.with_state(|state| DisplayResponse::from_state(state, &format))
}

/// Appends a digit (or the decimal point) to the current operand.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User presses a digit key                                               │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  invoke('add_digit', { digit: '5' })                                    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Validate the character ('0'-'9' or '.')                    │    │
/// │  │  2. Dispatch AddDigit through the reducer                      │    │
/// │  │  3. Return the formatted display                               │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Display updates: "1,234" grows to "12,345"                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Arguments
/// * `digit` - The pressed character, `'0'`-`'9'` or `'.'`
///
/// ## Returns
/// Updated display; rejected characters fail with `INVALID_INPUT`
#[tauri::command]
pub fn add_digit(
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
    digit: char,
) -> Result<DisplayResponse, ApiError> {
    debug!(digit = %digit, "add_digit command");

    let digit = Digit::try_from(digit)?;
    let state = session.dispatch(Action::AddDigit { digit });
    Ok(DisplayResponse::from_state(&state, &config.number_format()))
}

/// Selects the pending binary operation.
///
/// ## Arguments
/// * `operation` - Operator symbol: `+`, `-`, `×`, `÷` (ASCII aliases
///   `*`, `x`, `/` accepted)
///
/// ## Returns
/// Updated display; unknown symbols fail with `INVALID_INPUT`
#[tauri::command]
pub fn choose_operation(
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
    operation: String,
) -> Result<DisplayResponse, ApiError> {
    debug!(operation = %operation, "choose_operation command");

    let operation = Operation::from_symbol(&operation)?;
    let state = session.dispatch(Action::ChooseOperation { operation });
    Ok(DisplayResponse::from_state(&state, &config.number_format()))
}

/// Resets to the empty state.
///
/// ## When Used
/// - AC button
///
/// ## Returns
/// Empty display
#[tauri::command]
pub fn clear(
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
) -> DisplayResponse {
    debug!("clear command");

    let state = session.dispatch(Action::Clear);
    DisplayResponse::from_state(&state, &config.number_format())
}

/// Folds the pending operation into a result.
///
/// A no-op unless an operand, an operation, and a second operand have all
/// been entered - the reducer decides, the command just dispatches.
///
/// ## Returns
/// Updated display (the result replaces the current operand)
#[tauri::command]
pub fn evaluate(
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
) -> DisplayResponse {
    debug!("evaluate command");

    let state = session.dispatch(Action::Evaluate);
    DisplayResponse::from_state(&state, &config.number_format())
}

/// Drops the last character of the current operand.
///
/// ## When Used
/// - DEL button
///
/// ## Returns
/// Updated display
#[tauri::command]
pub fn delete_digit(
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
) -> DisplayResponse {
    debug!("delete_digit command");

    let state = session.dispatch(Action::DeleteDigit);
    DisplayResponse::from_state(&state, &config.number_format())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_response_formats_both_operands() {
        let state = CalculatorState {
            previous_operand: Some("1234".to_string()),
            current_operand: Some("5678.9".to_string()),
            operation: Some(Operation::Multiply),
            overwrite: false,
        };
        let display = DisplayResponse::from_state(&state, &NumberFormat::default());

        assert_eq!(display.previous_operand.as_deref(), Some("1,234"));
        assert_eq!(display.operation, Some('×'));
        assert_eq!(display.current_operand.as_deref(), Some("5,678.9"));
    }

    #[test]
    fn test_display_response_empty_state_renders_nothing() {
        let display =
            DisplayResponse::from_state(&CalculatorState::default(), &NumberFormat::default());

        assert_eq!(display.previous_operand, None);
        assert_eq!(display.operation, None);
        assert_eq!(display.current_operand, None);
    }
}
