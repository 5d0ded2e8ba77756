//! # Session State
//!
//! Manages the one calculator state value for the running window.
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>` because:
//! 1. Tauri commands can run concurrently
//! 2. Only one dispatch may transition the state at a time
//! 3. Each button activation must observe the state the previous one produced
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           State Transition      │
//! │  ───────────────          ─────────────           ────────────────      │
//! │                                                                         │
//! │  Press digit ────────────► add_digit() ─────────► AddDigit(d)          │
//! │                                                                         │
//! │  Press operator ─────────► choose_operation() ──► ChooseOperation(op)  │
//! │                                                                         │
//! │  Press AC ───────────────► clear() ─────────────► Clear                │
//! │                                                                         │
//! │  Press = ────────────────► evaluate() ──────────► Evaluate             │
//! │                                                                         │
//! │  Press DEL ──────────────► delete_digit() ──────► DeleteDigit          │
//! │                                                                         │
//! │  Render ─────────────────► get_display() ───────► (read only)          │
//! │                                                                         │
//! │  NOTE: dispatch() holds the lock across reduce-and-replace, so each    │
//! │        action sees the state produced by the one before it.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use abacus_core::{reduce, Action, CalculatorState};

/// Tauri-managed calculator session state.
///
/// ## Why Not RwLock?
/// Every interesting operation is a dispatch that replaces the state; the
/// only pure read is the render snapshot. A RwLock would add complexity
/// with minimal benefit.
#[derive(Debug)]
pub struct SessionState {
    state: Arc<Mutex<CalculatorState>>,
}

impl SessionState {
    /// Creates a session holding the empty startup state.
    pub fn new() -> Self {
        SessionState {
            state: Arc::new(Mutex::new(CalculatorState::new())),
        }
    }

    /// Dispatches one action: locks, reduces, replaces, returns the new state.
    ///
    /// The reducer is pure; this is the single place where its output is
    /// written back, which serializes transitions exactly as the UI event
    /// model expects.
    pub fn dispatch(&self, action: Action) -> CalculatorState {
        let mut state = self.state.lock().expect("Session mutex poisoned");
        *state = reduce(&state, action);
        state.clone()
    }

    /// Executes a function with read access to the current state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = session.with_state(|s| DisplayResponse::from_state(s, &format));
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CalculatorState) -> R,
    {
        let state = self.state.lock().expect("Session mutex poisoned");
        f(&state)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::{Digit, Operation};

    fn add_digit(session: &SessionState, ch: char) -> CalculatorState {
        session.dispatch(Action::AddDigit {
            digit: Digit::try_from(ch).unwrap(),
        })
    }

    #[test]
    fn test_dispatch_threads_state_through() {
        let session = SessionState::new();

        add_digit(&session, '5');
        session.dispatch(Action::ChooseOperation {
            operation: Operation::Add,
        });
        add_digit(&session, '3');
        let state = session.dispatch(Action::Evaluate);

        assert_eq!(state.current_operand.as_deref(), Some("8"));
        assert!(state.overwrite);
    }

    #[test]
    fn test_dispatch_clear_resets() {
        let session = SessionState::new();

        add_digit(&session, '9');
        let state = session.dispatch(Action::Clear);

        assert_eq!(state, CalculatorState::default());
        assert!(session.with_state(|s| s.is_empty()));
    }

    #[test]
    fn test_with_state_reads_current_value() {
        let session = SessionState::new();
        add_digit(&session, '4');
        add_digit(&session, '2');

        let current = session.with_state(|s| s.current_operand.clone());
        assert_eq!(current.as_deref(), Some("42"));
    }
}
