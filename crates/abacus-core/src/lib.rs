//! # abacus-core: Pure Interaction Logic for Abacus
//!
//! This crate is the **heart** of Abacus. It contains the entire calculator
//! interaction model as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Abacus Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (button grid)                       │   │
//! │  │    Digit keys ──► Operator keys ──► AC / DEL / =               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    add_digit, choose_operation, clear, evaluate, delete_digit  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ abacus-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  reducer  │  │ evaluate  │  │  format   │  │   │
//! │  │   │  Action   │  │  reduce   │  │ evaluate  │  │ Number-   │  │   │
//! │  │   │  State    │  │           │  │           │  │ Format    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO WINDOW • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The action vocabulary and the calculator state entity
//! - [`reducer`] - The pure `(state, action) -> state` transition function
//! - [`evaluate`] - Folds the pending binary operation to a result string
//! - [`format`] - Thousands-separator display formatting
//! - [`error`] - Boundary parse errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is deterministic - same state and
//!    action always produce the same next state
//! 2. **No I/O**: Window, network, and file system access are FORBIDDEN here
//! 3. **Immutable Replace**: The reducer returns a fresh state value; the old
//!    one is discarded, never mutated in place
//! 4. **Total Core**: The reducer and evaluator never fail - invalid
//!    transitions are no-ops, unparseable operands evaluate to `""`
//!
//! ## Example Usage
//!
//! ```rust
//! use abacus_core::{reduce, Action, CalculatorState, Digit, Operation};
//!
//! let five = Digit::try_from('5').unwrap();
//! let three = Digit::try_from('3').unwrap();
//!
//! let mut state = CalculatorState::default();
//! state = reduce(&state, Action::AddDigit { digit: five });
//! state = reduce(&state, Action::ChooseOperation { operation: Operation::Add });
//! state = reduce(&state, Action::AddDigit { digit: three });
//! state = reduce(&state, Action::Evaluate);
//!
//! assert_eq!(state.current_operand.as_deref(), Some("8"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod evaluate;
pub mod format;
pub mod reducer;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use abacus_core::Action` instead of
// `use abacus_core::types::Action`

pub use error::{CoreError, CoreResult};
pub use evaluate::evaluate;
pub use format::NumberFormat;
pub use reducer::reduce;
pub use types::{Action, CalculatorState, Digit, Operation};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The decimal point character used inside operand strings.
///
/// Operands are textual to preserve exact user input (leading zeros, a
/// trailing point). This is the one non-digit character they may contain,
/// and the character the formatter splits on.
pub const DECIMAL_POINT: char = '.';

/// Locale label for the default display format (grouping `,`, decimal `.`).
///
/// Formatting is fixed to a single configured locale; this constant names
/// the one the app ships with. The separators themselves live in
/// [`format::NumberFormat`] and can be overridden through configuration.
pub const DEFAULT_LOCALE: &str = "en-US";
