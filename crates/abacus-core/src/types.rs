//! # Domain Types
//!
//! The action vocabulary and state entity at the center of Abacus.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Digit       │   │   Operation     │   │     Action      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  '0'..'9', '.'  │   │  Add       (+)  │   │  AddDigit       │       │
//! │  │  (validated     │   │  Subtract  (-)  │   │  ChooseOperation│       │
//! │  │   char)         │   │  Multiply  (×)  │   │  Clear          │       │
//! │  └─────────────────┘   │  Divide    (÷)  │   │  Evaluate       │       │
//! │                        └─────────────────┘   │  DeleteDigit    │       │
//! │                                              └─────────────────┘       │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │                     CalculatorState                           │     │
//! │  │  current_operand   previous_operand   operation   overwrite   │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Textual Operands
//! Operands are strings, not numbers. This preserves exactly what the user
//! typed - leading zeros, a trailing decimal point - until the moment an
//! evaluation actually needs a numeric value.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::DECIMAL_POINT;

// =============================================================================
// Digit
// =============================================================================

/// A single keypad input character: `0`-`9` or the decimal point.
///
/// The decimal point travels through the same input path as digits - the
/// `.` key dispatches an `AddDigit` like any other, and the reducer decides
/// whether it may attach to the current operand.
///
/// ## Validated Construction
/// `Digit` can only be built through `TryFrom<char>`, so a value of this
/// type is known-valid everywhere past the IPC boundary. Deserialization
/// runs through the same check.
///
/// ## Example
/// ```rust
/// use abacus_core::Digit;
///
/// let five = Digit::try_from('5').unwrap();
/// assert_eq!(five.as_char(), '5');
///
/// assert!(Digit::try_from('a').is_err());
/// assert!(Digit::POINT.is_point());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "char", into = "char")]
#[ts(export)]
pub struct Digit(char);

impl Digit {
    /// The decimal point key.
    pub const POINT: Digit = Digit(DECIMAL_POINT);

    /// Returns the underlying character.
    #[inline]
    pub const fn as_char(&self) -> char {
        self.0
    }

    /// Checks whether this is the decimal point.
    #[inline]
    pub const fn is_point(&self) -> bool {
        self.0 == DECIMAL_POINT
    }

    /// Checks whether this is the zero digit.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == '0'
    }
}

impl TryFrom<char> for Digit {
    type Error = CoreError;

    fn try_from(ch: char) -> CoreResult<Self> {
        if ch.is_ascii_digit() || ch == DECIMAL_POINT {
            Ok(Digit(ch))
        } else {
            Err(CoreError::InvalidDigit(ch))
        }
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Operation
// =============================================================================

/// One of the four binary arithmetic operations.
///
/// Serialized as its display symbol, so the wire value is the same string
/// the button shows (`"+"`, `"-"`, `"×"`, `"÷"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,

    #[serde(rename = "-")]
    Subtract,

    #[serde(rename = "×")]
    Multiply,

    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// Parses an operator symbol.
    ///
    /// Accepts the canonical display symbols plus ASCII keyboard aliases
    /// (`*` and `x` for multiply, `/` for divide).
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::Operation;
    ///
    /// assert_eq!(Operation::from_symbol("×").unwrap(), Operation::Multiply);
    /// assert_eq!(Operation::from_symbol("*").unwrap(), Operation::Multiply);
    /// assert!(Operation::from_symbol("%").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> CoreResult<Self> {
        match symbol {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "×" | "*" | "x" => Ok(Operation::Multiply),
            "÷" | "/" => Ok(Operation::Divide),
            other => Err(CoreError::UnknownOperation(other.to_string())),
        }
    }

    /// Returns the canonical display symbol.
    #[inline]
    pub const fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    /// Applies the operation to two numeric operands.
    ///
    /// Plain f64 arithmetic. Division by zero is not guarded: it produces
    /// an infinite (or NaN) result per IEEE 754, which flows on to the
    /// display unchanged.
    #[inline]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =============================================================================
// Action
// =============================================================================

/// The closed action vocabulary: everything a button press can dispatch.
///
/// ## Wire Format
/// Adjacently tagged to match the shape the frontend dispatches:
/// ```json
/// { "type": "add-digit", "payload": { "digit": "5" } }
/// { "type": "clear" }
/// ```
///
/// Because the union is closed, an unrecognized action is a
/// deserialization failure at the IPC boundary; the reducer's match over
/// this enum is exhaustive and checked by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
#[ts(export)]
pub enum Action {
    /// Append a digit (or the decimal point) to the current operand.
    AddDigit { digit: Digit },

    /// Select the pending binary operation.
    ChooseOperation { operation: Operation },

    /// Reset to the empty state.
    Clear,

    /// Fold the pending operation into a result.
    Evaluate,

    /// Drop the last character of the current operand.
    DeleteDigit,
}

// =============================================================================
// Calculator State
// =============================================================================

/// The single state entity, replaced wholesale on every transition.
///
/// ## Invariants
/// - A `current_operand` produced by digit entry contains only digit
///   characters plus at most one decimal point
/// - `operation` is set only when at least one operand has been entered
/// - Only shapes reachable through [`crate::reduce`] occur; nothing else
///   constructs populated states
///
/// ## Lifecycle
/// Created empty at startup; each dispatched action produces a wholly new
/// value via the reducer; `Clear` returns to the empty state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculatorState {
    /// Digits and decimal point being typed, exactly as entered.
    pub current_operand: Option<String>,

    /// Left-hand operand of the pending binary operation.
    pub previous_operand: Option<String>,

    /// The pending binary operation, if one has been chosen.
    pub operation: Option<Operation>,

    /// Next digit entry replaces `current_operand` instead of appending.
    /// Set after an evaluation so typing starts a fresh operand.
    #[serde(default)]
    pub overwrite: bool,
}

impl CalculatorState {
    /// Creates the empty startup state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.current_operand.is_none() && self.previous_operand.is_none() && self.operation.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
