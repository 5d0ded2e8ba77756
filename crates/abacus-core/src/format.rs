//! # Display Formatter
//!
//! Maps an operand string to its locale-formatted display form.
//!
//! ## Formatting Flow
//! ```text
//! "1234567.891"
//!      │ split at the first '.'
//!      ▼
//! integer "1234567"          fraction "891"
//!      │ three-digit grouping      │ verbatim, never grouped
//!      ▼                          ▼
//! "1,234,567"        +  '.'  +  "891"   ──►  "1,234,567.891"
//! ```
//!
//! The formatter is a render-time leaf: it never feeds back into state, and
//! it never rejects an operand. Anything that is not a plain digit run
//! (`inf`, `NaN`) passes through untouched.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DECIMAL_POINT;

/// Digits per thousands group.
const GROUP_SIZE: usize = 3;

/// The fixed display format: one grouping separator, one decimal separator.
///
/// Defaults to the en-US configuration (`1,234,567.89`). The separators are
/// configuration, not locale negotiation - a single format is fixed at
/// startup and used for every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NumberFormat {
    /// Separator between three-digit groups of the integer part.
    pub group_separator: char,

    /// Separator shown between the integer and fractional parts.
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    /// Formats an operand for display.
    ///
    /// Unset input stays unset (nothing is rendered for a missing operand).
    /// The fractional part is reattached verbatim - grouping applies to the
    /// integer part only.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::NumberFormat;
    ///
    /// let format = NumberFormat::default();
    /// assert_eq!(format.format_operand(None), None);
    /// assert_eq!(format.format_operand(Some("1234")).as_deref(), Some("1,234"));
    /// assert_eq!(format.format_operand(Some("10.5")).as_deref(), Some("10.5"));
    /// ```
    pub fn format_operand(&self, operand: Option<&str>) -> Option<String> {
        let operand = operand?;

        let (integer, fraction) = match operand.split_once(DECIMAL_POINT) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (operand, None),
        };

        let grouped = self.group_integer(integer);

        Some(match fraction {
            Some(fraction) => format!("{}{}{}", grouped, self.decimal_separator, fraction),
            None => grouped,
        })
    }

    /// Applies three-digit grouping to an integer part, sign-aware.
    fn group_integer(&self, integer: &str) -> String {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };

        // An empty integer part (operand like ".5", or an empty evaluation
        // result) renders as a bare zero.
        if digits.is_empty() {
            return format!("{}0", sign);
        }

        // Not a plain digit run: inf, NaN. Pass through untouched.
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return integer.to_string();
        }

        let capacity = sign.len() + digits.len() + digits.len() / GROUP_SIZE;
        let mut grouped = String::with_capacity(capacity);
        grouped.push_str(sign);
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % GROUP_SIZE == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn format(operand: &str) -> String {
        NumberFormat::default()
            .format_operand(Some(operand))
            .unwrap()
    }

    #[test]
    fn test_unset_stays_unset() {
        assert_eq!(NumberFormat::default().format_operand(None), None);
    }

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format("1234"), "1,234");
        assert_eq!(format("1234567"), "1,234,567");
        assert_eq!(format("123456789"), "123,456,789");
    }

    #[test]
    fn test_short_integers_are_untouched() {
        assert_eq!(format("0"), "0");
        assert_eq!(format("42"), "42");
        assert_eq!(format("123"), "123");
    }

    #[test]
    fn test_fraction_reattached_verbatim() {
        assert_eq!(format("10.5"), "10.5");
        assert_eq!(format("1234.5"), "1,234.5");
        // No fractional grouping, however long the fraction runs.
        assert_eq!(format("1000.123456"), "1,000.123456");
    }

    #[test]
    fn test_trailing_point_is_kept() {
        assert_eq!(format("12."), "12.");
    }

    #[test]
    fn test_negative_sign_precedes_grouping() {
        assert_eq!(format("-4"), "-4");
        assert_eq!(format("-1234"), "-1,234");
        assert_eq!(format("-1234.25"), "-1,234.25");
    }

    #[test]
    fn test_empty_integer_part_renders_zero() {
        assert_eq!(format(".5"), "0.5");
        assert_eq!(format(""), "0");
    }

    #[test]
    fn test_non_numeric_passes_through() {
        assert_eq!(format("inf"), "inf");
        assert_eq!(format("-inf"), "-inf");
        assert_eq!(format("NaN"), "NaN");
    }

    #[test]
    fn test_custom_separators() {
        // de-DE style: dot groups, comma decimal.
        let format = NumberFormat {
            group_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(
            format.format_operand(Some("1234567.5")).as_deref(),
            Some("1.234.567,5")
        );
    }
}
