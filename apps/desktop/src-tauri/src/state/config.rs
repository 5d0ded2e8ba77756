//! # Configuration State
//!
//! Stores the display-format configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ABACUS_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use abacus_core::{NumberFormat, DEFAULT_LOCALE};

/// Application configuration.
///
/// Display formatting is fixed to a single configured locale; these fields
/// are that configuration. There is deliberately no runtime locale
/// negotiation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Locale label for the display format (informational, shown in logs).
    pub locale: String,

    /// Separator between three-digit groups of the integer part.
    pub group_separator: char,

    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,
}

impl Default for ConfigState {
    /// Returns the en-US default configuration (`1,234,567.89`).
    fn default() -> Self {
        ConfigState {
            locale: DEFAULT_LOCALE.to_string(),
            group_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ABACUS_LOCALE`: Override the locale label
    /// - `ABACUS_GROUP_SEPARATOR`: Override the grouping separator (one char)
    /// - `ABACUS_DECIMAL_SEPARATOR`: Override the decimal separator (one char)
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(locale) = std::env::var("ABACUS_LOCALE") {
            config.locale = locale;
        }

        if let Some(sep) = env_char("ABACUS_GROUP_SEPARATOR") {
            config.group_separator = sep;
        }

        if let Some(sep) = env_char("ABACUS_DECIMAL_SEPARATOR") {
            config.decimal_separator = sep;
        }

        config
    }

    /// Returns the number format used at render time.
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            group_separator: self.group_separator,
            decimal_separator: self.decimal_separator,
        }
    }
}

/// Reads a single-character environment override; longer values are ignored.
fn env_char(name: &str) -> Option<char> {
    let value = std::env::var(name).ok()?;
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_en_us() {
        let config = ConfigState::default();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.number_format(), NumberFormat::default());
    }

    #[test]
    fn test_number_format_uses_configured_separators() {
        let config = ConfigState {
            locale: "de-DE".to_string(),
            group_separator: '.',
            decimal_separator: ',',
        };
        let format = config.number_format();
        assert_eq!(
            format.format_operand(Some("1234.5")).as_deref(),
            Some("1.234,5")
        );
    }
}
