//! Raw text of one input cell.
//!
//! Inputs are stored as the text the user typed, minus currency, percent and
//! thousands-separator formatting. The stored text is never rewritten by a
//! read, so switching methods or re-reading a value cannot drift it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Stored text of one input, e.g. `"45.50"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawValue(String);

impl RawValue {
    /// Stores user text after removing `$`, `%`, `,` and surrounding whitespace.
    pub fn from_input(text: &str) -> Self {
        Self(normalize_input(text))
    }

    /// Stores a programmatic value using its exact decimal representation.
    pub fn from_decimal(value: Decimal) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value for computation.
    ///
    /// Blank text is zero. Text that is not a decimal number is also zero and
    /// is logged; malformed input never fails a calculation.
    pub fn to_decimal(&self) -> Decimal {
        if self.0.is_empty() {
            return Decimal::ZERO;
        }
        self.0.parse().unwrap_or_else(|e| {
            warn!(input = %self.0, "malformed numeric input treated as zero: {}", e);
            Decimal::ZERO
        })
    }
}

impl Default for RawValue {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl fmt::Display for RawValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '$' | '%' | ',') && !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_is_zero_text() {
        let raw = RawValue::default();

        assert_eq!(raw.as_str(), "0");
        assert_eq!(raw.to_decimal(), Decimal::ZERO);
    }

    #[test]
    fn from_input_strips_currency_percent_and_separators() {
        assert_eq!(RawValue::from_input(" $1,234.50 ").as_str(), "1234.50");
        assert_eq!(RawValue::from_input("40 %").as_str(), "40");
    }

    #[test]
    fn from_input_preserves_trailing_zeros() {
        let raw = RawValue::from_input("45.50");

        assert_eq!(raw.as_str(), "45.50");
        assert_eq!(raw.to_decimal(), dec!(45.50));
    }

    #[test]
    fn from_input_keeps_partially_typed_text() {
        let raw = RawValue::from_input("12.");

        assert_eq!(raw.as_str(), "12.");
    }

    #[test]
    fn blank_input_is_zero() {
        let raw = RawValue::from_input("   ");

        assert_eq!(raw.as_str(), "");
        assert_eq!(raw.to_decimal(), Decimal::ZERO);
    }

    #[test]
    fn malformed_input_is_zero() {
        assert_eq!(RawValue::from_input("abc").to_decimal(), Decimal::ZERO);
        assert_eq!(RawValue::from_input("1.2.3").to_decimal(), Decimal::ZERO);
    }

    #[test]
    fn negative_input_parses() {
        assert_eq!(RawValue::from_input("-2.5").to_decimal(), dec!(-2.5));
    }

    #[test]
    fn from_decimal_keeps_scale() {
        assert_eq!(RawValue::from_decimal(dec!(3.10)).as_str(), "3.10");
    }

    #[test]
    fn repeated_reads_return_identical_values() {
        let raw = RawValue::from_input("0.1");

        assert_eq!(raw.to_decimal(), raw.to_decimal());
        assert_eq!(raw.as_str(), "0.1");
    }
}
