//! Locale-styled amount formatting and parsing.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Separator configuration for rendering and parsing amounts.
///
/// Defaults to the convention the BCV audience expects: comma for thousands
/// grouping and period for decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountFormat {
    /// Thousands grouping separator
    pub thousands: char,
    /// Decimal separator
    pub decimal: char,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self {
            thousands: ',',
            decimal: '.',
        }
    }
}

impl AmountFormat {
    /// Renders a value with exactly two decimals and thousands grouping
    /// every three digits from the right.
    ///
    /// Rounding happens before grouping, so a carry propagates into the
    /// integer part: `999.999` renders as `"1,000.00"`.
    pub fn format(&self, value: f64) -> String {
        let rendered = format!("{:.2}", value);
        let (number, negative) = match rendered.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (rendered.as_str(), false),
        };
        let (int_part, dec_part) = number.split_once('.').unwrap_or((number, "00"));

        let mut out = String::with_capacity(rendered.len() + int_part.len() / 3);
        if negative {
            out.push('-');
        }
        let digits = int_part.len();
        for (i, ch) in int_part.char_indices() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(self.thousands);
            }
            out.push(ch);
        }
        out.push(self.decimal);
        out.push_str(dec_part);
        out
    }

    /// Parses free-text user input, tolerating thousands separators.
    pub fn parse_amount(&self, text: &str) -> Result<f64, DomainError> {
        let cleaned: String = text
            .trim()
            .chars()
            .filter(|c| *c != self.thousands)
            .map(|c| if c == self.decimal { '.' } else { c })
            .collect();

        cleaned
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DomainError::InvalidAmount(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        let fmt = AmountFormat::default();
        assert_eq!(fmt.format(1_234_567.5), "1,234,567.50");
    }

    #[test]
    fn test_zero() {
        assert_eq!(AmountFormat::default().format(0.0), "0.00");
    }

    #[test]
    fn test_rounding_carries_into_grouping() {
        assert_eq!(AmountFormat::default().format(999.999), "1,000.00");
    }

    #[test]
    fn test_no_fractional_part() {
        assert_eq!(AmountFormat::default().format(36.0), "36.00");
    }

    #[test]
    fn test_small_value_has_no_grouping() {
        assert_eq!(AmountFormat::default().format(123.4), "123.40");
    }

    #[test]
    fn test_negative_value_keeps_sign() {
        assert_eq!(AmountFormat::default().format(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_custom_separators() {
        let fmt = AmountFormat {
            thousands: '.',
            decimal: ',',
        };
        assert_eq!(fmt.format(1234.5), "1.234,50");
    }

    #[test]
    fn test_parse_strips_thousands_separators() {
        let amount = AmountFormat::default().parse_amount("1,000.50").unwrap();
        assert_eq!(amount, 1000.50);
    }

    #[test]
    fn test_parse_plain_number() {
        let amount = AmountFormat::default().parse_amount("250").unwrap();
        assert_eq!(amount, 250.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let amount = AmountFormat::default().parse_amount("  36.50 ").unwrap();
        assert_eq!(amount, 36.50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = AmountFormat::default().parse_amount("abc");
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let result = AmountFormat::default().parse_amount("");
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_custom_decimal_separator() {
        let fmt = AmountFormat {
            thousands: '.',
            decimal: ',',
        };
        assert_eq!(fmt.parse_amount("10.000,50").unwrap(), 10000.50);
    }
}
