//! Conversion between dollars and bolivars at a given rate.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::format::AmountFormat;

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// US dollars into bolivars (multiply by the rate)
    UsdToVes,
    /// Bolivars into US dollars (divide by the rate)
    VesToUsd,
}

/// Outcome of a single conversion, with display strings attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Converted value; `None` when the conversion could not run
    pub converted: Option<f64>,
    pub formatted_input: String,
    pub formatted_converted: Option<String>,
    pub formatted_rate: String,
    /// Inline error for conversions that could not run
    pub error_message: Option<String>,
}

/// Converts `amount` at `rate` in the given direction.
///
/// A zero rate cannot back a bolivar-to-dollar division; that case comes
/// back with `error_message` populated instead of a value.
pub fn convert(rate: f64, amount: f64, direction: Direction, format: &AmountFormat) -> Conversion {
    let formatted_input = format.format(amount);
    let formatted_rate = format.format(rate);

    let converted = match direction {
        Direction::UsdToVes => amount * rate,
        Direction::VesToUsd => {
            if rate == 0.0 {
                return Conversion {
                    converted: None,
                    formatted_input,
                    formatted_converted: None,
                    formatted_rate,
                    error_message: Some(
                        "Cannot convert from VES to USD with a rate of 0.".to_string(),
                    ),
                };
            }
            amount / rate
        }
    };

    Conversion {
        converted: Some(converted),
        formatted_converted: Some(format.format(converted)),
        formatted_input,
        formatted_rate,
        error_message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt() -> AmountFormat {
        AmountFormat::default()
    }

    #[test]
    fn test_usd_to_ves_multiplies() {
        let result = convert(36.5, 100.0, Direction::UsdToVes, &fmt());
        assert_eq!(result.converted, Some(3650.0));
        assert_eq!(result.formatted_converted.as_deref(), Some("3,650.00"));
        assert_eq!(result.error_message, None);
    }

    #[test]
    fn test_ves_to_usd_divides() {
        let result = convert(36.5, 3650.0, Direction::VesToUsd, &fmt());
        assert_eq!(result.converted, Some(100.0));
        assert_eq!(result.formatted_converted.as_deref(), Some("100.00"));
    }

    #[test]
    fn test_zero_rate_division_short_circuits() {
        let result = convert(0.0, 100.0, Direction::VesToUsd, &fmt());
        assert_eq!(result.converted, None);
        assert_eq!(result.formatted_converted, None);
        assert!(result.error_message.is_some());
        assert_eq!(result.formatted_input, "100.00");
    }

    #[test]
    fn test_zero_rate_multiplication_is_fine() {
        let result = convert(0.0, 100.0, Direction::UsdToVes, &fmt());
        assert_eq!(result.converted, Some(0.0));
        assert_eq!(result.error_message, None);
    }

    #[test]
    fn test_formats_input_and_rate() {
        let result = convert(36.5, 1500.25, Direction::UsdToVes, &fmt());
        assert_eq!(result.formatted_input, "1,500.25");
        assert_eq!(result.formatted_rate, "36.50");
    }
}
