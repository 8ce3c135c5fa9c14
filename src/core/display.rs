//! # Display Formatter
//!
//! Turns calculator state into the single line shown above the keypad.
//! The display is derived on every read and never stored.
//!
//! Priority, highest first:
//!
//! 1. error state → the configured error token
//! 2. accumulator has text → that text, verbatim (a result from `=` is
//!    rounded to the display precision)
//! 3. an operation is pending → its left operand (the running result)
//! 4. otherwise → `"0"`

use crate::core::accumulator::Accumulator;
use crate::core::dispatch::{CalcError, PendingOperation};

pub const DEFAULT_ERROR_TOKEN: &str = "Error";
pub const DEFAULT_PRECISION: usize = 10;
/// `f64` carries roughly 15-17 significant digits; more fraction digits
/// than this only print noise.
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub error_token: String,
    /// Maximum fraction digits shown for computed results.
    pub precision: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            error_token: DEFAULT_ERROR_TOKEN.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

pub fn render(
    accumulator: &Accumulator,
    pending: Option<&PendingOperation>,
    error: Option<CalcError>,
    settings: &DisplaySettings,
) -> String {
    if error.is_some() {
        return settings.error_token.clone();
    }
    if accumulator.is_result()
        && let Ok(value) = accumulator.value()
    {
        return format_number(value, settings.precision);
    }
    if !accumulator.is_empty() {
        return accumulator.as_str().to_string();
    }
    match pending {
        Some(op) => format_number(op.operand, settings.precision),
        None => "0".to_string(),
    }
}

/// Format a result as plain decimal text: no exponent, no trailing zeros.
/// The output always parses back as a number.
pub fn format_number(value: f64, precision: usize) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.*}", precision.min(MAX_PRECISION), value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::Operator;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(15.0, 10), "15");
        assert_eq!(format_number(-2.0, 10), "-2");
        assert_eq!(format_number(-0.0, 10), "0");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_number(4.5, 10), "4.5");
        assert_eq!(format_number(0.1 + 0.2, 10), "0.3");
    }

    #[test]
    fn test_format_respects_precision() {
        assert_eq!(format_number(1.0 / 3.0, 10), "0.3333333333");
        assert_eq!(format_number(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_number(2.25, 0), "2");
    }

    #[test]
    fn test_format_tiny_negative_collapses_to_zero() {
        assert_eq!(format_number(-1e-12, 10), "0");
    }

    #[test]
    fn test_format_large_values_have_no_exponent() {
        let text = format_number(1e20, 10);
        assert_eq!(text, "100000000000000000000");
        assert_eq!(text.parse::<f64>().unwrap(), 1e20);
    }

    #[test]
    fn test_render_priority() {
        let settings = DisplaySettings::default();
        let mut acc = Accumulator::new();
        let pending = PendingOperation::new(2.5, Operator::Add);

        assert_eq!(render(&acc, None, None, &settings), "0");
        assert_eq!(render(&acc, Some(&pending), None, &settings), "2.5");

        acc.push('7');
        assert_eq!(render(&acc, Some(&pending), None, &settings), "7");
        assert_eq!(
            render(&acc, Some(&pending), Some(CalcError::DivisionByZero), &settings),
            "Error"
        );
    }

    #[test]
    fn test_render_rounds_loaded_result() {
        let settings = DisplaySettings {
            precision: 4,
            ..Default::default()
        };
        let mut acc = Accumulator::new();
        acc.load_result(format!("{}", 2.0 / 3.0));
        assert_eq!(render(&acc, None, None, &settings), "0.6667");
        // Typed text is never rounded
        acc.clear();
        for c in "0.123456".chars() {
            acc.push(c);
        }
        assert_eq!(render(&acc, None, None, &settings), "0.123456");
    }

    #[test]
    fn test_render_custom_error_token() {
        let settings = DisplaySettings {
            error_token: "E".to_string(),
            ..Default::default()
        };
        let acc = Accumulator::new();
        assert_eq!(
            render(&acc, None, Some(CalcError::MalformedNumber), &settings),
            "E"
        );
    }
}
