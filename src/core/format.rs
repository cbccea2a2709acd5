//! Fitting calculation results into the display's digit budget.

use super::numeral::{to_exponential, to_fixed, to_js_string, truncate_fixed};
use serde::{Deserialize, Serialize};

/// Default number of characters a result may occupy on the display.
pub const DEFAULT_MAX_DIGITS: usize = 12;

/// Characters reserved for the exponent when a result goes exponential.
const EXPONENT_RESERVE: usize = 5;

/// How surplus decimal places are dropped when a result is too long.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalOverflow {
    /// Cut the printed digits; `2/3` shows `0.6666666666`.
    #[default]
    Truncate,
    /// Round half-up like `toFixed`; `2/3` shows `0.6666666667`.
    Round,
}

/// Digit budget and overflow policy for results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub max_digits: usize,
    pub overflow: DecimalOverflow,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            overflow: DecimalOverflow::default(),
        }
    }
}

impl NumberFormat {
    /// Format a result for display.
    ///
    /// Results that print within the budget are returned as printed. Longer
    /// results whose magnitude is above `10^max_digits` or below
    /// `10^-max_digits` switch to exponential notation; the rest keep their
    /// integer part and lose decimal places until they fit.
    ///
    /// ```rust
    /// use dentaku::core::NumberFormat;
    ///
    /// let format = NumberFormat::default();
    /// assert_eq!(format.format(8.0), "8");
    /// assert_eq!(format.format(1.0 / 3.0), "0.3333333333");
    /// assert_eq!(format.format(12345678901234.0), "1.2345679e+13");
    /// ```
    pub fn format(&self, value: f64) -> String {
        let printed = to_js_string(value);
        if printed.chars().count() <= self.max_digits {
            return printed;
        }

        let upper = 10f64.powi(self.max_digits as i32);
        let lower = upper.recip();
        let magnitude = value.abs();
        if magnitude > upper || magnitude < lower {
            return to_exponential(value, self.max_digits.saturating_sub(EXPONENT_RESERVE));
        }

        let integer_len = printed
            .split('.')
            .next()
            .map_or(0, |integer| integer.chars().count());
        let places = self.max_digits.saturating_sub(integer_len + 1);
        match self.overflow {
            DecimalOverflow::Truncate => truncate_fixed(value, places),
            DecimalOverflow::Round => to_fixed(value, places),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounding() -> NumberFormat {
        NumberFormat {
            overflow: DecimalOverflow::Round,
            ..NumberFormat::default()
        }
    }

    #[test]
    fn short_results_are_untouched() {
        let format = NumberFormat::default();
        assert_eq!(format.format(8.0), "8");
        assert_eq!(format.format(-42.5), "-42.5");
        assert_eq!(format.format(123456789012.0), "123456789012");
    }

    #[test]
    fn long_fractions_are_truncated_by_default() {
        let format = NumberFormat::default();
        assert_eq!(format.format(2.0 / 3.0), "0.6666666666");
        assert_eq!(format.format(0.1 + 0.2), "0.3000000000");
        assert_eq!(format.format(10.0 / 3.0), "3.3333333333");
        assert_eq!(format.format(1000.0 / 7.0), "142.85714285");
    }

    #[test]
    fn round_mode_matches_to_fixed() {
        assert_eq!(rounding().format(2.0 / 3.0), "0.6666666667");
        assert_eq!(rounding().format(1000.0 / 7.0), "142.85714286");
    }

    #[test]
    fn large_and_tiny_magnitudes_go_exponential() {
        let format = NumberFormat::default();
        assert_eq!(format.format(12345678901234.0), "1.2345679e+13");
        assert_eq!(format.format(1e13 + 1.0), "1.0000000e+13");
        assert_eq!(format.format(1.0 / 3.0 * 1e-12), "3.3333333e-13");
        assert_eq!(format.format(0.1 * 3.0 - 0.3), "5.5511151e-17");
        assert_eq!(format.format(-98765432109876.0), "-9.8765432e+13");
    }

    #[test]
    fn negative_fractions_keep_sign_in_budget() {
        let format = NumberFormat::default();
        assert_eq!(format.format(-1.0 / 3.0), "-0.333333333");
        assert_eq!(format.format(-2.0 / 3.0), "-0.666666666");
    }

    #[test]
    fn short_exponent_forms_pass_through() {
        let format = NumberFormat::default();
        assert_eq!(format.format(1e-13), "1e-13");
        assert_eq!(format.format(1e21), "1e+21");
        assert_eq!(format.format(f64::NAN), "NaN");
        assert_eq!(format.format(f64::INFINITY), "Infinity");
    }

    #[test]
    fn twelve_digit_integers_with_fractions_keep_integer_part() {
        let format = NumberFormat::default();
        assert_eq!(format.format(999999999999.75), "999999999999");
        assert_eq!(rounding().format(999999999999.75), "1000000000000");
    }

    #[test]
    fn smaller_budget_shrinks_output() {
        let format = NumberFormat {
            max_digits: 8,
            ..NumberFormat::default()
        };
        assert_eq!(format.format(1.0 / 3.0), "0.333333");
        assert_eq!(format.format(123456789.0), "1.235e+8");
    }
}
