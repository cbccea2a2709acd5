//! Decimal rendering and parsing of `f64` values.
//!
//! The calculator shows numbers the way a browser renders a JavaScript
//! number, so this module reproduces `Number.prototype.toString`,
//! `toExponential`, `toFixed` and the global `parseFloat` digit for digit
//! instead of relying on Rust's float `Display`.

use std::iter;

/// Precision large enough to print every double exactly in scientific form.
const EXACT_PRECISION: usize = 800;

/// Finite value split into sign, significant digits and decimal point.
///
/// The value is `0.d1 d2 d3 ... × 10^point`: `point` counts how many of the
/// digits sit in front of the decimal point (it may be zero or negative).
#[derive(Clone, Debug, PartialEq, Eq)]
struct Decimal {
    negative: bool,
    digits: Vec<u8>,
    point: i32,
}

impl Decimal {
    /// Shortest digits that round-trip to `value`.
    fn shortest(value: f64) -> Self {
        Self::from_scientific(&format!("{:e}", value))
    }

    /// Exact decimal expansion of the binary value.
    fn exact(value: f64) -> Self {
        Self::from_scientific(&format!("{:.*e}", EXACT_PRECISION, value))
    }

    fn from_scientific(rendered: &str) -> Self {
        let (negative, body) = match rendered.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rendered),
        };
        let (mantissa, exponent) = body.split_once('e').unwrap_or((body, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
        while digits.len() > 1 && digits.last() == Some(&b'0') {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(b'0');
        }

        Self {
            negative,
            digits,
            point: exponent + 1,
        }
    }

    /// Integer and fraction digits of the plain (non-exponent) notation.
    fn fixed_parts(&self) -> (Vec<u8>, Vec<u8>) {
        let len = self.digits.len() as i32;
        if self.point <= 0 {
            let fraction = iter::repeat(b'0')
                .take(self.point.unsigned_abs() as usize)
                .chain(self.digits.iter().copied())
                .collect();
            return (vec![b'0'], fraction);
        }

        let split = self.point.min(len) as usize;
        let mut integer = self.digits[..split].to_vec();
        integer.extend(iter::repeat(b'0').take((self.point - split as i32) as usize));
        let fraction = self.digits[split..].to_vec();
        (integer, fraction)
    }
}

/// Rounds an ASCII digit run to `keep` digits, half-up.
///
/// The result is zero-padded when the input is shorter than `keep`, and
/// grows by one leading digit when the carry runs off the front.
fn round_half_up(digits: &[u8], keep: usize) -> Vec<u8> {
    if digits.len() <= keep {
        let mut padded = digits.to_vec();
        padded.resize(keep, b'0');
        return padded;
    }

    let mut kept = digits[..keep].to_vec();
    if digits[keep] >= b'5' {
        let mut index = keep;
        loop {
            if index == 0 {
                kept.insert(0, b'1');
                break;
            }
            index -= 1;
            if kept[index] == b'9' {
                kept[index] = b'0';
            } else {
                kept[index] += 1;
                break;
            }
        }
    }
    kept
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&d| d as char));
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

fn assemble_fixed(negative: bool, integer: &[u8], fraction: &[u8]) -> String {
    let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
    if negative {
        out.push('-');
    }
    push_digits(&mut out, integer);
    if !fraction.is_empty() {
        out.push('.');
        push_digits(&mut out, fraction);
    }
    out
}

/// Renders `value` exactly like JavaScript's `String(value)`.
///
/// ```rust
/// use dentaku::core::numeral::to_js_string;
///
/// assert_eq!(to_js_string(8.0), "8");
/// assert_eq!(to_js_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(to_js_string(1e21), "1e+21");
/// assert_eq!(to_js_string(0.0000001), "1e-7");
/// ```
pub fn to_js_string(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let decimal = Decimal::shortest(value);
    let k = decimal.digits.len() as i32;
    let n = decimal.point;
    let mut out = String::new();
    if decimal.negative {
        out.push('-');
    }

    if k <= n && n <= 21 {
        push_digits(&mut out, &decimal.digits);
        out.extend(iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        push_digits(&mut out, &decimal.digits[..n as usize]);
        out.push('.');
        push_digits(&mut out, &decimal.digits[n as usize..]);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(iter::repeat('0').take(n.unsigned_abs() as usize));
        push_digits(&mut out, &decimal.digits);
    } else {
        push_digits(&mut out, &decimal.digits[..1]);
        if k > 1 {
            out.push('.');
            push_digits(&mut out, &decimal.digits[1..]);
        }
        push_exponent(&mut out, n - 1);
    }
    out
}

fn push_exponent(out: &mut String, exponent: i32) {
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&exponent.unsigned_abs().to_string());
}

/// Renders `value` like JavaScript's `value.toExponential(fraction_digits)`.
///
/// Rounds half-up on the exact binary value.
///
/// ```rust
/// use dentaku::core::numeral::to_exponential;
///
/// assert_eq!(to_exponential(12345678901234.0, 7), "1.2345679e+13");
/// assert_eq!(to_exponential(0.0, 2), "0.00e+0");
/// ```
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }

    let (negative, digits, exponent) = if value == 0.0 {
        (false, vec![b'0'; fraction_digits + 1], 0)
    } else {
        let exact = Decimal::exact(value);
        let mut rounded = round_half_up(&exact.digits, fraction_digits + 1);
        let mut exponent = exact.point - 1;
        if rounded.len() > fraction_digits + 1 {
            rounded.truncate(fraction_digits + 1);
            exponent += 1;
        }
        (exact.negative, rounded, exponent)
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    push_digits(&mut out, &digits[..1]);
    if fraction_digits > 0 {
        out.push('.');
        push_digits(&mut out, &digits[1..]);
    }
    push_exponent(&mut out, exponent);
    out
}

/// Renders `value` like JavaScript's `value.toFixed(places)`.
///
/// Rounds half-up on the exact binary value; magnitudes of `1e21` and above
/// fall back to [`to_js_string`].
pub fn to_fixed(value: f64, places: usize) -> String {
    if value.is_nan() || value.abs() >= 1e21 {
        return to_js_string(value);
    }

    let exact = Decimal::exact(value.abs());
    let (integer, fraction) = exact.fixed_parts();
    let mut all = integer.clone();
    all.extend_from_slice(&fraction);

    let mut integer_len = integer.len();
    let rounded = round_half_up(&all, integer_len + places);
    if rounded.len() > integer_len + places {
        integer_len += 1;
    }
    let (integer, fraction) = rounded.split_at(integer_len);
    assemble_fixed(value < 0.0, strip_leading_zeros(integer), fraction)
}

/// Cuts the printed decimal form of `value` down to `places` fraction digits.
///
/// Works on the same shortest digits [`to_js_string`] prints, so the kept
/// digits are exactly those a reader sees; nothing is rounded.
///
/// ```rust
/// use dentaku::core::numeral::truncate_fixed;
///
/// assert_eq!(truncate_fixed(2.0 / 3.0, 10), "0.6666666666");
/// assert_eq!(truncate_fixed(1.5, 3), "1.500");
/// ```
pub fn truncate_fixed(value: f64, places: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    if value == 0.0 {
        return assemble_fixed(false, b"0", &vec![b'0'; places]);
    }

    let decimal = Decimal::shortest(value);
    let (integer, mut fraction) = decimal.fixed_parts();
    fraction.resize(places, b'0');
    assemble_fixed(decimal.negative, &integer, &fraction)
}

fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    let first = digits
        .iter()
        .position(|&d| d != b'0')
        .unwrap_or(digits.len().saturating_sub(1));
    &digits[first..]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses the longest leading decimal literal, like JavaScript's `parseFloat`.
///
/// Returns NaN when the input does not start with a number.
///
/// ```rust
/// use dentaku::core::numeral::parse_float;
///
/// assert_eq!(parse_float("12.5"), 12.5);
/// assert_eq!(parse_float("1.0000000e+13"), 1e13);
/// assert_eq!(parse_float("5."), 5.0);
/// assert!(parse_float(".").is_nan());
/// ```
pub fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_digits = count_digits(&bytes[cursor.min(bytes.len())..]);
        if exponent_digits > 0 {
            end = cursor + exponent_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_matches_integer_rendering() {
        assert_eq!(to_js_string(0.0), "0");
        assert_eq!(to_js_string(-0.0), "0");
        assert_eq!(to_js_string(42.0), "42");
        assert_eq!(to_js_string(-15.0), "-15");
        assert_eq!(to_js_string(1e20), "100000000000000000000");
    }

    #[test]
    fn js_string_switches_to_exponent_at_bounds() {
        assert_eq!(to_js_string(1e21), "1e+21");
        assert_eq!(to_js_string(1.5e25), "1.5e+25");
        assert_eq!(to_js_string(0.000001), "0.000001");
        assert_eq!(to_js_string(0.0000001), "1e-7");
        assert_eq!(to_js_string(-1.25e-9), "-1.25e-9");
    }

    #[test]
    fn js_string_keeps_shortest_fraction_digits() {
        assert_eq!(to_js_string(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(to_js_string(2.0 / 3.0), "0.6666666666666666");
        assert_eq!(to_js_string(123.456), "123.456");
    }

    #[test]
    fn js_string_names_non_finite_values() {
        assert_eq!(to_js_string(f64::NAN), "NaN");
        assert_eq!(to_js_string(f64::INFINITY), "Infinity");
        assert_eq!(to_js_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn exponential_rounds_half_up_on_exact_value() {
        assert_eq!(to_exponential(12345678901234.0, 7), "1.2345679e+13");
        assert_eq!(to_exponential(99999999999999.0, 7), "1.0000000e+14");
        assert_eq!(to_exponential(1.0 / 3.0 * 1e-12, 7), "3.3333333e-13");
        assert_eq!(to_exponential(-2.5e15, 7), "-2.5000000e+15");
        assert_eq!(to_exponential(1.25, 1), "1.3e+0");
    }

    #[test]
    fn fixed_rounds_half_up_and_pads() {
        assert_eq!(to_fixed(2.0 / 3.0, 10), "0.6666666667");
        assert_eq!(to_fixed(1.0 / 3.0, 10), "0.3333333333");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(0.96, 0), "1");
        assert_eq!(to_fixed(1.5, 3), "1.500");
        assert_eq!(to_fixed(-1.005, 2), "-1.00");
    }

    #[test]
    fn truncate_never_rounds_up() {
        assert_eq!(truncate_fixed(2.0 / 3.0, 10), "0.6666666666");
        assert_eq!(truncate_fixed(999999999999.99, 0), "999999999999");
        assert_eq!(truncate_fixed(-12.3456, 2), "-12.34");
        assert_eq!(truncate_fixed(1.2345678901234e-7, 10), "0.0000001234");
        assert_eq!(truncate_fixed(0.0, 2), "0.00");
    }

    #[test]
    fn round_half_up_carries_through_nines() {
        assert_eq!(round_half_up(b"9995", 3), b"1000".to_vec());
        assert_eq!(round_half_up(b"1234", 3), b"123".to_vec());
        assert_eq!(round_half_up(b"12", 4), b"1200".to_vec());
    }

    #[test]
    fn parse_float_reads_leading_literal() {
        assert_eq!(parse_float("0"), 0.0);
        assert_eq!(parse_float("  -3.5"), -3.5);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("7.25abc"), 7.25);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2.5e+"), 2.5);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_float_rejects_non_numbers() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("NaN").is_nan());
        assert!(parse_float("abc").is_nan());
    }
}
