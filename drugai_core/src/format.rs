//! Number formatting for calculator output.
//!
//! Both helpers reproduce how the home screen printed numbers, so the same
//! input shows the same text here as it did there.

/// Numbers at or above this magnitude print in exponent form
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Enough fractional digits to hold any `f64` exactly
const EXACT_DIGITS: usize = 1074;

/// Format `value` with exactly `decimals` fractional digits
///
/// Rounds the exact binary value of the double, half up: `3.125` becomes
/// `"3.13"`, while `7.675` (stored as 7.67499999...) becomes `"7.67"`.
/// Magnitudes of 1e21 and above, and non-finite values, fall back to
/// [`plain_number`].
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_THRESHOLD {
        return plain_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .map_or(false, |d| *d >= b'5');
    if round_up {
        increment_digits(&mut digits);
    }

    let split = digits.len() - decimals;
    let (whole, frac) = digits.split_at(split);
    let whole = String::from_utf8_lossy(whole);
    if decimals == 0 {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, String::from_utf8_lossy(frac))
    }
}

/// Add one to the last place of an ASCII digit string, carrying leftwards
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Shortest decimal form of `value`
///
/// Integers print without a fractional part (`40`, not `40.0`). Magnitudes
/// of 1e21 and above, or below 1e-6, switch to exponent form such as
/// `1e+21` or `1.5e-7`.
pub fn plain_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` gives the shortest round-trip digits, e.g. "1.5e-7" or "4e1"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (whole, frac) = digits.split_at(n as usize);
        format!("{}.{}", whole, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat(n.unsigned_abs() as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{}.{}", lead, rest)
        };
        let e = n - 1;
        format!("{}e{}{}", mantissa, if e < 0 { '-' } else { '+' }, e.abs())
    };

    format!("{}{}", sign, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(to_fixed(24.221453287197235, 2), "24.22");
        assert_eq!(to_fixed(100.0, 2), "100.00");
        assert_eq!(to_fixed(0.09765625, 2), "0.10");
        assert_eq!(to_fixed(1.5625, 2), "1.56");
        assert_eq!(to_fixed(0.0, 2), "0.00");
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(to_fixed(3.125, 2), "3.13");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-3.125, 2), "-3.13");
    }

    #[test]
    fn test_rounds_stored_value_not_written_value() {
        // 30.7 / 4 is stored just below 7.675
        assert_eq!(to_fixed(30.7 / 4.0, 2), "7.67");
        assert_eq!(to_fixed(7.675, 2), "7.67");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn test_carry_into_whole_part() {
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(99.5, 0), "100");
    }

    #[test]
    fn test_negative_keeps_sign() {
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_huge_values_do_not_overflow() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(1e307, 2), "1e+307");
        assert_eq!(to_fixed(1e20, 2), "100000000000000000000.00");
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(plain_number(0.0), "0");
        assert_eq!(plain_number(-0.0), "0");
        assert_eq!(plain_number(40.0), "40");
        assert_eq!(plain_number(4.5), "4.5");
        assert_eq!(plain_number(123.456), "123.456");
        assert_eq!(plain_number(0.1 * 3.0), "0.30000000000000004");
    }

    #[test]
    fn test_plain_number_exponent_form() {
        assert_eq!(plain_number(1e20), "100000000000000000000");
        assert_eq!(plain_number(1e21), "1e+21");
        assert_eq!(plain_number(1.5e22), "1.5e+22");
        assert_eq!(plain_number(0.000001), "0.000001");
        assert_eq!(plain_number(1e-7), "1e-7");
        assert_eq!(plain_number(1.5e-7), "1.5e-7");
        assert_eq!(plain_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_plain_number_non_finite() {
        assert_eq!(plain_number(f64::INFINITY), "Infinity");
        assert_eq!(plain_number(f64::NAN), "NaN");
    }
}
