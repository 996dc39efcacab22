//! Free-text decimal parsing for calculator inputs.
//!
//! Input fields are typed by hand on a numeric keypad, so values arrive as
//! text such as `"170"`, `" 72.5"` or `"170cm"`. Only the leading number is
//! read; whatever follows it is ignored.

/// Read the leading decimal number from `text`
///
/// Accepts `[+-]? digits [. digits] [(e|E) [+-]? digits]` after optional
/// leading whitespace, where the mantissa needs at least one digit on either
/// side of the point. An exponent without digits is left unread.
///
/// Returns `None` when the text does not start with a number.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_decimal("170"), Some(170.0));
        assert_eq!(parse_decimal("72.5"), Some(72.5));
        assert_eq!(parse_decimal("-3"), Some(-3.0));
        assert_eq!(parse_decimal("+4"), Some(4.0));
        assert_eq!(parse_decimal("0"), Some(0.0));
    }

    #[test]
    fn test_leading_whitespace_is_skipped() {
        assert_eq!(parse_decimal("  12"), Some(12.0));
        assert_eq!(parse_decimal("\t8.25\n"), Some(8.25));
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(parse_decimal("170cm"), Some(170.0));
        assert_eq!(parse_decimal("4 hrs"), Some(4.0));
        assert_eq!(parse_decimal("1.2.3"), Some(1.2));
        assert_eq!(parse_decimal("5e"), Some(5.0));
        assert_eq!(parse_decimal("5e+"), Some(5.0));
    }

    #[test]
    fn test_bare_point_forms() {
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("-."), None);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_decimal("1e2"), Some(100.0));
        assert_eq!(parse_decimal("2.5E-1"), Some(0.25));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("cm170"), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }
}
