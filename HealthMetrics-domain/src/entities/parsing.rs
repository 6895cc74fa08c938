//! Lenient parsing of form field text
//!
//! Form fields are read the way a browser number field is read by the panel:
//! leading whitespace is skipped and the longest numeric prefix is taken, so
//! `"72kg"` reads as 72. Text without a numeric prefix is not a number.

use serde::{Deserialize, Deserializer};

/// Parse the leading decimal number of `input`.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns `None` when there is no numeric prefix or the value is not finite.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let frac_end = skip_digits(bytes, frac_start);
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_end = skip_digits(bytes, exp_end);
        if exp_digits_end > exp_end {
            end = exp_digits_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse the leading integer of `input`, ignoring any fractional part.
///
/// A `0x`/`0X` prefix after the sign reads the digits as hexadecimal. Values too
/// large for `i64` saturate, which keeps them on the out-of-range side of every
/// validation bound.
pub fn parse_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let (negative, mut start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let hex = bytes.len() >= start + 2 && bytes[start] == b'0' && matches!(bytes[start + 1], b'x' | b'X');
    let (radix, end) = if hex {
        start += 2;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
            end += 1;
        }
        (16, end)
    } else {
        (10, skip_digits(bytes, start))
    };
    if end == start {
        return None;
    }

    let magnitude = i64::from_str_radix(&s[start..end], radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Deserialize a form field that clients may send either as text or as a JSON number.
///
/// `null` reads as an empty field.
pub fn deserialize_field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FieldText {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<FieldText>::deserialize(deserializer)? {
        Some(FieldText::Text(text)) => text,
        Some(FieldText::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_plain_values() {
        assert_eq!(parse_decimal("70"), Some(70.0));
        assert_eq!(parse_decimal("175.5"), Some(175.5));
        assert_eq!(parse_decimal("-5"), Some(-5.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal("1.2e2"), Some(120.0));
    }

    #[test]
    fn test_parse_decimal_takes_numeric_prefix() {
        assert_eq!(parse_decimal("  72kg"), Some(72.0));
        assert_eq!(parse_decimal("5e"), Some(5.0));
        assert_eq!(parse_decimal("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_parse_decimal_rejects_non_numeric() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("1e999"), None);
    }

    #[test]
    fn test_parse_integer_truncates_fraction() {
        assert_eq!(parse_integer("30"), Some(30));
        assert_eq!(parse_integer("30.9"), Some(30));
        assert_eq!(parse_integer(" -12x"), Some(-12));
        assert_eq!(parse_integer("+7"), Some(7));
    }

    #[test]
    fn test_parse_integer_rejects_non_numeric() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer(".5"), None);
        assert_eq!(parse_integer("-"), None);
    }

    #[test]
    fn test_parse_integer_reads_hex_prefix() {
        assert_eq!(parse_integer("0x78"), Some(120));
        assert_eq!(parse_integer(" 0X4fmmHg"), Some(79));
        assert_eq!(parse_integer("-0x10"), Some(-16));
        assert_eq!(parse_integer("0x"), None);
        assert_eq!(parse_integer("0xg"), None);
        assert_eq!(parse_decimal("0x78"), Some(0.0));
    }

    #[test]
    fn test_parse_integer_saturates() {
        assert_eq!(parse_integer("99999999999999999999999"), Some(i64::MAX));
    }
}
