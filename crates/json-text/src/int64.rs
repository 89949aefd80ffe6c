//! Range-checked conversion of decimal integer text to `i64`.
//!
//! The magnitude is compared as a digit string against the i64 bounds before
//! any arithmetic happens, so out-of-range input is reported instead of
//! wrapping or panicking. Number tokens with a fraction or exponent are
//! normalized by moving the decimal point in the digit string; nothing goes
//! through `f64`.

use thiserror::Error;

const I64_MAX_DIGITS: &[u8] = b"9223372036854775807";
const I64_MIN_DIGITS: &[u8] = b"9223372036854775808";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntError {
    #[error("number is not an integer")]
    NotInteger,
    #[error("integer is outside the 64-bit signed range")]
    OutOfRange,
}

/// Parse an optionally negative decimal integer into an `i64`.
///
/// Accepts `-?[0-9]+`. Fractions, exponents and a leading `+` are
/// [`IntError::NotInteger`]; anything outside `[-2^63, 2^63 - 1]` is
/// [`IntError::OutOfRange`].
///
/// # Example
///
/// ```
/// use json_text::{parse_i64_checked, IntError};
///
/// assert_eq!(parse_i64_checked("4237846"), Ok(4237846));
/// assert_eq!(parse_i64_checked("-9223372036854775808"), Ok(i64::MIN));
/// assert_eq!(parse_i64_checked("9223372036854775808"), Err(IntError::OutOfRange));
/// assert_eq!(parse_i64_checked("1.5"), Err(IntError::NotInteger));
/// ```
pub fn parse_i64_checked(text: &str) -> Result<i64, IntError> {
    let bytes = text.as_bytes();
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(IntError::NotInteger);
    }

    let first_significant = digits
        .iter()
        .position(|&d| d != b'0')
        .unwrap_or(digits.len());
    let magnitude = &digits[first_significant..];
    let limit = if negative {
        I64_MIN_DIGITS
    } else {
        I64_MAX_DIGITS
    };
    if magnitude.len() > limit.len() || (magnitude.len() == limit.len() && magnitude > limit) {
        return Err(IntError::OutOfRange);
    }

    // Accumulate toward the sign so i64::MIN never passes through +2^63.
    let mut value: i64 = 0;
    for &d in magnitude {
        let d = i64::from(d - b'0');
        value = value * 10 + if negative { -d } else { d };
    }
    Ok(value)
}

/// Longest digit string that can still be in `i64` range.
const I64_DIGITS: i64 = 19;

/// Parse a JSON number token into an `i64` when its value is whole.
///
/// Unlike [`parse_i64_checked`] this accepts fraction and exponent parts:
/// `1E3`, `4237846.0` and `125e-2` are whole values, `1.25` is
/// [`IntError::NotInteger`] and `1e37` is [`IntError::OutOfRange`]. Huge
/// exponents are bounded by digit count, never expanded.
///
/// # Example
///
/// ```
/// use json_text::{parse_i64_number, IntError};
///
/// assert_eq!(parse_i64_number("1E3"), Ok(1000));
/// assert_eq!(parse_i64_number("4237846.0"), Ok(4237846));
/// assert_eq!(parse_i64_number("1e37"), Err(IntError::OutOfRange));
/// assert_eq!(parse_i64_number("1.25"), Err(IntError::NotInteger));
/// ```
pub fn parse_i64_number(text: &str) -> Result<i64, IntError> {
    let bytes = text.as_bytes();
    let (negative, rest) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };
    let (mantissa, exponent) = match rest.iter().position(|&b| matches!(b, b'e' | b'E')) {
        Some(at) => (&rest[..at], Some(&rest[at + 1..])),
        None => (rest, None),
    };
    let (int_part, frac_part) = match mantissa.iter().position(|&b| b == b'.') {
        Some(at) => (&mantissa[..at], Some(&mantissa[at + 1..])),
        None => (mantissa, None),
    };
    if exponent.is_none() && frac_part.is_none() {
        return parse_i64_checked(text);
    }
    if !is_digits(int_part) || frac_part.is_some_and(|frac| !is_digits(frac)) {
        return Err(IntError::NotInteger);
    }
    let frac_part = frac_part.unwrap_or_default();
    let exponent = match exponent {
        Some(exp) => parse_exponent(exp)?,
        None => 0,
    };

    // Digits of the mantissa with the point after `point` of them.
    let digits: Vec<u8> = int_part.iter().chain(frac_part).copied().collect();
    let leading = digits.iter().take_while(|&&d| d == b'0').count();
    let digits = &digits[leading..];
    let trailing = digits.iter().rev().take_while(|&&d| d == b'0').count();
    let digits = &digits[..digits.len() - trailing];
    if digits.is_empty() {
        return Ok(0);
    }
    let point = (int_part.len() as i64)
        .saturating_sub(leading as i64)
        .saturating_add(exponent);
    let len = digits.len() as i64;
    if point < len {
        return Err(IntError::NotInteger);
    }
    if point > I64_DIGITS {
        return Err(IntError::OutOfRange);
    }

    let mut whole = String::with_capacity(point as usize + 1);
    if negative {
        whole.push('-');
    }
    whole.extend(digits.iter().map(|&d| char::from(d)));
    whole.extend(std::iter::repeat('0').take((point - len) as usize));
    parse_i64_checked(&whole)
}

fn is_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// Exponent value, saturated: anything past `i64` is far beyond any
/// `i64`-sized mantissa shift anyway.
fn parse_exponent(exp: &[u8]) -> Result<i64, IntError> {
    let (negative, digits) = match exp.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, exp),
    };
    if !is_digits(digits) {
        return Err(IntError::NotInteger);
    }
    let magnitude = digits.iter().fold(0i64, |acc, &d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_i64_checked("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_i64_checked("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(
            parse_i64_checked("-9223372036854775809"),
            Err(IntError::OutOfRange)
        );
    }

    #[test]
    fn leading_zeros_do_not_count_toward_width() {
        assert_eq!(parse_i64_checked("0000000000000000000000042"), Ok(42));
        assert_eq!(parse_i64_checked("-0"), Ok(0));
    }

    #[test]
    fn very_long_digit_strings_overflow() {
        let digits = format!("1{}", "0".repeat(37));
        assert_eq!(parse_i64_checked(&digits), Err(IntError::OutOfRange));
        assert_eq!(
            parse_i64_checked(&format!("-{digits}")),
            Err(IntError::OutOfRange)
        );
    }

    #[test]
    fn non_integer_text() {
        for text in ["", "-", "+1", "1e3", "2.0", " 1", "0x10", "１"] {
            assert_eq!(parse_i64_checked(text), Err(IntError::NotInteger), "{text:?}");
        }
    }

    #[test]
    fn whole_valued_fractions_and_exponents() {
        assert_eq!(parse_i64_number("1E3"), Ok(1000));
        assert_eq!(parse_i64_number("4237846.0"), Ok(4237846));
        assert_eq!(parse_i64_number("-2.500e1"), Ok(-25));
        assert_eq!(parse_i64_number("125e-2"), Err(IntError::NotInteger));
        assert_eq!(parse_i64_number("12500e-2"), Ok(125));
        assert_eq!(parse_i64_number("0.0e999999999"), Ok(0));
        assert_eq!(parse_i64_number("-0.0"), Ok(0));
        assert_eq!(parse_i64_number("9.223372036854775807e18"), Ok(i64::MAX));
        assert_eq!(parse_i64_number("-9.223372036854775808E+18"), Ok(i64::MIN));
    }

    #[test]
    fn exponent_form_out_of_range() {
        assert_eq!(parse_i64_number("1e37"), Err(IntError::OutOfRange));
        assert_eq!(parse_i64_number("-1e19"), Err(IntError::OutOfRange));
        assert_eq!(
            parse_i64_number("9.223372036854775808e18"),
            Err(IntError::OutOfRange)
        );
        assert_eq!(parse_i64_number("1e999999999"), Err(IntError::OutOfRange));
        assert_eq!(
            parse_i64_number("1e99999999999999999999999"),
            Err(IntError::OutOfRange)
        );
    }

    #[test]
    fn real_fractions_are_not_integers() {
        for text in [
            "1.25",
            "-0.5",
            "1e-1",
            "1e-99999999999999999999",
            "1.",
            "1e",
            "1e+",
            "e5",
            ".5",
        ] {
            assert_eq!(parse_i64_number(text), Err(IntError::NotInteger), "{text:?}");
        }
    }

    #[test]
    fn plain_integers_match_checked_parse() {
        assert_eq!(parse_i64_number("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(parse_i64_number("9223372036854775808"), Err(IntError::OutOfRange));
        assert_eq!(parse_i64_number("+1"), Err(IntError::NotInteger));
    }
}
