//! Text to typed value conversion.
//!
//! Conversion is lenient: numbers are read from the longest numeric prefix
//! (leading whitespace and sign allowed), and text without one converts to
//! zero. The strict shape checks [`is_int_text`] / [`is_float_text`] are run
//! beforehand by the binding layer when type mismatches are being caught.

use crate::util::split_by_null;

/// Conversion from a raw option value.
///
/// List types split the value on the NUL separator used for repeated
/// options and for the joined positional list.
pub trait FromArg: Sized {
    fn from_arg(raw: &str) -> Self;
}

impl FromArg for String {
    fn from_arg(raw: &str) -> Self {
        raw.to_owned()
    }
}

impl FromArg for i64 {
    fn from_arg(raw: &str) -> Self {
        parse_int_prefix(raw)
    }
}

impl FromArg for i32 {
    fn from_arg(raw: &str) -> Self {
        parse_int_prefix(raw).clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }
}

impl FromArg for f64 {
    fn from_arg(raw: &str) -> Self {
        parse_float_prefix(raw)
    }
}

impl<T: FromArg> FromArg for Vec<T> {
    fn from_arg(raw: &str) -> Self {
        split_by_null(raw).into_iter().map(T::from_arg).collect()
    }
}

fn skip_sign(bytes: &[u8], mut i: usize) -> usize {
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    i
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Integer value of the leading numeric prefix of `s`; 0 when there is none.
/// Saturates instead of overflowing.
pub fn parse_int_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let start = skip_sign(bytes, 0);
    let end = skip_digits(bytes, start);

    let mut value: i64 = 0;
    for &b in &bytes[start..end] {
        let digit = (b - b'0') as i64;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Float value of the leading numeric prefix of `s`; 0.0 when there is none.
pub fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let start = skip_sign(bytes, 0);
    let int_end = skip_digits(bytes, start);
    let mut end = int_end;
    let mut digits = int_end - start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - end - 1;
        end = frac_end;
    }
    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let exp_start = skip_sign(bytes, end + 1);
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Strict integer shape: `-?[0-9]+`.
pub fn is_int_text(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Strict float shape: `-?[0-9]+(\.[0-9]*)?` or `-?\.[0-9]+`.
pub fn is_float_text(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let all_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
    match frac_part {
        None => !int_part.is_empty() && all_digits(int_part),
        Some(frac) => {
            all_digits(int_part)
                && all_digits(frac)
                && (!int_part.is_empty() || !frac.is_empty())
        }
    }
}

/// First NUL-separated element of `raw` rejected by `is_valid`.
pub fn first_malformed(raw: &str, is_valid: fn(&str) -> bool) -> Option<&str> {
    split_by_null(raw).into_iter().find(|item| !is_valid(item))
}
