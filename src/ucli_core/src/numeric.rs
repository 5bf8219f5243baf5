//! Numeric conversion for placeholder tokens.
//!
//! The lenient converters follow C `atoi`/`atof`: optional leading spaces,
//! optional sign, then the longest valid numeric prefix. Anything
//! unparsable yields 0. The strict converters accept a whole word or
//! nothing.

use crate::words::{is_space, skip_spaces};

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Leading decimal integer of `s`, saturated to the `i32` range.
pub(crate) fn leading_int(s: &str) -> i32 {
    let bytes = skip_spaces(s).as_bytes();
    let (negative, mut i) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    // Capped one past i32::MAX so the accumulator can't overflow.
    let cap = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;
    while let Some(&d) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        value = (value * 10 + i64::from(d - b'0')).min(cap);
        i += 1;
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// End of the longest `[+-]digits[.digits][(e|E)[+-]digits]` prefix starting at `start`.
fn float_prefix_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(bytes, i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(bytes, i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return start;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(bytes, j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

/// Leading decimal number of `s`.
pub(crate) fn leading_float(s: &str) -> f32 {
    let s = skip_spaces(s);
    let end = float_prefix_end(s.as_bytes(), 0);
    s[..end].parse::<f32>().unwrap_or(0.0)
}

/// Unsigned digits in `radix`; a sign here is rejected.
fn unsigned_radix(digits: &str, radix: u32) -> Option<i64> {
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

/// Whole-word integer with optional sign and `0x`/`0o`/`0b` prefix.
pub(crate) fn strict_int(word: &str) -> Option<i32> {
    if word.bytes().any(is_space) {
        return None;
    }

    let (negative, digits) = match word.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, word.strip_prefix('+').unwrap_or(word)),
    };

    let magnitude = if let Some(hex) = digits.strip_prefix("0x") {
        unsigned_radix(hex, 16)?
    } else if let Some(oct) = digits.strip_prefix("0o") {
        unsigned_radix(oct, 8)?
    } else if let Some(bin) = digits.strip_prefix("0b") {
        unsigned_radix(bin, 2)?
    } else {
        unsigned_radix(digits, 10)?
    };

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Whole-word finite decimal number.
pub(crate) fn strict_float(word: &str) -> Option<f32> {
    if word.bytes().any(is_space) {
        return None;
    }
    // Rust also parses "inf"/"nan"; those are not console input.
    let end = float_prefix_end(word.as_bytes(), 0);
    if end != word.len() || end == 0 {
        return None;
    }
    word.parse::<f32>().ok().filter(|v| v.is_finite())
}

// ==================== TESTS =======================
