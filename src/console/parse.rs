//! Permissive integer parsing for command arguments
//!
//! Both parsers read the longest valid prefix and return 0 when nothing
//! parses, so `"12abc"` is 12 and `"abc"` is 0.

/// Parse like C `strtoul(s, NULL, 0)` on a 32-bit target.
///
/// Accepts leading whitespace, an optional sign, and a `0x`/`0X` (hex),
/// `0` (octal) or decimal body. Overflow saturates to `u32::MAX`; a leading
/// `-` negates modulo 2^32.
pub fn parse_unsigned(s: &str) -> u32 {
    let bytes = s.trim_start().as_bytes();
    let (negative, mut i) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let radix = if bytes.get(i) == Some(&b'0')
        && matches!(bytes.get(i + 1), Some(b'x') | Some(b'X'))
        && bytes.get(i + 2).is_some_and(|b| b.is_ascii_hexdigit())
    {
        i += 2;
        16
    } else if bytes.get(i) == Some(&b'0') {
        8
    } else {
        10
    };

    let mut value: u32 = 0;
    let mut overflow = false;
    for &b in &bytes[i..] {
        let Some(digit) = (b as char).to_digit(radix) else {
            break;
        };
        match value.checked_mul(radix).and_then(|v| v.checked_add(digit)) {
            Some(v) => value = v,
            None => overflow = true,
        }
    }

    if overflow {
        u32::MAX
    } else if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Parse like C `atoi`: optional sign and decimal digits.
///
/// Out-of-range values saturate.
pub fn parse_signed(s: &str) -> i32 {
    let bytes = s.trim_start().as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let mut value: i64 = 0;
    for &b in &bytes[start..] {
        if !b.is_ascii_digit() {
            break;
        }
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
