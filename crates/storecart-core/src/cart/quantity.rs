//! Parsing of raw quantity input.

/// Parse a raw quantity field value.
///
/// Takes the leading integer of the trimmed input: an optional sign then
/// decimal digits, stopping at the first other character. Input with no
/// leading digits parses as 0, so a cleared or garbled field removes the
/// item instead of leaving an undefined quantity behind.
///
/// ```
/// use storecart_core::cart::parse_quantity;
/// assert_eq!(parse_quantity(" 7 "), 7);
/// assert_eq!(parse_quantity("2.9"), 2);
/// assert_eq!(parse_quantity("abc"), 0);
/// ```
pub fn parse_quantity(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Convert a requested quantity to a stored one.
///
/// Returns `None` when the request is zero or negative, meaning the item
/// should be removed. Requests beyond `u32::MAX` saturate.
pub(crate) fn stored_quantity(requested: i64) -> Option<u32> {
    if requested <= 0 {
        return None;
    }
    Some(u32::try_from(requested).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("-1"), -1);
        assert_eq!(parse_quantity("0"), 0);
    }

    #[test]
    fn test_parse_takes_leading_integer() {
        assert_eq!(parse_quantity("  12  "), 12);
        assert_eq!(parse_quantity("2.9"), 2);
        assert_eq!(parse_quantity("4kg"), 4);
        assert_eq!(parse_quantity("1e3"), 1);
    }

    #[test]
    fn test_parse_unparsable_is_zero() {
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("   "), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("-"), 0);
        assert_eq!(parse_quantity("x5"), 0);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_quantity("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_stored_quantity() {
        assert_eq!(stored_quantity(0), None);
        assert_eq!(stored_quantity(-3), None);
        assert_eq!(stored_quantity(5), Some(5));
        assert_eq!(stored_quantity(12_000), Some(12_000));
        assert_eq!(stored_quantity(i64::from(u32::MAX)), Some(u32::MAX));
        assert_eq!(stored_quantity(i64::MAX), Some(u32::MAX));
    }
}
