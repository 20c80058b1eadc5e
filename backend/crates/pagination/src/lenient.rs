//! Lenient integer parsing for query-string values.

/// Parse the leading integer of `raw`, ignoring any trailing garbage.
///
/// Leading whitespace is skipped and an optional sign is honoured. Returns
/// `None` when no digits follow, or when the value overflows `i64`.
///
/// # Examples
/// ```
/// use pagination::parse_leading_integer;
///
/// assert_eq!(parse_leading_integer("42"), Some(42));
/// assert_eq!(parse_leading_integer(" 7yrs"), Some(7));
/// assert_eq!(parse_leading_integer("-3"), Some(-3));
/// assert_eq!(parse_leading_integer("abc"), None);
/// ```
#[must_use]
pub fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_end = unsigned
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(unsigned.len(), |(index, _)| index);
    let digits = unsigned.get(..digits_end)?;
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
