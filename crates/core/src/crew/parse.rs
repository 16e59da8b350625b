/// Parses a movie id with base-10 leading-numeric-prefix semantics.
///
/// Accepts optional leading whitespace and an optional `+`/`-` sign, then
/// takes the longest run of ASCII digits: `"123abc"` parses to 123. A
/// string with no leading digits (or one whose digits overflow `i64`) has
/// no value; callers decide how to reject it.
pub fn parse_movie_id(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for byte in digits.bytes() {
        value = value
            .checked_mul(10)?
            .checked_add(i64::from(byte - b'0'))?;
    }

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_movie_id("550"), Some(550));
        assert_eq!(parse_movie_id("0"), Some(0));
    }

    #[test]
    fn test_numeric_prefix_wins() {
        assert_eq!(parse_movie_id("123abc"), Some(123));
        assert_eq!(parse_movie_id("12.9"), Some(12));
    }

    #[test]
    fn test_leading_whitespace_and_sign() {
        assert_eq!(parse_movie_id("  42"), Some(42));
        assert_eq!(parse_movie_id("+7"), Some(7));
        assert_eq!(parse_movie_id("-7"), Some(-7));
    }

    #[test]
    fn test_non_numeric_has_no_value() {
        assert_eq!(parse_movie_id("abc"), None);
        assert_eq!(parse_movie_id(""), None);
        assert_eq!(parse_movie_id("-"), None);
        assert_eq!(parse_movie_id("x550"), None);
    }

    #[test]
    fn test_overflow_has_no_value() {
        assert_eq!(parse_movie_id("99999999999999999999999999"), None);
    }
}
