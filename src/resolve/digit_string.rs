use crate::{context::Context, number::Number, resolve::Resolver};

/// One or more ASCII digits with no sign or separators.
///
/// Strings too long for `i64` are left to [`FloatLiteral`](super::FloatLiteral).
pub struct DigitString;

impl Resolver for DigitString {
    fn name(&self) -> &'static str {
        "digit_string"
    }

    #[inline]
    fn resolve(&self, text: &str, _: &Context) -> Option<Number> {
        parse_unsigned(text)
            .and_then(|n| i64::try_from(n).ok())
            .map(Number::Int)
    }
}

/// Bare ASCII digits as a `u64`. `None` for anything else, including overflow.
#[inline]
pub(crate) fn parse_unsigned(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    text.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bare_ascii_digits() {
        let ctx = Context::default();
        assert_eq!(DigitString.resolve("042", &ctx), Some(Number::Int(42)));
        for s in ["", "+1", "-1", "1_000", "1,000", "1.0", "٣"] {
            assert_eq!(DigitString.resolve(s, &ctx), None, "{s:?}");
        }
    }

    #[test]
    fn overflow_is_not_an_integer() {
        let ctx = Context::default();
        assert_eq!(DigitString.resolve("99999999999999999999", &ctx), None);
        assert_eq!(DigitString.resolve("9223372036854775808", &ctx), None);
    }

    #[test]
    fn unsigned_covers_the_full_u64_range() {
        assert_eq!(parse_unsigned("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_unsigned("18446744073709551616"), None);
        assert_eq!(parse_unsigned("-1"), None);
        assert_eq!(parse_unsigned(""), None);
    }
}
