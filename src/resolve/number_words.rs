use crate::{
    context::Context,
    lang::NUMBER_WORDS,
    number::Number,
    resolve::Resolver,
};
use std::borrow::Cow;

/// Digit words ("five", "fuenf", "пять", "五", ...) of the enabled languages.
pub struct NumberWords;

impl Resolver for NumberWords {
    fn name(&self) -> &'static str {
        "number_words"
    }

    fn resolve(&self, text: &str, ctx: &Context) -> Option<Number> {
        let lowered = lower(text);
        NUMBER_WORDS
            .get(lowered.as_ref())
            .filter(|word| ctx.accepts(word.lang))
            .map(|word| Number::Int(word.value))
    }
}

/// Lowercase without allocating when there is nothing to lower
/// (all-lowercase Latin, Chinese, digits).
#[inline]
fn lower(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_uppercase) {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{DEU, ENG, RUS, ZHO};

    #[test]
    fn lower_is_zero_copy_for_lowercase_input() {
        let input = "seven";
        assert!(matches!(lower(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        assert!(matches!(lower("七"), Cow::Borrowed(_)));
        assert_eq!(lower("SeVeN"), "seven");
    }

    #[test]
    fn respects_enabled_languages() {
        let ctx = Context::new(&[ENG], true);
        assert_eq!(NumberWords.resolve("two", &ctx), Some(Number::Int(2)));
        assert_eq!(NumberWords.resolve("zwei", &ctx), None);

        let ctx = Context::new(&[DEU, RUS, ZHO], true);
        assert_eq!(NumberWords.resolve("Zwei", &ctx), Some(Number::Int(2)));
        assert_eq!(NumberWords.resolve("ДВА", &ctx), Some(Number::Int(2)));
        assert_eq!(NumberWords.resolve("二", &ctx), Some(Number::Int(2)));
        assert_eq!(NumberWords.resolve("two", &ctx), None);
    }
}
