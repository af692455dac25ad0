use crate::{context::Context, lang::ROMAN_NUMERALS, number::Number, resolve::Resolver};
use std::borrow::Cow;

/// Roman numerals "I" through "X". Lowercase input is accepted.
pub struct RomanNumerals;

impl Resolver for RomanNumerals {
    fn name(&self) -> &'static str {
        "roman_numerals"
    }

    fn resolve(&self, text: &str, ctx: &Context) -> Option<Number> {
        if !ctx.roman_numerals {
            return None;
        }
        let upper = if text.chars().any(char::is_lowercase) {
            Cow::Owned(text.to_uppercase())
        } else {
            Cow::Borrowed(text)
        };
        ROMAN_NUMERALS.get(upper.as_ref()).copied().map(Number::Int)
    }
}
