use crate::{context::Context, number::Number, resolve::Resolver};

/// Decimal or exponential float literal with an optional sign
/// (`"3.14"`, `"-2"`, `"1e3"`, `".5"`, `"inf"`).
pub struct FloatLiteral;

impl Resolver for FloatLiteral {
    fn name(&self) -> &'static str {
        "float_literal"
    }

    #[inline]
    fn resolve(&self, text: &str, _: &Context) -> Option<Number> {
        text.parse::<f64>().ok().map(Number::Float)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_signs_and_exponents() {
        let ctx = Context::default();
        assert_eq!(FloatLiteral.resolve("-2", &ctx), Some(Number::Float(-2.0)));
        assert_eq!(FloatLiteral.resolve("+2.5", &ctx), Some(Number::Float(2.5)));
        assert_eq!(FloatLiteral.resolve("1e3", &ctx), Some(Number::Float(1000.0)));
        assert_eq!(FloatLiteral.resolve(".5", &ctx), Some(Number::Float(0.5)));
        assert_eq!(FloatLiteral.resolve("banana", &ctx), None);
        assert_eq!(FloatLiteral.resolve("", &ctx), None);
    }
}
