use thiserror::Error;
use tracing::debug;

use crate::{
    context::Context,
    factorize::prime_factors,
    lang::{Lang, NUMBER_WORDS, NumberWord},
    number::Number,
    resolve::{digit_string::parse_unsigned, resolve_text},
    value::Value,
};
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("cannot convert '{input}' to a number")]
    Conversion { input: String },
    #[error("unsupported type for conversion: {0}")]
    UnsupportedType(&'static str),
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("factorize argument must be an integer or convertible to an integer, got {0}")]
    FactorizeType(Number),
    #[error("factorize argument must be a positive integer, got {0}")]
    FactorizeValue(Number),
    /// A whole value of 2^64 or more; trial division works on `u64`.
    #[error("factorize argument {0} is too large to factorize")]
    FactorizeRange(Number),
}

/// The unrestricted calculator used by the crate-level functions.
pub(crate) static DEFAULT_CALCULATOR: LazyLock<Calculator> = LazyLock::new(Calculator::default);

/// Normalizes heterogeneous operands and computes with them.
///
/// Holds no state besides its [`Context`]; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    ctx: Context,
}

impl Calculator {
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::default()
    }

    #[inline(always)]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Convert a native number, digit string, number word or Roman numeral
    /// into a [`Number`]. Native numbers pass through unchanged.
    pub fn normalize<'a>(&self, value: impl Into<Value<'a>>) -> Result<Number, CalcError> {
        match value.into() {
            Value::Int(i) => Ok(Number::Int(i)),
            Value::Float(f) => Ok(Number::Float(f)),
            Value::Text(text) => resolve_text(&text, &self.ctx).ok_or_else(|| {
                debug!(input = %text, "text operand not recognized");
                CalcError::Conversion {
                    input: text.into_owned(),
                }
            }),
            Value::Other(type_name) => {
                debug!(type_name, "unsupported operand type");
                Err(CalcError::UnsupportedType(type_name))
            }
        }
    }

    pub fn add<'a, 'b>(
        &self,
        a: impl Into<Value<'a>>,
        b: impl Into<Value<'b>>,
    ) -> Result<Number, CalcError> {
        let (a, b) = self.operands(a, b)?;
        Ok(a + b)
    }

    pub fn sub<'a, 'b>(
        &self,
        a: impl Into<Value<'a>>,
        b: impl Into<Value<'b>>,
    ) -> Result<Number, CalcError> {
        let (a, b) = self.operands(a, b)?;
        Ok(a - b)
    }

    pub fn mul<'a, 'b>(
        &self,
        a: impl Into<Value<'a>>,
        b: impl Into<Value<'b>>,
    ) -> Result<Number, CalcError> {
        let (a, b) = self.operands(a, b)?;
        Ok(a * b)
    }

    /// True division. A divisor that normalizes to exact zero is rejected
    /// before dividing.
    pub fn div<'a, 'b>(
        &self,
        a: impl Into<Value<'a>>,
        b: impl Into<Value<'b>>,
    ) -> Result<f64, CalcError> {
        let (a, b) = self.operands(a, b)?;
        if b.is_zero() {
            debug!(dividend = %a, "division by zero");
            return Err(CalcError::DivisionByZero);
        }
        Ok(a.true_div(b))
    }

    /// Prime factors of a non-negative whole operand, ascending.
    ///
    /// Integral floats (`7.0`, `"12.0"`, `1e19`) are accepted up to 2^64;
    /// `0` and `1` yield an empty vector. Digit strings are factorized
    /// exactly over the whole `u64` range, even past `i64::MAX` where
    /// normalization yields a float.
    pub fn factorize<'a>(&self, value: impl Into<Value<'a>>) -> Result<Vec<u64>, CalcError> {
        let value = value.into();
        let exact = match &value {
            Value::Text(text) => parse_unsigned(text.trim()),
            _ => None,
        };
        let number = self.normalize(value)?;
        let n = match exact {
            Some(n) => n,
            None => whole_unsigned(number)?,
        };
        Ok(prime_factors(n))
    }

    /// The digit word `word` names, if its language is enabled.
    pub fn lookup_word(&self, word: &str) -> Option<NumberWord> {
        NUMBER_WORDS
            .get(word.trim().to_lowercase().as_str())
            .copied()
            .filter(|w| self.ctx.accepts(w.lang))
    }

    #[inline]
    fn operands<'a, 'b>(
        &self,
        a: impl Into<Value<'a>>,
        b: impl Into<Value<'b>>,
    ) -> Result<(Number, Number), CalcError> {
        Ok((self.normalize(a)?, self.normalize(b)?))
    }
}

/// The non-negative whole value `number` denotes, as trial division input.
fn whole_unsigned(number: Number) -> Result<u64, CalcError> {
    match number {
        Number::Int(i) => u64::try_from(i).map_err(|_| CalcError::FactorizeValue(number)),
        Number::Float(f) => {
            if !f.is_finite() || f.trunc() != f {
                return Err(CalcError::FactorizeType(number));
            }
            if f < 0.0 {
                return Err(CalcError::FactorizeValue(number));
            }
            // u64::MAX as f64 rounds up to exactly 2^64.
            if f >= u64::MAX as f64 {
                return Err(CalcError::FactorizeRange(number));
            }
            Ok(f as u64)
        }
    }
}

pub struct CalculatorBuilder {
    langs: Vec<Lang>,
    roman_numerals: bool,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self {
            langs: crate::lang::all_langs().to_vec(),
            roman_numerals: true,
        }
    }
}

impl CalculatorBuilder {
    /// Recognize number words of exactly these languages.
    pub fn langs(mut self, langs: &[Lang]) -> Self {
        self.langs = langs.to_vec();
        self
    }

    /// Additionally recognize number words of `lang`.
    pub fn lang(mut self, lang: Lang) -> Self {
        self.langs.push(lang);
        self
    }

    pub fn roman_numerals(mut self, enabled: bool) -> Self {
        self.roman_numerals = enabled;
        self
    }

    pub fn build(self) -> Calculator {
        let ctx = Context::new(&self.langs, self.roman_numerals);
        Calculator { ctx }
    }
}
