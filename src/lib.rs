pub mod calculator;
pub mod context;
pub mod factorize;
pub mod lang;
pub mod number;
pub mod resolve;
pub mod value;

pub use calculator::{CalcError, Calculator, CalculatorBuilder};
pub use context::Context;
pub use lang::{DEU, ENG, Lang, NumberWord, RUS, SPA, ZHO, all_langs};
pub use number::Number;
pub use value::Value;

use calculator::DEFAULT_CALCULATOR;

/// Normalize `value` with every language and Roman numerals enabled.
pub fn normalize<'a>(value: impl Into<Value<'a>>) -> Result<Number, CalcError> {
    DEFAULT_CALCULATOR.normalize(value)
}

pub fn add<'a, 'b>(a: impl Into<Value<'a>>, b: impl Into<Value<'b>>) -> Result<Number, CalcError> {
    DEFAULT_CALCULATOR.add(a, b)
}

pub fn sub<'a, 'b>(a: impl Into<Value<'a>>, b: impl Into<Value<'b>>) -> Result<Number, CalcError> {
    DEFAULT_CALCULATOR.sub(a, b)
}

pub fn mul<'a, 'b>(a: impl Into<Value<'a>>, b: impl Into<Value<'b>>) -> Result<Number, CalcError> {
    DEFAULT_CALCULATOR.mul(a, b)
}

pub fn div<'a, 'b>(a: impl Into<Value<'a>>, b: impl Into<Value<'b>>) -> Result<f64, CalcError> {
    DEFAULT_CALCULATOR.div(a, b)
}

pub fn factorize<'a>(value: impl Into<Value<'a>>) -> Result<Vec<u64>, CalcError> {
    DEFAULT_CALCULATOR.factorize(value)
}
