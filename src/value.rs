//! Raw operands as callers hand them in.
//!
//! Every public operation accepts `impl Into<Value>`, so plain Rust numbers and
//! strings can be passed directly. Anything that is neither a number nor text
//! becomes [`Value::Other`] and is rejected during normalization.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Int(i64),
    Float(f64),
    Text(Cow<'a, str>),
    /// Unsupported input; carries a type descriptor for diagnostics.
    Other(&'static str),
}

impl Value<'_> {
    /// An unsupported operand of type `T`.
    #[inline]
    pub fn other<T: ?Sized>() -> Self {
        Value::Other(std::any::type_name::<T>())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                #[inline(always)]
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Integers wider than `i64` keep exactness when they fit and otherwise fall
// back to `Float`, the same promotion `Number` applies on overflow.
macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                #[inline]
                fn from(v: $t) -> Self {
                    i64::try_from(v).map_or(Value::Float(v as f64), Value::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize, i128, u128);

impl From<f32> for Value<'_> {
    #[inline(always)]
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value<'_> {
    #[inline(always)]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline(always)]
    fn from(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    #[inline(always)]
    fn from(s: &'a String) -> Self {
        Value::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    #[inline(always)]
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    #[inline(always)]
    fn from(s: Cow<'a, str>) -> Self {
        Value::Text(s)
    }
}

impl From<()> for Value<'_> {
    #[inline(always)]
    fn from(_: ()) -> Self {
        Value::other::<()>()
    }
}

/// `None` is an unsupported operand; `Some(v)` is `v`.
impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    #[inline]
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Other("None"),
        }
    }
}
