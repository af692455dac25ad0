//! Normalized numeric values and their promotion rules.
//!
//! * `Int ∘ Int` stays `Int` for `+`, `-` and `*`.
//! * Any `Float` operand makes the result `Float`.
//! * An `Int ∘ Int` result that does not fit in `i64` is recomputed in `f64`.
//! * Division always yields a float quotient.

use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[inline(always)]
    pub const fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    #[inline(always)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Exact zero: `0`, `0.0` or `-0.0`.
    #[inline(always)]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// True division. The caller is responsible for rejecting a zero divisor.
    #[inline]
    pub fn true_div(self, rhs: Number) -> f64 {
        self.as_f64() / rhs.as_f64()
    }
}

macro_rules! impl_promoting_op {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => a
                        .$checked(b)
                        .map_or_else(|| Number::Float(a as f64 $op b as f64), Number::Int),
                    (a, b) => Number::Float(a.as_f64() $op b.as_f64()),
                }
            }
        }
    };
}

impl_promoting_op!(Add, add, checked_add, +);
impl_promoting_op!(Sub, sub, checked_sub, -);
impl_promoting_op!(Mul, mul, checked_mul, *);

impl From<i64> for Number {
    #[inline(always)]
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<f64> for Number {
    #[inline(always)]
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}
