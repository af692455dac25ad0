//! Text-to-number resolution.
//!
//! A text operand is trimmed once and then offered to each [`Resolver`] in
//! [`RESOLVERS`] order; the first one that recognizes it wins:
//!
//! 1. [`NumberWords`]: digit words in every enabled language (case-insensitive)
//! 2. [`RomanNumerals`]: "I" through "X" (case-insensitive via upper-casing)
//! 3. [`DigitString`]: one or more ASCII digits, parsed as an integer
//! 4. [`FloatLiteral`]: any decimal or exponential float literal
//!
//! Table lookups run before numeric parsing so that an extended table can
//! never be shadowed by the digit heuristics, and pure digit strings run
//! before float parsing so that `"7"` stays an integer.

pub mod digit_string;
pub mod float_literal;
pub mod number_words;
pub mod roman_numerals;

pub use digit_string::DigitString;
pub use float_literal::FloatLiteral;
pub use number_words::NumberWords;
pub use roman_numerals::RomanNumerals;

use crate::{context::Context, number::Number};
use tracing::trace;

/// A single recognition step.
pub trait Resolver: Send + Sync {
    /// Human-readable name – used in trace events.
    fn name(&self) -> &'static str;

    /// Interpret already-trimmed `text`. `None` hands it to the next resolver.
    fn resolve(&self, text: &str, ctx: &Context) -> Option<Number>;
}

/// The fixed resolution chain. Order is part of the contract.
pub static RESOLVERS: &[&dyn Resolver] =
    &[&NumberWords, &RomanNumerals, &DigitString, &FloatLiteral];

/// Run `text` through the chain. Returns `None` when nothing recognizes it.
pub fn resolve_text(text: &str, ctx: &Context) -> Option<Number> {
    let trimmed = text.trim();
    RESOLVERS.iter().find_map(|resolver| {
        let number = resolver.resolve(trimmed, ctx)?;
        trace!(
            resolver = resolver.name(),
            input = trimmed,
            %number,
            "resolved text operand"
        );
        Some(number)
    })
}
