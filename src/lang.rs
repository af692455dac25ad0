pub mod data;

pub use data::{ALL_LANGS, DEU, ENG, NUMBER_WORDS, ROMAN_NUMERALS, RUS, SPA, ZHO, from_code};

use data::LANG_WORDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Every digit word of this language with the value it spells, 0 through 9.
    #[inline]
    pub fn words(&self) -> &'static [(&'static str, i64)] {
        LANG_WORDS.get(self.code).copied().unwrap_or(&[])
    }
}

/// A digit word together with the language it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberWord {
    pub value: i64,
    pub lang: Lang,
}

#[inline(always)]
pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}
