// src/context.rs
// Which lookup tables a calculator consults. Built once, read by every resolver.

use crate::lang::{Lang, all_langs};
use smallvec::SmallVec;

/// Runtime context passed to every resolver.
///
/// Contains:
/// - `langs`: the languages whose number words are recognized
/// - `roman_numerals`: whether "I".."X" are recognized
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub langs: SmallVec<[Lang; 5]>,
    pub roman_numerals: bool,
}

impl Default for Context {
    #[inline]
    fn default() -> Self {
        Self::new(all_langs(), true)
    }
}

impl Context {
    #[inline]
    pub fn new(langs: &[Lang], roman_numerals: bool) -> Self {
        let mut enabled = SmallVec::new();
        for &lang in langs {
            if !enabled.contains(&lang) {
                enabled.push(lang);
            }
        }
        Self {
            langs: enabled,
            roman_numerals,
        }
    }

    #[inline(always)]
    pub fn accepts(&self, lang: Lang) -> bool {
        self.langs.contains(&lang)
    }
}
