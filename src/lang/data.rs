use crate::lang::{Lang, NumberWord};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates every word table from a single definition
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $code:ident, $code_str:literal, $name:literal,
        words: [ $($word:literal => $value:literal),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language word lists, in counting order
        $(
            paste! {
                mod [<$code:lower _data>] {
                    pub static WORDS: &[(&str, i64)] = &[
                        $(($word, $value)),*
                    ];
                }
            }
        )*

        pub static ALL_LANGS: &[Lang] = &[$($code),*];

        paste! {
            pub(crate) static LANG_WORDS: Map<&'static str, &'static [(&'static str, i64)]> = phf_map! {
                $(
                    $code_str => [<$code:lower _data>]::WORDS,
                )*
            };
        }

        // Global word lookup (public). Keys are already lowercase.
        pub static NUMBER_WORDS: Map<&'static str, NumberWord> = phf_map! {
            $(
                $(
                    $word => NumberWord { value: $value, lang: $code },
                )*
            )*
        };

        // Helper: `lang::from_code`, case-insensitive
        pub fn from_code(code: &str) -> Option<Lang> {
            let upper = code.to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    German umlauts are spelled out ("fuenf"), matching ASCII keyboards.
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "ENG", "English",
        words: [
            "zero" => 0, "one" => 1, "two" => 2, "three" => 3, "four" => 4,
            "five" => 5, "six" => 6, "seven" => 7, "eight" => 8, "nine" => 9,
        ],

    DEU, "DEU", "German",
        words: [
            "null" => 0, "eins" => 1, "zwei" => 2, "drei" => 3, "vier" => 4,
            "fuenf" => 5, "sechs" => 6, "sieben" => 7, "acht" => 8, "neun" => 9,
        ],

    SPA, "SPA", "Spanish",
        words: [
            "cero" => 0, "uno" => 1, "dos" => 2, "tres" => 3, "cuatro" => 4,
            "cinco" => 5, "seis" => 6, "siete" => 7, "ocho" => 8, "nueve" => 9,
        ],

    RUS, "RUS", "Russian",
        words: [
            "ноль" => 0, "один" => 1, "два" => 2, "три" => 3, "четыре" => 4,
            "пять" => 5, "шесть" => 6, "семь" => 7, "восемь" => 8, "девять" => 9,
        ],

    ZHO, "ZHO", "Chinese",
        words: [
            "零" => 0, "一" => 1, "二" => 2, "三" => 3, "四" => 4,
            "五" => 5, "六" => 6, "七" => 7, "八" => 8, "九" => 9,
        ],
}

/// Roman numerals one through ten, matched against upper-cased input.
pub static ROMAN_NUMERALS: Map<&'static str, i64> = phf_map! {
    "I" => 1,
    "II" => 2,
    "III" => 3,
    "IV" => 4,
    "V" => 5,
    "VI" => 6,
    "VII" => 7,
    "VIII" => 8,
    "IX" => 9,
    "X" => 10,
};
