mod prop_tests {
    use crate::{CalcError, Number, add, all_langs, div, factorize, mul, normalize, sub};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn digit_strings_normalize_to_integers(n in 0i64..=i64::MAX) {
            prop_assert_eq!(normalize(n.to_string()).unwrap(), Number::Int(n));
        }

        #[test]
        fn padded_digit_strings(n in 0u32..1_000_000, pad in "[ \t\n]{0,3}") {
            let s = format!("{pad}{n}{pad}");
            prop_assert_eq!(normalize(&s).unwrap(), Number::Int(i64::from(n)));
        }

        #[test]
        fn word_case_variants_agree(idx in 0usize..10, upper in any::<bool>()) {
            for &lang in all_langs() {
                let (word, value) = lang.words()[idx];
                let s = if upper { word.to_uppercase() } else { word.to_string() };
                prop_assert_eq!(normalize(&s).unwrap(), Number::Int(value));
            }
        }

        #[test]
        fn integer_ops_match_native(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            prop_assert_eq!(add(a, b).unwrap(), Number::Int(a + b));
            prop_assert_eq!(sub(a, b).unwrap(), Number::Int(a - b));
            prop_assert_eq!(mul(a, b).unwrap(), Number::Int(a * b));
        }

        #[test]
        fn any_float_operand_promotes(a in -1_000i64..1_000, b in -1e3f64..1e3) {
            prop_assert!(!add(a, b).unwrap().is_int());
            prop_assert!(!mul(b, a).unwrap().is_int());
        }

        #[test]
        fn division_by_zero_always_fails(x in any::<i64>()) {
            prop_assert_eq!(div(x, "zero"), Err(CalcError::DivisionByZero));
        }

        #[test]
        fn factors_multiply_back(n in 2i64..5_000_000) {
            let factors = factorize(n).unwrap();
            prop_assert_eq!(factors.iter().product::<u64>(), n as u64);
            prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(factors.iter().all(|&f| f >= 2));
        }

        #[test]
        fn negative_never_factorizes(n in i64::MIN..0) {
            prop_assert_eq!(factorize(n), Err(CalcError::FactorizeValue(Number::Int(n))));
        }

        #[test]
        fn digit_strings_past_i64_factor_exactly(m in (1u64 << 23)..(1u64 << 24)) {
            // Large power-of-two cofactor keeps trial division short.
            let n = m << 40;
            let factors = factorize(n.to_string()).unwrap();
            prop_assert_eq!(factors.iter().product::<u64>(), n);
        }

        #[test]
        fn letters_only_garbage_is_rejected(s in "[a-hj-uwyz]{6,12}") {
            // No i, v or x, so nothing here reads as a Roman numeral.
            prop_assume!(crate::lang::NUMBER_WORDS.get(s.as_str()).is_none());
            prop_assume!(s.parse::<f64>().is_err());
            let is_conversion_error = matches!(normalize(&s), Err(CalcError::Conversion { .. }));
            prop_assert!(is_conversion_error);
        }
    }
}
