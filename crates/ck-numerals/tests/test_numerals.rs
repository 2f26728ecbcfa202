//! Property and edge-case tests for the numeral converters.

use ck_core::{Error, ErrorKind};
use ck_numerals::{
    binary_to_text, convert_base, parse_in_base, render_in_base, text_to_binary, to_number,
    to_roman, to_words, Radix,
};
use proptest::prelude::*;

// ─── Radix ───────────────────────────────────────────────────────────────────

#[test]
fn hex_output_is_upper_case() {
    assert_eq!(convert_base("48879", 10, 16).unwrap(), "BEEF");
    assert_eq!(render_in_base(0xabc, Radix::Hexadecimal), "ABC");
}

#[test]
fn radix_errors_are_invalid_input() {
    for (value, from, to) in [("", 10, 2), ("2", 2, 10), ("-1", 10, 2), ("1", 7, 10)] {
        let err = convert_base(value, from, to).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{value} {from}->{to}");
    }
}

proptest! {
    #[test]
    fn radix_round_trip(n in 0u128..10_000, a in 0usize..4, b in 0usize..4) {
        let from = Radix::ALL[a];
        let to = Radix::ALL[b];
        let there = convert_base(&render_in_base(n, from), from.base(), to.base()).unwrap();
        let back = convert_base(&there, to.base(), from.base()).unwrap();
        prop_assert_eq!(parse_in_base(&back, from).unwrap(), n);
    }

    #[test]
    fn roman_round_trip(n in 1i64..=3999) {
        let numeral = to_roman(n).unwrap();
        prop_assert_eq!(i64::from(to_number(&numeral).unwrap()), n);
    }

    #[test]
    fn binary_text_round_trip(s in "\\PC{1,32}") {
        let binary = text_to_binary(&s).unwrap();
        prop_assert_eq!(binary_to_text(&binary).unwrap(), s);
    }

    #[test]
    fn words_never_fail_in_range(n in -999_999_999_999_999_999i64..=999_999_999_999_999_999) {
        let words = to_words(n).unwrap();
        prop_assert!(!words.is_empty());
        prop_assert_eq!(words.starts_with("minus"), n < 0);
    }
}

// ─── Roman ───────────────────────────────────────────────────────────────────

#[test]
fn roman_concrete_cases() {
    assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
    assert_eq!(to_roman(4).unwrap(), "IV");
    assert_eq!(to_number("IX").unwrap(), 9);
    assert_eq!(
        to_number("XYZ").unwrap_err(),
        Error::invalid_input("Invalid Roman numeral character 'Y'")
    );
}

#[test]
fn roman_round_trip_is_exhaustive() {
    for n in 1..=3999i64 {
        let roman = to_roman(n).unwrap();
        assert_eq!(i64::from(to_number(&roman).unwrap()), n, "{roman}");
    }
}
