//! Property-based tests - round-trip and determinism guarantees across
//! generated inputs.
//!
//! These complement the example-based grammar tests by checking that every
//! parser-producible pair list has a faithful line rendering, under every
//! quote style, and that parsing is a pure function of its input.

use pairline::{
    parse_slice, parse_str, to_line, to_line_with_options, EncodeOptions, Pair, PairList,
    QuoteStyle,
};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn value_strategy() -> impl Strategy<Value = String> {
    // Arbitrary chars, including NUL, newlines, quotes, and backslashes.
    prop::collection::vec(any::<char>(), 0..12).prop_map(String::from_iter)
}

fn pair_strategy() -> impl Strategy<Value = Pair> {
    (key_strategy(), proptest::option::of(value_strategy())).prop_map(|(key, value)| match value {
        Some(value) => Pair::new(key, value),
        None => Pair::bare(key),
    })
}

fn list_strategy() -> impl Strategy<Value = PairList> {
    prop::collection::vec(pair_strategy(), 0..10).prop_map(PairList::from)
}

proptest! {
    #[test]
    fn prop_roundtrip_escaped(list in list_strategy()) {
        let line = to_line(&list);
        prop_assert_eq!(parse_str(&line).unwrap(), list);
    }

    #[test]
    fn prop_roundtrip_double_quoted(list in list_strategy()) {
        let options = EncodeOptions::new().with_quote_style(QuoteStyle::Double);
        let line = to_line_with_options(&list, options);
        prop_assert_eq!(parse_str(&line).unwrap(), list);
    }

    #[test]
    fn prop_roundtrip_single_quoted(list in list_strategy()) {
        let options = EncodeOptions::new().with_quote_style(QuoteStyle::Single);
        let line = to_line_with_options(&list, options);
        prop_assert_eq!(parse_str(&line).unwrap(), list);
    }

    #[test]
    fn prop_parsing_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(parse_slice(&bytes), parse_slice(&bytes));
    }

    #[test]
    fn prop_parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = parse_slice(&bytes);
    }

    #[test]
    fn prop_whitespace_only_is_empty(ws in "[ \t]{0,40}") {
        prop_assert!(parse_str(&ws).unwrap().is_empty());
    }

    #[test]
    fn prop_trailing_newline_never_changes_the_result(list in list_strategy()) {
        let line = to_line(&list);
        let with_newline = format!("{line}\n");
        prop_assert_eq!(parse_str(&line), parse_str(&with_newline));
    }
}
