use pairline::{parse_slice, parse_str, Error, Pair};

fn keys_and_values(input: &str) -> Vec<(String, Option<String>)> {
    parse_str(input)
        .unwrap()
        .iter()
        .map(|p| (p.key().to_string(), p.value().map(str::to_string)))
        .collect()
}

#[test]
fn test_whitespace_only_inputs_are_empty() {
    for input in ["", " ", "\t", "  \t  ", " \t \t "] {
        assert!(parse_str(input).unwrap().is_empty(), "{input:?}");
    }
}

#[test]
fn test_bare_key_has_no_value() {
    assert_eq!(keys_and_values("key"), vec![("key".into(), None)]);
}

#[test]
fn test_dangling_equals_is_empty_string() {
    assert_eq!(
        keys_and_values("key="),
        vec![("key".into(), Some(String::new()))]
    );
}

#[test]
fn test_empty_value_before_whitespace_matches_end_of_input() {
    // The two derivations of `key=` with nothing after it must agree.
    assert_eq!(
        keys_and_values("key= next")[0],
        keys_and_values("key=")[0]
    );
}

#[test]
fn test_simple_value() {
    assert_eq!(
        keys_and_values("key=value"),
        vec![("key".into(), Some("value".into()))]
    );
}

#[test]
fn test_quoted_values_drop_the_quotes() {
    for input in [r#"key="a b""#, "key='a b'"] {
        assert_eq!(
            keys_and_values(input),
            vec![("key".into(), Some("a b".into()))],
            "{input}"
        );
    }
}

#[test]
fn test_escaped_space_matches_quoted_space() {
    assert_eq!(keys_and_values(r"key=a\ b"), keys_and_values(r#"key="a b""#));
}

#[test]
fn test_multiple_entries_preserve_order() {
    assert_eq!(
        keys_and_values("a=1 b=2 c"),
        vec![
            ("a".into(), Some("1".into())),
            ("b".into(), Some("2".into())),
            ("c".into(), None),
        ]
    );
}

#[test]
fn test_duplicate_keys_are_both_kept() {
    assert_eq!(
        keys_and_values("k=1 k=2"),
        vec![("k".into(), Some("1".into())), ("k".into(), Some("2".into()))]
    );
}

#[test]
fn test_unterminated_quote_fails() {
    for input in [r#"key="abc"#, "key='abc", r#"key="a'b"#] {
        assert!(parse_str(input).is_err(), "{input}");
    }
}

#[test]
fn test_unrecognized_escape_fails() {
    assert!(matches!(
        parse_str(r"key=a\xb"),
        Err(Error::Syntax { .. })
    ));
}

#[test]
fn test_every_escape_decodes() {
    let cases = [
        (r"k=\0", "\0"),
        (r"k=\n", "\n"),
        (r"k=\r", "\r"),
        (r"k=\t", "\t"),
        (r#"k=\""#, "\""),
        (r"k=\'", "'"),
        (r"k=\\", "\\"),
        (r"k=\ ", " "),
    ];
    for (input, expected) in cases {
        let pairs = parse_str(input).unwrap();
        assert_eq!(pairs.get("k").and_then(Pair::value), Some(expected), "{input}");
    }
}

#[test]
fn test_escapes_inside_quotes_decode_the_same() {
    let bare = parse_str(r"k=\t\\x").unwrap();
    let double = parse_str(r#"k="\t\\x""#).unwrap();
    let single = parse_str(r"k='\t\\x'").unwrap();
    assert_eq!(bare, double);
    assert_eq!(bare, single);
}

#[test]
fn test_leading_and_trailing_whitespace_ignored() {
    assert_eq!(keys_and_values("  a=1  "), keys_and_values("a=1"));
    assert_eq!(keys_and_values("\ta=1\t"), keys_and_values("a=1"));
}

#[test]
fn test_trailing_newline_is_optional() {
    assert_eq!(keys_and_values("a=1\n"), keys_and_values("a=1"));
    assert_eq!(
        parse_slice(b" \n").unwrap(),
        parse_slice(b" ").unwrap()
    );
}

#[test]
fn test_newline_must_be_final() {
    assert!(parse_slice(b"a=1\nb=2").is_err());
    assert!(parse_slice(b"a=1\n\n").is_err());
}

#[test]
fn test_key_charset() {
    let pairs = parse_str("AZaz09_-=ok").unwrap();
    assert_eq!(pairs.get("AZaz09_-").and_then(Pair::value), Some("ok"));

    for input in ["k.y=1", "k\u{e9}y=1", "=1", "@"] {
        // Either the key byte or the entry shape is wrong.
        assert!(parse_str(input).is_err(), "{input}");
    }
}

#[test]
fn test_value_keeps_nonstructural_punctuation() {
    // `=` and friends are plain value bytes once the first `=` is consumed.
    let pairs = parse_str("url=http://h:8080/p?x=1&y=2").unwrap();
    assert_eq!(
        pairs.get("url").and_then(Pair::value),
        Some("http://h:8080/p?x=1&y=2")
    );
}

#[test]
fn test_determinism() {
    let input = "a=1 b='x y' c=a\\ b d";
    assert_eq!(parse_str(input).unwrap(), parse_str(input).unwrap());
}
