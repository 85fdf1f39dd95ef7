use pairline::{pairs, parse_str, to_line, Pair, PairList};

#[test]
fn test_empty_macro_is_empty_list() {
    let list = pairs! {};
    assert_eq!(list, PairList::new());
}

#[test]
fn test_macro_matches_parsed_line() {
    let built = pairs! {
        "host" => "db.local",
        "port" => "5432",
        "verbose",
    };
    assert_eq!(parse_str("host=db.local port=5432 verbose").unwrap(), built);
}

#[test]
fn test_macro_accepts_expressions() {
    let key = String::from("computed");
    let value = format!("{}-{}", 1, 2);
    let list = pairs! { key => value, "fixed" => "x" };
    assert_eq!(list.get("computed").and_then(Pair::value), Some("1-2"));
}

#[test]
fn test_macro_keeps_order_and_duplicates() {
    let list = pairs! { "k" => "1", "other", "k" => "2" };
    let keys: Vec<&str> = list.iter().map(Pair::key).collect();
    assert_eq!(keys, vec!["k", "other", "k"]);
}

#[test]
fn test_macro_output_encodes_and_reparses() {
    let list = pairs! {
        "msg" => "two words",
        "flag",
        "empty" => "",
    };
    let line = to_line(&list);
    assert_eq!(parse_str(&line).unwrap(), list);
}
