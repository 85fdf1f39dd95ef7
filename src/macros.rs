/// Builds a [`PairList`](crate::PairList) from literal entries.
///
/// `"key" => value` produces a pair with a present value; a bare `"key"`
/// produces a pair with no value. Entries keep their written order, and a
/// trailing comma is accepted.
///
/// # Examples
///
/// ```rust
/// use pairline::{pairs, parse_str};
///
/// let expected = pairs! {
///     "host" => "db.local",
///     "port" => "5432",
///     "verbose",
/// };
/// assert_eq!(parse_str("host=db.local port=5432 verbose").unwrap(), expected);
/// ```
#[macro_export]
macro_rules! pairs {
    () => {
        $crate::PairList::new()
    };
    ($($entries:tt)+) => {{
        let mut list = $crate::PairList::new();
        $crate::__pairs_entry!(list; $($entries)+);
        list
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __pairs_entry {
    ($list:ident;) => {};
    ($list:ident; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $list.push($crate::Pair::new($key, $value));
        $($crate::__pairs_entry!($list; $($rest)*);)?
    };
    ($list:ident; $key:expr $(, $($rest:tt)*)?) => {
        $list.push($crate::Pair::bare($key));
        $($crate::__pairs_entry!($list; $($rest)*);)?
    };
}

#[cfg(test)]
mod tests {
    use crate::Pair;

    #[test]
    fn test_empty_macro() {
        let list = pairs! {};
        assert!(list.is_empty());
    }

    #[test]
    fn test_mixed_entries() {
        let list = pairs! {
            "a" => "1",
            "flag",
            "b" => "two words",
        };
        assert_eq!(
            list.as_slice(),
            &[
                Pair::new("a", "1"),
                Pair::bare("flag"),
                Pair::new("b", "two words"),
            ]
        );
    }

    #[test]
    fn test_no_trailing_comma() {
        let list = pairs! { "a" => "1", "b" };
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_duplicate_keys_kept() {
        let list = pairs! { "k" => "1", "k" => "2" };
        assert_eq!(list.len(), 2);
    }
}
