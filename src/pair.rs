//! The parsed pair model.
//!
//! This module provides the types a successful parse produces:
//!
//! - [`Pair`]: a key with an optional value. An absent value (`key` with no
//!   `=`) is distinct from an empty one (`key=`).
//! - [`PairList`]: the ordered sequence of pairs from one line. Source order
//!   is preserved and duplicate keys are legal; deduplication is the
//!   caller's concern.
//! - [`Parsed`]: the closed set of output shapes for [`parse_with_mode`].
//!
//! [`parse_with_mode`]: crate::parse_with_mode
//!
//! ## Usage Patterns
//!
//! ### Inspecting pairs
//!
//! ```rust
//! use pairline::parse_str;
//!
//! let pairs = parse_str("host=db.local verbose").unwrap();
//! assert_eq!(pairs.get("host").and_then(|p| p.value()), Some("db.local"));
//! assert!(pairs.get("verbose").unwrap().value().is_none());
//! ```
//!
//! ### Building typed configuration
//!
//! ```rust
//! use pairline::parse_str;
//!
//! let pairs = parse_str("retries=3").unwrap();
//! let retries: u32 = pairs
//!     .try_build(1, |acc, pair| match (pair.key(), pair.value()) {
//!         ("retries", Some(v)) => v.parse().map_err(|_| "bad retries"),
//!         _ => Ok(acc),
//!     })
//!     .unwrap();
//! assert_eq!(retries, 3);
//! ```

use crate::map::PairMap;
use serde::{Deserialize, Serialize};

/// A parsed key with an optional associated value.
///
/// Keys are non-empty and drawn from `[A-Za-z0-9_-]`; values, once decoded,
/// may be arbitrary text.
///
/// # Examples
///
/// ```rust
/// use pairline::Pair;
///
/// let with_value = Pair::new("port", "5432");
/// let bare = Pair::bare("verbose");
///
/// assert_eq!(with_value.value(), Some("5432"));
/// assert_eq!(bare.value(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    key: String,
    value: Option<String>,
}

impl Pair {
    /// Creates a pair with a present value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Pair {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a pair with no value (a bare key).
    pub fn bare(key: impl Into<String>) -> Self {
        Pair {
            key: key.into(),
            value: None,
        }
    }

    /// Returns the key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value, or `None` if the pair was a bare key.
    ///
    /// `Some("")` means the source contained `key=` with nothing after the
    /// equals sign; that is not the same as `None`.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if this pair carries a value (possibly empty).
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Interprets the value as a boolean via [`cast_bool`].
    ///
    /// Returns `None` for bare keys and for values that are not a
    /// recognized boolean spelling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pairline::Pair;
    ///
    /// assert_eq!(Pair::new("x", "YES").bool_value(), Some(true));
    /// assert_eq!(Pair::new("x", "maybe").bool_value(), None);
    /// assert_eq!(Pair::bare("x").bool_value(), None);
    /// ```
    #[must_use]
    pub fn bool_value(&self) -> Option<bool> {
        self.value().and_then(cast_bool)
    }
}

/// An ordered sequence of [`Pair`]s, as read from one line.
///
/// # Examples
///
/// ```rust
/// use pairline::parse_str;
///
/// let pairs = parse_str("a=1 b=2 c").unwrap();
/// let keys: Vec<&str> = pairs.iter().map(|p| p.key()).collect();
/// assert_eq!(keys, vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PairList(Vec<Pair>);

impl PairList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        PairList(Vec::new())
    }

    /// Appends a pair, preserving insertion order.
    pub fn push(&mut self, pair: Pair) {
        self.0.push(pair);
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the pairs as a slice, in source order.
    #[must_use]
    pub fn as_slice(&self) -> &[Pair] {
        &self.0
    }

    /// Returns an iterator over the pairs, in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.0.iter()
    }

    /// Returns the first pair with the given key, if any.
    ///
    /// Duplicate keys are preserved in the list; this returns the earliest
    /// occurrence. Iterate the list for other policies.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Pair> {
        self.0.iter().find(|p| p.key == key)
    }

    /// Projects the list into an insertion-ordered [`PairMap`].
    ///
    /// Later duplicates overwrite earlier ones; the key keeps the position
    /// of its first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pairline::parse_str;
    ///
    /// let map = parse_str("a=1 b a=2").unwrap().to_map();
    /// assert_eq!(map.get("a"), Some(&Some("2".to_string())));
    /// assert_eq!(map.get("b"), Some(&None));
    /// ```
    #[must_use]
    pub fn to_map(&self) -> PairMap {
        let mut map = PairMap::with_capacity(self.0.len());
        for pair in &self.0 {
            map.insert(pair.key.clone(), pair.value.clone());
        }
        map
    }

    /// Folds a combining function over the pairs in source order,
    /// short-circuiting on the first error.
    ///
    /// The error type belongs to the caller and is returned unchanged. This
    /// is the intended way to reduce a line into an application-specific
    /// configuration value.
    ///
    /// # Errors
    ///
    /// Returns the first error the combining function reports.
    pub fn try_build<A, E, F>(&self, init: A, mut f: F) -> std::result::Result<A, E>
    where
        F: FnMut(A, &Pair) -> std::result::Result<A, E>,
    {
        self.0.iter().try_fold(init, |acc, pair| f(acc, pair))
    }
}

impl From<Vec<Pair>> for PairList {
    fn from(pairs: Vec<Pair>) -> Self {
        PairList(pairs)
    }
}

impl FromIterator<Pair> for PairList {
    fn from_iter<T: IntoIterator<Item = Pair>>(iter: T) -> Self {
        PairList(Vec::from_iter(iter))
    }
}

impl IntoIterator for PairList {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PairList {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Output of [`parse_with_mode`]: the caller picks one of a small closed set
/// of shapes over the same input.
///
/// [`parse_with_mode`]: crate::parse_with_mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    /// The whole buffer decoded as text, grammar bypassed.
    Raw(String),
    /// The buffer run through the pair grammar.
    Pairs(PairList),
}

impl Parsed {
    /// Returns the raw text, if this is the raw shape.
    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Parsed::Raw(text) => Some(text),
            Parsed::Pairs(_) => None,
        }
    }

    /// Returns the pair list, if this is the pairs shape.
    #[must_use]
    pub fn as_pairs(&self) -> Option<&PairList> {
        match self {
            Parsed::Raw(_) => None,
            Parsed::Pairs(pairs) => Some(pairs),
        }
    }

    /// Consumes and returns the pair list, if this is the pairs shape.
    #[must_use]
    pub fn into_pairs(self) -> Option<PairList> {
        match self {
            Parsed::Raw(_) => None,
            Parsed::Pairs(pairs) => Some(pairs),
        }
    }
}

/// Recognizes a boolean spelling, case-insensitively.
///
/// `yes`, `true` and `1` mean true; `no`, `false` and `0` mean false;
/// anything else is unrecognized (`None`). Comparison uses explicit ASCII
/// case folding, never locale-aware folding.
///
/// # Examples
///
/// ```rust
/// use pairline::cast_bool;
///
/// assert_eq!(cast_bool("YES"), Some(true));
/// assert_eq!(cast_bool("No"), Some(false));
/// assert_eq!(cast_bool("maybe"), None);
/// ```
#[must_use]
pub fn cast_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("yes") || text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("no") || text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}
