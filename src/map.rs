//! Ordered map projection of a parsed line.
//!
//! This module provides [`PairMap`], a wrapper around [`IndexMap`] used as
//! the structured representation of a [`PairList`]. Insertion order is the
//! source order of the line, which keeps serialized output deterministic.
//!
//! Values are `Option<String>`: a bare key projects to `None` and, through
//! serde, serializes as an explicit `null`, so every key is present in the
//! serialized form.
//!
//! [`PairList`]: crate::PairList
//!
//! ## Examples
//!
//! ```rust
//! use pairline::parse_str;
//!
//! let map = parse_str("host=db.local verbose").unwrap().to_map();
//! assert_eq!(map.get("host"), Some(&Some("db.local".to_string())));
//! assert_eq!(map.get("verbose"), Some(&None));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An insertion-ordered map of keys to optional values.
///
/// This is a thin wrapper around [`IndexMap`]; iteration follows insertion
/// order, and re-inserting a key overwrites its value while keeping the
/// position of the first insertion.
///
/// # Examples
///
/// ```rust
/// use pairline::PairMap;
///
/// let mut map = PairMap::new();
/// map.insert("first".to_string(), Some("1".to_string()));
/// map.insert("second".to_string(), None);
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairMap(IndexMap<String, Option<String>>);

impl PairMap {
    /// Creates an empty `PairMap`.
    #[must_use]
    pub fn new() -> Self {
        PairMap(IndexMap::new())
    }

    /// Creates an empty `PairMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PairMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key with an optional value.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, value: Option<String>) -> Option<Option<String>> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The outer `Option` distinguishes "key absent from the map" from the
    /// inner `Option`'s "key present with no value".
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Option<String>> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Option<String>> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Option<String>> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Option<String>> {
        self.0.iter()
    }
}

impl Default for PairMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, Option<String>>> for PairMap {
    fn from(map: HashMap<String, Option<String>>) -> Self {
        PairMap(map.into_iter().collect())
    }
}

impl From<PairMap> for HashMap<String, Option<String>> {
    fn from(map: PairMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for PairMap {
    type Item = (String, Option<String>);
    type IntoIter = indexmap::map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Option<String>)> for PairMap {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        PairMap(IndexMap::from_iter(iter))
    }
}
