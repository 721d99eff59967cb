//! Ordered map type for tree objects.
//!
//! [`KeyMap`] wraps an [`IndexMap`] keyed by [`KeyToken`]. Keeping insertion
//! order makes formatted output predictable: a renamed map lists its entries
//! in the order of the input map.
//!
//! When two input keys are renamed to the same destination key, the later
//! entry's value replaces the earlier one in the position of the earlier one.
//!
//! ## Examples
//!
//! ```rust
//! use serde_rekey::{KeyMap, KeyToken, Value};
//!
//! let mut map = KeyMap::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert(KeyToken::sym("age"), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get_str("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(map.get(&KeyToken::sym("age")).and_then(|v| v.as_i64()), Some(30));
//! ```

use crate::{KeyToken, Value};
use indexmap::IndexMap;

/// An insertion-ordered map of key tokens to values.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap(IndexMap<KeyToken, Value>);

impl KeyMap {
    #[must_use]
    pub fn new() -> Self {
        KeyMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert<K: Into<KeyToken>>(&mut self, key: K, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    #[must_use]
    pub fn get(&self, key: &KeyToken) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks up a string-labelled key. Symbol keys with the same text do not match.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.0.get(&KeyToken::Str(key.to_string()))
    }

    #[must_use]
    pub fn contains_key(&self, key: &KeyToken) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, KeyToken, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, KeyToken, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, KeyToken, Value> {
        self.0.iter()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for KeyMap {
    type Item = (KeyToken, Value);
    type IntoIter = indexmap::map::IntoIter<KeyToken, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyMap {
    type Item = (&'a KeyToken, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, KeyToken, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(KeyToken, Value)> for KeyMap {
    fn from_iter<T: IntoIterator<Item = (KeyToken, Value)>>(iter: T) -> Self {
        KeyMap(IndexMap::from_iter(iter))
    }
}
