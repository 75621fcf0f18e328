//! Ordered map type for JSON objects.
//!
//! This module provides [`Map`], a wrapper around [`IndexMap`] that keeps
//! object members in the order they were encountered in the source text.
//! Key order is significant for this tool: the default rendering path
//! preserves it exactly, and the sort path replaces it wholesale with
//! lexicographic order via [`Map::sort_keys`].
//!
//! Inserting a key that is already present replaces the value in place, so
//! an object with duplicated keys decodes to its last occurrence.
//!
//! ## Examples
//!
//! ```rust
//! use jsonfmt::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("zebra".to_string(), Value::from(1));
//! map.insert("apple".to_string(), Value::from(2));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["zebra", "apple"]);
//!
//! map.sort_keys();
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["apple", "zebra"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to JSON values.
///
/// # Examples
///
/// ```rust
/// use jsonfmt::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(IndexMap<String, crate::Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in
    /// place (the key keeps its original position) and the old value is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonfmt::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorts the map's own keys in ascending lexicographic (byte-wise)
    /// order.
    ///
    /// Only this map is reordered; use [`crate::Value::sort_all_keys`] to
    /// sort an entire tree recursively.
    pub fn sort_keys(&mut self) {
        self.0.sort_unstable_keys();
    }

    /// Returns an iterator over the keys of the map, in map order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in map order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns a mutable iterator over the values of the map, in map order.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, crate::Value> {
        self.0.values_mut()
    }

    /// Returns an iterator over the key-value pairs of the map, in map order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for Map {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        Map(map.into_iter().collect())
    }
}

impl From<Map> for HashMap<String, crate::Value> {
    fn from(map: Map) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for Map {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}
