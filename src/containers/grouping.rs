//! Key-derived mappings: `index_by` and `group_by`
//!
//! Both build a string-keyed map in a single left-to-right pass. Lookup is by
//! key; converting back to a container yields entries in first-seen-key
//! order.

use super::sparray::Sparray;
use crate::element::Element;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Deref;

/// String-keyed map that remembers the order keys were first produced
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedMap<V> {
    order: Vec<String>,
    entries: HashMap<String, V>,
}

impl<V> KeyedMap<V> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite; a new key is appended to the key order
    fn upsert(&mut self, key: String, value: V) {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, value);
    }

    fn entry_or_default(&mut self, key: String) -> &mut V
    where
        V: Default,
    {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.entry(key).or_default()
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Whether `key` was produced
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no key was produced
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// `(key, value)` pairs in first-seen-key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.order
            .iter()
            .filter_map(move |k| self.entries.get(k).map(|v| (k.as_str(), v)))
    }
}

/// One `index_by` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue<V> {
    /// Stringified key
    pub key: String,
    /// Value of the last element that produced the key
    pub value: V,
}

impl<V: Element> Element for KeyValue<V> {
    fn render(&self) -> String {
        format!("{}: {}", self.key, self.value.render())
    }
}

/// One `group_by` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group<V> {
    /// Stringified key
    pub key: String,
    /// The group, as shaped by the values function
    pub values: V,
}

impl<V: Element> Element for Group<V> {
    fn render(&self) -> String {
        format!("{}: {}", self.key, self.values.render())
    }
}

/// Result of [`Sparray::index_by`]
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedBy<V>(KeyedMap<V>);

impl<V: Element> IndexedBy<V> {
    /// Rebuild a container of `{key, value}` entries in first-seen-key order
    pub fn to_sparray(&self) -> Sparray<KeyValue<V>> {
        self.0
            .iter()
            .map(|(key, value)| KeyValue {
                key: key.to_string(),
                value: value.clone(),
            })
            .collect()
    }
}

impl<V> Deref for IndexedBy<V> {
    type Target = KeyedMap<V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Result of [`Sparray::group_by`]
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBy<V>(KeyedMap<V>);

impl<V: Element> GroupedBy<V> {
    /// Rebuild a container of `{key, values}` entries in first-seen-key order
    pub fn to_sparray(&self) -> Sparray<Group<V>> {
        self.0
            .iter()
            .map(|(key, values)| Group {
                key: key.to_string(),
                values: values.clone(),
            })
            .collect()
    }
}

impl<V> Deref for GroupedBy<V> {
    type Target = KeyedMap<V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Element> Sparray<T> {
    /// Map each element by a derived key; the last element wins a collision
    ///
    /// ```rust
    /// use sparray::sparray;
    ///
    /// let words = sparray!["apple", "avocado", "banana"];
    /// let by_initial = words.index_by(|w, _, _| w.chars().next().unwrap_or_default());
    /// assert_eq!(by_initial.get("a"), Some(&"avocado"));
    /// assert_eq!(by_initial.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    /// ```
    pub fn index_by<K, F>(&self, key_fn: F) -> IndexedBy<T>
    where
        K: ToString,
        F: FnMut(&T, usize, &Self) -> K,
    {
        self.index_by_with(key_fn, |e, _, _| e.clone())
    }

    /// Like [`index_by`](Self::index_by), storing `value_fn(element)` instead of the element
    pub fn index_by_with<K, V, F, G>(&self, mut key_fn: F, mut value_fn: G) -> IndexedBy<V>
    where
        K: ToString,
        F: FnMut(&T, usize, &Self) -> K,
        G: FnMut(&T, usize, &Self) -> V,
    {
        let mut map = KeyedMap::new();
        for (i, e) in self.entries() {
            map.upsert(key_fn(e, i, self).to_string(), value_fn(e, i, self));
        }
        IndexedBy(map)
    }

    /// Partition into groups by a derived key, preserving source order within groups
    ///
    /// Keys are stringified with `ToString`; a [`Value::Null`](crate::Value::Null)
    /// key becomes `"null"`.
    pub fn group_by<K, F>(&self, key_fn: F) -> GroupedBy<Sparray<T>>
    where
        K: ToString,
        F: FnMut(&T, usize, &Self) -> K,
    {
        self.group_by_with(key_fn, |group, _| group)
    }

    /// Like [`group_by`](Self::group_by), shaping each group with `values_fn(group, key)`
    ///
    /// `values_fn` runs once per distinct key, in first-seen-key order.
    pub fn group_by_with<K, V, F, G>(&self, mut key_fn: F, mut values_fn: G) -> GroupedBy<V>
    where
        K: ToString,
        F: FnMut(&T, usize, &Self) -> K,
        G: FnMut(Sparray<T>, &str) -> V,
    {
        let mut buckets: KeyedMap<Vec<T>> = KeyedMap::new();
        for (i, e) in self.entries() {
            buckets.entry_or_default(key_fn(e, i, self).to_string()).push(e.clone());
        }

        let KeyedMap { order, mut entries } = buckets;
        let mut groups = KeyedMap::new();
        for key in order {
            let members = entries.remove(&key).unwrap_or_default();
            let shaped = values_fn(Sparray::new(members), &key);
            groups.upsert(key, shaped);
        }
        GroupedBy(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sparray, Value};

    #[test]
    fn test_index_by_last_write_wins() {
        let s = sparray![("a", 1), ("b", 2), ("a", 3)];
        let idx = s.index_by(|p, _, _| p.0);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.get("a"), Some(&("a", 3)));
        assert_eq!(idx.get("b"), Some(&("b", 2)));
        assert_eq!(idx.get("c"), None);
    }

    #[test]
    fn test_index_by_with_value_fn() {
        let s = sparray![("x", 10), ("y", 20)];
        let idx = s.index_by_with(|p, _, _| p.0, |p, _, _| p.1);
        assert_eq!(idx.get("x"), Some(&10));
        assert!(idx.contains_key("y"));
    }

    #[test]
    fn test_index_by_keys_are_stringified() {
        let s = sparray![10, 21, 30];
        let idx = s.index_by(|x, _, _| x % 2);
        assert_eq!(idx.get("0"), Some(&30));
        assert_eq!(idx.get("1"), Some(&21));
    }

    #[test]
    fn test_index_to_sparray_first_seen_order() {
        let s = sparray![("b", 1), ("a", 2), ("b", 3)];
        let back = s.index_by_with(|p, _, _| p.0, |p, _, _| p.1).to_sparray();
        assert_eq!(
            back.to_vec(),
            vec![
                KeyValue { key: "b".into(), value: 3 },
                KeyValue { key: "a".into(), value: 2 },
            ]
        );
        assert!(!back.is_numeric());
    }

    #[test]
    fn test_group_by_preserves_order() {
        let s = sparray![1, 2, 3, 4, 5, 6, 7];
        let groups = s.group_by(|x, _, _| if x % 3 == 0 { "fizz" } else { "other" });
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["other", "fizz"]);
        assert_eq!(groups.get("fizz").map(Sparray::to_vec), Some(vec![3, 6]));
        assert_eq!(groups.get("other").map(Sparray::to_vec), Some(vec![1, 2, 4, 5, 7]));
        assert!(groups.get("fizz").map_or(false, Sparray::is_numeric));
    }

    #[test]
    fn test_group_by_with_runs_once_per_key_in_order() {
        let s = sparray!["bb", "a", "cc", "d", "eee"];
        let mut seen = Vec::new();
        let sizes = s.group_by_with(
            |w, _, _| w.len(),
            |group, key| {
                seen.push(key.to_string());
                group.len()
            },
        );
        assert_eq!(seen, vec!["2", "1", "3"]);
        assert_eq!(sizes.get("2"), Some(&2));
        assert_eq!(sizes.get("3"), Some(&1));

        let back = sizes.to_sparray();
        assert_eq!(back.map(|g, _, _| g.key.clone()).join(","), "2,1,3");
        assert_eq!(back.map(|g, _, _| g.values).to_vec(), vec![2, 2, 1]);
    }

    #[test]
    fn test_group_by_on_records() {
        let s = sparray![
            Value::record([("team", "red"), ("name", "ann")]),
            Value::record([("team", "blue"), ("name", "bob")]),
            Value::record([("team", "red"), ("name", "cid")])
        ];
        let teams = s.group_by(|v, _, _| v.field("team").map(Value::render).unwrap_or_default());
        let red = teams.get("red").map(|g| g.map(|v, _, _| v.field("name").cloned().unwrap_or(Value::Null)));
        assert_eq!(red.map(|g| g.join(",")), Some("ann,cid".to_string()));
    }

    #[test]
    fn test_group_and_index_by_position() {
        let s = sparray!["a", "b", "c", "d", "e", "f", "g"];
        let chunks = s.group_by(|_, i, _| i / 3);
        assert_eq!(chunks.keys().collect::<Vec<_>>(), vec!["0", "1", "2"]);
        assert_eq!(chunks.get("1").map(Sparray::to_vec), Some(vec!["d", "e", "f"]));
        assert_eq!(chunks.get("2").map(Sparray::to_vec), Some(vec!["g"]));

        let tail = s.group_by(|_, i, all| i + 2 >= all.len());
        assert_eq!(tail.get("true").map(Sparray::to_vec), Some(vec!["f", "g"]));

        let by_pos = s.index_by_with(|_, i, _| i % 2, |e, i, _| format!("{}{}", e, i));
        assert_eq!(by_pos.get("0"), Some(&"g6".to_string()));
        assert_eq!(by_pos.get("1"), Some(&"f5".to_string()));
    }

    #[test]
    fn test_null_keys_are_named() {
        let s = sparray![
            Value::record([("team", "red")]),
            Value::record([("name", "solo")]),
            Value::record([("team", "")])
        ];
        let teams = s.group_by(|v, _, _| v.field("team").cloned().unwrap_or(Value::Null));
        assert_eq!(teams.keys().collect::<Vec<_>>(), vec!["red", "null", ""]);
        let idx = s.index_by(|v, _, _| v.field("team").cloned().unwrap_or(Value::Null));
        assert!(idx.contains_key("null"));
    }

    #[test]
    fn test_empty_source() {
        let e: Sparray<i32> = sparray![];
        assert!(e.index_by(|x, _, _| *x).is_empty());
        assert!(e.group_by(|x, _, _| *x).to_sparray().is_empty());
    }
}
