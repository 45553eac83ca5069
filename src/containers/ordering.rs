//! Ordering, sort keys and extrema

use super::sparray::Sparray;
use crate::element::Element;
use crate::value::Value;
use std::cmp::Ordering;

/// Natural ordering that stays total for floats
///
/// Incomparable values (NaN) order after everything comparable and equal to
/// each other.
pub(crate) fn natural_cmp<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    match a.partial_cmp(b) {
        Some(ord) => ord,
        None => {
            let a_incomparable = a.partial_cmp(a).is_none();
            let b_incomparable = b.partial_cmp(b).is_none();
            a_incomparable.cmp(&b_incomparable)
        }
    }
}

/// A single key or an ordered tuple of keys returned by a `sort_by_key` key function
///
/// Two sort keys compare key by key over the shorter of the two tuples; the
/// first unequal key decides.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey(Vec<Value>);

impl SortKey {
    /// Build a sort key from individual key parts
    pub fn new(parts: Vec<Value>) -> Self {
        Self(parts)
    }

    /// Key parts in priority order
    pub fn parts(&self) -> &[Value] {
        &self.0
    }

    /// Lexicographic comparison over the common prefix
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| a.total_cmp(b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl From<Value> for SortKey {
    fn from(v: Value) -> Self {
        Self(vec![v])
    }
}

macro_rules! impl_scalar_sort_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SortKey {
                fn from(v: $ty) -> Self {
                    Self(vec![Value::from(v)])
                }
            }
        )*
    };
}

impl_scalar_sort_key!(i8, i16, i32, i64, isize, u8, u16, u32, usize, f32, f64, bool, &str, String);

impl<V: Into<Value>> From<Vec<V>> for SortKey {
    fn from(parts: Vec<V>) -> Self {
        Self(parts.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for SortKey {
    fn from((a, b): (A, B)) -> Self {
        Self(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for SortKey {
    fn from((a, b, c): (A, B, C)) -> Self {
        Self(vec![a.into(), b.into(), c.into()])
    }
}

impl<T: Element> Sparray<T> {
    /// Sort with a comparator; stable
    pub fn sort_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut data = self.to_vec();
        data.sort_by(|a, b| compare(a, b));
        Self::new(data)
    }

    /// Sort by a derived key or key tuple; stable
    ///
    /// Keys are computed once per element. `reverse` flips the final
    /// comparison, so ties keep their source order either way.
    ///
    /// ```rust
    /// use sparray::sparray;
    ///
    /// let people = sparray![("ann", 31), ("bob", 25), ("cid", 31)];
    /// let by_age = people.sort_by_key(|&(name, age), _, _| (age, name), true);
    /// assert_eq!(by_age.to_vec(), vec![("cid", 31), ("ann", 31), ("bob", 25)]);
    /// ```
    pub fn sort_by_key<K, F>(&self, mut key_fn: F, reverse: bool) -> Self
    where
        K: Into<SortKey>,
        F: FnMut(&T, usize, &Self) -> K,
    {
        let mut keyed: Vec<(SortKey, &T)> = self
            .entries()
            .map(|(i, e)| (key_fn(e, i, self).into(), e))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| {
            let ord = a.compare(b);
            if reverse {
                ord.reverse()
            } else {
                ord
            }
        });
        Self::new(keyed.into_iter().map(|(_, e)| e.clone()).collect())
    }

    /// Element with the smallest derived key; the first one wins ties
    pub fn min_by_key<K, F>(&self, key_fn: F) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T, usize, &Self) -> K,
    {
        self.extremum_by_key(key_fn, Ordering::Less)
    }

    /// Element with the largest derived key; the first one wins ties
    pub fn max_by_key<K, F>(&self, key_fn: F) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T, usize, &Self) -> K,
    {
        self.extremum_by_key(key_fn, Ordering::Greater)
    }

    fn extremum_by_key<K, F>(&self, mut key_fn: F, wanted: Ordering) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T, usize, &Self) -> K,
    {
        let mut best: Option<(K, &T)> = None;
        for (i, e) in self.entries() {
            let key = key_fn(e, i, self);
            let replace = match &best {
                Some((best_key, _)) => natural_cmp(&key, best_key) == wanted,
                None => true,
            };
            if replace {
                best = Some((key, e));
            }
        }
        best.map(|(_, e)| e)
    }
}

impl<T: Element + PartialOrd> Sparray<T> {
    /// Sort in natural order; stable
    pub fn sort(&self) -> Self {
        self.sort_by(natural_cmp)
    }

    /// Smallest element in natural order
    pub fn min(&self) -> Option<&T> {
        self.min_by_key(|e, _, _| e.clone())
    }

    /// Largest element in natural order
    pub fn max(&self) -> Option<&T> {
        self.max_by_key(|e, _, _| e.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sparray, values};

    fn record(a: i64, b: i64) -> Value {
        Value::record([("a", a), ("b", b)])
    }

    fn field(v: &Value, name: &str) -> Value {
        v.field(name).cloned().unwrap_or(Value::Null)
    }

    #[test]
    fn test_sort_natural() {
        let s = sparray![3, 1, 5, 4, 2];
        assert_eq!(s.sort().to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(s.to_vec(), vec![3, 1, 5, 4, 2]);
        assert_eq!(sparray!["b", "c", "a"].sort().to_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_floats_with_nan() {
        let s = sparray![2.0, f64::NAN, 1.0];
        let sorted = s.sort();
        assert_eq!(sorted[0], 1.0);
        assert_eq!(sorted[1], 2.0);
        assert!(sorted[2].is_nan());
    }

    #[test]
    fn test_sort_by_comparator() {
        let s = sparray![1, 3, 2];
        assert_eq!(s.sort_by(|a, b| b.cmp(a)).to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_by_multi_key() {
        let s = sparray![
            record(2, 2),
            record(1, 2),
            record(2, 1),
            record(3, 2),
            record(1, 1),
            record(3, 1)
        ];
        let sorted = s.sort_by_key(|v, _, _| vec![field(v, "a"), field(v, "b")], false);
        let labels = sorted.map(|v, _, _| format!("{}-{}", field(v, "a"), field(v, "b")));
        assert_eq!(labels.join(";"), "1-1;1-2;2-1;2-2;3-1;3-2");

        let reversed = s.sort_by_key(|v, _, _| vec![field(v, "a"), field(v, "b")], true);
        let labels = reversed.map(|v, _, _| format!("{}-{}", field(v, "a"), field(v, "b")));
        assert_eq!(labels.join(";"), "3-2;3-1;2-2;2-1;1-2;1-1");
    }

    #[test]
    fn test_sort_by_key_stable_ties() {
        let s = sparray![("x", 1), ("y", 0), ("z", 1), ("w", 0)];
        let asc = s.sort_by_key(|p, _, _| p.1, false);
        assert_eq!(asc.to_vec(), vec![("y", 0), ("w", 0), ("x", 1), ("z", 1)]);
        let desc = s.sort_by_key(|p, _, _| p.1, true);
        assert_eq!(desc.to_vec(), vec![("x", 1), ("z", 1), ("y", 0), ("w", 0)]);
    }

    #[test]
    fn test_sort_key_prefix_comparison() {
        let short = SortKey::from(vec![1]);
        let long = SortKey::from(vec![1, 5]);
        assert_eq!(short.compare(&long), Ordering::Equal);
        assert_eq!(SortKey::from((1, "b")).compare(&SortKey::from((1, "a"))), Ordering::Greater);
    }

    #[test]
    fn test_min_max() {
        let s = sparray![4, 1, 9, 1, 9];
        assert_eq!(s.min(), Some(&1));
        assert_eq!(s.max(), Some(&9));
        let e: Sparray<i32> = sparray![];
        assert_eq!(e.min(), None);
        assert_eq!(e.max(), None);
        assert_eq!(values![2, "a", 1].min(), Some(&Value::Int(1)));
    }

    #[test]
    fn test_min_max_by_key_returns_element() {
        let s = sparray!["pear", "fig", "banana", "kiwi"];
        assert_eq!(s.min_by_key(|w, _, _| w.len()), Some(&"fig"));
        assert_eq!(s.max_by_key(|w, _, _| w.len()), Some(&"banana"));
        assert_eq!(s.max_by_key(|w, _, _| w.len() % 2), Some(&"fig"));
        assert_eq!(s.min_by_key(|w, _, _| w.len() % 2), Some(&"pear"));
        let e: Sparray<&str> = sparray![];
        assert_eq!(e.min_by_key(|w, _, _| w.len()), None);
    }

    #[test]
    fn test_keys_can_use_position() {
        let s = sparray!["a", "b", "c", "d"];
        let rotated = s.sort_by_key(|_, i, all| (i + 1) % all.len(), false);
        assert_eq!(rotated.to_vec(), vec!["d", "a", "b", "c"]);
        assert_eq!(s.max_by_key(|_, i, _| i % 3), Some(&"c"));
        assert_eq!(s.min_by_key(|_, i, _| 3 - i), Some(&"d"));
    }
}
