//! Sparray: immutable, chainable sequence container
//!
//! A `Sparray<T>` exclusively owns one backing `Vec<T>`. Nothing ever mutates
//! it after construction: every transformation builds a fresh container, and
//! every construction re-runs numeric detection so `map` can move a
//! container into or out of the numeric specialization.

use crate::element::{render_list, Element};
use crate::error::{Result, SparrayError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::ops::{Index, Range};
use std::slice;

/// Element-kind tag selected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Any element type, or an empty sequence
    Generic,
    /// Every element is a number; enables `sum`, `avg` and `histogram`
    Numeric,
}

impl Kind {
    /// Select the kind for a finalized backing sequence
    ///
    /// Non-empty and all-numeric yields [`Kind::Numeric`]; a single
    /// non-numeric element, or no elements at all, yields [`Kind::Generic`].
    pub fn detect<T: Element>(data: &[T]) -> Self {
        if !data.is_empty() && data.iter().all(Element::is_numeric) {
            Kind::Numeric
        } else {
            Kind::Generic
        }
    }
}

/// Immutable ordered sequence with a fluent transformation API
///
/// # Examples
///
/// ```rust
/// use sparray::sparray;
///
/// let numbers = sparray![3, 1, 5, 4, 2];
/// assert!(numbers.is_numeric());
///
/// let sorted = numbers.sort();
/// assert_eq!(sorted.to_vec(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(numbers.to_vec(), vec![3, 1, 5, 4, 2]);
///
/// assert_eq!(sorted.at(-1), Some(&5));
/// assert_eq!(sorted.to_string(), "[ 1, 2, 3, 4, 5 ]");
/// ```
#[derive(Clone)]
pub struct Sparray<T> {
    data: Vec<T>,
    kind: Kind,
}

impl<T: Element> Sparray<T> {
    /// Build a container that takes ownership of `data`
    ///
    /// The kind is selected from the elements: see [`Kind::detect`].
    pub fn new(data: Vec<T>) -> Self {
        let kind = Kind::detect(&data);
        Self { data, kind }
    }

    /// Build a container explicitly tagged as numeric
    ///
    /// Unlike [`Sparray::new`], an empty `data` produces an empty numeric
    /// container. Fails if any element is not a number.
    pub fn numeric(data: Vec<T>) -> Result<Self> {
        if let Some(pos) = data.iter().position(|e| !e.is_numeric()) {
            log::debug!("Rejected numeric sparray: element {} is not a number", pos);
            return Err(SparrayError::not_numeric(format!(
                "element at index {} is not a number",
                pos
            )));
        }
        Ok(Self { data, kind: Kind::Numeric })
    }

    /// Build a container from a borrowed slice (always copies)
    pub fn from_slice(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }

    /// Get the element at `index`, counting from the back when negative
    ///
    /// `-1` is the last element. Out of range in either direction is `None`.
    #[inline]
    pub fn at(&self, index: isize) -> Option<&T> {
        resolve_index(index, self.data.len()).and_then(|i| self.data.get(i))
    }

    /// Get the element at `index`
    #[deprecated(note = "use `at`")]
    #[inline]
    pub fn get(&self, index: isize) -> Option<&T> {
        self.at(index)
    }

    /// First element, `None` when empty
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Up to `n` elements from the front
    pub fn first_n(&self, n: usize) -> Self {
        Self::from_slice(&self.data[..n.min(self.data.len())])
    }

    /// Last element, `None` when empty
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Up to `n` elements from the back, in storage order
    pub fn last_n(&self, n: usize) -> Self {
        let len = self.data.len();
        Self::from_slice(&self.data[len - n.min(len)..])
    }

    /// Half-open sub-sequence `[start, end)` with negative index support
    ///
    /// Missing `start` means `0`, missing `end` means the length. Negative
    /// bounds count from the back; bounds are clamped to the container.
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Self {
        let len = self.data.len();
        let from = start.map_or(0, |s| clamp_index(s, len));
        let to = end.map_or(len, |e| clamp_index(e, len));
        if from >= to {
            return Self::new(Vec::new());
        }
        Self::from_slice(&self.data[from..to])
    }

    /// New container with the elements in reverse order
    pub fn reverse(&self) -> Self {
        Self::new(self.data.iter().rev().cloned().collect())
    }

    /// Copy the elements out into a plain vector
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Copy the distinct elements out into a set
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.data.iter().cloned().collect()
    }
}

impl<T> Sparray<T> {
    /// Element-kind tag chosen at construction
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether this container is numeric-specialized
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind == Kind::Numeric
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the container has at least one element
    #[inline]
    pub fn is_not_empty(&self) -> bool {
        !self.data.is_empty()
    }

    /// Positions `0..len`
    #[inline]
    pub fn keys(&self) -> Range<usize> {
        0..self.data.len()
    }

    /// Elements in storage order
    #[inline]
    pub fn values(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// `(position, element)` pairs in storage order
    #[inline]
    pub fn entries(&self) -> std::iter::Enumerate<slice::Iter<'_, T>> {
        self.data.iter().enumerate()
    }

    /// Elements in storage order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Borrow the backing sequence
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the container and return its backing sequence
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Resolve a possibly negative index against `len`
#[inline]
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        let i = index as usize;
        (i < len).then_some(i)
    }
}

/// Resolve a slice bound, clamping into `0..=len`
#[inline]
fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

impl<T> Default for Sparray<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            kind: Kind::Generic,
        }
    }
}

impl<T: Element> From<Vec<T>> for Sparray<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Element> FromIterator<T> for Sparray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sparray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sparray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> AsRef<[T]> for Sparray<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Sparray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.data.get(index).unwrap_or_else(|| {
            panic!(
                "Index {} out of bounds for Sparray with length {}",
                index,
                self.data.len()
            )
        })
    }
}

impl<T: PartialEq> PartialEq for Sparray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: fmt::Debug> fmt::Debug for Sparray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Element> fmt::Display for Sparray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            f.write_str("[ ]")
        } else {
            write!(f, "[ {} ]", self.join(", "))
        }
    }
}

impl<T: Element> Element for Sparray<T> {
    fn render(&self) -> String {
        render_list(&self.data)
    }
}

impl<T: Serialize> Serialize for Sparray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for Sparray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}
