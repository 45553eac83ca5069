//! Transformation and aggregation operations
//!
//! Callbacks receive `(element, index, container)` and run strictly left to
//! right over the backing sequence (right to left for the `*_right` folds).
//! Every transformation returns a fresh container; the receiver is never
//! touched.

use super::sparray::Sparray;
use crate::element::Element;
use crate::error::{Result, SparrayError};
use crate::factory::Source;
use serde::{Deserialize, Serialize};

/// An element paired with its position, produced by [`Sparray::enumerate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enumerated<T> {
    /// Position in the source container
    pub index: usize,
    /// The element at that position
    pub value: T,
}

impl<T: Element> Element for Enumerated<T> {
    fn render(&self) -> String {
        format!("{}: {}", self.index, self.value.render())
    }
}

impl<T: Element> Sparray<T> {
    /// Transform every element
    ///
    /// The result re-runs numeric detection, so mapping numbers to strings
    /// yields a generic container and vice versa.
    pub fn map<U, F>(&self, mut f: F) -> Sparray<U>
    where
        U: Element,
        F: FnMut(&T, usize, &Self) -> U,
    {
        Sparray::new(self.entries().map(|(i, e)| f(e, i, self)).collect())
    }

    /// Transform every element into a sequence and splice the results
    ///
    /// Exactly one level is flattened: the closure may return a `Vec`, a
    /// `Sparray`, an `Option` or any other `IntoIterator`. For dynamic
    /// values, return [`Source::sniff`] to splice lists and containers while
    /// keeping scalars as they are.
    ///
    /// ```rust
    /// use sparray::{list, values, Source, Value};
    ///
    /// let s = values![1, 2];
    /// let out = s.flat_map(|x, _, _| Source::sniff(list![x.clone(), x.clone()]));
    /// assert_eq!(out.to_vec(), vec![Value::Int(1), Value::Int(1), Value::Int(2), Value::Int(2)]);
    /// ```
    pub fn flat_map<U, I, F>(&self, mut f: F) -> Sparray<U>
    where
        U: Element,
        I: IntoIterator<Item = U>,
        F: FnMut(&T, usize, &Self) -> I,
    {
        Sparray::new(self.entries().flat_map(|(i, e)| f(e, i, self)).collect())
    }

    /// Flatten nested sequences and containers up to `depth` levels
    ///
    /// Elements with no [`children`](Element::children) stay as they are at
    /// any depth. `depth == 0` returns the same content.
    pub fn flat(&self, depth: usize) -> Self {
        let mut out = Vec::with_capacity(self.len());
        for e in self.iter() {
            flatten_into(e.clone(), depth, &mut out);
        }
        Self::new(out)
    }

    /// Flatten one level of statically nested sequences
    ///
    /// ```rust
    /// use sparray::sparray;
    ///
    /// let nested = sparray![vec![1, 2], vec![3]];
    /// assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn flatten<U>(&self) -> Sparray<U>
    where
        U: Element,
        T: IntoIterator<Item = U>,
    {
        Sparray::new(self.iter().cloned().flatten().collect())
    }

    /// Fold from the left using the first element as the seed
    ///
    /// A single-element container returns that element without calling `f`.
    /// Fails with [`SparrayError::EmptyFold`] on an empty container.
    pub fn reduce<F>(&self, mut f: F) -> Result<T>
    where
        F: FnMut(T, &T, usize, &Self) -> T,
    {
        let (first, rest) = self.as_slice().split_first().ok_or(SparrayError::EmptyFold)?;
        Ok(rest
            .iter()
            .enumerate()
            .fold(first.clone(), |acc, (i, e)| f(acc, e, i + 1, self)))
    }

    /// Fold from the right using the last element as the seed
    pub fn reduce_right<F>(&self, mut f: F) -> Result<T>
    where
        F: FnMut(T, &T, usize, &Self) -> T,
    {
        let (last, rest) = self.as_slice().split_last().ok_or(SparrayError::EmptyFold)?;
        Ok(rest
            .iter()
            .enumerate()
            .rev()
            .fold(last.clone(), |acc, (i, e)| f(acc, e, i, self)))
    }

    /// Fold from the left starting at `init`
    pub fn fold<U, F>(&self, init: U, mut f: F) -> U
    where
        F: FnMut(U, &T, usize, &Self) -> U,
    {
        self.entries().fold(init, |acc, (i, e)| f(acc, e, i, self))
    }

    /// Fold from the right starting at `init`
    pub fn fold_right<U, F>(&self, init: U, mut f: F) -> U
    where
        F: FnMut(U, &T, usize, &Self) -> U,
    {
        self.entries().rev().fold(init, |acc, (i, e)| f(acc, e, i, self))
    }

    /// Keep the elements matching `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        Self::new(
            self.entries()
                .filter(|&(i, e)| predicate(e, i, self))
                .map(|(_, e)| e.clone())
                .collect(),
        )
    }

    /// Call `f` on every element and return the receiver for chaining
    pub fn for_each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, usize, &Self),
    {
        for (i, e) in self.entries() {
            f(e, i, self);
        }
        self
    }

    /// Number of elements
    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Number of elements matching `predicate`
    pub fn count_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.entries().filter(|&(i, e)| predicate(e, i, self)).count()
    }

    /// Whether any element matches; stops at the first match
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.entries().any(|(i, e)| predicate(e, i, self))
    }

    /// Whether every element matches; stops at the first mismatch
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.entries().all(|(i, e)| predicate(e, i, self))
    }

    /// Append elements, sequences or containers in argument order
    ///
    /// ```rust
    /// use sparray::{sparray, Source};
    ///
    /// let joined = sparray![1, 2].concat([
    ///     Source::single(3),
    ///     Source::from(vec![4, 5]),
    ///     Source::from(sparray![6]),
    /// ]);
    /// assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn concat<S, I>(&self, items: I) -> Self
    where
        S: Into<Source<T>>,
        I: IntoIterator<Item = S>,
    {
        let mut data = self.to_vec();
        for item in items {
            data.extend(item.into().into_vec());
        }
        Self::new(data)
    }

    /// First element matching `predicate`
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.entries().find(|&(i, e)| predicate(e, i, self)).map(|(_, e)| e)
    }

    /// Position of the first element matching `predicate`
    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.entries().find(|&(i, e)| predicate(e, i, self)).map(|(i, _)| i)
    }

    /// Join rendered elements with `sep`
    #[inline]
    pub fn join(&self, sep: &str) -> String {
        self.join_last(sep, sep)
    }

    /// Join rendered elements with `sep`, using `last_sep` before the last one
    ///
    /// ```rust
    /// use sparray::sparray;
    ///
    /// assert_eq!(sparray![1, 2, 3, 4, 5].join_last(" | ", " | and "), "1 | 2 | 3 | 4 | and 5");
    /// ```
    pub fn join_last(&self, sep: &str, last_sep: &str) -> String {
        let last = self.len().saturating_sub(1);
        let mut out = String::new();
        for (i, e) in self.entries() {
            if i > 0 {
                out.push_str(if i == last { last_sep } else { sep });
            }
            out.push_str(&e.render());
        }
        out
    }

    /// Pair every element with its position
    pub fn enumerate(&self) -> Sparray<Enumerated<T>> {
        Sparray::new(
            self.entries()
                .map(|(index, value)| Enumerated { index, value: value.clone() })
                .collect(),
        )
    }
}

impl<T: Element + PartialEq> Sparray<T> {
    /// Remove duplicates, keeping the first occurrence of each value
    pub fn distinct(&self) -> Self {
        let mut out: Vec<T> = Vec::with_capacity(self.len());
        for e in self.iter() {
            if !out.contains(e) {
                out.push(e.clone());
            }
        }
        Self::new(out)
    }

    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|e| e == value)
    }

    /// Position of the last element equal to `value`
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.iter().rposition(|e| e == value)
    }

    /// Whether `value` is present
    pub fn includes(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    /// Whether every one of `values` is present
    pub fn includes_all(&self, values: &[T]) -> bool {
        values.iter().all(|v| self.includes(v))
    }

    /// Whether at least one of `values` is present
    pub fn includes_any(&self, values: &[T]) -> bool {
        values.iter().any(|v| self.includes(v))
    }
}

fn flatten_into<T: Element>(e: T, depth: usize, out: &mut Vec<T>) {
    match e.children() {
        Some(items) if depth > 0 => {
            for item in items {
                flatten_into(item, depth - 1, out);
            }
        }
        _ => out.push(e),
    }
}
