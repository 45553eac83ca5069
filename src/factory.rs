//! Factory functions for building sparrays
//!
//! Every factory normalizes its input into one backing `Vec<T>` and routes it
//! through [`Sparray::new`], which selects the numeric specialization.

use crate::containers::Sparray;
use crate::element::Element;
use crate::error::{Result, SparrayError};
use crate::value::Value;
use std::collections::{BTreeSet, HashSet};

/// Construction input for [`from`], resolved once at the boundary
#[derive(Debug, Clone, PartialEq)]
pub enum Source<T> {
    /// No arguments
    Empty,
    /// One scalar element, wrapped as a singleton
    Single(T),
    /// One ordered sequence, copied as-is
    Sequence(Vec<T>),
    /// One set of unique values, in the set's iteration order
    UniqueSet(Vec<T>),
    /// One existing container, unwrapped
    Existing(Sparray<T>),
    /// Two or more positional elements
    Many(Vec<T>),
}

impl<T: Element> Source<T> {
    /// Wrap one value as a singleton without inspecting its shape
    pub fn single(value: T) -> Self {
        Source::Single(value)
    }

    /// Classify a single argument by its runtime shape
    ///
    /// A value holding a nested container or sequence is spliced in; anything
    /// else is wrapped.
    pub fn sniff(value: T) -> Self {
        match value.children() {
            Some(items) => Source::Sequence(items),
            None => Source::Single(value),
        }
    }

    /// Classify a positional argument list by count, then by shape
    pub fn from_args(mut args: Vec<T>) -> Self {
        match args.len() {
            0 => Source::Empty,
            1 => match args.pop() {
                Some(only) => Self::sniff(only),
                None => Source::Empty,
            },
            _ => Source::Many(args),
        }
    }

    /// Flatten into the canonical backing sequence
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Source::Empty => Vec::new(),
            Source::Single(value) => vec![value],
            Source::Sequence(items) | Source::UniqueSet(items) | Source::Many(items) => items,
            Source::Existing(array) => array.into_vec(),
        }
    }
}

impl<T: Element> IntoIterator for Source<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T: Element> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        Source::Sequence(items)
    }
}

impl<T: Element> From<&[T]> for Source<T> {
    fn from(items: &[T]) -> Self {
        Source::Sequence(items.to_vec())
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Source<T> {
    fn from(items: [T; N]) -> Self {
        Source::Sequence(items.into())
    }
}

impl<T: Element, S> From<HashSet<T, S>> for Source<T> {
    fn from(set: HashSet<T, S>) -> Self {
        Source::UniqueSet(set.into_iter().collect())
    }
}

impl<T: Element> From<BTreeSet<T>> for Source<T> {
    fn from(set: BTreeSet<T>) -> Self {
        Source::UniqueSet(set.into_iter().collect())
    }
}

impl<T: Element> From<Sparray<T>> for Source<T> {
    fn from(array: Sparray<T>) -> Self {
        Source::Existing(array)
    }
}

impl<T: Element> From<&Sparray<T>> for Source<T> {
    fn from(array: &Sparray<T>) -> Self {
        Source::Existing(array.clone())
    }
}

/// Build a sparray from any supported input shape
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
///
/// let from_vec = sparray::from(vec![1, 2, 3]);
/// let from_set = sparray::from(BTreeSet::from([3, 1, 2, 1]));
/// let copied = sparray::from(&from_vec);
///
/// assert_eq!(from_set.to_vec(), vec![1, 2, 3]);
/// assert_eq!(copied, from_vec);
/// ```
pub fn from<T: Element, S: Into<Source<T>>>(source: S) -> Sparray<T> {
    Sparray::new(source.into().into_vec())
}

/// Build a sparray from a positional argument list
///
/// Zero arguments give an empty container, one argument is sniffed with
/// [`Source::sniff`], two or more become the sequence. This is what the
/// [`sparray!`](crate::sparray!) macro expands to.
pub fn from_args<T: Element>(args: Vec<T>) -> Sparray<T> {
    from(Source::from_args(args))
}

/// Build a sparray with the integers in `[0, end)` (or `(end, 0]` descending)
pub fn range(end: i64) -> Sparray<i64> {
    range_between(0, end)
}

/// Build a sparray with the integers from `start` (inclusive) to `end` (exclusive)
///
/// Steps by `+1` when `start < end`, otherwise by `-1`.
pub fn range_between(start: i64, end: i64) -> Sparray<i64> {
    let step = if start < end { 1 } else { -1 };
    Sparray::new(step_through(start, end, step))
}

/// Build a sparray from `start` toward `end` (exclusive) in increments of `step`
///
/// Fails when `step` is zero or points away from `end`.
pub fn range_step(start: i64, end: i64, step: i64) -> Result<Sparray<i64>> {
    if (start < end && step < 0) || (start > end && step > 0) || step == 0 {
        return Err(SparrayError::invalid_step(step));
    }
    Ok(Sparray::new(step_through(start, end, step)))
}

fn step_through(start: i64, end: i64, step: i64) -> Vec<i64> {
    let mut data = Vec::new();
    let mut i = start;
    if start < end {
        while i < end {
            data.push(i);
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    } else {
        while i > end {
            data.push(i);
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    }
    data
}

/// Build a sparray by repeating `value` `times` times
pub fn repeat<T: Element>(value: T, times: i64) -> Result<Sparray<T>> {
    if times < 0 {
        return Err(SparrayError::invalid_times(times));
    }
    Ok(Sparray::new(vec![value; times as usize]))
}

/// Build a sparray by repeating `value` `times` times
#[deprecated(note = "use `repeat(value, times)`")]
pub fn fill_of<T: Element>(times: i64, value: T) -> Result<Sparray<T>> {
    repeat(value, times)
}

/// Build an empty sparray
pub fn empty<T: Element>() -> Sparray<T> {
    Sparray::new(Vec::new())
}

/// Determine if a dynamic value is a genuine sparray (not a plain list)
pub fn is_sparray(value: &Value) -> bool {
    value.is_sparray()
}

/// Build a sparray from positional arguments
///
/// ```rust
/// use sparray::sparray;
///
/// let empty: sparray::Sparray<i32> = sparray![];
/// assert!(empty.is_empty());
/// assert_eq!(sparray![1, 2, 3].len(), 3);
/// assert_eq!(sparray![7].to_vec(), vec![7]);
/// ```
#[macro_export]
macro_rules! sparray {
    () => {
        $crate::from_args(::std::vec::Vec::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::from_args(vec![$($x),+])
    };
}

/// Build a sparray of [`Value`]s from heterogeneous positional arguments
///
/// ```rust
/// use sparray::values;
///
/// assert!(values![1, 2, 3].is_numeric());
/// assert!(!values![1, "a", 3].is_numeric());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::from_args::<$crate::Value>(::std::vec::Vec::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::from_args(vec![$($crate::Value::from($x)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_from_no_args_is_generic_empty() {
        let s: Sparray<i32> = from_args(Vec::new());
        assert!(s.is_empty());
        assert!(!s.is_numeric());
    }

    #[test]
    fn test_from_single_element() {
        assert_eq!(from_args(vec![true]).to_vec(), vec![true]);
        assert_eq!(from_args(vec![1]).to_vec(), vec![1]);
        assert_eq!(from_args(vec!["a"]).to_vec(), vec!["a"]);
        let rec = Value::record([("field", 1)]);
        assert_eq!(from_args(vec![rec.clone()]).to_vec(), vec![rec]);
    }

    #[test]
    fn test_from_single_sequence() {
        assert_eq!(from(vec![true]).to_vec(), vec![true]);
        assert_eq!(from(vec![1]).to_vec(), vec![1]);
        assert_eq!(from(["a"]).to_vec(), vec!["a"]);
        assert_eq!(from_args(vec![list![1, 2]]).to_vec(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_from_many() {
        assert_eq!(from_args(vec![1, 2, 3]).to_vec(), vec![1, 2, 3]);
        let mixed = from_args(vec![
            Value::Int(1),
            Value::Bool(true),
            list!["a"],
            Value::record([("field", 3)]),
        ]);
        assert_eq!(mixed.len(), 4);
        assert_eq!(mixed.at(2), Some(&list!["a"]));
    }

    #[test]
    fn test_from_set_and_existing() {
        let set = from(BTreeSet::from([2, 1, 2, 3]));
        assert_eq!(set.to_vec(), vec![1, 2, 3]);

        let original = from(vec![1, 2]);
        let copy = from(&original);
        assert_eq!(copy, original);

        let nested = Value::Array(Sparray::new(vec![Value::Int(4)]));
        assert_eq!(from_args(vec![nested]).to_vec(), vec![Value::Int(4)]);
    }

    #[test]
    fn test_specialization() {
        assert!(from_args(vec![1, 2, 3]).is_numeric());
        assert!(range_between(0, 5).is_numeric());
        let mixed = from_args(vec![Value::Int(1), Value::from("a"), Value::Int(3)]);
        assert!(!mixed.is_numeric());
    }

    #[test]
    fn test_range_variants() -> Result<()> {
        assert_eq!(range(4).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(range(-3).to_vec(), vec![0, -1, -2]);
        assert_eq!(range_between(5, 2).to_vec(), vec![5, 4, 3]);
        assert_eq!(range_between(2, 2).to_vec(), Vec::<i64>::new());
        assert_eq!(range_step(0, 10, 3)?.to_vec(), vec![0, 3, 6, 9]);
        assert_eq!(range_step(10, 0, -4)?.to_vec(), vec![10, 6, 2]);
        Ok(())
    }

    #[test]
    fn test_range_invalid_step() {
        assert!(matches!(range_step(0, 5, -1), Err(SparrayError::InvalidStep { step: -1 })));
        assert!(matches!(range_step(5, 0, 1), Err(SparrayError::InvalidStep { step: 1 })));
        assert!(matches!(range_step(0, 5, 0), Err(SparrayError::InvalidStep { step: 0 })));
        assert!(range_step(3, 3, 0).is_err());
    }

    #[test]
    fn test_range_does_not_overflow() -> Result<()> {
        let tail = range_step(i64::MAX - 2, i64::MAX, 5)?;
        assert_eq!(tail.to_vec(), vec![i64::MAX - 2]);
        Ok(())
    }

    #[test]
    fn test_repeat() -> Result<()> {
        assert_eq!(repeat("x", 3)?.to_vec(), vec!["x", "x", "x"]);
        assert!(repeat(1, 0)?.is_empty());
        assert!(matches!(repeat(1, -1), Err(SparrayError::InvalidTimes { times: -1 })));
        Ok(())
    }

    #[test]
    #[allow(deprecated)]
    fn test_fill_of_alias() -> Result<()> {
        assert_eq!(fill_of(2, 7)?, repeat(7, 2)?);
        assert!(fill_of(-2, 7).is_err());
        Ok(())
    }

    #[test]
    fn test_empty_and_predicate() {
        let e: Sparray<f64> = empty();
        assert!(e.is_empty());
        assert!(!e.is_numeric());

        assert!(is_sparray(&Value::Array(Sparray::new(vec![Value::Int(1)]))));
        assert!(!is_sparray(&list![1]));
        assert!(!is_sparray(&Value::Int(1)));
    }

    #[test]
    fn test_macros() {
        let s = crate::sparray![1, 2, 3];
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        let v = crate::values![1, "a"];
        assert_eq!(v.to_vec(), vec![Value::Int(1), Value::from("a")]);
    }
}
