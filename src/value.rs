//! Dynamically typed element values
//!
//! `Value` lets a single container hold mixed elements (`1`, `"a"`, nested
//! lists, other containers), which is what drives runtime numeric detection
//! and shape-sniffing construction for heterogeneous data.

use crate::containers::Sparray;
use crate::element::{render_list, Element};
use crate::error::{Result, SparrayError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A heterogeneous element
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// String
    Str(String),
    /// Plain ordered sequence
    List(Vec<Value>),
    /// Nested container
    Array(Sparray<Value>),
    /// String-keyed record
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Short name of the value's shape, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Array(_) => "sparray",
            Value::Map(_) => "map",
        }
    }

    /// Whether this value is a genuine container (not a plain list)
    #[inline]
    pub fn is_sparray(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Whether this value is `Null`
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a field of a `Map` value
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Map(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Build a `Map` value from `(name, value)` pairs
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Str(_) => 3,
            Value::List(_) | Value::Array(_) => 4,
            Value::Map(_) => 5,
        }
    }

    /// Total natural ordering across all shapes
    ///
    /// Values of different shapes order by shape: null, booleans, numbers,
    /// strings, sequences, maps. Numbers compare by value regardless of
    /// integer/float representation, with NaN after every other number.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => cmp_maps(a, b),
            _ if self.rank() != other.rank() => self.rank().cmp(&other.rank()),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => cmp_sequences(&self.children(), &other.children()),
            },
        }
    }
}

fn cmp_sequences(a: &Option<Vec<Value>>, b: &Option<Vec<Value>>) -> Ordering {
    let (a, b) = (a.as_deref().unwrap_or(&[]), b.as_deref().unwrap_or(&[]));
    for (x, y) in a.iter().zip(b) {
        let ord = x.total_cmp(y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

fn cmp_maps(a: &BTreeMap<String, Value>, b: &BTreeMap<String, Value>) -> Ordering {
    for ((ka, va), (kb, vb)) in a.iter().zip(b) {
        let ord = ka.cmp(kb).then_with(|| va.total_cmp(vb));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

impl Element for Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn children(&self) -> Option<Vec<Self>> {
        match self {
            Value::List(items) => Some(items.clone()),
            Value::Array(array) => Some(array.to_vec()),
            _ => None,
        }
    }

    fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
            Value::List(items) => render_list(items),
            Value::Array(array) => array.render(),
            Value::Map(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_number() == other.as_number()
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(other))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Array(array) => write!(f, "Sparray{:?}", array),
            Value::Map(fields) => f.debug_map().entries(fields).finish(),
        }
    }
}

/// Same as [`render`](Element::render) except that `Null` prints as `null`,
/// so a missing field used as an `index_by`/`group_by` key stays distinct
/// from an empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            other => f.write_str(&other.render()),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Sparray<Value>> for Value {
    fn from(array: Sparray<Value>) -> Self {
        Value::Array(array)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<Value> for Sparray<Value> {
    type Error = SparrayError;

    /// Low-level construction from a dynamic value
    ///
    /// Only a plain `List` is an ordered sequence; any other shape,
    /// including an existing container, is rejected.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => Ok(Sparray::new(items)),
            other => Err(SparrayError::invalid_construction(other.type_name())),
        }
    }
}

/// Build a `Value` list from heterogeneous literals
///
/// ```rust
/// use sparray::{list, Value};
///
/// let v = list![1, "a", 2.5];
/// assert_eq!(v, Value::List(vec![Value::Int(1), Value::from("a"), Value::Float(2.5)]));
/// ```
#[macro_export]
macro_rules! list {
    ($($x:expr),* $(,)?) => {
        $crate::Value::List(vec![$($crate::Value::from($x)),*])
    };
}
