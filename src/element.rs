//! Element probing for sparray containers
//!
//! A [`Sparray`](crate::Sparray) decides at every construction whether it is
//! numeric, flattens nested sequences and stringifies its elements for
//! `join`. All three need a little runtime knowledge about the element type,
//! which the [`Element`] trait provides.
//!
//! Implement it for your own types with a single `render` method:
//!
//! ```rust
//! use sparray::Element;
//!
//! #[derive(Clone)]
//! struct Point { x: i32, y: i32 }
//!
//! impl Element for Point {
//!     fn render(&self) -> String {
//!         format!("({}, {})", self.x, self.y)
//!     }
//! }
//!
//! let points = sparray::from(vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]);
//! assert!(!points.is_numeric());
//! assert_eq!(points.join(" "), "(1, 2) (3, 4)");
//! ```

/// Runtime shape of a value stored in a container
pub trait Element: Clone {
    /// Numeric value of this element, or `None` if it is not a number
    fn as_number(&self) -> Option<f64> {
        None
    }

    /// Whether this element counts toward the numeric specialization
    #[inline]
    fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// Elements of a nested sequence or container held in this value
    ///
    /// Returns `None` for scalars. Used by `flat`, single-argument `from`
    /// and `concat` to decide whether a value is spliced or kept whole.
    fn children(&self) -> Option<Vec<Self>> {
        None
    }

    /// String form used by `join` and `Display`; absent values render as `""`
    fn render(&self) -> String;
}

macro_rules! impl_numeric_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                #[inline]
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

macro_rules! impl_display_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_display_element!(bool, char, String);

impl<'a> Element for &'a str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

impl<T: Element> Element for Option<T> {
    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(Element::as_number)
    }

    fn children(&self) -> Option<Vec<Self>> {
        self.as_ref()
            .and_then(Element::children)
            .map(|kids| kids.into_iter().map(Some).collect())
    }

    fn render(&self) -> String {
        self.as_ref().map(Element::render).unwrap_or_default()
    }
}

impl<T: Element> Element for Vec<T> {
    fn render(&self) -> String {
        render_list(self)
    }
}

impl<A: Element, B: Element> Element for (A, B) {
    fn render(&self) -> String {
        format!("{},{}", self.0.render(), self.1.render())
    }
}

/// Comma-joined rendering shared by nested sequence types
pub(crate) fn render_list<T: Element>(items: &[T]) -> String {
    items.iter().map(Element::render).collect::<Vec<_>>().join(",")
}
