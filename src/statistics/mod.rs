//! Numeric specialization: sums, averages and histograms
//!
//! A numeric container is reached through a checked downcast,
//! [`Sparray::as_numeric`], which only succeeds when the container was
//! tagged [`Kind::Numeric`](crate::Kind::Numeric) at construction. The
//! convenience methods on `Sparray` itself return
//! [`SparrayError::NotNumeric`] instead.

mod histogram;

pub use histogram::{Bin, Histogram, HistogramRange};

use crate::containers::Sparray;
use crate::element::Element;
use crate::error::{Result, SparrayError};

/// Borrowed view over a numeric-specialized container
#[derive(Debug)]
pub struct Numeric<'a, T> {
    source: &'a Sparray<T>,
}

impl<'a, T> Clone for Numeric<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Numeric<'a, T> {}

impl<'a, T: Element> Numeric<'a, T> {
    /// The underlying container
    #[inline]
    pub fn as_sparray(&self) -> &'a Sparray<T> {
        self.source
    }

    /// Elements as `f64`, in storage order
    pub fn numbers(&self) -> impl Iterator<Item = f64> + 'a {
        self.source.iter().filter_map(Element::as_number)
    }

    /// Additive fold starting at `0`
    pub fn sum(&self) -> f64 {
        self.numbers().fold(0.0, |acc, x| acc + x)
    }

    /// `sum / len`; NaN when empty
    pub fn avg(&self) -> f64 {
        self.sum() / self.source.len() as f64
    }

    /// Bin the values into `bins` equal-width buckets over `range`
    ///
    /// Missing bounds in `range` default to the data's own extrema. Values
    /// outside `[min, max]` are not counted; a value equal to `max` lands in
    /// the last bucket.
    ///
    /// ```rust
    /// use sparray::{sparray, HistogramRange};
    ///
    /// let data = sparray![1, 2, 2, 3, 4, 5];
    /// let hist = data.as_numeric().unwrap().histogram(2, HistogramRange::default())?;
    /// assert_eq!(hist.counts(), vec![3, 3]);
    /// # Ok::<(), sparray::SparrayError>(())
    /// ```
    pub fn histogram(&self, bins: usize, range: HistogramRange) -> Result<Histogram> {
        let values: Vec<f64> = self.numbers().collect();
        Histogram::build(&values, bins, range)
    }
}

impl<T: Element> Sparray<T> {
    /// Checked downcast to the numeric specialization
    pub fn as_numeric(&self) -> Option<Numeric<'_, T>> {
        self.is_numeric().then_some(Numeric { source: self })
    }

    fn require_numeric(&self, operation: &str) -> Result<Numeric<'_, T>> {
        self.as_numeric()
            .ok_or_else(|| SparrayError::not_numeric(format!("{} requires a numeric sparray", operation)))
    }

    /// Sum of a numeric container
    pub fn sum(&self) -> Result<f64> {
        Ok(self.require_numeric("sum")?.sum())
    }

    /// Average of a numeric container; NaN when empty
    pub fn avg(&self) -> Result<f64> {
        Ok(self.require_numeric("avg")?.avg())
    }

    /// Histogram of a numeric container
    pub fn histogram(&self, bins: usize, range: HistogramRange) -> Result<Histogram> {
        self.require_numeric("histogram")?.histogram(bins, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{range_between, sparray, values, Value};

    #[test]
    fn test_sum_and_avg() -> Result<()> {
        let s = sparray![1, 2, 3, 4];
        assert_eq!(s.sum()?, 10.0);
        assert_eq!(s.avg()?, 2.5);
        assert_eq!(range_between(0, 5).sum()?, 10.0);
        assert_eq!(values![1, 2.5].sum()?, 3.5);
        Ok(())
    }

    #[test]
    fn test_empty_numeric() -> Result<()> {
        let e = Sparray::<f64>::numeric(Vec::new())?;
        let view = e.as_numeric().ok_or(SparrayError::EmptyFold)?;
        assert_eq!(view.sum(), 0.0);
        assert!(view.avg().is_nan());
        Ok(())
    }

    #[test]
    fn test_generic_is_rejected() {
        let mixed = values![1, "a", 3];
        assert!(mixed.as_numeric().is_none());
        assert!(matches!(mixed.sum(), Err(SparrayError::NotNumeric { .. })));
        assert!(mixed.avg().is_err());
        assert!(mixed.histogram(3, HistogramRange::default()).is_err());

        let e: Sparray<i32> = sparray![];
        assert!(e.as_numeric().is_none());
    }

    #[test]
    fn test_specialization_follows_map() {
        let words = sparray!["1", "22", "333"];
        assert!(words.as_numeric().is_none());
        let lengths = words.map(|w, _, _| w.len());
        assert_eq!(lengths.sum().ok(), Some(6.0));

        let back = lengths.map(|n, _, _| Value::from(n.to_string()));
        assert!(back.sum().is_err());
    }

    #[test]
    fn test_view_histogram() -> Result<()> {
        let s = sparray![0.0, 0.5, 1.0];
        let view = s.as_numeric().ok_or(SparrayError::EmptyFold)?;
        assert_eq!(view.as_sparray().len(), 3);
        let hist = view.histogram(2, HistogramRange::default())?;
        assert_eq!(hist.counts(), vec![1, 2]);
        Ok(())
    }
}
