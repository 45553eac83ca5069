//! Windowing, combinatorics and sampling

use super::sparray::Sparray;
use crate::element::Element;
use crate::error::{Result, SparrayError};
use rand::Rng;

impl<T: Element> Sparray<T> {
    /// Consecutive, non-overlapping windows of `size` elements
    pub fn sliding(&self, size: usize) -> Result<Sparray<Sparray<T>>> {
        self.sliding_step(size, size)
    }

    /// Windows of `size` elements starting every `step` elements
    ///
    /// `step < size` overlaps windows, `step > size` skips elements between
    /// them. The final window is truncated, never padded.
    ///
    /// ```rust
    /// use sparray::range_between;
    ///
    /// let windows = range_between(1, 11).sliding_step(5, 3)?;
    /// assert_eq!(windows.len(), 4);
    /// assert_eq!(windows[2].to_vec(), vec![7, 8, 9, 10]);
    /// assert_eq!(windows[3].to_vec(), vec![10]);
    /// # Ok::<(), sparray::SparrayError>(())
    /// ```
    pub fn sliding_step(&self, size: usize, step: usize) -> Result<Sparray<Sparray<T>>> {
        if step < 1 {
            return Err(SparrayError::invalid_window_step(step));
        }
        if size < 1 {
            return Err(SparrayError::invalid_window_size(size));
        }

        let data = self.as_slice();
        let windows = (0..data.len())
            .step_by(step)
            .map(|start| Sparray::from_slice(&data[start..start.saturating_add(size).min(data.len())]))
            .collect();
        Ok(Sparray::new(windows))
    }

    /// Pair each element with the element at the same position in `other`
    ///
    /// The result has this container's length; positions past the end of
    /// `other` pair with `None`.
    pub fn zip<U, O>(&self, other: O) -> Sparray<(T, Option<U>)>
    where
        U: Element,
        O: AsRef<[U]>,
    {
        let other = other.as_ref();
        self.entries()
            .map(|(i, e)| (e.clone(), other.get(i).cloned()))
            .collect()
    }

    /// Combine this container with several others position by position
    ///
    /// Each row starts with this container's element, followed by one entry
    /// per other sequence (`None` where that sequence is shorter).
    pub fn zip_many<O>(&self, others: &[O]) -> Sparray<Vec<Option<T>>>
    where
        O: AsRef<[T]>,
    {
        self.entries()
            .map(|(i, e)| {
                let mut row = Vec::with_capacity(others.len() + 1);
                row.push(Some(e.clone()));
                row.extend(others.iter().map(|o| o.as_ref().get(i).cloned()));
                row
            })
            .collect()
    }

    /// Cartesian product as pairs; this container drives the outer loop
    pub fn cross<U, O>(&self, that: O) -> Sparray<(T, U)>
    where
        U: Element,
        O: AsRef<[U]>,
    {
        self.cross_with(that, |a, b| (a.clone(), b.clone()))
    }

    /// Cartesian product combined with `combine`
    pub fn cross_with<U, V, O, F>(&self, that: O, mut combine: F) -> Sparray<V>
    where
        V: Element,
        O: AsRef<[U]>,
        F: FnMut(&T, &U) -> V,
    {
        let that = that.as_ref();
        let mut out = Vec::with_capacity(self.len() * that.len());
        for a in self.iter() {
            for b in that {
                out.push(combine(a, b));
            }
        }
        Sparray::new(out)
    }

    /// One uniformly random element, `None` when empty
    pub fn sample(&self) -> Option<&T> {
        self.sample_with(&mut rand::thread_rng())
    }

    /// One uniformly random element drawn from `rng`
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.as_slice().get(rng.gen_range(0..self.len()))
    }

    /// Draw `size` uniformly random elements
    ///
    /// Without replacement every draw removes the chosen element from the
    /// pool, so the result never repeats a position and `size` may not exceed
    /// the length. With replacement draws are independent.
    pub fn sample_n(&self, size: usize, with_replacement: bool) -> Result<Self> {
        self.sample_n_with(&mut rand::thread_rng(), size, with_replacement)
    }

    /// Like [`sample_n`](Self::sample_n), drawing from `rng`
    pub fn sample_n_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        size: usize,
        with_replacement: bool,
    ) -> Result<Self> {
        let len = self.len();
        if with_replacement {
            if len == 0 && size > 0 {
                return Err(SparrayError::oversample(size, len));
            }
            let data = self.as_slice();
            return Ok(Self::new(
                (0..size).map(|_| data[rng.gen_range(0..len)].clone()).collect(),
            ));
        }

        if size > len {
            return Err(SparrayError::oversample(size, len));
        }
        let mut pool = self.to_vec();
        let mut picked = Vec::with_capacity(size);
        for _ in 0..size {
            let i = rng.gen_range(0..pool.len());
            picked.push(pool.remove(i));
        }
        Ok(Self::new(picked))
    }
}
