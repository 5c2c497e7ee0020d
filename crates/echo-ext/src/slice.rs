// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Slice extensions: borrowed aggregation, splitting and range filling.

use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

use crate::error::{ExtError, Result};
use crate::iter::IterExt;

/// Extension methods for `[T]`.
///
/// The `min_max*` methods share their tie rules with [`IterExt`] but borrow
/// instead of cloning elements.
///
/// ```
/// use echo_ext::slice::SliceExt;
///
/// let words: Vec<_> = b"Hello World ".split_on(&b' ').collect();
/// assert_eq!(words, [&b"Hello"[..], &b"World"[..]]);
///
/// let mut buf = [7_u8; 6];
/// buf.clear_range(2..4).unwrap();
/// assert_eq!(buf, [7, 7, 0, 0, 7, 7]);
/// ```
pub trait SliceExt<T> {
    /// References to the smallest and largest element.
    fn min_max(&self) -> Result<(&T, &T)>
    where
        T: Ord;

    /// References to the smallest and largest element under `compare`.
    fn min_max_by<F>(&self, compare: F) -> Result<(&T, &T)>
    where
        F: FnMut(&T, &T) -> Ordering;

    /// References to the elements with the smallest and largest key.
    fn min_max_by_key<K, F>(&self, key: F) -> Result<(&T, &T)>
    where
        K: Ord,
        F: FnMut(&T) -> K;

    /// Number of elements equal to `value`.
    fn count_of(&self, value: &T) -> usize
    where
        T: PartialEq;

    /// Sub-slices separated by `delimiter`.
    ///
    /// A trailing delimiter does not produce a trailing empty piece and an
    /// empty slice produces nothing. Adjacent delimiters produce empty pieces.
    fn split_on<'a>(&'a self, delimiter: &'a T) -> SplitOn<'a, T>
    where
        T: PartialEq;

    /// Sub-slices separated by every occurrence of the `delimiter` sequence.
    ///
    /// Same rules as [`SliceExt::split_on`]. An empty `delimiter` never
    /// matches, so a non-empty slice comes back as one piece.
    ///
    /// ```
    /// use echo_ext::slice::SliceExt;
    ///
    /// let parts: Vec<_> = b"a, b, c, ".split_on_seq(b", ").collect();
    /// assert_eq!(parts, [&b"a"[..], &b"b"[..], &b"c"[..]]);
    /// ```
    fn split_on_seq<'a>(&'a self, delimiter: &'a [T]) -> SplitOnSeq<'a, T>
    where
        T: PartialEq;

    /// Resets every element in `range` to `T::default()`.
    fn clear_range<R>(&mut self, range: R) -> Result<()>
    where
        T: Default,
        R: RangeBounds<usize>;

    /// Sets every element in `range` to a clone of `value`.
    fn fill_range<R>(&mut self, range: R, value: T) -> Result<()>
    where
        T: Clone,
        R: RangeBounds<usize>;
}

fn resolve_range<R: RangeBounds<usize>>(range: &R, len: usize) -> Result<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if start > end || end > len {
        return Err(ExtError::OutOfRange { start, end, len });
    }
    Ok((start, end))
}

impl<T> SliceExt<T> for [T] {
    fn min_max(&self) -> Result<(&T, &T)>
    where
        T: Ord,
    {
        self.iter().min_max()
    }

    fn min_max_by<F>(&self, mut compare: F) -> Result<(&T, &T)>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter().min_max_by(|a, b| compare(a, b))
    }

    fn min_max_by_key<K, F>(&self, mut key: F) -> Result<(&T, &T)>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.iter().min_max_by_key(|item| key(item))
    }

    fn count_of(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|item| *item == value).count()
    }

    fn split_on<'a>(&'a self, delimiter: &'a T) -> SplitOn<'a, T>
    where
        T: PartialEq,
    {
        SplitOn {
            rest: self,
            delimiter,
        }
    }

    fn split_on_seq<'a>(&'a self, delimiter: &'a [T]) -> SplitOnSeq<'a, T>
    where
        T: PartialEq,
    {
        SplitOnSeq {
            rest: self,
            delimiter,
        }
    }

    fn clear_range<R>(&mut self, range: R) -> Result<()>
    where
        T: Default,
        R: RangeBounds<usize>,
    {
        let (start, end) = resolve_range(&range, self.len())?;
        self[start..end].iter_mut().for_each(|slot| *slot = T::default());
        Ok(())
    }

    fn fill_range<R>(&mut self, range: R, value: T) -> Result<()>
    where
        T: Clone,
        R: RangeBounds<usize>,
    {
        let (start, end) = resolve_range(&range, self.len())?;
        self[start..end].fill(value);
        Ok(())
    }
}

/// Iterator returned by [`SliceExt::split_on`].
#[derive(Debug)]
pub struct SplitOn<'a, T> {
    rest: &'a [T],
    delimiter: &'a T,
}

impl<T> Clone for SplitOn<'_, T> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest,
            delimiter: self.delimiter,
        }
    }
}

impl<'a, T: PartialEq> Iterator for SplitOn<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.iter().position(|item| item == self.delimiter) {
            Some(idx) => {
                let (head, tail) = self.rest.split_at(idx);
                self.rest = tail.get(1..).unwrap_or_default();
                Some(head)
            }
            None => {
                let head = self.rest;
                self.rest = &[];
                Some(head)
            }
        }
    }
}

impl<T: PartialEq> FusedIterator for SplitOn<'_, T> {}

/// Iterator returned by [`SliceExt::split_on_seq`].
#[derive(Debug)]
pub struct SplitOnSeq<'a, T> {
    rest: &'a [T],
    delimiter: &'a [T],
}

impl<T> Clone for SplitOnSeq<'_, T> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest,
            delimiter: self.delimiter,
        }
    }
}

impl<'a, T: PartialEq> Iterator for SplitOnSeq<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let width = self.delimiter.len();
        let found = if width == 0 {
            None
        } else {
            self.rest
                .windows(width)
                .position(|window| window == self.delimiter)
        };
        match found {
            Some(idx) => {
                let (head, tail) = self.rest.split_at(idx);
                self.rest = tail.get(width..).unwrap_or_default();
                Some(head)
            }
            None => {
                let head = self.rest;
                self.rest = &[];
                Some(head)
            }
        }
    }
}

impl<T: PartialEq> FusedIterator for SplitOnSeq<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_range_past_end_is_rejected() {
        assert!(matches!(
            resolve_range(&(0..=4), 4),
            Err(ExtError::OutOfRange { start: 0, end: 5, len: 4 })
        ));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let (start, end) = (3, 1);
        assert!(resolve_range(&(start..end), 4).is_err());
    }
}
