// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-pass aggregation and lazy adaptors for any [`IntoIterator`].
//!
//! The `min_max*` family walks the source once and keeps the first
//! occurrence of both the minimum and the maximum when several elements tie.

use core::cmp::Ordering;
use core::iter::{Chain, FusedIterator, Once};

use crate::error::{ExtError, Result};

/// Extension methods for every [`IntoIterator`].
///
/// ```
/// use echo_ext::iter::IterExt;
///
/// assert_eq!((1..=10).min_max().ok(), Some((1, 10)));
/// assert_eq!((1..=10).min_max_by(|a, b| b.cmp(a)).ok(), Some((10, 1)));
/// assert!(Vec::<i32>::new().min_max().is_err());
/// ```
pub trait IterExt: IntoIterator + Sized {
    /// Smallest and largest element.
    fn min_max(self) -> Result<(Self::Item, Self::Item)>
    where
        Self::Item: Ord + Clone,
    {
        self.min_max_by(Ord::cmp)
    }

    /// Smallest and largest element under `compare`.
    fn min_max_by<F>(self, mut compare: F) -> Result<(Self::Item, Self::Item)>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut iter = self.into_iter();
        let first = iter.next().ok_or(ExtError::EmptySequence)?;
        let mut min = first.clone();
        let mut max = first;
        for item in iter {
            if compare(&item, &min) == Ordering::Less {
                min = item;
            } else if compare(&item, &max) == Ordering::Greater {
                max = item;
            }
        }
        Ok((min, max))
    }

    /// Smallest and largest value produced by `selector`.
    fn min_max_map<K, F>(self, selector: F) -> Result<(K, K)>
    where
        K: Ord + Clone,
        F: FnMut(Self::Item) -> K,
    {
        self.into_iter().map(selector).min_max()
    }

    /// Smallest and largest value produced by `selector`, under `compare`.
    fn min_max_map_by<K, F, C>(self, selector: F, compare: C) -> Result<(K, K)>
    where
        K: Clone,
        F: FnMut(Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        self.into_iter().map(selector).min_max_by(compare)
    }

    /// Elements with the smallest and largest key.
    fn min_max_by_key<K, F>(self, key: F) -> Result<(Self::Item, Self::Item)>
    where
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.min_max_by_key_with(key, Ord::cmp)
    }

    /// Elements with the smallest and largest key, keys compared by
    /// `compare`.
    fn min_max_by_key_with<K, F, C>(
        self,
        mut key: F,
        mut compare: C,
    ) -> Result<(Self::Item, Self::Item)>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        let mut iter = self.into_iter();
        let first = iter.next().ok_or(ExtError::EmptySequence)?;
        let mut min_key = key(&first);
        let mut max_key = key(&first);
        let mut min = first.clone();
        let mut max = first;
        for item in iter {
            let k = key(&item);
            if compare(&k, &min_key) == Ordering::Less {
                min = item;
                min_key = k;
            } else if compare(&k, &max_key) == Ordering::Greater {
                max = item;
                max_key = k;
            }
        }
        Ok((min, max))
    }

    /// Lazily drops every element equal to `item`.
    fn except(self, item: Self::Item) -> Except<Self::IntoIter, Self::Item>
    where
        Self::Item: PartialEq,
    {
        Except {
            iter: self.into_iter(),
            item,
        }
    }

    /// Lazily appends `item` after the last element.
    fn concat_one(self, item: Self::Item) -> Chain<Self::IntoIter, Once<Self::Item>> {
        self.into_iter().chain(core::iter::once(item))
    }
}

impl<I: IntoIterator> IterExt for I {}

/// Iterator returned by [`IterExt::except`].
#[derive(Debug, Clone)]
pub struct Except<I, T> {
    iter: I,
    item: T,
}

impl<I> Iterator for Except<I, I::Item>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = &self.item;
        self.iter.find(|candidate| candidate != item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I> FusedIterator for Except<I, I::Item>
where
    I: FusedIterator,
    I::Item: PartialEq,
{
}
