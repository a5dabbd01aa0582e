// fixed-array - fixed-array
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Cursors over a [`FixedArray`].
//!
//! [`Iter`] and [`IterMut`] walk the storage in index order. Reverse cursors
//! are [`core::iter::Rev`] adapters over the forward ones, so `next()` on a
//! reverse cursor starts at the last element. Every cursor is fresh per
//! call: asking the array again yields a new cursor at the same position.

use core::iter::{FusedIterator, Rev};
use core::{array, slice};

use crate::array::FixedArray;

/// Read-only forward cursor
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

/// Mutable forward cursor
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

/// By-value cursor consuming the array
#[derive(Debug, Clone)]
pub struct IntoIter<T, const N: usize> {
    inner: array::IntoIter<T, N>,
}

/// Read-only reverse cursor
pub type RevIter<'a, T> = Rev<Iter<'a, T>>;

/// Mutable reverse cursor
pub type RevIterMut<'a, T> = Rev<IterMut<'a, T>>;

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }

    /// Remaining elements as a slice
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(elements: &'a mut [T]) -> Self {
        Self {
            inner: elements.iter_mut(),
        }
    }

    /// Remaining elements as a read-only slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T, const N: usize> IntoIter<T, N> {
    #[inline]
    pub(crate) fn new(elements: [T; N]) -> Self {
        Self {
            inner: elements.into_iter(),
        }
    }

    /// Elements not yet yielded
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

macro_rules! forward_iterator {
    ($name:ty, $item:ty, [$($generics:tt)*]) => {
        impl<$($generics)*> Iterator for $name {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }

            #[inline]
            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.inner.nth(n)
            }

            #[inline]
            fn count(self) -> usize {
                self.inner.count()
            }

            #[inline]
            fn last(self) -> Option<Self::Item> {
                self.inner.last()
            }
        }

        impl<$($generics)*> DoubleEndedIterator for $name {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<$($generics)*> ExactSizeIterator for $name {
            #[inline]
            fn len(&self) -> usize {
                self.inner.len()
            }
        }

        impl<$($generics)*> FusedIterator for $name {}
    };
}

forward_iterator!(Iter<'a, T>, &'a T, ['a, T]);
forward_iterator!(IterMut<'a, T>, &'a mut T, ['a, T]);
forward_iterator!(IntoIter<T, N>, T, [T, const N: usize]);

impl<T, const N: usize> FixedArray<T, N> {
    /// Forward read-only cursor (`begin`/`end`, `cbegin`/`cend`)
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.0)
    }

    /// Forward mutable cursor
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.0)
    }

    /// Reverse read-only cursor (`rbegin`/`rend`, `crbegin`/`crend`)
    ///
    /// ```
    /// use fixed_array::fixed_array;
    ///
    /// let a = fixed_array![1, 2, 3];
    /// let mut rev = a.iter_rev();
    /// assert_eq!(rev.next(), Some(&3));
    /// assert_eq!(rev.next(), Some(&2));
    /// assert_eq!(rev.next(), Some(&1));
    /// assert_eq!(rev.next(), None);
    /// ```
    #[inline]
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        self.iter().rev()
    }

    /// Reverse mutable cursor
    #[inline]
    pub fn iter_rev_mut(&mut self) -> RevIterMut<'_, T> {
        self.iter_mut().rev()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type IntoIter = IntoIter<T, N>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}
