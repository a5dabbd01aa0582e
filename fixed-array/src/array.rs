// fixed-array - fixed-array
// Module: FixedArray - Inline-storage fixed-size array
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-size array with inline storage and compile-time length.
//!
//! `FixedArray<T, N>` holds exactly `N` elements in a contiguous `[T; N]`.
//! No heap allocation, no indirection, no runtime length field.
//!
//! # Characteristics
//!
//! - **Aggregate**: the storage is the public tuple field; construction,
//!   clone, copy and drop are member-wise
//! - **Const-time length**: `size()`, `max_size()`, `is_empty()` are `const fn`
//!   and always report `N`
//! - **Checked and unchecked access**: `at()` returns an error past the end,
//!   `Index` panics on a violated precondition
//! - **Zero-length**: `N == 0` is a true zero-sized array

use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;

use fixed_array_error::{kinds, Error, Result};

use crate::compile_time_bounds::NonEmpty;

/// A fixed-size sequence of `N` elements of type `T` stored in place.
///
/// # Invariants
///
/// 1. The length is `N` for the lifetime of the value
/// 2. Elements are contiguous, in index order
/// 3. The array exclusively owns its elements
///
/// # Examples
///
/// ```
/// use fixed_array::FixedArray;
///
/// let mut a = FixedArray([3, 1, 2]);
/// assert_eq!(a[0], 3);
/// assert_eq!(*a.at(2)?, 2);
/// assert!(a.at(3).is_err());
///
/// a.fill(0);
/// assert_eq!(a, [0, 0, 0]);
/// # Ok::<(), fixed_array::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedArray<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> FixedArray<T, N> {
    /// The compile-time length
    pub const LEN: usize = N;

    /// Wraps an array literal.
    #[inline]
    #[must_use]
    pub const fn new(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// Builds each element from its index, in index order.
    ///
    /// ```
    /// use fixed_array::FixedArray;
    ///
    /// let squares: FixedArray<usize, 4> = FixedArray::from_fn(|i| i * i);
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(core::array::from_fn(f))
    }

    /// Unwraps into the underlying array, for `let [a, b, c] = ...` destructuring.
    #[inline]
    #[must_use]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Number of elements. Always `N`.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        N
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Largest number of elements the array can hold. Always `N`.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// `true` iff `N == 0`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Checked access.
    ///
    /// Usable in const context; the array is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::INDEX_OUT_OF_RANGE`] when `index >= N`.
    ///
    /// ```
    /// use fixed_array::FixedArray;
    ///
    /// const A: FixedArray<u8, 2> = FixedArray::new([4, 5]);
    /// const SECOND: u8 = match A.at(1) {
    ///     Ok(value) => *value,
    ///     Err(_) => 0,
    /// };
    /// assert_eq!(SECOND, 5);
    /// assert!(A.at(2).is_err());
    /// ```
    #[inline]
    pub const fn at(&self, index: usize) -> Result<&T> {
        match fixed_array_error::check_index(index, N) {
            Ok(index) => Ok(&self.0[index]),
            Err(error) => Err(error),
        }
    }

    /// Checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::INDEX_OUT_OF_RANGE`] when `index >= N`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.0.get_mut(index).ok_or(Error::INDEX_OUT_OF_RANGE)
    }

    /// Checked access reporting the offending index and length.
    ///
    /// # Errors
    ///
    /// Returns the [`kinds::OutOfRangeError`] payload when `index >= N`.
    #[inline]
    pub fn try_at(&self, index: usize) -> core::result::Result<&T, kinds::OutOfRangeError> {
        self.0.get(index).ok_or(kinds::out_of_range_error(index, N))
    }

    /// First element.
    ///
    /// `N == 0` is rejected at compile time.
    #[inline]
    #[must_use]
    pub const fn front(&self) -> &T {
        let () = NonEmpty::<N>::VALID;
        &self.0[0]
    }

    /// First element, mutable.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        let () = NonEmpty::<N>::VALID;
        &mut self.0[0]
    }

    /// Last element.
    ///
    /// `N == 0` is rejected at compile time.
    #[inline]
    #[must_use]
    pub const fn back(&self) -> &T {
        let () = NonEmpty::<N>::VALID;
        &self.0[N - 1]
    }

    /// Last element, mutable.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        let () = NonEmpty::<N>::VALID;
        &mut self.0[N - 1]
    }

    /// First element, or `None` when `N == 0`.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> Option<&T> {
        self.0.first()
    }

    /// Last element, or `None` when `N == 0`.
    #[inline]
    #[must_use]
    pub const fn last(&self) -> Option<&T> {
        self.0.last()
    }

    /// Pointer to the first element, valid for `N` reads.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    /// Mutable pointer to the first element, valid for `N` writes.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }

    /// The storage as a slice of length `N`.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// The storage as a mutable slice of length `N`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// The storage as an array reference.
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Exchanges contents element-wise with `other`.
    ///
    /// Applying it twice restores both arrays.
    ///
    /// ```
    /// use fixed_array::fixed_array;
    ///
    /// let mut a = fixed_array![1, 2];
    /// let mut b = fixed_array![3, 4];
    /// a.swap(&mut b);
    /// assert_eq!((a, b), (fixed_array![3, 4], fixed_array![1, 2]));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ArrayTrace::swap(N).entered();

        self.0.swap_with_slice(&mut other.0);
    }

    /// Applies `f` to each element, in index order.
    pub fn map<U, F>(self, f: F) -> FixedArray<U, N>
    where
        F: FnMut(T) -> U,
    {
        FixedArray(self.0.map(f))
    }

    /// Clones a slice of exactly `N` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LENGTH_MISMATCH`] when `source.len() != N`.
    pub fn try_from_slice(source: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        fixed_array_error::check_len(N, source.len())?;
        Ok(Self::from_fn(|i| source[i].clone()))
    }
}

impl<T: Clone, const N: usize> FixedArray<T, N> {
    /// Assigns a clone of `value` to every element, in index order.
    ///
    /// ```
    /// use fixed_array::FixedArray;
    ///
    /// let mut a = FixedArray([1, 2, 3]);
    /// a.fill(9);
    /// assert_eq!(a, [9, 9, 9]);
    /// ```
    #[inline]
    pub fn fill(&mut self, value: T) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ArrayTrace::fill(N).entered();

        self.0.fill(value);
    }
}

/// Exchanges the contents of two arrays of the same type and length.
///
/// Free-function form of [`FixedArray::swap`].
///
/// ```
/// use fixed_array::{fixed_array, swap};
///
/// let mut a = fixed_array!["x", "y"];
/// let mut b = fixed_array!["p", "q"];
/// swap(&mut a, &mut b);
/// assert_eq!(a, ["p", "q"]);
/// assert_eq!(b, ["x", "y"]);
/// ```
#[inline]
pub fn swap<T, const N: usize>(a: &mut FixedArray<T, N>, b: &mut FixedArray<T, N>) {
    a.swap(b);
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

// Unchecked access: panics when the index is out of range
impl<T, I, const N: usize> Index<I> for FixedArray<T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I, const N: usize> IndexMut<I> for FixedArray<T, N>
where
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.0[..] == other[..]
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.0[..] == *other
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self(elements)
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    #[inline]
    fn from(array: FixedArray<T, N>) -> Self {
        array.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = Error;

    fn try_from(source: &[T]) -> Result<Self> {
        fixed_array_error::check_len(N, source.len())?;
        Ok(Self::from_fn(|i| source[i]))
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    #[inline]
    fn borrow(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_checked_access_bounds() {
        let array: FixedArray<u8, 4> = FixedArray(kani::any());
        let index: usize = kani::any();

        match array.at(index) {
            Ok(value) => {
                assert!(index < 4);
                assert!(*value == array[index]);
            }
            Err(error) => {
                assert!(index >= 4);
                assert!(error.is_out_of_range());
            }
        }
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_swap_involution() {
        let original_a: FixedArray<u16, 3> = FixedArray(kani::any());
        let original_b: FixedArray<u16, 3> = FixedArray(kani::any());
        let mut a = original_a;
        let mut b = original_b;

        a.swap(&mut b);
        assert!(a == original_b && b == original_a);

        a.swap(&mut b);
        assert!(a == original_a && b == original_b);
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_fill_overwrites_all() {
        let mut array: FixedArray<u32, 4> = FixedArray(kani::any());
        let value: u32 = kani::any();

        array.fill(value);
        assert!(array.iter().all(|&x| x == value));
    }
}

// ============================================================================
// Tests
// ============================================================================
