// fixed-array - fixed-array
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tuple-like protocol.
//!
//! [`ConstLen`] exposes the element count as an associated constant and
//! [`TupleElement`] gives access to the element at a compile-time index.
//! Every index is validated by [`IndexBound`] during monomorphization, so an
//! index equal to or past the length is a compile error.
//!
//! ```compile_fail
//! use fixed_array::{fixed_array, get};
//!
//! let a = fixed_array![10, 20, 30];
//! let _ = get::<3, _>(&a);
//! ```

use crate::array::FixedArray;
use crate::compile_time_bounds::IndexBound;

mod private {
    pub trait Sealed {}
}

/// Element count known at compile time.
pub trait ConstLen: private::Sealed {
    /// Number of elements
    const LEN: usize;
}

impl<T, const N: usize> private::Sealed for FixedArray<T, N> {}
impl<T, const N: usize> ConstLen for FixedArray<T, N> {
    const LEN: usize = N;
}

impl<T, const N: usize> private::Sealed for [T; N] {}
impl<T, const N: usize> ConstLen for [T; N] {
    const LEN: usize = N;
}

/// `ConstLen::LEN` of a value's type
#[inline]
#[must_use]
pub const fn const_len_of_val<A: ConstLen>(_: &A) -> usize {
    A::LEN
}

/// Access to the element at compile-time index `I`.
pub trait TupleElement<const I: usize>: ConstLen {
    /// Type of the element at `I`
    type Output;

    /// Shared reference to the element at `I`
    fn element(&self) -> &Self::Output;

    /// Mutable reference to the element at `I`
    fn element_mut(&mut self) -> &mut Self::Output;

    /// Moves the element at `I` out, dropping the rest
    fn into_element(self) -> Self::Output
    where
        Self: Sized;
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Element at compile-time index `I`.
    ///
    /// ```
    /// use fixed_array::fixed_array;
    ///
    /// let a = fixed_array![10, 20, 30];
    /// assert_eq!(*a.get::<1>(), 20);
    /// ```
    ///
    /// ```compile_fail
    /// use fixed_array::fixed_array;
    ///
    /// let a = fixed_array![10, 20, 30];
    /// let _ = a.get::<3>();
    /// ```
    #[inline]
    #[must_use]
    pub const fn get<const I: usize>(&self) -> &T {
        let () = IndexBound::<I, N>::VALID;
        &self.0[I]
    }

    /// Mutable element at compile-time index `I`.
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut T {
        let () = IndexBound::<I, N>::VALID;
        &mut self.0[I]
    }

    /// Moves the element at compile-time index `I` out of the array.
    ///
    /// ```
    /// use fixed_array::fixed_array;
    ///
    /// let names = fixed_array![String::from("a"), String::from("b")];
    /// assert_eq!(names.into_element::<1>(), "b");
    /// ```
    #[inline]
    pub fn into_element<const I: usize>(self) -> T {
        let () = IndexBound::<I, N>::VALID;
        match self.0.into_iter().nth(I) {
            Some(element) => element,
            // IndexBound holds, so the iterator always yields element I
            None => unreachable!("element index {I} below length {N}"),
        }
    }
}

impl<T, const N: usize, const I: usize> TupleElement<I> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    fn element(&self) -> &T {
        self.get::<I>()
    }

    #[inline]
    fn element_mut(&mut self) -> &mut T {
        self.get_mut::<I>()
    }

    #[inline]
    fn into_element(self) -> T {
        FixedArray::into_element::<I>(self)
    }
}

impl<T, const N: usize, const I: usize> TupleElement<I> for [T; N] {
    type Output = T;

    #[inline]
    fn element(&self) -> &T {
        let () = IndexBound::<I, N>::VALID;
        &self[I]
    }

    #[inline]
    fn element_mut(&mut self) -> &mut T {
        let () = IndexBound::<I, N>::VALID;
        &mut self[I]
    }

    #[inline]
    fn into_element(self) -> T {
        FixedArray(self).into_element::<I>()
    }
}

/// Reference to the element at compile-time index `I` of `tuple`.
///
/// ```
/// use fixed_array::{fixed_array, get};
///
/// let a = fixed_array![10, 20, 30];
/// assert_eq!(*get::<1, _>(&a), 20);
/// ```
#[inline]
pub fn get<const I: usize, A: TupleElement<I>>(tuple: &A) -> &A::Output {
    tuple.element()
}

/// Mutable reference to the element at compile-time index `I` of `tuple`.
#[inline]
pub fn get_mut<const I: usize, A: TupleElement<I>>(tuple: &mut A) -> &mut A::Output {
    tuple.element_mut()
}

/// Moves the element at compile-time index `I` out of `tuple`.
#[inline]
pub fn get_owned<const I: usize, A: TupleElement<I>>(tuple: A) -> A::Output {
    tuple.into_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_array;

    #[test]
    fn test_const_len() {
        let a = fixed_array![1u8, 2, 3, 4];
        assert_eq!(<FixedArray<u8, 4> as ConstLen>::LEN, 4);
        assert_eq!(const_len_of_val(&a), 4);
        assert_eq!(const_len_of_val(&[0u8; 7]), 7);
    }

    #[test]
    fn test_get_variants() {
        let mut a = fixed_array![10, 20, 30];
        assert_eq!(*a.get::<0>(), 10);
        assert_eq!(*get::<2, _>(&a), 30);

        *a.get_mut::<1>() = 21;
        *get_mut::<2, _>(&mut a) += 1;
        assert_eq!(a, [10, 21, 31]);

        assert_eq!(get_owned::<1, _>(a), 21);
    }

    #[test]
    fn test_get_matches_runtime_index() {
        let a = fixed_array!['a', 'b', 'c'];
        assert!(core::ptr::eq(a.get::<2>(), &a[2]));
    }

    #[test]
    fn test_into_element_drops_the_rest() {
        let a = fixed_array![vec![1], vec![2, 2], vec![3, 3, 3]];
        assert_eq!(a.clone().into_element::<0>(), vec![1]);
        assert_eq!(a.clone().into_element::<1>(), vec![2, 2]);
        assert_eq!(a.into_element::<2>(), vec![3, 3, 3]);
    }

    #[test]
    fn test_raw_array_elements() {
        let mut raw = [1, 2, 3];
        *get_mut::<0, _>(&mut raw) = 0;
        assert_eq!(*get::<0, _>(&raw), 0);
        assert_eq!(get_owned::<2, _>(raw), 3);
    }

    #[test]
    fn test_get_in_const_context() {
        const A: FixedArray<u32, 3> = FixedArray::new([10, 20, 30]);
        const MIDDLE: u32 = *A.get::<1>();
        assert_eq!(MIDDLE, 20);
    }
}
