// fixed-array - fixed-array
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Compile-time bounds validation.
//!
//! Validators are zero-sized types parameterized by const generics. Their
//! `VALID` associated constant holds an assertion that is evaluated when a
//! generic function naming it is monomorphized, so a violated bound is a
//! compile error rather than a runtime failure.
//!
//! ```
//! use fixed_array::{fixed_array, IndexBound};
//!
//! let () = IndexBound::<2, 3>::VALID;
//! let a = fixed_array![10, 20, 30];
//! assert_eq!(*a.get::<2>(), 30);
//! ```
//!
//! Naming an index equal to the length does not compile:
//!
//! ```compile_fail
//! use fixed_array::{fixed_array, FixedArray};
//!
//! let a: FixedArray<u32, 3> = fixed_array![10, 20, 30];
//! let _ = a.get::<3>();
//! ```

/// Compile-time check that `I < N`.
pub struct IndexBound<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> IndexBound<I, N> {
    /// Evaluates to `()` when the bound holds; fails compilation otherwise
    pub const VALID: () = assert!(I < N, "FixedArray element index out of bounds");

    /// Validate the bound in const context
    #[must_use]
    pub const fn validate() -> Self {
        assert!(I < N, "FixedArray element index out of bounds");
        Self
    }

    /// The validated index
    #[must_use]
    pub const fn index() -> usize {
        I
    }
}

/// Compile-time check that `N > 0`.
///
/// Backs `front()` and `back()`, which have no element to return on a
/// zero-length array.
///
/// ```compile_fail
/// use fixed_array::FixedArray;
///
/// let empty: FixedArray<u8, 0> = FixedArray::new([]);
/// let _ = empty.front();
/// ```
pub struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    /// Evaluates to `()` when `N > 0`; fails compilation otherwise
    pub const VALID: () = assert!(N > 0, "FixedArray front/back on a zero-length array");

    /// Validate the bound in const context
    #[must_use]
    pub const fn validate() -> Self {
        assert!(N > 0, "FixedArray front/back on a zero-length array");
        Self
    }
}

/// Compile-time index validator macro
///
/// # Usage
///
/// ```rust
/// fixed_array::validate_index!(1, 3);
/// ```
///
/// ```compile_fail
/// fixed_array::validate_index!(3, 3);
/// ```
#[macro_export]
macro_rules! validate_index {
    ($index:expr, $len:expr) => {
        const _: $crate::compile_time_bounds::IndexBound<{ $index }, { $len }> =
            $crate::compile_time_bounds::IndexBound::<{ $index }, { $len }>::validate();
    };
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bound_reports_index() {
        let () = IndexBound::<4, 5>::VALID;
        assert_eq!(IndexBound::<4, 5>::index(), 4);
    }

    #[test]
    fn test_non_empty_valid() {
        let () = NonEmpty::<3>::VALID;
    }
}
