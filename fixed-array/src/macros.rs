// fixed-array - fixed-array
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Construction macros.

/// Aggregate-initialize a [`FixedArray`](crate::FixedArray).
///
/// Mirrors array literal syntax: a list of elements, or a single value
/// repeated `N` times.
///
/// # Examples
///
/// ```rust
/// use fixed_array::{fixed_array, FixedArray};
///
/// let listed = fixed_array![1, 2, 3];
/// assert_eq!(listed.size(), 3);
///
/// let repeated: FixedArray<u8, 4> = fixed_array![0; 4];
/// assert!(repeated.iter().all(|&b| b == 0));
///
/// let empty: FixedArray<u8, 0> = fixed_array![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fixed_array {
    () => {
        $crate::FixedArray::new([])
    };
    ($value:expr; $len:expr) => {
        $crate::FixedArray::new([$value; $len])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::FixedArray::new([$($element),+])
    };
}
