// fixed-array - fixed-array
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-size array container with inline storage.
//!
//! `FixedArray<T, N>` holds exactly `N` elements of type `T` in place, with
//! `N` fixed at compile time. It offers the familiar fixed-array surface:
//! aggregate construction, forward and reverse cursors, unchecked and checked
//! element access, lexicographic comparison, element-wise swap, and
//! tuple-like access to an element at a compile-time index.
//!
//! The crate supports two configurations:
//! - `std`: Full standard library support
//! - without `std`: pure `no_std`, no allocation (default)
//!
//! # Feature Flags
//!
//! - `std`: Enables `std::error::Error` on [`Error`]
//! - `tracing`: Emits trace spans for bulk mutations
//! - `kani`: Formal verification harnesses
//!
//! # Example
//!
//! ```
//! use fixed_array::{fixed_array, FixedArray};
//!
//! let mut a = fixed_array![1, 2, 3];
//! assert_eq!(a.size(), 3);
//! assert_eq!(*a.get::<1>(), 2);
//! assert!(a.at(3).is_err());
//!
//! a.fill(7);
//! assert!(a.iter().all(|&x| x == 7));
//!
//! let reversed: Vec<_> = fixed_array![1, 2, 3].iter_rev().copied().collect();
//! assert_eq!(reversed, [3, 2, 1]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

// Re-export error related types for convenience
pub use fixed_array_error::{codes, kinds, Error, ErrorCategory};

/// Result type alias for fixed-array operations using `fixed_array_error::Error`
pub type ArrayResult<T> = core::result::Result<T, Error>;

/// The container itself: construction, access, fill, swap, conversions
pub mod array;
/// Compile-time bounds validators backing index and non-empty checks
pub mod compile_time_bounds;
/// Forward, reverse, and by-value cursors
pub mod iter;
/// Tuple-like protocol: compile-time length and element access by index
pub mod tuple;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use array::{swap, FixedArray};
pub use compile_time_bounds::{IndexBound, NonEmpty};
pub use iter::{IntoIter, Iter, IterMut, RevIter, RevIterMut};
pub use tuple::{const_len_of_val, get, get_mut, get_owned, ConstLen, TupleElement};
