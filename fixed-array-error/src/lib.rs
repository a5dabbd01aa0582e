// fixed-array - fixed-array-error
// Module: Error Handling
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! fixed-array error handling library
//!
//! Errors are organized into categories, each with its own range of codes:
//!
//! ## Access Errors (1000-1999)
//! - Index out of range on checked access
//!
//! ## Capacity Errors (2000-2999)
//! - Length mismatch on slice conversion
//!
//! # Usage
//!
//! ```
//! use fixed_array_error::{codes, kinds, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Memory,
//!     codes::INDEX_OUT_OF_RANGE,
//!     "index 7 out of range",
//! );
//! assert!(error.is_out_of_range());
//!
//! let from_kind: Error = kinds::out_of_range_error(7, 3).into();
//! assert_eq!(from_kind.code, codes::INDEX_OUT_OF_RANGE);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for fixed-array
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod helpers;
pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for fixed-array operations.
pub type Result<T> = core::result::Result<T, Error>;

pub use kinds::{ErrorKind, LengthMismatchError, OutOfRangeError};

/// Error conversion trait for converting between error types
pub trait FromError<E> {
    /// Convert from the source error type to the target error type
    fn from_error(error: E) -> Self;
}

/// Error conversion trait for converting to specific error categories
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}

pub use helpers::*;
