// fixed-array - fixed-array-error
// Module: Error Types
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error type and categories shared by every fixed-array operation.
//!
//! Errors are plain `Copy` values carrying a category, a numeric code and a
//! static message, so they can be built inside `const fn` and returned from
//! `no_std` code without allocation.

use core::fmt;

use crate::{
    codes,
    kinds,
    FromError,
    ToErrorCategory,
};

/// `Error` categories for fixed-array operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Element access errors (checked indexing)
    Memory   = 1,
    /// Length and capacity errors
    Capacity = 2,
    /// Unknown errors
    Unknown  = 9,
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// fixed-array `Error` type
///
/// It provides categorized errors with error codes and static messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Checked access past the end of the array
    pub const INDEX_OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Memory,
        codes::INDEX_OUT_OF_RANGE,
        "FixedArray::at: index out of range",
    );
    /// Slice length does not match the array length
    pub const LENGTH_MISMATCH: Self = Self::new(
        ErrorCategory::Capacity,
        codes::LENGTH_MISMATCH,
        "FixedArray: source length does not match array length",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an index out of range error
    #[must_use]
    pub const fn index_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::INDEX_OUT_OF_RANGE, message)
    }

    /// Create a length mismatch error
    #[must_use]
    pub const fn length_mismatch(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::LENGTH_MISMATCH, message)
    }

    /// Create an unknown error
    #[must_use]
    pub const fn unknown(message: &'static str) -> Self {
        Self::new(ErrorCategory::Unknown, codes::UNKNOWN, message)
    }

    /// Check if this is a memory (access) error
    #[must_use]
    pub fn is_memory_error(&self) -> bool {
        self.category == ErrorCategory::Memory
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is the out-of-range error raised by checked access
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.code == codes::INDEX_OUT_OF_RANGE
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

// -- From<kinds::X> for Error implementations --
impl From<kinds::OutOfRangeError> for Error {
    fn from(_e: kinds::OutOfRangeError) -> Self {
        Self::INDEX_OUT_OF_RANGE
    }
}

impl From<kinds::LengthMismatchError> for Error {
    fn from(_e: kinds::LengthMismatchError) -> Self {
        Self::LENGTH_MISMATCH
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

impl FromError<Self> for Error {
    fn from_error(error: Self) -> Self {
        error
    }
}

// -- FromError<kinds::X> for Error implementations --
impl FromError<kinds::OutOfRangeError> for Error {
    fn from_error(error: kinds::OutOfRangeError) -> Self {
        Self::from(error)
    }
}

impl FromError<kinds::LengthMismatchError> for Error {
    fn from_error(error: kinds::LengthMismatchError) -> Self {
        Self::from(error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_category_code_and_message() {
        let error = Error::INDEX_OUT_OF_RANGE;
        let rendered = format!("{error}");
        assert!(rendered.starts_with("[Memory][E03E8]"));
        assert!(rendered.ends_with("index out of range"));
    }

    #[test]
    fn test_category_predicates() {
        assert!(Error::INDEX_OUT_OF_RANGE.is_memory_error());
        assert!(Error::INDEX_OUT_OF_RANGE.is_out_of_range());
        assert!(Error::LENGTH_MISMATCH.is_capacity_error());
        assert!(!Error::LENGTH_MISMATCH.is_out_of_range());
        assert!(!Error::unknown("u").is_memory_error());
        assert!(!Error::unknown("u").is_capacity_error());
    }

    #[test]
    fn test_const_construction() {
        const ERR: Error = Error::index_out_of_range("const");
        assert_eq!(ERR.code, codes::INDEX_OUT_OF_RANGE);
        assert_eq!(ERR.message, "const");
    }
}
