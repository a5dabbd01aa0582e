// fixed-array - fixed-array-error
// Module: Error Kinds
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Typed error payloads.
//!
//! Kinds keep the dynamic context (the offending index, the lengths involved)
//! that the `Copy` [`Error`](crate::Error) value cannot hold. Each kind
//! converts into `Error` through `From`.

use core::fmt::{self, Display};

use crate::{codes, ErrorCategory};

/// Common surface of every error kind.
pub trait ErrorKind: fmt::Debug + Display {
    /// The code this kind maps to
    const CODE: u16;
    /// The category this kind maps to
    const CATEGORY: ErrorCategory;
}

/// Checked access with `index >= len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// Requested index
    pub index: usize,
    /// Array length
    pub len:   usize,
}

impl Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index out of range: the len is {} but the index is {}",
            self.len, self.index
        )
    }
}

impl ErrorKind for OutOfRangeError {
    const CATEGORY: ErrorCategory = ErrorCategory::Memory;
    const CODE: u16 = codes::INDEX_OUT_OF_RANGE;
}

/// Conversion source whose length differs from the array length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatchError {
    /// Length the array requires
    pub expected: usize,
    /// Length that was supplied
    pub actual:   usize,
}

impl Display for LengthMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length mismatch: expected {} elements, got {}",
            self.expected, self.actual
        )
    }
}

impl ErrorKind for LengthMismatchError {
    const CATEGORY: ErrorCategory = ErrorCategory::Capacity;
    const CODE: u16 = codes::LENGTH_MISMATCH;
}

/// Creates an out-of-range kind
#[must_use]
pub const fn out_of_range_error(index: usize, len: usize) -> OutOfRangeError {
    OutOfRangeError { index, len }
}

/// Creates a length mismatch kind
#[must_use]
pub const fn length_mismatch_error(expected: usize, actual: usize) -> LengthMismatchError {
    LengthMismatchError { expected, actual }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let kind = out_of_range_error(3, 3);
        assert_eq!(
            format!("{kind}"),
            "index out of range: the len is 3 but the index is 3"
        );
    }

    #[test]
    fn test_kind_constants_match_codes() {
        assert_eq!(OutOfRangeError::CODE, codes::INDEX_OUT_OF_RANGE);
        assert_eq!(LengthMismatchError::CATEGORY, ErrorCategory::Capacity);
        assert_eq!(LengthMismatchError::CODE, codes::LENGTH_MISMATCH);
    }
}
