// fixed-array - fixed-array-error
// Module: Error Helpers
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common error patterns.

use crate::{codes, Error, ErrorCategory};

// Re-export error kind creation functions
pub use crate::kinds::{length_mismatch_error, out_of_range_error};

/// Create a checked-access error
#[must_use]
pub const fn index_out_of_range_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Memory, codes::INDEX_OUT_OF_RANGE, message)
}

/// Create a conversion length error
#[must_use]
pub const fn length_mismatch(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::LENGTH_MISMATCH, message)
}

/// Bounds check used by checked accessors.
///
/// Returns `Ok(index)` when `index < len`.
pub const fn check_index(index: usize, len: usize) -> crate::Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::INDEX_OUT_OF_RANGE)
    }
}

/// Length check used by slice conversions.
pub const fn check_len(expected: usize, actual: usize) -> crate::Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LENGTH_MISMATCH)
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_check_index_total() {
        let index: usize = kani::any();
        let len: usize = kani::any();

        match check_index(index, len) {
            Ok(checked) => assert!(checked == index && index < len),
            Err(error) => assert!(index >= len && error.is_out_of_range()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_boundaries() {
        assert_eq!(check_index(0, 1), Ok(0));
        assert_eq!(check_index(1, 1), Err(Error::INDEX_OUT_OF_RANGE));
        assert!(check_index(0, 0).is_err());
    }

    #[test]
    fn test_check_len() {
        assert!(check_len(3, 3).is_ok());
        assert_eq!(check_len(3, 2), Err(Error::LENGTH_MISMATCH));
    }

    #[test]
    fn test_custom_message_helpers() {
        let error = index_out_of_range_error("slot lookup failed");
        assert!(error.is_out_of_range());
        assert_eq!(error.message, "slot lookup failed");

        let error = length_mismatch("frame too short");
        assert!(error.is_capacity_error());
        assert_eq!(error.code, codes::LENGTH_MISMATCH);
    }
}
