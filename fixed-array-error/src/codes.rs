// fixed-array - fixed-array-error
// Module: Error Codes
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for fixed-array

// Access error codes (1000-1999)
/// Checked access with an index not less than the array length
pub const INDEX_OUT_OF_RANGE: u16 = 1000;

// Capacity error codes (2000-2999)
/// Source length differs from the fixed array length
pub const LENGTH_MISMATCH: u16 = 2000;

/// Unknown error
pub const UNKNOWN: u16 = 9999;

/// Returns a short static description for a known code.
#[must_use]
pub const fn describe(code: u16) -> &'static str {
    match code {
        INDEX_OUT_OF_RANGE => "index out of range",
        LENGTH_MISMATCH => "length mismatch",
        _ => "unknown error",
    }
}
