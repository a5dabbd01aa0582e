// fixed-array - fixed-array
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for fixed-array
//!
//! Structured spans for bulk mutations, usable in both std and `no_std`
//! builds. Checked-access failures are returned to the caller and never
//! traced here.

pub use ::tracing::{trace_span, Span};

/// Trace spans for whole-array operations
#[derive(Debug, Clone)]
pub struct ArrayTrace;

impl ArrayTrace {
    /// Create a span for `fill`
    #[inline]
    pub fn fill(len: usize) -> Span {
        trace_span!("fixed_array_fill", len = %len)
    }

    /// Create a span for `swap`
    #[inline]
    pub fn swap(len: usize) -> Span {
        trace_span!("fixed_array_swap", len = %len)
    }
}
