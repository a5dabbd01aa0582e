// fixed-array - fixed-array-error
// Module: Error Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for fixed-array-error
//!
//! Unified imports for both std and `no_std` environments.

pub use core::{
    cmp::{
        Eq,
        Ord,
        PartialEq,
        PartialOrd,
    },
    fmt,
    fmt::{
        Debug,
        Display,
    },
};

pub use crate::{
    codes,
    kinds,
    Error,
    ErrorCategory,
    ErrorSource,
    FromError,
    Result,
    ToErrorCategory,
};
