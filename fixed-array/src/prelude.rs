// fixed-array - fixed-array
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for fixed-array
//!
//! Unified imports for both std and `no_std` environments, plus the crate's
//! own container types and traits.

// Explicitly re-export common core traits and types
pub use core::{
    borrow::{Borrow, BorrowMut},
    cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd},
    convert::{TryFrom, TryInto},
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Rev},
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

// Re-export from fixed_array_error
pub use fixed_array_error::{
    codes, kinds, Error, ErrorCategory, FromError, Result, ToErrorCategory,
};

pub use crate::{
    array::{swap, FixedArray},
    compile_time_bounds::{IndexBound, NonEmpty},
    iter::{IntoIter, Iter, IterMut, RevIter, RevIterMut},
    tuple::{ConstLen, TupleElement},
};
