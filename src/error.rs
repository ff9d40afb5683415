// Copyright 2026 the cubic_lookup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors from the checked curve operations.

use core::fmt;

/// An error from one of the checked curve operations.
///
/// Value lookups never fail; these errors are only returned by the
/// operations that validate their input up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurveError {
    /// The number of control points is not a multiple of four.
    PartialSegment {
        /// The number of control points given.
        len: usize,
    },
    /// A segment's x coordinate decreases somewhere along it.
    NonMonotonic {
        /// Index of the offending segment.
        segment: usize,
    },
    /// A handle path needs at least two handles to span a range of x.
    NotEnoughHandles {
        /// The number of handles in the path.
        len: usize,
    },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::PartialSegment { len } => write!(
                f,
                "{len} control points do not divide into 4-point segments"
            ),
            CurveError::NonMonotonic { segment } => {
                write!(f, "segment {segment} is not monotonic in x")
            }
            CurveError::NotEnoughHandles { len } => {
                write!(f, "need at least 2 handles, found {len}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CurveError {}
