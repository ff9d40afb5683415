// Copyright 2026 the cubic_lookup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recovering y from x on a cubic Bézier segment by de Casteljau bisection.

use log::trace;

use crate::{CubicBez, ParamCurve, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Default x tolerance for [`invert_cubic`].
pub const DEFAULT_INVERT_ACCURACY: f64 = 0.001;

/// Default bound on the number of bisection levels for [`invert_cubic`].
pub const DEFAULT_MAX_DEPTH: usize = 250;

/// Tuning for the subdivision search.
///
/// The search stops when an endpoint of the current sub-segment lies within
/// `accuracy` of the target x, or once more than `max_depth` levels have been
/// visited, whichever happens first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvertParams {
    /// Maximum distance in x between an endpoint and the target.
    pub accuracy: f64,
    /// Maximum number of bisection levels.
    pub max_depth: usize,
}

impl InvertParams {
    /// Create parameters with the given tolerance and depth bound.
    #[inline]
    pub const fn new(accuracy: f64, max_depth: usize) -> InvertParams {
        InvertParams {
            accuracy,
            max_depth,
        }
    }

    /// A copy of these parameters with a different x tolerance.
    #[inline]
    #[must_use]
    pub const fn with_accuracy(self, accuracy: f64) -> InvertParams {
        InvertParams { accuracy, ..self }
    }

    /// A copy of these parameters with a different depth bound.
    #[inline]
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> InvertParams {
        InvertParams { max_depth, ..self }
    }
}

impl Default for InvertParams {
    fn default() -> Self {
        InvertParams::new(DEFAULT_INVERT_ACCURACY, DEFAULT_MAX_DEPTH)
    }
}

/// Find the y coordinate at `x` on the cubic segment `p1..p4`, using the
/// default [`InvertParams`].
///
/// `depth` is the number of levels already spent; callers starting a fresh
/// search pass zero.
///
/// ```
/// use cubic_lookup::{invert_cubic, Point};
///
/// // y = x on a straight segment.
/// let y = invert_cubic(
///     0.75,
///     Point::new(0.0, 0.0),
///     Point::new(1.0 / 3.0, 1.0 / 3.0),
///     Point::new(2.0 / 3.0, 2.0 / 3.0),
///     Point::new(1.0, 1.0),
///     0,
/// );
/// assert!((y - 0.75).abs() < 0.001);
/// ```
#[inline]
pub fn invert_cubic(x: f64, p1: Point, p2: Point, p3: Point, p4: Point, depth: usize) -> f64 {
    invert_cubic_with(x, p1, p2, p3, p4, depth, &InvertParams::default())
}

/// Find the y coordinate at `x` on the cubic segment `p1..p4`.
///
/// Each step splits the current sub-segment at `t = 0.5` and keeps the half
/// on the side of the target x. The search returns:
///
/// - the y of the split point, once the depth exceeds `params.max_depth`;
/// - the y of the first endpoint, if its x is within `params.accuracy`;
/// - otherwise the y of the last endpoint, if its x is within tolerance.
///
/// No error is ever reported. The halving only homes in on the right answer
/// when x is monotonic along the segment; for any other segment the result
/// is some point on the curve, but not necessarily one at `x`.
pub fn invert_cubic_with(
    x: f64,
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
    depth: usize,
    params: &InvertParams,
) -> f64 {
    let mut c = CubicBez::new(p1, p2, p3, p4);
    let mut depth = depth;
    loop {
        let (left, right) = c.subdivide();
        let mid = left.end();
        depth = depth.saturating_add(1);

        if depth > params.max_depth {
            trace!(
                "subdivision for x={x} stopped after {} levels, using y={}",
                params.max_depth,
                mid.y
            );
            return mid.y;
        }
        if (c.p0.x - x).abs() < params.accuracy {
            return c.p0.y;
        }
        if (c.p3.x - x).abs() < params.accuracy {
            return c.p3.y;
        }

        c = if x > mid.x { right } else { left };
    }
}
