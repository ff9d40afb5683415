// Copyright 2026 the cubic_lookup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use crate::Point;

/// A curve parametrized by a scalar.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1]. Values outside that range are
    /// not rejected; the curve is extrapolated.
    fn eval(&self, t: f64) -> Point;

    /// Subdivide into halves at `t = 0.5`.
    fn subdivide(&self) -> (Self, Self);

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A curve that can report the y coordinate it takes at a given x.
///
/// This only has a well defined answer when x is monotonic along the curve,
/// which is the case for timing and easing curves.
pub trait CurveValue {
    /// The y coordinate of the curve at `x`.
    fn value_at(&self, x: f64) -> f64;
}
