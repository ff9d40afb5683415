// Copyright 2026 the cubic_lookup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::{invert_cubic_with, CurveValue, InvertParams, ParamCurve, Point};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

/// The four cubic Bernstein weights at parameter `t`.
///
/// These are `(1-t)³`, `3t(1-t)²`, `3t²(1-t)` and `t³`, in control point
/// order. `t` is not clamped.
#[inline]
pub fn bernstein(t: f64) -> [f64; 4] {
    let mt = 1.0 - t;
    [
        mt * mt * mt,
        3.0 * t * mt * mt,
        3.0 * t * t * mt,
        t * t * t,
    ]
}

/// Evaluate the cubic Bézier with control points `c1..c4` at parameter `t`.
///
/// At `t = 0` the result is exactly `c1`, and at `t = 1` exactly `c4`.
///
/// ```
/// use cubic_lookup::{eval_cubic, Point};
///
/// let c = [(0.0, 0.0), (1.0, 2.0), (2.0, 3.0), (3.0, 0.0)].map(Point::from);
/// assert_eq!(eval_cubic(0.0, c[0], c[1], c[2], c[3]), c[0]);
/// assert_eq!(eval_cubic(0.5, c[0], c[1], c[2], c[3]), Point::new(1.5, 1.875));
/// ```
#[inline]
pub fn eval_cubic(t: f64, c1: Point, c2: Point, c3: Point, c4: Point) -> Point {
    let [b1, b2, b3, b4] = bernstein(t);
    Point::new(
        c1.x * b1 + c2.x * b2 + c3.x * b3 + c4.x * b4,
        c1.y * b1 + c2.y * b2 + c3.y * b3 + c4.y * b4,
    )
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Build a segment from a slice of exactly four control points.
    ///
    /// Returns `None` for any other length.
    #[inline]
    pub fn from_points(points: &[Point]) -> Option<CubicBez> {
        match *points {
            [p0, p1, p2, p3] => Some(CubicBez { p0, p1, p2, p3 }),
            _ => None,
        }
    }

    /// The control points, in order.
    #[inline]
    pub fn points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// The y coordinate of the segment at `x`, found by subdivision.
    ///
    /// See [`invert_cubic_with`] for the search and its termination rules.
    #[inline]
    pub fn y_for_x(&self, x: f64, params: &InvertParams) -> f64 {
        invert_cubic_with(x, self.p0, self.p1, self.p2, self.p3, 0, params)
    }

    /// Parameter values in the open range (0, 1) where `dx/dt` is zero.
    pub fn x_extrema(&self) -> ArrayVec<f64, 2> {
        let d0 = self.p1.x - self.p0.x;
        let d1 = self.p2.x - self.p1.x;
        let d2 = self.p3.x - self.p2.x;
        let a = d0 - 2.0 * d1 + d2;
        let b = 2.0 * (d1 - d0);
        let mut result = ArrayVec::new();
        for t in solve_quadratic(d0, b, a) {
            if t > 0.0 && t < 1.0 {
                result.push(t);
            }
        }
        result
    }

    /// Whether x never decreases as `t` goes from 0 to 1.
    ///
    /// Subdivision only finds the right answer for segments like this one.
    pub fn is_x_monotonic(&self) -> bool {
        let mut last_x = self.p0.x;
        for t in self.x_extrema().into_iter().chain(Some(1.0)) {
            let x = self.eval(t).x;
            if x < last_x {
                return false;
            }
            last_x = x;
        }
        true
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        eval_cubic(t, self.p0, self.p1, self.p2, self.p3)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (CubicBez, CubicBez) {
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let pm = p012.midpoint(p123);
        (
            CubicBez::new(self.p0, p01, p012, pm),
            CubicBez::new(pm, p123, p23, self.p3),
        )
    }
}

impl CurveValue for CubicBez {
    #[inline]
    fn value_at(&self, x: f64) -> f64 {
        self.y_for_x(x, &InvertParams::default())
    }
}

impl From<[Point; 4]> for CubicBez {
    #[inline]
    fn from([p0, p1, p2, p3]: [Point; 4]) -> CubicBez {
        CubicBez { p0, p1, p2, p3 }
    }
}
