// Copyright 2026 the cubic_lookup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use core::fmt;
use core::ops::{Add, Mul, Sub};

use crate::Vec2;

/// A 2D point.
///
/// Points are plain values: the algebra below always produces a new point
/// and never modifies its operands.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Point = Point::new(0., 0.);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a new `Point`, substituting zero for any absent coordinate.
    ///
    /// Only `None` takes the default; an explicit `Some(0.0)` is kept as is.
    ///
    /// ```
    /// use cubic_lookup::Point;
    ///
    /// assert_eq!(Point::from_optional(None, None), Point::ZERO);
    /// assert_eq!(Point::from_optional(Some(10.0), None), Point::new(10.0, 0.0));
    /// assert_eq!(Point::from_optional(Some(10.0), Some(20.0)), Point::new(10.0, 20.0));
    /// ```
    #[inline]
    pub fn from_optional(x: Option<f64>, y: Option<f64>) -> Self {
        Point::new(x.unwrap_or(0.), y.unwrap_or(0.))
    }

    /// Component-wise sum of two points.
    #[inline]
    pub fn add_point(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Multiply both coordinates by `s`.
    #[inline]
    pub fn scale(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }

    /// Determine the midpoint of two points.
    ///
    /// This is the sum scaled by one half, the building block of de Casteljau
    /// subdivision.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        self.add_point(other).scale(0.5)
    }
}

impl From<(f64, f64)> for Point {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Point {
        Point { x: v.0, y: v.1 }
    }
}

impl From<Point> for (f64, f64) {
    #[inline(always)]
    fn from(v: Point) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        self.add_point(other)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vec2) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub<Point> for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, s: f64) -> Point {
        self.scale(s)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    #[inline]
    fn mul(self, p: Point) -> Point {
        p.scale(self)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline(always)]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline(always)]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}
