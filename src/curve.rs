// Copyright 2026 the cubic_lookup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise cubic curves stored as a flat list of control points.

use alloc::vec::Vec;
use core::slice::ChunksExact;

use log::debug;

use crate::{CubicBez, CurveError, CurveValue, InvertParams, Point};

/// A piecewise cubic curve.
///
/// The control points are read four at a time: `[0..4]` is the first
/// segment, `[4..8]` the second, and so on. Any points left over at the end
/// do not form a segment and are ignored by [`segments`](Self::segments),
/// though the very last point still acts as the clamp value for lookups past
/// the end.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicCurve {
    points: Vec<Point>,
    params: InvertParams,
}

/// Iterator over the complete segments of a flat control point list.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    chunks: ChunksExact<'a, Point>,
}

impl<'a> Segments<'a> {
    /// Iterate the 4-point segments of `points`, skipping any partial tail.
    #[inline]
    pub fn new(points: &'a [Point]) -> Segments<'a> {
        Segments {
            chunks: points.chunks_exact(4),
        }
    }

    /// The points after the last complete segment.
    #[inline]
    pub fn remainder(&self) -> &'a [Point] {
        self.chunks.remainder()
    }
}

impl Iterator for Segments<'_> {
    type Item = CubicBez;

    #[inline]
    fn next(&mut self) -> Option<CubicBez> {
        self.chunks.next().and_then(CubicBez::from_points)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

/// The y coordinate at `x` of the piecewise curve through `points`, using
/// the default [`InvertParams`].
///
/// ```
/// use cubic_lookup::{lookup_curve_value, Point};
///
/// let curve = [(0.0, 0.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)].map(Point::from);
/// assert_eq!(lookup_curve_value(-1.0, &curve), 0.0);
/// assert_eq!(lookup_curve_value(4.0, &curve), 4.0);
/// assert_eq!(lookup_curve_value(1.0, &[]), 0.0);
/// ```
#[inline]
pub fn lookup_curve_value(x: f64, points: &[Point]) -> f64 {
    lookup_curve_value_with(x, points, &InvertParams::default())
}

/// The y coordinate at `x` of the piecewise curve through `points`.
///
/// - An empty curve has the value `0.0` everywhere.
/// - Segments are tried in order. If `x` is before a segment's start, the
///   start's y is returned; if it is past the segment's end, the next
///   segment is tried; otherwise the segment is inverted with
///   [`invert_cubic_with`](crate::invert_cubic_with).
/// - If `x` is past every segment, the y of the last point is returned.
pub fn lookup_curve_value_with(x: f64, points: &[Point], params: &InvertParams) -> f64 {
    let Some(last) = points.last() else {
        return 0.0;
    };
    let segments = Segments::new(points);
    let partial = segments.remainder().len();
    if partial != 0 {
        debug!("ignoring {partial} control points after the last complete segment");
    }
    value_from_segments(x, segments, *last, params)
}

/// Shared lookup over a sequence of segments, clamping to `last` past the end.
pub(crate) fn value_from_segments(
    x: f64,
    segments: impl IntoIterator<Item = CubicBez>,
    last: Point,
    params: &InvertParams,
) -> f64 {
    for seg in segments {
        if x < seg.p0.x {
            return seg.p0.y;
        }
        if x > seg.p3.x {
            continue;
        }
        return seg.y_for_x(x, params);
    }
    last.y
}

impl CubicCurve {
    /// Create a curve from its control points.
    ///
    /// No validation is done; see [`try_new`](Self::try_new) and
    /// [`validate`](Self::validate).
    #[inline]
    pub fn new(points: impl Into<Vec<Point>>) -> CubicCurve {
        CubicCurve {
            points: points.into(),
            params: InvertParams::default(),
        }
    }

    /// Create a curve, rejecting point lists with a partial final segment.
    ///
    /// # Errors
    ///
    /// [`CurveError::PartialSegment`] if the number of points is not a
    /// multiple of four.
    pub fn try_new(points: impl Into<Vec<Point>>) -> Result<CubicCurve, CurveError> {
        let points = points.into();
        if points.len() % 4 != 0 {
            return Err(CurveError::PartialSegment { len: points.len() });
        }
        Ok(CubicCurve::new(points))
    }

    /// Use the given subdivision parameters for lookups on this curve.
    #[inline]
    #[must_use]
    pub fn with_params(mut self, params: InvertParams) -> CubicCurve {
        self.params = params;
        self
    }

    /// The subdivision parameters used by lookups.
    #[inline]
    pub fn params(&self) -> &InvertParams {
        &self.params
    }

    /// The control points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Is the curve free of control points?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append the four control points of a segment.
    ///
    /// The points are grouped by position, so appending to a curve that ends
    /// with a partial segment does not keep `seg` intact.
    pub fn push_segment(&mut self, seg: CubicBez) {
        self.points.extend_from_slice(&seg.points());
    }

    /// Iterate the complete segments.
    #[inline]
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.points)
    }

    /// Check that every segment is monotonic in x.
    ///
    /// Lookups on a curve that fails this check still return a value, but
    /// not necessarily one that lies on the curve at the requested x.
    ///
    /// # Errors
    ///
    /// [`CurveError::NonMonotonic`] naming the first offending segment.
    pub fn validate(&self) -> Result<(), CurveError> {
        match self.segments().position(|seg| !seg.is_x_monotonic()) {
            Some(segment) => Err(CurveError::NonMonotonic { segment }),
            None => Ok(()),
        }
    }

    /// The y coordinate of the curve at `x`.
    #[inline]
    pub fn value_at(&self, x: f64) -> f64 {
        lookup_curve_value_with(x, &self.points, &self.params)
    }
}

impl CurveValue for CubicCurve {
    #[inline]
    fn value_at(&self, x: f64) -> f64 {
        CubicCurve::value_at(self, x)
    }
}

impl FromIterator<Point> for CubicCurve {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> CubicCurve {
        CubicCurve::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl FromIterator<CubicBez> for CubicCurve {
    fn from_iter<I: IntoIterator<Item = CubicBez>>(iter: I) -> CubicCurve {
        iter.into_iter().flat_map(|seg| seg.points()).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        lookup_curve_value, lookup_curve_value_with, CubicBez, CubicCurve, CurveError,
        InvertParams, Point, DEFAULT_INVERT_ACCURACY,
    };

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn lookup_empty() {
        assert_eq!(lookup_curve_value(1.0, &[]), 0.0);
        assert_eq!(lookup_curve_value(-1e9, &[]), 0.0);
        assert_eq!(CubicCurve::default().value_at(3.0), 0.0);
    }

    #[test]
    fn lookup_clamps() {
        let curve = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]);
        assert_eq!(lookup_curve_value(-1.0, &curve), 0.0);
        assert_eq!(lookup_curve_value(4.0, &curve), 4.0);
    }

    #[test]
    fn lookup_inside() {
        // y = 2x
        let curve = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        for i in 0..=12 {
            let x = i as f64 * 0.25;
            let y = lookup_curve_value(x, &curve);
            assert!((y - 2.0 * x).abs() < 3.0 * DEFAULT_INVERT_ACCURACY, "x={x} y={y}");
        }
    }

    #[test]
    fn lookup_multi_segment() {
        // A constant 1 on [0, 1], then a constant 5 on [2, 3].
        let curve = pts(&[
            (0.0, 1.0),
            (0.3, 1.0),
            (0.6, 1.0),
            (1.0, 1.0),
            (2.0, 5.0),
            (2.3, 5.0),
            (2.6, 5.0),
            (3.0, 5.0),
        ]);
        assert_eq!(lookup_curve_value(0.5, &curve), 1.0);
        assert_eq!(lookup_curve_value(2.5, &curve), 5.0);
        // In the gap between segments, x is before the second one's start.
        assert_eq!(lookup_curve_value(1.5, &curve), 5.0);
        assert_eq!(lookup_curve_value(10.0, &curve), 5.0);
        assert_eq!(lookup_curve_value(-10.0, &curve), 1.0);
    }

    #[test]
    fn lookup_partial_tail() {
        let mut curve = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        curve.push(Point::new(4.0, 9.0));
        curve.push(Point::new(5.0, 7.0));
        // The tail is not a segment, but its last point is still the clamp.
        assert_eq!(lookup_curve_value(10.0, &curve), 7.0);
        let y = lookup_curve_value(1.5, &curve);
        assert!((y - 1.5).abs() < DEFAULT_INVERT_ACCURACY);

        // Fewer than four points: no segments at all.
        let short = pts(&[(0.0, 3.0), (1.0, 8.0)]);
        assert_eq!(lookup_curve_value(0.5, &short), 8.0);
        assert_eq!(CubicCurve::new(short).segments().count(), 0);
    }

    #[test]
    fn lookup_with_params() {
        let curve = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let coarse = InvertParams::new(0.5, 250);
        assert_eq!(lookup_curve_value_with(0.4, &curve, &coarse), 0.0);
        let c = CubicCurve::new(curve).with_params(coarse);
        assert_eq!(c.value_at(0.4), 0.0);
        assert_eq!(c.params(), &coarse);
    }

    #[test]
    fn curve_construction() {
        let seg = CubicBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0));
        let seg2 = CubicBez::new((3.0, 4.0), (4.0, 4.0), (5.0, 4.0), (6.0, 0.0));
        let c: CubicCurve = [seg, seg2].into_iter().collect();
        assert_eq!(c.points().len(), 8);
        assert_eq!(c.segments().collect::<Vec<_>>(), vec![seg, seg2]);

        let mut pushed = CubicCurve::default();
        assert!(pushed.is_empty());
        pushed.push_segment(seg);
        pushed.push_segment(seg2);
        assert_eq!(pushed, c);

        assert_eq!(
            CubicCurve::try_new(pts(&[(0.0, 0.0); 5])),
            Err(CurveError::PartialSegment { len: 5 })
        );
        assert!(CubicCurve::try_new(seg.points()).is_ok());
    }

    #[test]
    fn curve_validate() {
        let good = CubicCurve::new(pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]));
        assert_eq!(good.validate(), Ok(()));

        let bad = CubicCurve::new(pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0),
            (3.0, 0.0),
            (5.0, 1.0),
            (2.0, 2.0),
            (4.0, 3.0),
        ]));
        assert_eq!(bad.validate(), Err(CurveError::NonMonotonic { segment: 1 }));
        // Lookups still produce a value.
        assert!(bad.value_at(3.5).is_finite());
    }
}
