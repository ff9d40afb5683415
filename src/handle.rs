// Copyright 2026 the cubic_lookup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths described by handles, the way animation curve editors present them.

use core::ops::{Index, IndexMut};

use smallvec::SmallVec;

use crate::curve::value_from_segments;
use crate::{eval_cubic, CubicBez, CubicCurve, CurveError, CurveValue, InvertParams, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A point on a path together with the tangents that shape the path on
/// either side of it.
///
/// Tangents are relative to the position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Handle {
    /// Where the path passes through.
    pub position: Point,
    /// Tangent shaping the segment arriving at this handle.
    pub left_tangent: Vec2,
    /// Tangent shaping the segment leaving this handle.
    pub right_tangent: Vec2,
}

impl Handle {
    /// Create a new handle.
    #[inline]
    pub fn new(
        position: impl Into<Point>,
        left_tangent: impl Into<Vec2>,
        right_tangent: impl Into<Vec2>,
    ) -> Handle {
        Handle {
            position: position.into(),
            left_tangent: left_tangent.into(),
            right_tangent: right_tangent.into(),
        }
    }

    /// A handle with no tangents, giving sharp corners.
    #[inline]
    pub fn corner(position: impl Into<Point>) -> Handle {
        Handle::new(position, Vec2::ZERO, Vec2::ZERO)
    }

    /// The absolute position of the left control point.
    #[inline]
    pub fn left_control(&self) -> Point {
        self.position + self.left_tangent
    }

    /// The absolute position of the right control point.
    #[inline]
    pub fn right_control(&self) -> Point {
        self.position + self.right_tangent
    }
}

/// The cubic segment between two consecutive handles.
#[inline]
fn segment_between(h1: &Handle, h2: &Handle) -> CubicBez {
    CubicBez::new(
        h1.position,
        h1.right_control(),
        h2.left_control(),
        h2.position,
    )
}

/// An ordered list of handles, each consecutive pair joined by a cubic
/// segment.
///
/// With x as time, this is an animation curve: [`value_at`](Self::value_at)
/// gives the value at a time, and [`x_for_value`](Self::x_for_value) goes the
/// other way for curves whose value rises over time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandlePath {
    handles: SmallVec<[Handle; 4]>,
    params: InvertParams,
}

impl HandlePath {
    /// Create an empty path.
    #[inline]
    pub fn new() -> HandlePath {
        HandlePath::default()
    }

    /// Create an empty path using the given subdivision parameters.
    #[inline]
    pub fn with_params(params: InvertParams) -> HandlePath {
        HandlePath {
            handles: SmallVec::new(),
            params,
        }
    }

    /// A two handle easing path.
    ///
    /// The path runs from `(start_time, start_value)` to
    /// `(end_time, end_value)`, leaving the start horizontally with a tangent
    /// of length `ease_in` and arriving at the end horizontally with a
    /// tangent of length `ease_out`.
    ///
    /// ```
    /// use cubic_lookup::HandlePath;
    ///
    /// let path = HandlePath::ease(0.0, 1.0, 0.0, 10.0, 0.5, 0.5);
    /// assert_eq!(path.value_at(0.0), 0.0);
    /// assert_eq!(path.value_at(1.0), 10.0);
    /// assert!((path.value_at(0.5) - 5.0).abs() < 0.05);
    /// ```
    pub fn ease(
        start_time: f64,
        end_time: f64,
        start_value: f64,
        end_value: f64,
        ease_in: f64,
        ease_out: f64,
    ) -> HandlePath {
        let mut path = HandlePath::new();
        path.push(Handle::new(
            (start_time, start_value),
            Vec2::ZERO,
            Vec2::horizontal(ease_in),
        ));
        path.push(Handle::new(
            (end_time, end_value),
            Vec2::horizontal(-ease_out),
            Vec2::ZERO,
        ));
        path
    }

    /// Append a handle.
    #[inline]
    pub fn push(&mut self, handle: Handle) {
        self.handles.push(handle);
    }

    /// Insert a handle at `index`, returning a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, handle: Handle) -> &mut Handle {
        self.handles.insert(index, handle);
        &mut self.handles[index]
    }

    /// Remove and return the handle at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Handle {
        self.handles.remove(index)
    }

    /// Remove all handles.
    #[inline]
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    /// The number of handles.
    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Is the path free of handles?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// The handles, in order.
    #[inline]
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// The subdivision parameters used by lookups.
    #[inline]
    pub fn params(&self) -> &InvertParams {
        &self.params
    }

    /// Set the x tolerance used by lookups.
    #[inline]
    pub fn set_accuracy(&mut self, accuracy: f64) {
        self.params.accuracy = accuracy;
    }

    /// Set the bisection depth bound used by lookups.
    #[inline]
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.params.max_depth = max_depth;
    }

    /// The x of the first handle, or `0.0` if there are none.
    pub fn start(&self) -> f64 {
        self.handles.first().map_or(0.0, |h| h.position.x)
    }

    /// The x of the last handle, or `0.0` if there are none.
    pub fn end(&self) -> f64 {
        self.handles.last().map_or(0.0, |h| h.position.x)
    }

    /// The distance in x from the first handle to the last.
    pub fn duration(&self) -> f64 {
        self.end() - self.start()
    }

    /// The y of the first handle, or `0.0` if there are none.
    pub fn start_value(&self) -> f64 {
        self.handles.first().map_or(0.0, |h| h.position.y)
    }

    /// The y of the last handle, or `0.0` if there are none.
    pub fn end_value(&self) -> f64 {
        self.handles.last().map_or(0.0, |h| h.position.y)
    }

    /// The segments between consecutive handles.
    pub fn segments(&self) -> impl Iterator<Item = CubicBez> + '_ {
        self.handles
            .windows(2)
            .map(|pair| segment_between(&pair[0], &pair[1]))
    }

    /// The same path as a flat control point curve.
    pub fn to_curve(&self) -> CubicCurve {
        self.segments()
            .collect::<CubicCurve>()
            .with_params(self.params)
    }

    /// The point at parameter `t` along the whole path.
    ///
    /// The integer part of `t` selects the segment starting at that handle,
    /// wrapping around so the last handle joins back to the first, and the
    /// fractional part is the parameter within the segment. Returns `None`
    /// for an empty path.
    ///
    /// ```
    /// use cubic_lookup::{HandlePath, Point};
    ///
    /// let path = HandlePath::ease(0.0, 1.0, 0.0, 10.0, 0.5, 0.5);
    /// assert_eq!(path.point_at(0.0), Some(Point::new(0.0, 0.0)));
    /// assert_eq!(path.point_at(1.0), Some(Point::new(1.0, 10.0)));
    /// assert_eq!(path.point_at(2.0), path.point_at(0.0));
    /// ```
    pub fn point_at(&self, t: f64) -> Option<Point> {
        let len = self.handles.len();
        if len == 0 {
            return None;
        }
        let whole = t.floor();
        let wrapped = whole - (whole / len as f64).floor() * len as f64;
        #[allow(clippy::cast_possible_truncation)]
        let index = (wrapped as usize).min(len - 1);
        let h1 = &self.handles[index];
        let h2 = &self.handles[(index + 1) % len];
        Some(eval_cubic(
            t - whole,
            h1.position,
            h1.right_control(),
            h2.left_control(),
            h2.position,
        ))
    }

    /// Set every handle's tangents from its neighbours.
    ///
    /// Both tangents of a handle point along the line from the previous
    /// handle to the next one. The left tangent is half the distance to the
    /// previous handle scaled by `smooth_in`, and the right tangent half the
    /// distance to the next handle scaled by `smooth_out`. When `closed` is
    /// set the first and last handles are treated as neighbours; otherwise
    /// the outer tangent of each end handle is zero.
    pub fn smooth(&mut self, smooth_in: f64, smooth_out: f64, closed: bool) {
        self.auto_tangents(smooth_in, smooth_out, closed, false);
    }

    /// Like [`smooth`](Self::smooth), but with the longer side of each
    /// interior handle shortened to match the shorter one, so both tangents
    /// have the same length.
    pub fn smooth_auto(&mut self, smooth_in: f64, smooth_out: f64, closed: bool) {
        self.auto_tangents(smooth_in, smooth_out, closed, true);
    }

    fn auto_tangents(&mut self, smooth_in: f64, smooth_out: f64, closed: bool, balance: bool) {
        let positions: SmallVec<[Point; 4]> = self.handles.iter().map(|h| h.position).collect();
        for (i, handle) in self.handles.iter_mut().enumerate() {
            let current = positions[i];
            let prior = match i.checked_sub(1) {
                Some(j) => Some(positions[j]),
                None if closed => positions.last().copied(),
                None => None,
            };
            let next = match positions.get(i + 1) {
                Some(p) => Some(*p),
                None if closed => positions.first().copied(),
                None => None,
            };

            let seg_in = prior.map_or(Vec2::ZERO, |p| current - p);
            let seg_out = next.map_or(Vec2::ZERO, |p| p - current);
            let mut len_in = seg_in.hypot();
            let mut len_out = seg_out.hypot();
            let mut from = prior.unwrap_or(current);
            let mut to = next.unwrap_or(current);
            if balance && prior.is_some() && next.is_some() {
                if len_in < len_out {
                    to = current + seg_out.normalize() * len_in;
                    len_out = len_in;
                } else if len_in > len_out {
                    from = current + -seg_in.normalize() * len_out;
                    len_in = len_out;
                }
            }

            let dir = (to - from).normalize();
            handle.left_tangent = -dir * (0.5 * len_in * smooth_in);
            handle.right_tangent = dir * (0.5 * len_out * smooth_out);
        }
    }

    /// The y of the path at `x`.
    ///
    /// Before the first handle this is the first handle's y, and after the
    /// last it is the last handle's y. An empty path is `0.0` everywhere.
    pub fn value_at(&self, x: f64) -> f64 {
        match self.handles.last() {
            Some(last) => value_from_segments(x, self.segments(), last.position, &self.params),
            None => 0.0,
        }
    }

    /// Find the x at which the path reaches `value`, by bisection between
    /// [`start`](Self::start) and [`end`](Self::end).
    ///
    /// The path's value is assumed to increase with x. The search stops once
    /// the bracket is no wider than `accuracy` or can no longer be halved,
    /// when a probe lands exactly on `value`, or after the configured maximum
    /// depth.
    ///
    /// # Errors
    ///
    /// [`CurveError::NotEnoughHandles`] if the path has fewer than two
    /// handles.
    pub fn x_for_value(&self, value: f64, accuracy: f64) -> Result<f64, CurveError> {
        if self.handles.len() < 2 {
            return Err(CurveError::NotEnoughHandles {
                len: self.handles.len(),
            });
        }
        let mut min_x = self.start();
        let mut max_x = self.end();
        let mut iteration = 0;
        while (max_x - min_x).abs() > accuracy {
            let mid_x = 0.5 * (min_x + max_x);
            if mid_x == min_x || mid_x == max_x {
                break;
            }
            let mid_value = self.value_at(mid_x);
            if mid_value == value || iteration >= self.params.max_depth {
                return Ok(mid_x);
            }
            if mid_value < value {
                min_x = mid_x;
            } else {
                max_x = mid_x;
            }
            iteration += 1;
        }
        Ok(0.5 * (min_x + max_x))
    }
}

impl CurveValue for HandlePath {
    #[inline]
    fn value_at(&self, x: f64) -> f64 {
        HandlePath::value_at(self, x)
    }
}

impl Index<usize> for HandlePath {
    type Output = Handle;

    fn index(&self, index: usize) -> &Handle {
        &self.handles[index]
    }
}

impl IndexMut<usize> for HandlePath {
    fn index_mut(&mut self, index: usize) -> &mut Handle {
        &mut self.handles[index]
    }
}

impl FromIterator<Handle> for HandlePath {
    fn from_iter<I: IntoIterator<Item = Handle>>(iter: I) -> HandlePath {
        HandlePath {
            handles: iter.into_iter().collect(),
            params: InvertParams::default(),
        }
    }
}

impl Extend<Handle> for HandlePath {
    fn extend<I: IntoIterator<Item = Handle>>(&mut self, iter: I) {
        self.handles.extend(iter);
    }
}

/// The value at `time` of the easing path built by [`HandlePath::ease`],
/// searching with the given x tolerance.
pub fn ease_value(
    start_time: f64,
    end_time: f64,
    start_value: f64,
    end_value: f64,
    ease_in: f64,
    ease_out: f64,
    time: f64,
    accuracy: f64,
) -> f64 {
    let mut path = HandlePath::ease(
        start_time,
        end_time,
        start_value,
        end_value,
        ease_in,
        ease_out,
    );
    path.set_accuracy(accuracy);
    path.value_at(time)
}

/// The time at which the easing path built by [`HandlePath::ease`] reaches
/// `value`.
///
/// The path always has two handles, so this cannot fail; a rising path is
/// assumed, as for [`HandlePath::x_for_value`].
pub fn ease_time(
    start_time: f64,
    end_time: f64,
    start_value: f64,
    end_value: f64,
    ease_in: f64,
    ease_out: f64,
    value: f64,
    accuracy: f64,
) -> f64 {
    let path = HandlePath::ease(
        start_time,
        end_time,
        start_value,
        end_value,
        ease_in,
        ease_out,
    );
    path.x_for_value(value, accuracy)
        .unwrap_or(start_time)
}

#[cfg(test)]
mod tests {
    use crate::{
        ease_time, ease_value, lookup_curve_value, CubicBez, CurveError, Handle, HandlePath,
        InvertParams, ParamCurve, Point, Vec2,
    };

    fn assert_near(actual: Vec2, expected: Vec2) {
        assert!(
            (actual.x - expected.x).abs() < 1e-12 && (actual.y - expected.y).abs() < 1e-12,
            "{actual} != {expected}"
        );
    }

    fn s_curve() -> HandlePath {
        HandlePath::ease(0.0, 2.0, 1.0, 5.0, 0.8, 0.8)
    }

    #[test]
    fn handle_controls() {
        let h = Handle::new((1.0, 2.0), (-0.5, 0.0), (0.5, 1.0));
        assert_eq!(h.left_control(), Point::new(0.5, 2.0));
        assert_eq!(h.right_control(), Point::new(1.5, 3.0));
        assert_eq!(Handle::corner((1.0, 2.0)).right_control(), Point::new(1.0, 2.0));
    }

    #[test]
    fn path_bounds() {
        let path = s_curve();
        assert_eq!(path.len(), 2);
        assert_eq!(path.start(), 0.0);
        assert_eq!(path.end(), 2.0);
        assert_eq!(path.duration(), 2.0);
        assert_eq!(path.start_value(), 1.0);
        assert_eq!(path.end_value(), 5.0);

        let empty = HandlePath::new();
        assert!(empty.is_empty());
        assert_eq!(empty.start(), 0.0);
        assert_eq!(empty.end(), 0.0);
        assert_eq!(empty.duration(), 0.0);
        assert_eq!(empty.start_value(), 0.0);
        assert_eq!(empty.end_value(), 0.0);
        assert_eq!(empty.value_at(1.0), 0.0);
    }

    #[test]
    fn path_values() {
        let path = s_curve();
        assert_eq!(path.value_at(-1.0), 1.0);
        assert_eq!(path.value_at(3.0), 5.0);
        assert_eq!(path.value_at(0.0), 1.0);
        assert_eq!(path.value_at(2.0), 5.0);
        // Symmetric ease: halfway in time is halfway in value.
        assert!((path.value_at(1.0) - 3.0).abs() < 0.01);

        let mut last = path.value_at(0.0);
        for i in 1..=20 {
            let v = path.value_at(i as f64 * 0.1);
            assert!(v >= last - 1e-9, "value fell from {last} to {v}");
            last = v;
        }
    }

    #[test]
    fn path_matches_flat_curve() {
        let mut path = s_curve();
        path.push(Handle::new((4.0, 0.0), (-1.0, 0.0), (0.0, 0.0)));
        let curve = path.to_curve();
        assert_eq!(curve.points().len(), 8);
        for i in -5..=50 {
            let x = i as f64 * 0.1;
            assert_eq!(path.value_at(x), curve.value_at(x), "x={x}");
            assert_eq!(path.value_at(x), lookup_curve_value(x, curve.points()));
        }
    }

    #[test]
    fn single_handle() {
        let path: HandlePath = [Handle::corner((1.0, 7.0))].into_iter().collect();
        assert_eq!(path.segments().count(), 0);
        assert_eq!(path.value_at(0.0), 7.0);
        assert_eq!(path.value_at(2.0), 7.0);
        assert_eq!(
            path.x_for_value(7.0, 0.001),
            Err(CurveError::NotEnoughHandles { len: 1 })
        );
    }

    #[test]
    fn x_for_value_inverts() {
        let path = s_curve();
        for i in 1..10 {
            let x = i as f64 * 0.2;
            let v = path.value_at(x);
            let found = path.x_for_value(v, 1e-4).unwrap();
            assert!((path.value_at(found) - v).abs() < 0.01, "x={x} found={found}");
        }
    }

    #[test]
    fn x_for_value_exact_tolerance() {
        // A zero tolerance ends once the bracket is down to adjacent floats.
        let mut path = s_curve();
        path.set_max_depth(100_000_000);
        let found = path.x_for_value(3.0, 0.0).unwrap();
        assert!((found - 1.0).abs() < 0.01, "found={found}");
        let found = path.x_for_value(1.3, -1.0).unwrap();
        assert!((path.value_at(found) - 1.3).abs() < 0.01, "found={found}");
    }

    #[test]
    fn point_at_wraps() {
        let path = s_curve();
        let forward = path.segments().next().unwrap();
        let back = CubicBez::new(
            path[1].position,
            path[1].right_control(),
            path[0].left_control(),
            path[0].position,
        );
        assert_eq!(path.point_at(0.0), Some(Point::new(0.0, 1.0)));
        assert_eq!(path.point_at(0.5), Some(forward.eval(0.5)));
        assert_eq!(path.point_at(1.0), Some(Point::new(2.0, 5.0)));
        assert_eq!(path.point_at(1.5), Some(back.eval(0.5)));
        assert_eq!(path.point_at(2.25), path.point_at(0.25));
        assert_eq!(path.point_at(-0.75), path.point_at(1.25));
        assert_eq!(HandlePath::new().point_at(0.5), None);

        let single: HandlePath = [Handle::corner((3.0, 4.0))].into_iter().collect();
        assert_eq!(single.point_at(7.5), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn smooth_open() {
        let mut path: HandlePath = [(0.0, 0.0), (1.0, 1.0), (3.0, 1.0)]
            .into_iter()
            .map(Handle::corner)
            .collect();
        path.smooth(1.0, 1.0, false);

        assert_near(path[0].left_tangent, Vec2::ZERO);
        assert_near(path[0].right_tangent, Vec2::new(0.5, 0.5));

        // Along (0, 0) -> (3, 1), half of sqrt(2) back and half of 2 forward.
        let dir = Vec2::new(3.0, 1.0).normalize();
        assert_near(path[1].left_tangent, -dir * (0.5 * 2f64.sqrt()));
        assert_near(path[1].right_tangent, dir);

        assert_near(path[2].left_tangent, Vec2::new(-1.0, 0.0));
        assert_near(path[2].right_tangent, Vec2::ZERO);

        // The smoothed path still rises monotonically in x.
        assert!(path.to_curve().validate().is_ok());

        path.smooth(0.0, 2.0, false);
        assert_near(path[1].left_tangent, Vec2::ZERO);
        assert_near(path[1].right_tangent, dir * 2.0);
    }

    #[test]
    fn smooth_closed() {
        let mut path: HandlePath = [(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]
            .into_iter()
            .map(Handle::corner)
            .collect();
        path.smooth(1.0, 1.0, true);
        // The first handle takes the last as its previous neighbour.
        let dir = Vec2::new(1.0, -2.0).normalize();
        let back = 0.5 * 5f64.sqrt();
        assert_near(path[0].left_tangent, -dir * back);
        assert_near(path[0].right_tangent, dir);
        // And the last takes the first as its next.
        let dir = Vec2::new(-2.0, 0.0).normalize();
        assert_near(path[2].left_tangent, -dir * back);
        assert_near(path[2].right_tangent, dir * back);
    }

    #[test]
    fn smooth_auto_balances() {
        let mut path: HandlePath = [(0.0, 0.0), (1.0, 1.0), (3.0, 1.0)]
            .into_iter()
            .map(Handle::corner)
            .collect();
        path.smooth_auto(1.0, 1.0, false);
        let h = path[1];
        assert_near(h.left_tangent, -h.right_tangent);
        assert!((h.right_tangent.hypot() - 0.5 * 2f64.sqrt()).abs() < 1e-12);
        let dir = Vec2::new(1.0 + 2f64.sqrt(), 1.0).normalize();
        assert_near(h.right_tangent.normalize(), dir);
        // End handles have one neighbour and are not balanced.
        assert_near(path[2].left_tangent, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn editing() {
        let mut path = HandlePath::with_params(InvertParams::new(0.01, 100));
        path.push(Handle::corner((0.0, 0.0)));
        path.push(Handle::corner((2.0, 2.0)));
        path.insert(1, Handle::corner((1.0, 5.0))).right_tangent = Vec2::new(0.25, 0.0);
        assert_eq!(path.len(), 3);
        assert_eq!(path[1].position, Point::new(1.0, 5.0));
        assert_eq!(path[1].right_tangent, Vec2::new(0.25, 0.0));
        path[1].position.y = 4.0;
        assert_eq!(path.handles()[1].position, Point::new(1.0, 4.0));
        assert_eq!(path.remove(0), Handle::corner((0.0, 0.0)));
        path.extend([Handle::corner((3.0, 3.0))]);
        assert_eq!(path.segments().count(), 2);
        path.set_accuracy(0.5);
        path.set_max_depth(10);
        assert_eq!(path.params(), &InvertParams::new(0.5, 10));
        path.clear();
        assert!(path.is_empty());
    }

    #[test]
    fn ease_helpers() {
        let v = ease_value(0.0, 2.0, 1.0, 5.0, 0.8, 0.8, 1.0, 0.001);
        assert!((v - 3.0).abs() < 0.01);
        let t = ease_time(0.0, 2.0, 1.0, 5.0, 0.8, 0.8, 3.0, 1e-4);
        assert!((t - 1.0).abs() < 0.01);
    }
}
