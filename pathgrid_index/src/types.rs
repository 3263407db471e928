// Copyright 2025 the Pathgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// A point in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D<T> {
    /// X coordinate (longitude for geographic data).
    pub x: T,
    /// Y coordinate (latitude for geographic data).
    pub y: T,
}

impl<T> Point2D<T> {
    /// Create a new point.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2D<T> {
    /// Minimum x (west)
    pub min_x: T,
    /// Minimum y (south)
    pub min_y: T,
    /// Maximum x (east)
    pub max_x: T,
    /// Maximum y (north)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    #[inline(always)]
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// The minimum corner.
    #[inline]
    pub fn min_point(&self) -> Point2D<T> {
        Point2D::new(self.min_x, self.min_y)
    }

    /// The maximum corner.
    #[inline]
    pub fn max_point(&self) -> Point2D<T> {
        Point2D::new(self.max_x, self.max_y)
    }

    /// Whether this AABB contains the point. Edges are inclusive.
    #[inline]
    pub fn contains_point(&self, p: Point2D<T>) -> bool {
        self.min_x <= p.x && self.min_y <= p.y && p.x <= self.max_x && p.y <= self.max_y
    }

    /// Determines whether this AABB overlaps with another in any way.
    ///
    /// Two AABBs that share an edge are considered to overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgrid_index::Aabb2D;
    ///
    /// let a = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.overlaps(&Aabb2D::new(10.0, 0.0, 20.0, 10.0)));
    /// assert!(!a.overlaps(&Aabb2D::new(11.0, 0.0, 20.0, 10.0)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Return true if the AABB is empty or inverted (no area). Assumes no NaN.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// Create an AABB from origin and size.
    #[inline]
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: T::add(x, w),
            max_y: T::add(y, h),
        }
    }

    /// Extent along x, clamped at zero for inverted boxes.
    #[inline]
    pub fn width(&self) -> T {
        T::max(T::sub(self.max_x, self.min_x), T::zero())
    }

    /// Extent along y, clamped at zero for inverted boxes.
    #[inline]
    pub fn height(&self) -> T {
        T::max(T::sub(self.max_y, self.min_y), T::zero())
    }
}

/// A directed line segment between two points.
///
/// Zero-length segments are allowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2D<T> {
    /// First endpoint.
    pub start: Point2D<T>,
    /// Second endpoint.
    pub end: Point2D<T>,
}

impl<T> Segment2D<T> {
    /// Create a segment from its endpoints.
    #[inline(always)]
    pub const fn new(start: Point2D<T>, end: Point2D<T>) -> Self {
        Self { start, end }
    }

    /// Create a segment from raw endpoint coordinates.
    #[inline(always)]
    pub const fn from_coords(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self {
            start: Point2D::new(x0, y0),
            end: Point2D::new(x1, y1),
        }
    }
}

impl<T: Copy + PartialOrd> Segment2D<T> {
    /// Whether both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// The smallest AABB enclosing both endpoints.
    #[inline]
    pub fn bbox(&self) -> Aabb2D<T> {
        Aabb2D {
            min_x: min_t(self.start.x, self.end.x),
            min_y: min_t(self.start.y, self.end.y),
            max_x: max_t(self.start.x, self.end.x),
            max_y: max_t(self.start.y, self.end.y),
        }
    }
}

/// Numeric scalar abstraction for grid coordinates.
///
/// Only the handful of operations the grid needs are required. Traversal
/// parameters are computed in `f64`, so implementations also provide a
/// lossless (or as close as the type allows) widening conversion.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Max of the two scalar values.
    fn max(a: Self, b: Self) -> Self;

    /// Min of the two scalar values.
    fn min(a: Self, b: Self) -> Self;

    /// Convert to `f64` for parametric computations.
    fn to_f64(v: Self) -> f64;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn max(a: Self, b: Self) -> Self {
        Self::max(a, b)
    }

    #[inline]
    fn min(a: Self, b: Self) -> Self {
        Self::min(a, b)
    }

    #[inline]
    fn to_f64(v: Self) -> f64 {
        f64::from(v)
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn max(a: Self, b: Self) -> Self {
        Self::max(a, b)
    }

    #[inline]
    fn min(a: Self, b: Self) -> Self {
        Self::min(a, b)
    }

    #[inline(always)]
    fn to_f64(v: Self) -> f64 {
        v
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline(always)]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn max(a: Self, b: Self) -> Self {
        core::cmp::max(a, b)
    }

    #[inline]
    fn min(a: Self, b: Self) -> Self {
        core::cmp::min(a, b)
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "Coordinates beyond 2^53 are not expected in grid extents."
    )]
    #[inline]
    fn to_f64(v: Self) -> f64 {
        v as f64
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}
