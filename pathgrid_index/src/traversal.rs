// Copyright 2025 the Pathgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell rasterization for a uniform grid.
//!
//! [`GridTraversal`] maps continuous coordinates onto `(col, row)` cell
//! indices and walks the cells a line segment passes through. The walk is an
//! incremental grid-stepping scheme: starting in the start point's cell it
//! repeatedly moves into the neighbouring cell whose boundary the segment
//! crosses first, until it reaches the end point's cell.
//!
//! Nothing here checks bounds. Indices outside `[0, ncols) × [0, nrows)` are
//! returned as-is and it is up to the caller to reject or clamp them.

use core::cmp::Ordering;
use core::iter::FusedIterator;

use crate::types::{Aabb2D, Point2D, Scalar, Segment2D};

/// Scalar types that can be rasterized onto a grid.
///
/// This is kept separate from [`Scalar`] so that the grid implementation can
/// use type-specific logic (e.g., Euclidean division for integers).
pub trait GridScalar: Scalar {
    /// Map a scalar coordinate to a grid coordinate along one axis.
    ///
    /// Computes `floor((value - origin) / cell_size)`, saturated to the `i32`
    /// range. Implementations are expected to be monotonic in `value` for
    /// fixed `origin` and `cell_size`.
    fn cell_coord(value: Self, origin: Self, cell_size: Self) -> i32;

    /// Coordinate of the lower edge of cell `index`: `origin + index * cell_size`.
    fn cell_origin(index: i32, origin: Self, cell_size: Self) -> Self;
}

macro_rules! impl_float_grid_scalar {
    ($ty:ty) => {
        impl GridScalar for $ty {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
            )]
            #[inline]
            fn cell_coord(value: Self, origin: Self, cell_size: Self) -> i32 {
                debug_assert!(cell_size > 0.0, "grid cell_size must be strictly positive");
                let t = (value - origin) / cell_size;
                let coord = t as i32;

                // Round towards -∞ (the cast above has already truncated).
                if t < 0.0 && (coord as Self) > t {
                    coord.saturating_sub(1)
                } else {
                    coord
                }
            }

            #[inline]
            fn cell_origin(index: i32, origin: Self, cell_size: Self) -> Self {
                origin + (index as Self) * cell_size
            }
        }
    };
}

impl_float_grid_scalar!(f32);
impl_float_grid_scalar!(f64);

impl GridScalar for i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
    )]
    #[inline]
    fn cell_coord(value: Self, origin: Self, cell_size: Self) -> i32 {
        debug_assert!(cell_size > 0, "grid cell_size must be strictly positive");
        // Euclidean division rounds toward -∞, which matches floor for all
        // integer values.
        let coord = value.saturating_sub(origin).div_euclid(cell_size);
        coord.clamp(Self::from(i32::MIN), Self::from(i32::MAX)) as i32
    }

    #[inline]
    fn cell_origin(index: i32, origin: Self, cell_size: Self) -> Self {
        origin.saturating_add(Self::from(index).saturating_mul(cell_size))
    }
}

/// Geometry of a uniform grid: origin, cell size and dimensions.
///
/// The covered area is `[origin_x, origin_x + ncols * cell_width) ×
/// [origin_y, origin_y + nrows * cell_height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTraversal<T: GridScalar> {
    origin_x: T,
    origin_y: T,
    cell_width: T,
    cell_height: T,
    ncols: i32,
    nrows: i32,
}

impl<T: GridScalar> GridTraversal<T> {
    /// Create a grid with its lower-left corner at `(origin_x, origin_y)`.
    pub fn new(
        origin_x: T,
        origin_y: T,
        cell_width: T,
        cell_height: T,
        ncols: i32,
        nrows: i32,
    ) -> Self {
        debug_assert!(cell_width > T::zero(), "cell_width must be strictly positive");
        debug_assert!(cell_height > T::zero(), "cell_height must be strictly positive");
        Self {
            origin_x,
            origin_y,
            cell_width,
            cell_height,
            ncols,
            nrows,
        }
    }

    /// Lower-left corner of cell `(0, 0)`.
    #[inline]
    pub fn origin(&self) -> Point2D<T> {
        Point2D::new(self.origin_x, self.origin_y)
    }

    /// Width of one cell.
    #[inline]
    pub fn cell_width(&self) -> T {
        self.cell_width
    }

    /// Height of one cell.
    #[inline]
    pub fn cell_height(&self) -> T {
        self.cell_height
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> i32 {
        self.ncols
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> i32 {
        self.nrows
    }

    /// Whether `(col, row)` names a cell of this grid.
    #[inline]
    pub fn contains_square(&self, col: i32, row: i32) -> bool {
        0 <= col && col < self.ncols && 0 <= row && row < self.nrows
    }

    /// The cell containing `point`. Not clamped to the grid.
    #[inline]
    pub fn square_at_point(&self, point: Point2D<T>) -> (i32, i32) {
        (
            T::cell_coord(point.x, self.origin_x, self.cell_width),
            T::cell_coord(point.y, self.origin_y, self.cell_height),
        )
    }

    /// The area covered by cell `(col, row)`, whether or not it is inside the grid.
    pub fn square_footprint(&self, col: i32, row: i32) -> Aabb2D<T> {
        Aabb2D::new(
            T::cell_origin(col, self.origin_x, self.cell_width),
            T::cell_origin(row, self.origin_y, self.cell_height),
            T::cell_origin(col.saturating_add(1), self.origin_x, self.cell_width),
            T::cell_origin(row.saturating_add(1), self.origin_y, self.cell_height),
        )
    }

    /// Walk the cells `segment` passes through, from its start cell to its end cell.
    ///
    /// The walk yields `|Δcol| + |Δrow| + 1` distinct cells, each a 4-neighbour
    /// of the previous one. When the segment passes exactly through a cell
    /// corner the column step is taken first. A zero-length segment yields
    /// the single cell containing it.
    ///
    /// ```
    /// use pathgrid_index::{GridTraversal, Segment2D};
    ///
    /// let grid = GridTraversal::new(0.0, 0.0, 1.0, 1.0, 4, 4);
    /// let cells: Vec<_> = grid.traverse(&Segment2D::from_coords(0.5, 0.5, 2.5, 1.5)).collect();
    /// assert_eq!(cells, [(0, 0), (1, 0), (1, 1), (2, 1)]);
    /// ```
    pub fn traverse(&self, segment: &Segment2D<T>) -> Squares {
        let (col, row) = self.square_at_point(segment.start);
        let (end_col, end_row) = self.square_at_point(segment.end);

        let ox = T::to_f64(self.origin_x);
        let oy = T::to_f64(self.origin_y);
        let x = Axis::new(
            col,
            end_col,
            T::to_f64(segment.start.x) - ox,
            T::to_f64(segment.end.x) - ox,
            T::to_f64(self.cell_width),
        );
        let y = Axis::new(
            row,
            end_row,
            T::to_f64(segment.start.y) - oy,
            T::to_f64(segment.end.y) - oy,
            T::to_f64(self.cell_height),
        );

        Squares {
            col,
            row,
            x,
            y,
            exhausted: false,
        }
    }
}

/// Stepping state along one axis.
#[derive(Clone, Copy, Debug)]
struct Axis {
    step: i32,
    remaining: u32,
    // Segment parameter at which the next cell boundary is crossed.
    t_max: f64,
    // Parameter distance between consecutive boundaries.
    t_delta: f64,
}

impl Axis {
    /// `from`/`to` are endpoint coordinates relative to the grid origin.
    fn new(cell: i32, end_cell: i32, from: f64, to: f64, cell_size: f64) -> Self {
        let delta = to - from;
        let step = match end_cell.cmp(&cell) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        };
        if step == 0 || delta == 0.0 {
            // Never crosses a boundary along this axis before the other one is done.
            return Self {
                step,
                remaining: cell.abs_diff(end_cell),
                t_max: f64::INFINITY,
                t_delta: f64::INFINITY,
            };
        }
        let boundary = if step > 0 {
            (f64::from(cell) + 1.0) * cell_size
        } else {
            f64::from(cell) * cell_size
        };
        Self {
            step,
            remaining: cell.abs_diff(end_cell),
            t_max: (boundary - from) / delta,
            t_delta: cell_size / delta.abs(),
        }
    }

    #[inline]
    fn advance(&mut self, coord: &mut i32) {
        *coord += self.step;
        self.t_max += self.t_delta;
        self.remaining -= 1;
    }
}

/// Iterator over the cells crossed by a segment, see [`GridTraversal::traverse`].
///
/// A clone continues from the current position. Calling
/// [`GridTraversal::traverse`] again with the same segment reproduces the walk.
#[derive(Clone, Debug)]
pub struct Squares {
    col: i32,
    row: i32,
    x: Axis,
    y: Axis,
    exhausted: bool,
}

impl Iterator for Squares {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = (self.col, self.row);

        // The counters, not the boundary parameters, decide when the walk
        // ends, so float error can reorder steps but never add or drop cells.
        let step_col =
            self.y.remaining == 0 || (self.x.remaining > 0 && self.x.t_max <= self.y.t_max);
        if self.x.remaining == 0 && self.y.remaining == 0 {
            self.exhausted = true;
        } else if step_col {
            self.x.advance(&mut self.col);
        } else {
            self.y.advance(&mut self.row);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.exhausted {
            0
        } else {
            self.x.remaining as usize + self.y.remaining as usize + 1
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

impl FusedIterator for Squares {}
