// Copyright 2025 the Pathgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for grid construction, insertion and cell access.

/// Errors reported by [`GridRangeQuery`][crate::GridRangeQuery] and [`GridConfig`][crate::GridConfig].
///
/// Query operations never fail; out-of-range query rectangles are clamped instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A segment passed to
    /// [`add_line_segment`][crate::GridRangeQuery::add_line_segment] crosses a
    /// cell outside the grid's covered area.
    #[error("segment crosses square ({col} {row}) outside the grid bounds ({ncols}x{nrows} squares)")]
    SegmentOutOfBounds {
        /// Column of the first offending cell.
        col: i32,
        /// Row of the first offending cell.
        row: i32,
        /// Number of columns in the grid.
        ncols: i32,
        /// Number of rows in the grid.
        nrows: i32,
    },

    /// A direct cell lookup used indices outside the grid.
    #[error("square ({col} {row}) is out of the grid bounds ({ncols}x{nrows} squares)")]
    SquareOutOfBounds {
        /// Requested column.
        col: i32,
        /// Requested row.
        row: i32,
        /// Number of columns in the grid.
        ncols: i32,
        /// Number of rows in the grid.
        nrows: i32,
    },

    /// The cell size does not fit even once into the bounding box along some axis.
    #[error("cell size leaves an empty grid ({ncols}x{nrows} squares)")]
    EmptyGrid {
        /// Number of columns the configuration produced.
        ncols: i32,
        /// Number of rows the configuration produced.
        nrows: i32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GridError>;
