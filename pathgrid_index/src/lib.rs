// Copyright 2025 the Pathgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pathgrid Index: a uniform grid that buckets line segments for map matching.
//!
//! A map matcher needs, for every GPS sample, the handful of road edges near that
//! sample. This crate answers that question in sub-linear time:
//!
//! - [`GridTraversal`] rasterizes a line segment into the exact sequence of grid
//!   cells it passes through, and maps points to cells.
//! - [`GridRangeQuery`] owns one bucket per cell, appends an item to every cell its
//!   segment crosses, and unions the buckets under a query rectangle into a
//!   deduplicated [`HashSet`].
//!
//! The grid is fixed at construction from a bounding box and a cell size, is
//! append-only, and lives in memory for as long as its region is loaded. It is
//! generic over the coordinate type `T` (`f32`, `f64` or `i64`) and over the item
//! type `I`, which only needs `Clone + Eq + Hash` to be queried.
//!
//! # Example
//!
//! ```rust
//! use pathgrid_index::{Aabb2D, GridRangeQuery, Segment2D};
//!
//! // One region, 10x10 cells of one unit each.
//! let mut grid: GridRangeQuery<u32, f64> =
//!     GridRangeQuery::new(Aabb2D::new(0.0, 0.0, 10.0, 10.0), 1.0, 1.0);
//!
//! // Index two road edges by their geometry.
//! grid.add_line_segment(1, &Segment2D::from_coords(0.5, 0.5, 0.5, 9.5))?;
//! grid.add_line_segment(2, &Segment2D::from_coords(2.5, 5.5, 8.5, 5.5))?;
//!
//! // Candidate edges around a sample at (0.7, 5.2).
//! let candidates = grid.query(&Aabb2D::new(0.2, 4.7, 1.2, 5.7));
//! assert!(candidates.contains(&1));
//! assert!(!candidates.contains(&2));
//!
//! // Geometry outside the covered area is an error, not a silent clamp.
//! assert!(grid.add_line_segment(3, &Segment2D::from_coords(-5.0, -5.0, -5.0, 5.0)).is_err());
//! # Ok::<(), pathgrid_index::GridError>(())
//! ```
//!
//! ## Bounds
//!
//! The covered area is `[min_x, min_x + ncols * square_width) ×
//! [min_y, min_y + nrows * square_height)` where `ncols` and `nrows` count the whole
//! cells that fit into the bounding box. Insertions that touch a cell outside it
//! fail with [`GridError::SegmentOutOfBounds`] and leave the grid unchanged, and
//! [`GridRangeQuery::get_items_in_square`] fails with
//! [`GridError::SquareOutOfBounds`]. Queries never fail; their rectangle is clamped
//! to the nearest edge cells instead.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the geometry types and
//!   [`GridConfig`].
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds assert
//! that cell sizes are positive.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod range_query;
mod traversal;
mod types;

pub use config::GridConfig;
pub use error::{GridError, Result};
pub use hashbrown::HashSet;
pub use range_query::GridRangeQuery;
pub use traversal::{GridScalar, GridTraversal, Squares};
pub use types::{Aabb2D, Point2D, Scalar, Segment2D};
