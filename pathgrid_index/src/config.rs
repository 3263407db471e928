// Copyright 2025 the Pathgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell size configuration for a grid.

use crate::error::{GridError, Result};
use crate::traversal::GridScalar;
use crate::types::Aabb2D;

/// Cell dimensions used to partition a bounding box.
///
/// With the `serde` feature this can be loaded alongside other per-region
/// settings, e.g. `{ "square_width": 0.0025, "square_height": 0.0025 }`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<T> {
    /// Width of one cell, in the same units as the bounding box.
    pub square_width: T,
    /// Height of one cell, in the same units as the bounding box.
    pub square_height: T,
}

impl<T> GridConfig<T> {
    /// Create a configuration with distinct cell width and height.
    pub const fn new(square_width: T, square_height: T) -> Self {
        Self {
            square_width,
            square_height,
        }
    }
}

impl<T: Copy> GridConfig<T> {
    /// Create a configuration with square cells.
    pub const fn square(size: T) -> Self {
        Self {
            square_width: size,
            square_height: size,
        }
    }
}

impl<T: GridScalar> GridConfig<T> {
    /// Number of whole cells that fit into `bbox` along each axis, as `(ncols, nrows)`.
    ///
    /// Partial cells at the maximum edges are dropped, so the covered area can be
    /// smaller than `bbox`. Inverted boxes and non-positive cell sizes give zero.
    pub fn dimensions(&self, bbox: &Aabb2D<T>) -> (i32, i32) {
        if !(self.square_width > T::zero() && self.square_height > T::zero()) {
            return (0, 0);
        }
        let ncols = T::cell_coord(bbox.max_x, bbox.min_x, self.square_width).max(0);
        let nrows = T::cell_coord(bbox.max_y, bbox.min_y, self.square_height).max(0);
        (ncols, nrows)
    }

    /// Like [`dimensions`][Self::dimensions], but fails if either dimension is zero.
    pub fn validate(&self, bbox: &Aabb2D<T>) -> Result<(i32, i32)> {
        let (ncols, nrows) = self.dimensions(bbox);
        if ncols == 0 || nrows == 0 {
            return Err(GridError::EmptyGrid { ncols, nrows });
        }
        Ok((ncols, nrows))
    }

    /// Whether the grid built from `bbox` leaves an unindexed strip along the maximum edges.
    pub fn has_residual(&self, bbox: &Aabb2D<T>) -> bool {
        let (ncols, nrows) = self.dimensions(bbox);
        T::cell_origin(ncols, bbox.min_x, self.square_width) < bbox.max_x
            || T::cell_origin(nrows, bbox.min_y, self.square_height) < bbox.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_covers_whole_box() {
        let cfg = GridConfig::square(1.0_f64);
        let bbox = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(cfg.dimensions(&bbox), (10, 10));
        assert!(!cfg.has_residual(&bbox));
    }

    #[test]
    fn partial_cells_are_dropped() {
        let cfg = GridConfig::new(3_i64, 4);
        let bbox = Aabb2D::new(0, 0, 10, 10);
        assert_eq!(cfg.dimensions(&bbox), (3, 2));
        assert!(cfg.has_residual(&bbox));
    }

    #[test]
    fn validate_rejects_empty_grids() {
        let bbox = Aabb2D::new(0.0_f32, 0.0, 10.0, 1.0);
        assert_eq!(
            GridConfig::new(1.0, 2.0).validate(&bbox),
            Err(GridError::EmptyGrid {
                ncols: 10,
                nrows: 0
            })
        );
        assert_eq!(GridConfig::new(1.0, 0.5).validate(&bbox), Ok((10, 2)));
        assert!(GridConfig::square(0.0).validate(&bbox).is_err());
    }

    #[test]
    fn non_positive_square_size_has_no_cells() {
        let bbox = Aabb2D::new(0.0_f64, 0.0, 10.0, 10.0);
        assert_eq!(GridConfig::new(0.0, 1.0).dimensions(&bbox), (0, 0));
        assert_eq!(GridConfig::new(1.0, -2.0).dimensions(&bbox), (0, 0));
        assert_eq!(GridConfig::square(0_i64).dimensions(&Aabb2D::new(0, 0, 5, 5)), (0, 0));
    }
}
