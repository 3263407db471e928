// Copyright 2025 the Pathgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size grid of item buckets with rectangle range queries.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::traversal::{GridScalar, GridTraversal};
use crate::types::{Aabb2D, Segment2D};

// Most cells of a road network hold a handful of edges.
type Bucket<I> = SmallVec<[I; 4]>;

/// A uniform grid over a bounding box that buckets items by the cells their
/// line segments cross.
///
/// The grid has `ncols × nrows` cells of `square_width × square_height`, anchored
/// at the minimum corner of the bounding box. Buckets are append-only: inserting
/// the same item twice stores it twice, while [`query`][Self::query] results are
/// deduplicated.
///
/// Insertions need `&mut self` and queries `&self`, so a fully built grid can be
/// shared between threads for concurrent queries.
///
/// ```
/// use pathgrid_index::{Aabb2D, GridRangeQuery, Segment2D};
///
/// let mut grid = GridRangeQuery::new(Aabb2D::new(0.0, 0.0, 10.0, 10.0), 1.0, 1.0);
/// grid.add_line_segment("A", &Segment2D::from_coords(0.5, 0.5, 0.5, 9.5))?;
///
/// assert!(grid.query(&Aabb2D::new(0.0, 0.0, 1.0, 10.0)).contains("A"));
/// assert!(grid.query(&Aabb2D::new(5.0, 5.0, 6.0, 6.0)).is_empty());
/// # Ok::<(), pathgrid_index::GridError>(())
/// ```
pub struct GridRangeQuery<I, T: GridScalar> {
    bbox: Aabb2D<T>,
    grid: GridTraversal<T>,
    buckets: Vec<Bucket<I>>,
    len: usize,
}

impl<I, T: GridScalar> Debug for GridRangeQuery<I, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let occupied = self.buckets.iter().filter(|b| !b.is_empty()).count();
        f.debug_struct("GridRangeQuery")
            .field("bbox", &self.bbox)
            .field("ncols", &self.grid.ncols())
            .field("nrows", &self.grid.nrows())
            .field("square_width", &self.grid.cell_width())
            .field("square_height", &self.grid.cell_height())
            .field("entries", &self.len)
            .field("occupied_squares", &occupied)
            .finish_non_exhaustive()
    }
}

impl<I, T: GridScalar> GridRangeQuery<I, T> {
    /// Create an empty grid over `bbox` with the given cell size.
    ///
    /// The cell sizes must be positive and small enough that at least one
    /// column and one row fit into `bbox`. A grid without cells accepts no
    /// segments and answers every query with an empty set; use
    /// [`try_new`][Self::try_new] to reject such a configuration, including
    /// zero or negative cell sizes, up front.
    pub fn new(bbox: Aabb2D<T>, square_width: T, square_height: T) -> Self {
        Self::from_config(bbox, &GridConfig::new(square_width, square_height))
    }

    /// Create an empty grid, failing with [`GridError::EmptyGrid`] if it would have no cells.
    pub fn try_new(bbox: Aabb2D<T>, square_width: T, square_height: T) -> Result<Self> {
        let config = GridConfig::new(square_width, square_height);
        config.validate(&bbox)?;
        Ok(Self::from_config(bbox, &config))
    }

    /// Create an empty grid over `bbox` using a [`GridConfig`].
    ///
    /// Non-positive cell sizes are a caller error: debug builds panic, release
    /// builds get a grid without cells.
    pub fn from_config(bbox: Aabb2D<T>, config: &GridConfig<T>) -> Self {
        debug_assert!(
            config.square_width > T::zero() && config.square_height > T::zero(),
            "square sizes must be strictly positive"
        );
        let (ncols, nrows) = config.dimensions(&bbox);
        log::debug!(
            "building {ncols}x{nrows} grid over {bbox:?} with {:?}x{:?} squares",
            config.square_width,
            config.square_height
        );
        if ncols == 0 || nrows == 0 {
            log::warn!("grid over {bbox:?} has no squares; every insertion will fail");
        } else if config.has_residual(&bbox) {
            log::warn!(
                "bounding box {bbox:?} is not a multiple of the square size; \
                 geometry near its maximum edges cannot be indexed"
            );
        }

        let grid = GridTraversal::new(
            bbox.min_x,
            bbox.min_y,
            config.square_width,
            config.square_height,
            ncols,
            nrows,
        );
        let mut buckets = Vec::new();
        buckets.resize_with(
            ncols.unsigned_abs() as usize * nrows.unsigned_abs() as usize,
            SmallVec::new,
        );
        Self {
            bbox,
            grid,
            buckets,
            len: 0,
        }
    }

    /// The bounding box the grid was built from.
    #[inline]
    pub fn bbox(&self) -> &Aabb2D<T> {
        &self.bbox
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> i32 {
        self.grid.ncols()
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> i32 {
        self.grid.nrows()
    }

    /// Width of one cell.
    #[inline]
    pub fn square_width(&self) -> T {
        self.grid.cell_width()
    }

    /// Height of one cell.
    #[inline]
    pub fn square_height(&self) -> T {
        self.grid.cell_height()
    }

    /// The rasterizer describing this grid's geometry.
    #[inline]
    pub fn traversal(&self) -> &GridTraversal<T> {
        &self.grid
    }

    /// Total number of stored bucket entries, counting every cell an item was added to.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Items stored in cell `(col, row)`, in insertion order.
    pub fn get_items_in_square(&self, col: i32, row: i32) -> Result<&[I]> {
        self.check_square(col, row)?;
        Ok(self.buckets[self.slot(col, row)].as_slice())
    }

    /// Area covered by cell `(col, row)`.
    pub fn square_footprint(&self, col: i32, row: i32) -> Result<Aabb2D<T>> {
        self.check_square(col, row)?;
        Ok(self.grid.square_footprint(col, row))
    }

    /// Visit every cell overlapping `range` after clamping it to the grid.
    ///
    /// Calls `f(col, row, items)` row by row. Items may repeat across and within
    /// cells. Nothing is visited if the grid has no cells.
    pub fn visit_squares<F: FnMut(i32, i32, &[I])>(&self, range: &Aabb2D<T>, mut f: F) {
        let Some((min_col, min_row, max_col, max_row)) = self.clamped_squares(range) else {
            return;
        };
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                f(col, row, self.buckets[self.slot(col, row)].as_slice());
            }
        }
    }

    /// Map `range` to an inclusive cell rectangle clamped to the grid.
    fn clamped_squares(&self, range: &Aabb2D<T>) -> Option<(i32, i32, i32, i32)> {
        let (ncols, nrows) = (self.grid.ncols(), self.grid.nrows());
        if ncols == 0 || nrows == 0 {
            return None;
        }
        // Both corners are closed: a maximum edge lying on a cell boundary also
        // selects the cell starting there.
        let (min_col, min_row) = self.grid.square_at_point(range.min_point());
        let (max_col, max_row) = self.grid.square_at_point(range.max_point());

        Some((
            min_col.clamp(0, ncols - 1),
            min_row.clamp(0, nrows - 1),
            max_col.clamp(0, ncols - 1),
            max_row.clamp(0, nrows - 1),
        ))
    }

    fn check_square(&self, col: i32, row: i32) -> Result<()> {
        if self.grid.contains_square(col, row) {
            Ok(())
        } else {
            Err(GridError::SquareOutOfBounds {
                col,
                row,
                ncols: self.grid.ncols(),
                nrows: self.grid.nrows(),
            })
        }
    }

    /// Flat bucket index. Callers must have bounds-checked `(col, row)`.
    #[inline]
    fn slot(&self, col: i32, row: i32) -> usize {
        debug_assert!(
            self.grid.contains_square(col, row),
            "slot requested for square outside the grid"
        );
        let ncols = self.grid.ncols().unsigned_abs() as usize;
        col.unsigned_abs() as usize + row.unsigned_abs() as usize * ncols
    }
}

impl<I: Clone, T: GridScalar> GridRangeQuery<I, T> {
    /// Append `item` to the bucket of every cell `segment` passes through.
    ///
    /// Fails with [`GridError::SegmentOutOfBounds`] if any crossed cell lies
    /// outside the grid, which includes the strip of the bounding box left over
    /// when its size is not a multiple of the cell size. A failed insertion
    /// leaves the grid unchanged.
    pub fn add_line_segment(&mut self, item: I, segment: &Segment2D<T>) -> Result<()> {
        let squares = self.grid.traverse(segment);
        if let Some((col, row)) = squares
            .clone()
            .find(|&(col, row)| !self.grid.contains_square(col, row))
        {
            return Err(GridError::SegmentOutOfBounds {
                col,
                row,
                ncols: self.grid.ncols(),
                nrows: self.grid.nrows(),
            });
        }

        log::trace!("indexing segment {segment:?} into {} squares", squares.len());
        for (col, row) in squares {
            let slot = self.slot(col, row);
            self.buckets[slot].push(item.clone());
            self.len += 1;
        }
        Ok(())
    }
}

impl<I: Clone + Eq + Hash, T: GridScalar> GridRangeQuery<I, T> {
    /// Collect the distinct items stored in cells overlapping `range`.
    ///
    /// `range` is clamped to the grid, so this never fails: a rectangle outside
    /// the grid yields the items of the nearest edge cells.
    pub fn query(&self, range: &Aabb2D<T>) -> HashSet<I> {
        let mut out = HashSet::new();
        self.query_into(range, &mut out);
        out
    }

    /// Like [`query`][Self::query], but adds the items to `out` so its storage
    /// can be reused across queries.
    pub fn query_into(&self, range: &Aabb2D<T>, out: &mut HashSet<I>) {
        self.visit_squares(range, |_, _, items| out.extend(items.iter().cloned()));
    }
}
