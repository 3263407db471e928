// Copyright 2025 the Pathgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the pathgrid benchmarks.

use pathgrid_index::{Aabb2D, GridRangeQuery, Point2D, Result, Segment2D};

/// Deterministic xorshift generator so runs are comparable.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator. A zero seed is replaced since xorshift would stay at zero.
    pub fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed })
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        let unit = (self.0 >> 11) as f64 / (1_u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

/// Short road-like segments scattered over `extent`, each at most `max_len` long per axis.
pub fn synthetic_segments(extent: Aabb2D<f64>, count: usize, max_len: f64) -> Vec<Segment2D<f64>> {
    let mut rng = Rng::new(count as u64);
    (0..count)
        .map(|_| {
            let x = rng.range(extent.min_x + max_len, extent.max_x - max_len);
            let y = rng.range(extent.min_y + max_len, extent.max_y - max_len);
            let dx = rng.range(-max_len, max_len);
            let dy = rng.range(-max_len, max_len);
            Segment2D::new(Point2D::new(x, y), Point2D::new(x + dx, y + dy))
        })
        .collect()
}

/// A grid over `extent` with every segment inserted under its position as id.
///
/// Fails if the grid has no cells or a segment leaves it.
pub fn populated_grid(
    extent: Aabb2D<f64>,
    square: f64,
    segments: &[Segment2D<f64>],
) -> Result<GridRangeQuery<u32, f64>> {
    let mut grid = GridRangeQuery::try_new(extent, square, square)?;
    for (id, s) in (0_u32..).zip(segments) {
        grid.add_line_segment(id, s)?;
    }
    Ok(grid)
}
