//! Seeding: random noise plus three gliders
//!
//! Random soup under B3/S23 burns out into still lifes within a few dozen
//! generations. The gliders keep something moving across the hero until the
//! activity band forces the next reseed.

use crate::engine::grid::Grid;
use crate::support::RandomSource;

/// Glider rows (dy = 0..3), columns are dx. Travels down-right.
pub const GLIDER: [[bool; 3]; 3] = [
    [false, true, false],
    [false, false, true],
    [true, true, true],
];

/// Gliders are only stamped when both dimensions exceed this.
pub const GLIDER_MIN_EXTENT: u32 = 20;

/// Top-left corners of the three gliders, or `None` on small grids.
pub fn glider_anchors(cols: u32, rows: u32) -> Option<[(u32, u32); 3]> {
    if cols <= GLIDER_MIN_EXTENT || rows <= GLIDER_MIN_EXTENT {
        return None;
    }
    let at = |extent: u32, frac: f64| (extent as f64 * frac).floor() as u32;
    Some([
        (5, 5),
        (at(cols, 0.7), at(rows, 0.3)),
        (at(cols, 0.3), at(rows, 0.7)),
    ])
}

/// Force the glider's live cells on. Cells past the right or bottom edge are
/// clipped rather than wrapped; nothing is ever switched off.
pub fn stamp_glider(grid: &mut Grid, x: u32, y: u32) {
    for (dy, row) in GLIDER.iter().enumerate() {
        for (dx, &on) in row.iter().enumerate() {
            let (cx, cy) = (x + dx as u32, y + dy as u32);
            if on && cx < grid.cols() && cy < grid.rows() {
                grid.set_alive(cx, cy, true);
            }
        }
    }
}

/// Replace the displayed generation with fresh noise at `density`, then OR the
/// gliders on top.
pub fn seed(grid: &mut Grid, rng: &mut dyn RandomSource, density: f64) {
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            grid.set_alive(x, y, rng.next_unit() < density);
        }
    }

    if let Some(anchors) = glider_anchors(grid.cols(), grid.rows()) {
        for (x, y) in anchors {
            stamp_glider(grid, x, y);
        }
    }
}
