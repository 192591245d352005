use super::indexing::wrap;
use super::*;

impl Grid {
    /// Live cells among the 8 surrounding cells, wrapping at every edge.
    #[inline]
    pub fn count_neighbors(&self, x: u32, y: u32) -> u8 {
        count_in(&self.current, self.cols, self.rows, x, y)
    }
}

/// Neighbor count over a raw row-major buffer.
///
/// On grids narrower than 3 cells the wrapped neighbors repeat, and each
/// repeat is counted; a 1-wide torus sees a cell as its own neighbor.
#[inline]
pub(super) fn count_in(cells: &[u8], cols: u32, rows: u32, x: u32, y: u32) -> u8 {
    let cols_us = cols as usize;
    let xs = [wrap(x, -1, cols) as usize, x as usize, wrap(x, 1, cols) as usize];
    let ys = [wrap(y, -1, rows) as usize, y as usize, wrap(y, 1, rows) as usize];

    let mut count = 0u8;
    for (j, &ny) in ys.iter().enumerate() {
        let row = ny * cols_us;
        for (i, &nx) in xs.iter().enumerate() {
            if i == 1 && j == 1 {
                continue;
            }
            count += *fast!(cells, [row + nx]);
        }
    }
    count
}
