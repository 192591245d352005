use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.cols && y < self.rows,
            "index: ({}, {}) outside {}x{} grid",
            x,
            y,
            self.cols,
            self.rows
        );
        y as usize * self.cols as usize + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((idx % cols) as u32, (idx / cols) as u32)
    }

    // === Toroidal wrap ===
    /// `(x + dx + cols) mod cols`: stepping off one edge lands on the other.
    #[inline]
    pub fn wrap_x(&self, x: u32, dx: i32) -> u32 {
        wrap(x, dx, self.cols)
    }

    #[inline]
    pub fn wrap_y(&self, y: u32, dy: i32) -> u32 {
        wrap(y, dy, self.rows)
    }
}

#[inline(always)]
pub(super) fn wrap(v: u32, delta: i32, extent: u32) -> u32 {
    (v as i64 + delta as i64).rem_euclid(extent as i64) as u32
}
