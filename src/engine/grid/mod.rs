//! Grid - double-buffered boolean cell field
//!
//! Cells are stored row-major as bytes (`DEAD`/`ALIVE`) so a generation is a
//! straight pass over two flat arrays:
//!   current[] - the generation being displayed
//!   next[]    - scratch written by `step`, then swapped in
//!
//! Both buffers are always `cols * rows` long. Resizing never mutates a grid in
//! place; the owner builds a new one and drops the old pair with it.

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

mod indexing;
mod neighbors;
mod generation;

pub use generation::next_state;

pub struct Grid {
    cols: u32,
    rows: u32,
    size: usize,

    current: Vec<u8>,
    next: Vec<u8>,
}

impl Grid {
    /// All-dead grid of `cols x rows` cells.
    pub fn new(cols: u32, rows: u32) -> Self {
        let size = cols as usize * rows as usize;
        Self {
            cols,
            rows,
            size,
            current: vec![DEAD; size],
            next: vec![DEAD; size],
        }
    }

    /// All-dead grid covering a canvas of `width_px x height_px`.
    pub fn for_canvas(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        let (cols, rows) = Self::dimensions_for(width_px, height_px, cell_size);
        Self::new(cols, rows)
    }

    /// Whole cells that fit on the canvas; partial cells are dropped.
    pub fn dimensions_for(width_px: u32, height_px: u32, cell_size: u32) -> (u32, u32) {
        if cell_size == 0 {
            return (0, 0);
        }
        (width_px / cell_size, height_px / cell_size)
    }

    /// A zero-column or zero-row grid has no cells to step or paint.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.current[self.index(x, y)] == ALIVE
    }

    pub fn set_alive(&mut self, x: u32, y: u32, alive: bool) {
        let idx = self.index(x, y);
        self.current[idx] = if alive { ALIVE } else { DEAD };
    }

    /// Kill every cell in the displayed generation.
    pub fn clear(&mut self) {
        self.current.fill(DEAD);
    }

    pub fn alive_count(&self) -> u32 {
        self.current.iter().map(|&c| c as u32).sum()
    }

    /// Coordinates of every live cell, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.current
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == ALIVE)
            .map(move |(idx, _)| self.coords(idx))
    }

    /// Displayed generation, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.current
    }

    /// Buffer that held the displayed generation before the last swap.
    #[cfg(test)]
    #[inline]
    pub(crate) fn back_buffer(&self) -> &[u8] {
        &self.next
    }
}
