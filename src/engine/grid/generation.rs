use super::neighbors::count_in;
use super::*;

/// Conway B3/S23: survive on 2 or 3, birth on exactly 3.
#[inline(always)]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

impl Grid {
    /// Advance one generation and return the number of live cells in it.
    ///
    /// The new generation is written into the back buffer, then the two
    /// buffers trade places; nothing is copied or reallocated.
    pub fn step(&mut self) -> u32 {
        if self.is_degenerate() {
            return 0;
        }
        let alive = self.write_next_generation();
        std::mem::swap(&mut self.current, &mut self.next);
        alive
    }

    #[cfg(not(feature = "parallel"))]
    fn write_next_generation(&mut self) -> u32 {
        let (cols, rows) = (self.cols, self.rows);
        let current = &self.current;
        let next = &mut self.next;

        let mut alive = 0u32;
        for y in 0..rows {
            let row = y as usize * cols as usize;
            for x in 0..cols {
                let idx = row + x as usize;
                let neighbors = count_in(current, cols, rows, x, y);
                let state = next_state(*fast!(current, [idx]) == ALIVE, neighbors);
                fast!(next, [idx] = state as u8);
                alive += state as u32;
            }
        }
        alive
    }

    /// Rows are independent once `current` is frozen, so each rayon task owns
    /// one row of `next`.
    #[cfg(feature = "parallel")]
    fn write_next_generation(&mut self) -> u32 {
        use rayon::prelude::*;

        let (cols, rows) = (self.cols, self.rows);
        let current = &self.current;

        self.next
            .par_chunks_mut(cols as usize)
            .enumerate()
            .map(|(y, out)| {
                let row = y * cols as usize;
                let mut alive = 0u32;
                for x in 0..cols {
                    let neighbors = count_in(current, cols, rows, x, y as u32);
                    let state = next_state(current[row + x as usize] == ALIVE, neighbors);
                    out[x as usize] = state as u8;
                    alive += state as u32;
                }
                alive
            })
            .sum()
    }
}
