//! RenderState - per-cell visual intensity and trail
//!
//! Purely derived from the grid. Rebuilt whenever the grid is replaced.

use crate::config::TrailConfig;
use crate::engine::{Grid, ALIVE};

/// Cells fainter than this are not drawn.
pub const VISIBLE_INTENSITY: f32 = 0.01;

/// What one cell needs this frame after blending.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellPaint {
    /// Alpha of the afterglow square, if any.
    pub trail_alpha: Option<f32>,
    /// Alpha of the body square, if any.
    pub body_alpha: Option<f32>,
}

#[derive(Debug, Default)]
pub struct RenderState {
    cols: u32,
    rows: u32,
    intensity: Vec<f32>,
    trail: Vec<f32>,
}

impl RenderState {
    /// Intensity starts at the alive state so the first frame shows the seed
    /// without fading in; trails start empty.
    pub fn for_grid(grid: &Grid) -> Self {
        let intensity = grid
            .cells()
            .iter()
            .map(|&c| if c == ALIVE { 1.0 } else { 0.0 })
            .collect();
        Self {
            cols: grid.cols(),
            rows: grid.rows(),
            intensity,
            trail: vec![0.0; grid.size()],
        }
    }

    /// Whether this state was built for a grid of the same shape.
    pub fn matches(&self, grid: &Grid) -> bool {
        self.cols == grid.cols() && self.rows == grid.rows()
    }

    #[inline]
    pub fn intensity(&self, idx: usize) -> f32 {
        self.intensity[idx]
    }

    #[inline]
    pub fn trail(&self, idx: usize) -> f32 {
        self.trail[idx]
    }

    /// Move one cell toward its target and update its trail.
    pub fn advance(&mut self, idx: usize, alive: bool, blend: f32, trail: &TrailConfig) -> CellPaint {
        let target = if alive { 1.0 } else { 0.0 };
        let current = self.intensity[idx];
        let next = current + (target - current) * blend;
        self.intensity[idx] = next;

        let mut paint = CellPaint::default();
        if alive {
            self.trail[idx] = self.trail[idx].max(next);
        } else {
            let faded = self.trail[idx] * trail.decay;
            self.trail[idx] = faded;
            if faded > trail.min {
                paint.trail_alpha = Some((faded * trail.strength).min(1.0));
            }
        }

        if next > VISIBLE_INTENSITY {
            paint.body_alpha = Some((0.2 + next * 0.8).min(1.0));
        }
        paint
    }
}
