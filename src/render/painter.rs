//! Painter - turns the grid into draw calls
//!
//! Baseline draws live cells as flat squares. Enhanced blends each cell toward
//! its target over a few frames, leaves a fading trail behind dead cells and
//! overlays a faint cell grid.

use super::state::RenderState;
use super::surface::Surface;
use super::RenderStrategy;
use crate::config::{LifeConfig, TrailConfig};
use crate::engine::{Grid, ALIVE};

/// Line width of the cell grid overlay.
const GRID_LINE_WIDTH: f64 = 0.5;

/// CSS strings resolved once from the palette.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintStyle {
    pub background: String,
    pub alive: String,
    pub trail: String,
    pub grid: String,
}

impl PaintStyle {
    pub fn from_config(config: &LifeConfig) -> Self {
        let p = &config.palette;
        Self {
            background: p.background.css(),
            alive: p.alive.css(),
            trail: p.trail.css(),
            grid: p.grid.css(),
        }
    }
}

pub struct Painter {
    strategy: RenderStrategy,
    style: PaintStyle,
    trail: TrailConfig,
    cell_size: u32,
    transition_speed: f32,
    state: RenderState,
}

impl Painter {
    pub fn new(config: &LifeConfig, strategy: RenderStrategy) -> Self {
        Self {
            strategy,
            style: PaintStyle::from_config(config),
            trail: config.trail.clone(),
            cell_size: config.cell_size,
            transition_speed: config.cell_transition_speed,
            state: RenderState::default(),
        }
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn style(&self) -> &PaintStyle {
        &self.style
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Drop interpolation and trails and start over from `grid`.
    pub fn reset(&mut self, grid: &Grid) {
        self.state = RenderState::for_grid(grid);
    }

    /// Repaint the whole surface. `delta_seconds` is the time since the
    /// previous frame; 0 repaints without advancing any transition.
    pub fn paint<S: Surface + ?Sized>(&mut self, grid: &Grid, delta_seconds: f64, surface: &mut S) {
        surface.clear(&self.style.background);
        if grid.is_degenerate() {
            return;
        }

        match self.strategy {
            RenderStrategy::Baseline => self.paint_baseline(grid, surface),
            RenderStrategy::Enhanced => self.paint_enhanced(grid, delta_seconds, surface),
        }
    }

    fn paint_baseline<S: Surface + ?Sized>(&self, grid: &Grid, surface: &mut S) {
        let cs = self.cell_size as f64;
        for (x, y) in grid.alive_cells() {
            surface.fill_square(x as f64 * cs, y as f64 * cs, cs - 1.0, &self.style.alive, 1.0);
        }
    }

    fn paint_enhanced<S: Surface + ?Sized>(&mut self, grid: &Grid, delta_seconds: f64, surface: &mut S) {
        if !self.state.matches(grid) {
            self.reset(grid);
        }

        let blend = (delta_seconds.max(0.0) as f32 * self.transition_speed).clamp(0.0, 1.0);
        let cs = self.cell_size as f64;
        let side = cs - 1.0;

        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                let idx = grid.index(x, y);
                let alive = grid.cells()[idx] == ALIVE;
                let paint = self.state.advance(idx, alive, blend, &self.trail);

                let (px, py) = (x as f64 * cs, y as f64 * cs);
                if let Some(alpha) = paint.trail_alpha {
                    surface.fill_square(px, py, side, &self.style.trail, alpha as f64);
                }
                if let Some(alpha) = paint.body_alpha {
                    surface.fill_square(px, py, side, &self.style.alive, alpha as f64);
                }
            }
        }

        self.paint_grid_lines(grid, surface);
    }

    fn paint_grid_lines<S: Surface + ?Sized>(&self, grid: &Grid, surface: &mut S) {
        let (w, h) = surface.size();
        let (w, h) = (w as f64, h as f64);
        let cs = self.cell_size as f64;

        for x in 0..=grid.cols() {
            let px = x as f64 * cs;
            surface.line((px, 0.0), (px, h), &self.style.grid, GRID_LINE_WIDTH);
        }
        for y in 0..=grid.rows() {
            let py = y as f64 * cs;
            surface.line((0.0, py), (w, py), &self.style.grid, GRID_LINE_WIDTH);
        }
    }
}
