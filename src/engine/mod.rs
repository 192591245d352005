//! Engine - Game of Life state and generation stepping
//!
//! `LifeEngine` owns the double-buffered grid, the random source used for
//! seeding and the activity band that decides when to start over. It knows
//! nothing about canvases or time; the frame loop decides when to call `step`.

pub mod grid;
pub mod population;
pub mod seed;

use crate::config::LifeConfig;
use crate::support::perf_timer::PerfTimer;
use crate::support::RandomSource;

pub use grid::{next_state, Grid, ALIVE, DEAD};
pub use population::ActivityBand;

/// Outcome of one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Live cells produced by the rule, before any reseed.
    pub alive: u32,
    pub reseeded: bool,
    pub step_ms: f64,
}

pub struct LifeEngine {
    grid: Grid,
    rng: Box<dyn RandomSource>,

    cell_size: u32,
    density: f64,
    band: ActivityBand,

    generation: u64,
    reseeds: u64,
}

impl LifeEngine {
    /// Engine with an empty 0x0 grid; call `initialize` once the canvas size
    /// is known.
    pub fn new(config: &LifeConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            grid: Grid::new(0, 0),
            rng,
            cell_size: config.cell_size,
            density: config.seed_density,
            band: ActivityBand::from_config(config),
            generation: 0,
            reseeds: 0,
        }
    }

    /// Rebuild both buffers for a canvas of the given pixel size and seed them.
    ///
    /// The previous grid is dropped here, so its two buffers are released
    /// together as the new pair is moved in.
    pub fn initialize(&mut self, width_px: u32, height_px: u32) {
        self.grid = Grid::for_canvas(width_px, height_px, self.cell_size);
        self.generation = 0;
        self.seed();
    }

    /// Fresh noise plus gliders, discarding the current pattern.
    pub fn seed(&mut self) {
        seed::seed(&mut self.grid, self.rng.as_mut(), self.density);
    }

    /// One generation followed by the activity-band check.
    pub fn step(&mut self) -> StepReport {
        if self.grid.is_degenerate() {
            return StepReport::default();
        }

        let (alive, step_ms) = PerfTimer::measure(|| self.grid.step());
        self.generation += 1;

        let reseeded = self.band.needs_reseed(alive, self.grid.size());
        if reseeded {
            self.seed();
            self.reseeds += 1;
            log::trace!(
                "reseeding {}x{} grid at generation {} ({} alive)",
                self.grid.cols(),
                self.grid.rows(),
                self.generation,
                alive
            );
        }

        StepReport { alive, reseeded, step_ms }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct cell access for tests and pattern injection.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn band(&self) -> ActivityBand {
        self.band
    }

    /// Generations since the last `initialize`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reseeds triggered by the activity band over the engine's lifetime.
    pub fn reseeds(&self) -> u64 {
        self.reseeds
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
