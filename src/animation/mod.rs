//! Animation - the per-frame loop
//!
//! Each animation callback asks the clock whether a generation is due, steps
//! the engine if so, then repaints unconditionally. Scheduling the next
//! callback belongs to the browser binding; this module only tracks whether
//! the loop should keep going.

pub mod clock;

use crate::config::LifeConfig;
use crate::engine::{LifeEngine, StepReport};
use crate::render::{Painter, RenderStrategy, Surface};

pub use clock::{SimulationClock, Tick};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

/// Counters kept for debugging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub generation: u64,
    pub alive: u32,
    pub reseeds: u64,
    pub frames: u64,
    pub last_step_ms: f64,
}

/// Result of one animation callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// The loop is idle; nothing was drawn and nothing should be scheduled.
    Skipped,
    /// Repainted, optionally after a generation.
    Painted(Option<StepReport>),
}

impl FrameOutcome {
    pub fn stepped(&self) -> bool {
        matches!(self, FrameOutcome::Painted(Some(_)))
    }
}

pub struct FrameLoop {
    clock: SimulationClock,
    state: LoopState,
    painter: Painter,
    stats: FrameStats,
}

impl FrameLoop {
    pub fn new(config: &LifeConfig, strategy: RenderStrategy) -> Self {
        Self {
            clock: SimulationClock::new(config.update_interval_ms),
            state: LoopState::Idle,
            painter: Painter::new(config, strategy),
            stats: FrameStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.painter.strategy()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    /// Idle -> Running with the clock restarted at `now`.
    /// Returns false if the loop was already running.
    pub fn begin(&mut self, now: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.clock.reset(now);
        self.state = LoopState::Running;
        true
    }

    /// Running -> Idle. Returns false if the loop was already idle.
    pub fn halt(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = LoopState::Idle;
        true
    }

    /// The engine got a new grid: drop per-cell render state and paint it
    /// once without any transition.
    pub fn restart_render<S: Surface + ?Sized>(&mut self, engine: &LifeEngine, surface: &mut S) {
        self.painter.reset(engine.grid());
        self.painter.paint(engine.grid(), 0.0, surface);
        self.stats.generation = engine.generation();
        self.stats.alive = engine.grid().alive_count();
    }

    /// One animation callback at timestamp `now` (ms).
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        engine: &mut LifeEngine,
        now: f64,
        surface: &mut S,
    ) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Skipped;
        }

        let tick = self.clock.tick(now);
        let report = if tick.step_due {
            let report = engine.step();
            self.stats.generation = engine.generation();
            self.stats.alive = report.alive;
            self.stats.reseeds = engine.reseeds();
            self.stats.last_step_ms = report.step_ms;
            Some(report)
        } else {
            None
        };

        self.painter.paint(engine.grid(), tick.delta_seconds, surface);
        self.stats.frames += 1;

        FrameOutcome::Painted(report)
    }
}
