use crate::animation::{FrameLoop, FrameOutcome, FrameStats, LoopState};
use crate::config::LifeConfig;
use crate::engine::LifeEngine;
use crate::render::{RenderStrategy, Surface};
use crate::support::RandomSource;

use super::discovery::{CanvasDiscovery, Discovery};

/// What a `pageshow` led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resume {
    /// Never started. Discovery is left exactly as it was.
    NotStarted,
    /// The loop was still running.
    AlreadyRunning,
    /// The loop was idle and now runs again from the current grid.
    Restarted,
}

pub struct HeroController {
    config: LifeConfig,
    engine: LifeEngine,
    frames: FrameLoop,
    discovery: CanvasDiscovery,
    started: bool,
}

impl HeroController {
    /// `config` must already be validated.
    pub fn new(config: LifeConfig, rng: Box<dyn RandomSource>, prefers_reduced_motion: bool) -> Self {
        let strategy = RenderStrategy::resolve(config.render_mode, prefers_reduced_motion);
        Self {
            engine: LifeEngine::new(&config, rng),
            frames: FrameLoop::new(&config, strategy),
            discovery: CanvasDiscovery::new(&config.discovery),
            started: false,
            config,
        }
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut LifeEngine {
        &mut self.engine
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.frames.strategy()
    }

    pub fn loop_state(&self) -> LoopState {
        self.frames.state()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn stats(&self) -> FrameStats {
        self.frames.stats()
    }

    /// Judge one canvas lookup.
    pub fn discover(&mut self, found: bool) -> Discovery {
        if self.started {
            return Discovery::AlreadyStarted;
        }
        self.discovery.next(found)
    }

    /// First start on a surface that will be `width x height` pixels.
    /// Returns false, touching nothing, if already started.
    pub fn start<S: Surface + ?Sized>(&mut self, width: u32, height: u32, now: f64, surface: &mut S) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.rebuild(width, height, surface);
        self.frames.begin(now);

        let grid = self.engine.grid();
        log::debug!(
            "hero background started: {}x{} cells, {:?}",
            grid.cols(),
            grid.rows(),
            self.frames.strategy()
        );
        true
    }

    /// New container size: fresh grid, fresh seed, immediate repaint.
    /// Ignored before start.
    pub fn resize<S: Surface + ?Sized>(&mut self, width: u32, height: u32, surface: &mut S) -> bool {
        if !self.started {
            return false;
        }
        self.rebuild(width, height, surface);
        log::debug!("hero background resized to {}x{} px", width, height);
        true
    }

    fn rebuild<S: Surface + ?Sized>(&mut self, width: u32, height: u32, surface: &mut S) {
        surface.resize(width, height);
        self.engine.initialize(width, height);
        self.frames.restart_render(&self.engine, surface);
    }

    /// One animation callback.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: f64, surface: &mut S) -> FrameOutcome {
        self.frames.frame(&mut self.engine, now, surface)
    }

    /// Page hidden. Returns true if a running loop was halted; the caller
    /// cancels its pending frame either way.
    pub fn stop(&mut self) -> bool {
        let halted = self.frames.halt();
        if halted {
            log::debug!("hero background paused at generation {}", self.engine.generation());
        }
        halted
    }

    /// Page shown again.
    pub fn resume(&mut self, now: f64) -> Resume {
        if !self.started {
            return Resume::NotStarted;
        }
        if self.frames.begin(now) {
            log::debug!("hero background resumed at generation {}", self.engine.generation());
            Resume::Restarted
        } else {
            Resume::AlreadyRunning
        }
    }
}
