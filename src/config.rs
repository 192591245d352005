//! Background configuration
//!
//! Every knob has a default matching the site's look; a page may pass a JSON
//! object with any subset of the fields (camelCase) to `initWithConfig`.
//! Values are validated once at boot and never change afterwards.

use serde::Deserialize;

use crate::error::{LifeError, LifeResult};

/// 8-bit RGB color with a float alpha, written out as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub background: Rgba,
    pub alive: Rgba,
    pub trail: Rgba,
    pub grid: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(28, 28, 28),
            alive: Rgba::rgb(124, 199, 124),
            trail: Rgba::rgb(124, 199, 124),
            grid: Rgba::rgba(255, 255, 255, 0.05),
        }
    }
}

/// Fading afterglow left behind by cells that just died.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailConfig {
    /// Per-frame multiplier applied to a dead cell's trail.
    pub decay: f32,
    /// Trails at or below this are not drawn.
    pub min: f32,
    /// Trail to alpha scale.
    pub strength: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            decay: 0.86,
            min: 0.04,
            strength: 0.65,
        }
    }
}

/// Longest accepted pause between canvas lookups.
pub const MAX_RETRY_DELAY_MS: u32 = 60_000;

/// Where the canvas lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscoveryConfig {
    pub canvas_id: String,
    /// Element whose box size the canvas follows.
    pub container_id: String,
    pub max_attempts: u32,
    pub retry_delay_ms: u32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            canvas_id: "game-of-life-canvas".to_string(),
            container_id: "home".to_string(),
            max_attempts: 40,
            retry_delay_ms: 150,
        }
    }
}

/// Requested paint style. `Auto` defers to the user's reduced-motion preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Auto,
    Enhanced,
    Baseline,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifeConfig {
    /// Cell edge in canvas pixels.
    pub cell_size: u32,
    /// Minimum wall-clock time between generations.
    pub update_interval_ms: f64,
    /// Probability that a cell starts alive when seeding.
    pub seed_density: f64,
    /// Reseed when fewer cells than this survive a step.
    pub min_alive: u32,
    /// Reseed when at least this share of the grid is alive.
    pub max_alive_ratio: f64,
    /// Intensity interpolation rate per second.
    pub cell_transition_speed: f32,
    pub trail: TrailConfig,
    pub palette: Palette,
    pub render_mode: RenderMode,
    pub discovery: DiscoveryConfig,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: 10,
            update_interval_ms: 100.0,
            seed_density: 0.2,
            min_alive: 5,
            max_alive_ratio: 0.7,
            cell_transition_speed: 14.0,
            trail: TrailConfig::default(),
            palette: Palette::default(),
            render_mode: RenderMode::Auto,
            discovery: DiscoveryConfig::default(),
        }
    }
}

impl LifeConfig {
    /// Parse a (partial) JSON config over the defaults and validate it.
    pub fn from_json(json: &str) -> LifeResult<Self> {
        let config: LifeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LifeResult<()> {
        if self.cell_size == 0 {
            return Err(LifeError::invalid("cellSize", "must be greater than zero"));
        }
        if !(self.update_interval_ms.is_finite() && self.update_interval_ms > 0.0) {
            return Err(LifeError::invalid("updateIntervalMs", "must be a positive number"));
        }
        if !(0.0..=1.0).contains(&self.seed_density) {
            return Err(LifeError::invalid("seedDensity", "must be within [0, 1]"));
        }
        if !(self.max_alive_ratio > 0.0 && self.max_alive_ratio <= 1.0) {
            return Err(LifeError::invalid("maxAliveRatio", "must be within (0, 1]"));
        }
        if !(self.cell_transition_speed.is_finite() && self.cell_transition_speed >= 0.0) {
            return Err(LifeError::invalid("cellTransitionSpeed", "must be non-negative"));
        }
        if !(0.0..=1.0).contains(&self.trail.decay) {
            return Err(LifeError::invalid("trail.decay", "must be within [0, 1]"));
        }
        if self.discovery.canvas_id.is_empty() {
            return Err(LifeError::invalid("discovery.canvasId", "must not be empty"));
        }
        if self.discovery.container_id.is_empty() {
            return Err(LifeError::invalid("discovery.containerId", "must not be empty"));
        }
        if self.discovery.retry_delay_ms > MAX_RETRY_DELAY_MS {
            return Err(LifeError::invalid("discovery.retryDelayMs", "must be at most 60000"));
        }
        Ok(())
    }
}
