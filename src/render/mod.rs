//! Render - paints the grid onto a `Surface`
//!
//! The strategy is picked once when the background starts and never changes
//! afterwards.

pub mod painter;
pub mod state;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::config::RenderMode;

pub use painter::{PaintStyle, Painter};
pub use state::{CellPaint, RenderState};
pub use surface::{DrawOp, RecordingSurface, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Flat squares for live cells, nothing else.
    Baseline,
    /// Interpolated intensity, fading trails and a grid overlay.
    Enhanced,
}

impl RenderStrategy {
    /// `Auto` turns the animation down for users who asked for reduced motion.
    pub fn resolve(mode: RenderMode, prefers_reduced_motion: bool) -> Self {
        match mode {
            RenderMode::Enhanced => RenderStrategy::Enhanced,
            RenderMode::Baseline => RenderStrategy::Baseline,
            RenderMode::Auto if prefers_reduced_motion => RenderStrategy::Baseline,
            RenderMode::Auto => RenderStrategy::Enhanced,
        }
    }
}
