//! Hero Life - Game of Life background for the portfolio hero section
//!
//! Architecture:
//! - support/    - RNG, step timing, indexing macro
//! - engine/     - double-buffered grid, B3/S23 stepping, seeding, reseeds
//! - render/     - drawing surface, painter, canvas backend
//! - animation/  - fixed-interval clock and the per-frame loop
//! - lifecycle/  - canvas discovery, start/stop/resume, resize
//! - api/        - browser binding (wasm32 only)

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod support;
pub mod animation;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod render;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

pub use animation::{FrameLoop, FrameStats, LoopState};
pub use config::{LifeConfig, RenderMode};
pub use engine::{Grid, LifeEngine, StepReport};
pub use error::{LifeError, LifeResult};
pub use lifecycle::{HeroController, Resume};
pub use render::{RecordingSurface, RenderStrategy, Surface};
pub use support::{RandomSource, XorShift32};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Start the background with the default look.
#[wasm_bindgen]
pub fn init() {
    launch(LifeConfig::default());
}

/// Start the background with a JSON config (camelCase, any subset of fields).
/// Only an invalid config is reported back; everything later fails silently.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(json: &str) -> Result<(), JsValue> {
    let config = LifeConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    launch(config);
    Ok(())
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn launch(config: LifeConfig) {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    if !api::claim_boot() {
        log::debug!("hero background already booted");
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        init_logging();
        web_sys::console::log_1(&"🦀 Hero Life background initialized!".into());
        if let Err(err) = api::web::boot(config) {
            log::debug!("hero background unavailable: {err}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = config;
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
}
