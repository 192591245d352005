//! Shared helpers for the engine and the frame loop.

#[macro_use]
pub mod utils;
pub mod random;
pub(crate) mod perf_timer;

pub use random::{RandomSource, XorShift32};
