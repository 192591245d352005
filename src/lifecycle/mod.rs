//! Lifecycle - finding the canvas, starting, pausing and resuming
//!
//! `HeroController` is the single owner of the engine and the frame loop.
//! The browser binding feeds it DOM signals and timestamps and acts on what
//! it returns; everything here runs headlessly.

pub mod controller;
pub mod discovery;

pub use controller::{HeroController, Resume};
pub use discovery::{CanvasDiscovery, Discovery};

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
