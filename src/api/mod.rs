//! Host bindings
//!
//! Everything that touches the DOM lives here and only builds for wasm32.
//! The rest of the crate is plain Rust driven through `HeroController`.

use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
pub mod web;

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Marks the page as booted. Only the first call returns true; later
/// `init`/`initWithConfig` calls must leave the running background alone.
pub fn claim_boot() -> bool {
    BOOTED.with(|booted| !booted.replace(true))
}
