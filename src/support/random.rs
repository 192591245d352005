//! Uniform random draws for seeding.
//!
//! The engine only ever needs a value in `[0, 1)` per cell, so the source is a
//! one-method trait. Tests and native runs use the seedable xorshift; the
//! browser build can use `Math.random()` instead.

/// Uniform random source in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Random number generator (xorshift32)
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Zero is a fixed point of xorshift, so it is remapped.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        // u32::MAX + 1 keeps the result strictly below 1.0
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// `Math.random()` from the host page.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for JsRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
