//! Cell buffer access macro
//!
//! Debug builds index the slice normally so an out-of-range cell panics with a
//! readable message. Release builds use unchecked access in the generation
//! loop, where every index has already been wrapped into `0..cols*rows`.
//!
//! Usage:
//! ```rust
//! use hero_life::fast;
//!
//! let cells = vec![0u8, 1, 1, 0];
//! let alive = *fast!(cells, [2]);
//! assert_eq!(alive, 1);
//!
//! let mut next = vec![0u8; 4];
//! fast!(next, [3] = 1);
//! assert_eq!(next[3], 1);
//! ```

/// Bounds-checked in debug, unchecked in release.
///
/// - Read: `fast!(slice, [index])` yields a reference
/// - Write: `fast!(slice, [index] = value)`
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
