use crate::config::LifeConfig;

/// Alive-count range that is still worth watching. Outside it the field is
/// either dying out or choking, and the engine starts over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivityBand {
    pub min_alive: u32,
    pub max_ratio: f64,
}

impl ActivityBand {
    pub fn from_config(config: &LifeConfig) -> Self {
        Self {
            min_alive: config.min_alive,
            max_ratio: config.max_alive_ratio,
        }
    }

    /// Below the floor, or at/above `max_ratio` of all cells.
    #[inline]
    pub fn needs_reseed(&self, alive: u32, total_cells: usize) -> bool {
        alive < self.min_alive || alive as f64 >= total_cells as f64 * self.max_ratio
    }
}
