//! SimulationClock - fixed-rate generations on a variable-rate display

/// What one animation callback should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// At least one update interval elapsed since the last generation.
    pub step_due: bool,
    /// Seconds since the previous frame, 0 on the first frame after a reset.
    pub delta_seconds: f64,
}

#[derive(Clone, Debug)]
pub struct SimulationClock {
    interval_ms: f64,
    last_update: f64,
    last_frame: Option<f64>,
}

impl SimulationClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_update: 0.0,
            last_frame: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Restart timing from `now`. The next generation is one full interval away.
    pub fn reset(&mut self, now: f64) {
        self.last_update = now;
        self.last_frame = None;
    }

    /// Advance to `now` (milliseconds, same origin as `reset`).
    ///
    /// Steps at most once per call no matter how long the gap was, so a
    /// backgrounded tab does not fast-forward on return.
    pub fn tick(&mut self, now: f64) -> Tick {
        let delta_seconds = match self.last_frame {
            Some(prev) => ((now - prev) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_frame = Some(now);

        let step_due = now - self.last_update >= self.interval_ms;
        if step_due {
            self.last_update = now;
        }

        Tick {
            step_due,
            delta_seconds,
        }
    }
}
