use std::time::{Duration, Instant};

/// Wall-clock source for the tick accumulator.
///
/// Deltas are capped: a window that was dragged, minimized or stopped in a
/// debugger resumes with at most `max_delta` of game time.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: Duration,
}

impl Clock {
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(seconds: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta: Duration::from_secs_f32(seconds),
        }
    }

    /// Seconds since the previous call (or construction/reset), capped
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last_tick).min(self.max_delta);
        self.last_tick = now;
        delta.as_secs_f32()
    }

    /// Forget the time spent before now, e.g. window creation
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
