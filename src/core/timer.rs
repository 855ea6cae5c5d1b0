/// Self-contained timers. Each accumulates delta time and decides when to fire.

/// Fixed-step accumulator - yields game ticks at a constant rate regardless
/// of how often frames are drawn
#[derive(Debug, Clone)]
pub struct Accumulator {
    timestep: f32,
    accumulator: f32,
    max_steps: u8,
}

impl Accumulator {
    /// Create accumulator firing every `seconds`
    pub fn from_interval(seconds: f32, max_steps: u8) -> Self {
        Self {
            timestep: seconds,
            accumulator: 0.0,
            max_steps,
        }
    }

    /// Update with delta, returns iterator of fixed timesteps to execute.
    /// Time beyond `max_steps` is dropped so a stalled window does not
    /// replay a burst of ticks.
    pub fn tick(&mut self, delta: f32) -> impl Iterator<Item = f32> {
        self.accumulator += delta;

        let due = (self.accumulator / self.timestep) as usize;
        let steps = due.min(self.max_steps as usize);

        if due > steps {
            self.accumulator = 0.0;
        } else {
            self.accumulator -= steps as f32 * self.timestep;
        }

        std::iter::repeat(self.timestep).take(steps)
    }
}

/// Countdown timer - fires once after duration
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start (or restart) countdown
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Tick with delta, returns true if completed
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_yields_fixed_steps() {
        let mut acc = Accumulator::from_interval(0.05, 4);

        // Small delta - no steps
        assert_eq!(acc.tick(0.03).count(), 0);

        // Crosses one interval
        let steps: Vec<_> = acc.tick(0.03).collect();
        assert_eq!(steps, vec![0.05]);
    }

    #[test]
    fn accumulator_drops_time_past_max_steps() {
        let mut acc = Accumulator::from_interval(0.05, 4);

        assert_eq!(acc.tick(1.0).count(), 4);
        // Nothing of the stall carries over
        assert_eq!(acc.tick(0.04).count(), 0);
        assert_eq!(acc.tick(0.02).count(), 1);
    }

    #[test]
    fn countdown_fires_once() {
        let mut timer = Countdown::new(1.0);

        assert!(!timer.tick(0.5)); // Not started

        timer.start();
        assert!(!timer.tick(0.5)); // In progress
        assert!(timer.tick(0.6)); // Complete
        assert!(!timer.tick(0.1)); // Inactive again
    }

    #[test]
    fn countdown_restart_resets_elapsed() {
        let mut timer = Countdown::new(1.0);
        timer.start();
        assert!(!timer.tick(0.9));

        timer.start();
        assert!(!timer.tick(0.9));
        assert!(timer.tick(0.2));
    }
}
