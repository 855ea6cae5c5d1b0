use log::debug;

use crate::core::timer::Countdown;

/// Height of the first bounce, in scene units before the 0.2 world scale
pub const INITIAL_PEAK: i32 = 8;
/// Each bounce peaks this much lower than the previous one
pub const PEAK_DECAY: i32 = 2;
pub const SETTLE_SECONDS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollPhase {
    Idle,
    /// Die 1 hops and spins every tick
    Bouncing,
    /// Motion is over; the value is drawn when the countdown fires
    Settling,
}

/// Bounce animation of a single roll
#[derive(Debug, Clone)]
pub struct DiceRoll {
    phase: RollPhase,
    height: i32,
    peak: i32,
    descending: bool,
    settle: Countdown,
}

impl Default for DiceRoll {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoll {
    pub fn new() -> Self {
        Self {
            phase: RollPhase::Idle,
            height: 0,
            peak: INITIAL_PEAK,
            descending: false,
            settle: Countdown::new(SETTLE_SECONDS),
        }
    }

    pub fn phase(&self) -> RollPhase {
        self.phase
    }

    pub fn is_bouncing(&self) -> bool {
        self.phase == RollPhase::Bouncing
    }

    /// Current lift of die 1; zero unless bouncing
    pub fn height(&self) -> i32 {
        if self.is_bouncing() {
            self.height
        } else {
            0
        }
    }

    pub fn peak(&self) -> i32 {
        self.peak
    }

    /// Begin a new roll. Ignored unless idle.
    pub fn start(&mut self) -> bool {
        if self.phase != RollPhase::Idle {
            return false;
        }
        self.phase = RollPhase::Bouncing;
        self.height = 0;
        self.peak = INITIAL_PEAK;
        self.descending = false;
        true
    }

    /// Advance the bounce by one tick
    pub fn step_bounce(&mut self) {
        if !self.is_bouncing() {
            return;
        }

        self.height += if self.descending { -1 } else { 1 };

        if self.height == self.peak {
            self.descending = !self.descending;
        } else if self.height < 0 {
            self.descending = !self.descending;
            self.peak -= PEAK_DECAY;
        }

        if self.peak <= 0 {
            debug!("bounce finished, settling");
            self.phase = RollPhase::Settling;
            self.settle.start();
        }
    }

    /// Returns true once, on the tick the settle pause ends
    pub fn tick_settle(&mut self, delta: f32) -> bool {
        if self.phase != RollPhase::Settling {
            return false;
        }
        if self.settle.tick(delta) {
            self.phase = RollPhase::Idle;
            self.peak = INITIAL_PEAK;
            true
        } else {
            false
        }
    }
}
