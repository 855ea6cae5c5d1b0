//! Single-player dice game driving the scene.
//!
//! All state changes happen in [`GameState::tick`], [`GameState::apply`] and
//! [`GameState::handle_pick`]; rendering only reads.

mod dice;

pub use dice::{DiceRoll, RollPhase, INITIAL_PEAK, PEAK_DECAY, SETTLE_SECONDS};

use glam::{Mat4, Vec3, Vec4};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::{CameraMove, SceneCamera};
use crate::picking::PickTarget;
use crate::scenes::dice_scene::{DIE_IDS, HOLD_ID};

pub const WINNING_SCORE: u32 = 100;
/// Degrees added to each spin angle per bouncing tick
pub const SPIN_SPEED: std::ops::RangeInclusive<u32> = 50..=200;
/// Degrees the light advances per tick while orbiting
pub const LIGHT_STEP: f32 = 5.0;

/// Initial dice orientation in degrees
pub const INITIAL_THETA: Vec3 = Vec3::new(0.0, 0.2, 0.723);

/// What a tick or a pick changed, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RollStarted,
    Rolled { value: u32, score: u32 },
    Won { score: u32 },
}

/// Light that orbits the scene on three incommensurate sines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightOrbit {
    pub angle: f32,
    pub spinning: bool,
}

impl LightOrbit {
    pub fn new(spinning: bool) -> Self {
        Self {
            angle: 0.0,
            spinning,
        }
    }

    pub fn advance(&mut self) {
        if self.spinning {
            self.angle += LIGHT_STEP;
        }
    }

    /// Position relative to the camera, `w = 0`
    pub fn position(&self) -> Vec4 {
        let a = self.angle;
        Vec4::new((a * 0.023).sin(), (a * 0.031).sin(), (a * 0.037).sin(), 0.0)
    }
}

/// Player actions that are not picks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Camera(CameraMove),
    ToggleLight,
    Quit,
}

pub struct GameState {
    camera: SceneCamera,
    theta: Vec3,
    roll: DiceRoll,
    score: u32,
    last_value: Option<u32>,
    light: LightOrbit,
    rng: StdRng,
    quit_requested: bool,
}

impl GameState {
    /// `seed` makes rolls reproducible; `None` seeds from the OS
    pub fn new(seed: Option<u64>, light_spin: bool) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            camera: SceneCamera::new(),
            theta: INITIAL_THETA,
            roll: DiceRoll::new(),
            score: 0,
            last_value: None,
            light: LightOrbit::new(light_spin),
            rng,
            quit_requested: false,
        }
    }

    pub fn camera(&self) -> Mat4 {
        self.camera.view()
    }

    /// Spin angles in degrees, shared by all dice
    pub fn theta(&self) -> Vec3 {
        self.theta
    }

    pub fn roll(&self) -> &DiceRoll {
        &self.roll
    }

    pub fn bounce_height(&self) -> i32 {
        self.roll.height()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn last_value(&self) -> Option<u32> {
        self.last_value
    }

    pub fn has_won(&self) -> bool {
        self.score >= WINNING_SCORE
    }

    pub fn light(&self) -> &LightOrbit {
        &self.light
    }

    pub fn light_position(&self) -> Vec4 {
        self.light.position()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// One fixed step of `delta` seconds
    pub fn tick(&mut self, delta: f32) -> Option<GameEvent> {
        if self.roll.is_bouncing() {
            let speed = self.rng.random_range(SPIN_SPEED) as f32;
            self.theta += Vec3::splat(speed);
            // wrap to [0, 360)
            self.theta = Vec3::new(
                self.theta.x.rem_euclid(360.0),
                self.theta.y.rem_euclid(360.0),
                self.theta.z.rem_euclid(360.0),
            );
            self.roll.step_bounce();
        }
        self.light.advance();

        if self.roll.tick_settle(delta) {
            return Some(self.settle());
        }
        None
    }

    fn settle(&mut self) -> GameEvent {
        let value = self.rng.random_range(1..=6);
        self.last_value = Some(value);
        let was_won = self.has_won();
        if value != 1 {
            self.score += value;
        }
        info!("rolled {value}, score {}", self.score);

        if self.has_won() && !was_won {
            info!("reached {WINNING_SCORE}, you win");
            GameEvent::Won { score: self.score }
        } else {
            GameEvent::Rolled {
                value,
                score: self.score,
            }
        }
    }

    /// React to a resolved pick. Only die 1 does anything.
    pub fn handle_pick(&mut self, target: PickTarget) -> Option<GameEvent> {
        let Some(id) = target.id() else {
            debug!("pick hit nothing");
            return None;
        };

        if id == DIE_IDS[0] {
            if self.roll.start() {
                info!("roll started");
                return Some(GameEvent::RollStarted);
            }
            debug!("die 1 picked while a roll is running");
        } else if id == HOLD_ID {
            debug!("hold picked");
        } else if DIE_IDS.contains(&id) {
            debug!("die {id} picked");
        } else {
            debug!("unknown pick id {id}");
        }
        None
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Camera(movement) => self.camera.apply(movement),
            Action::ToggleLight => {
                self.light.spinning = !self.light.spinning;
                debug!("light orbit {}", if self.light.spinning { "on" } else { "off" });
            }
            Action::Quit => self.quit_requested = true,
        }
    }
}
