use glam::{Mat4, Vec3};

pub const CAMERA_SPEED: f32 = 0.1;
pub const CAMERA_ROTATION_DEGREES: f32 = 1.5;

pub const EYE: Vec3 = Vec3::new(0.0, 1.0, 2.5);
pub const TARGET: Vec3 = Vec3::new(0.0, 1.0, -5.0);

/// One discrete camera adjustment. Each is applied in eye space, i.e.
/// pre-multiplied onto the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMove {
    Forward,
    Backward,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    Up,
    Down,
    Left,
    Right,
}

impl CameraMove {
    pub fn matrix(self) -> Mat4 {
        let step = CAMERA_SPEED;
        let angle = CAMERA_ROTATION_DEGREES.to_radians();
        match self {
            Self::Forward => Mat4::from_translation(Vec3::new(0.0, 0.0, step)),
            Self::Backward => Mat4::from_translation(Vec3::new(0.0, 0.0, -step)),
            Self::YawLeft => Mat4::from_rotation_y(-angle),
            Self::YawRight => Mat4::from_rotation_y(angle),
            Self::PitchUp => Mat4::from_rotation_x(-angle),
            Self::PitchDown => Mat4::from_rotation_x(angle),
            Self::RollLeft => Mat4::from_rotation_z(-angle),
            Self::RollRight => Mat4::from_rotation_z(angle),
            // moving the eye up shifts the world down
            Self::Up => Mat4::from_translation(Vec3::new(0.0, -step, 0.0)),
            Self::Down => Mat4::from_translation(Vec3::new(0.0, step, 0.0)),
            Self::Left => Mat4::from_translation(Vec3::new(step, 0.0, 0.0)),
            Self::Right => Mat4::from_translation(Vec3::new(-step, 0.0, 0.0)),
        }
    }
}

/// World-to-eye transform driven by discrete moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    view: Mat4,
}

impl SceneCamera {
    pub fn new() -> Self {
        Self {
            view: Mat4::look_at_rh(EYE, TARGET, Vec3::Y),
        }
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn apply(&mut self, movement: CameraMove) {
        self.view = movement.matrix() * self.view;
    }

    /// Eye position in world space
    pub fn position(&self) -> Vec3 {
        self.view.inverse().transform_point3(Vec3::ZERO)
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// Perspective lens with a GL-style depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 65.0,
            near: 0.5,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Zero-height viewports (minimized windows) fall back to a square aspect
    pub fn matrix(&self, width: u32, height: u32) -> Mat4 {
        let aspect = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}
