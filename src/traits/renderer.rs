use glam::{Mat4, Vec4};

use super::pickable::Pickable;
use crate::scenes::MeshId;

/// What a render pass writes per fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    /// Phong-lit material color, presented to the user
    Lit,
    /// Flat pick-id color, read back and never presented
    PickId,
}

/// Per-pass values shared by every draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub projection: Mat4,
    /// Camera transform the light position is expressed against
    pub camera: Mat4,
    pub light_position: Vec4,
}

impl FrameUniforms {
    pub fn new(projection: Mat4, camera: Mat4, light_position: Vec4) -> Self {
        Self {
            projection,
            camera,
            light_position,
        }
    }
}

/// Consumer of draw commands. The pick id of each draw comes from the
/// [`Pickable`] half of the interface.
pub trait DrawTarget: Pickable {
    /// Viewport size in pixels
    fn viewport(&self) -> (u32, u32);

    /// Clear and start a pass with the current id mode
    fn begin_pass(&mut self, uniforms: &FrameUniforms);

    /// Draw `mesh` placed by `model_view`
    fn draw(&mut self, model_view: Mat4, mesh: MeshId);
}
