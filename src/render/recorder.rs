use glam::Mat4;

use crate::picking::PickId;
use crate::scenes::MeshId;
use crate::traits::{DrawTarget, FrameUniforms, PassMode, Pickable};

/// One draw as seen by a [`DrawTarget`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub model_view: Mat4,
    pub mesh: MeshId,
    pub pick_id: Option<PickId>,
    pub mode: PassMode,
}

/// A recorded pass: its uniforms and every draw in submission order
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPass {
    pub mode: PassMode,
    pub uniforms: FrameUniforms,
    pub commands: Vec<DrawCommand>,
}

/// Draw target that only records what it is asked to draw
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    width: u32,
    height: u32,
    id_mode: bool,
    current_id: Option<PickId>,
    passes: Vec<RecordedPass>,
}

impl CommandRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn passes(&self) -> &[RecordedPass] {
        &self.passes
    }

    pub fn last_pass(&self) -> Option<&RecordedPass> {
        self.passes.last()
    }

    /// Geometry of a pass without the per-mode fields
    pub fn geometry(pass: &RecordedPass) -> Vec<(Mat4, MeshId, Option<PickId>)> {
        pass.commands
            .iter()
            .map(|c| (c.model_view, c.mesh, c.pick_id))
            .collect()
    }
}

impl Pickable for CommandRecorder {
    fn assign_id(&mut self, id: Option<PickId>) {
        self.current_id = id;
    }

    fn render_in_id_mode(&mut self, enabled: bool) {
        self.id_mode = enabled;
    }
}

impl DrawTarget for CommandRecorder {
    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn begin_pass(&mut self, uniforms: &FrameUniforms) {
        let mode = if self.id_mode {
            PassMode::PickId
        } else {
            PassMode::Lit
        };
        self.current_id = None;
        self.passes.push(RecordedPass {
            mode,
            uniforms: *uniforms,
            commands: Vec::new(),
        });
    }

    /// # Panics
    /// If no pass has been started
    fn draw(&mut self, model_view: Mat4, mesh: MeshId) {
        let command = DrawCommand {
            model_view,
            mesh,
            pick_id: self.current_id,
            mode: if self.id_mode {
                PassMode::PickId
            } else {
                PassMode::Lit
            },
        };
        self.passes
            .last_mut()
            .expect("draw before begin_pass")
            .commands
            .push(command);
    }
}
