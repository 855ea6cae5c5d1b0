//! The dice table: five dice, the score line, a "Hold" label and the win
//! banner, placed with an explicit transform stack.

use glam::{Mat4, Vec3};

use super::glyphs::GlyphSet;
use super::mesh::{Material, MeshBuilder, MeshId, MeshLibrary};
use crate::game::GameState;
use crate::math::color::RED;
use crate::math::TransformStack;
use crate::picking::PickId;
use crate::traits::{DrawTarget, SceneComposer};

const fn pick_id(raw: u32) -> PickId {
    match PickId::new(raw) {
        Some(id) => id,
        None => panic!("pick id out of range"),
    }
}

/// Pick ids of the dice, left to right in draw order (die 1 first)
pub const DIE_IDS: [PickId; 5] = [pick_id(1), pick_id(2), pick_id(3), pick_id(4), pick_id(5)];
pub const HOLD_ID: PickId = pick_id(6);

/// x offset of each die, matching `DIE_IDS`
pub const DIE_OFFSETS: [f32; 5] = [0.0, 1.5, -1.5, -3.0, 3.0];
pub const DIE_ROW_Y: f32 = 1.0;

/// Uniform scale applied on top of the camera before anything is placed
pub const WORLD_SCALE: f32 = 0.2;
pub const TEXT_Z: f32 = -2.0;

pub const CUBE_MATERIAL: Material = Material::new(RED, 30.0);

/// Static text: (character, x, y)
const SCORE_LABEL: [(char, f32, f32); 5] = [
    ('Y', -8.0, 12.0),
    ('_', -8.0, 11.0),
    ('o', -7.0, 12.0),
    ('u', -5.5, 12.0),
    (':', -4.5, 12.0),
];
/// Opponent scoreboard. There is no opponent, so it always reads 0.
const OPPONENT_LABEL: [(char, f32, f32); 5] = [
    ('A', 1.5, 12.0),
    ('_', 1.5, 11.0),
    ('I', 3.0, 12.0),
    (':', 4.0, 12.0),
    ('0', 8.0, 12.0),
];
const HOLD_LABEL: [(char, f32, f32); 4] = [
    ('H', -8.0, 8.0),
    ('o', -6.0, 8.0),
    ('l', -5.0, 8.0),
    ('d', -4.0, 8.0),
];
const WIN_BANNER: [(char, f32, f32); 7] = [
    ('Y', -8.0, 0.0),
    ('o', -7.0, 0.0),
    ('u', -5.5, 0.0),
    ('W', -3.0, 0.0),
    ('i', -2.0, 0.0),
    ('n', -1.0, 0.0),
    ('!', 0.0, 0.0),
];

/// x of the ones and tens digits
const SCORE_ONES_X: f32 = -1.5;
const SCORE_TENS_X: f32 = -2.8;
const SCORE_Y: f32 = 12.0;

/// Glyphs of `score` with their x positions, ones digit first, no leading
/// zeros. Places past the tens keep the ones-to-tens spacing, which keeps
/// the hundreds digit clear of the `:` in the label.
pub fn score_glyphs(score: u32) -> Vec<(char, f32)> {
    let step = SCORE_TENS_X - SCORE_ONES_X;
    let mut glyphs = Vec::new();
    let mut rest = score;
    let mut x = SCORE_ONES_X;
    loop {
        if let Some(c) = char::from_digit(rest % 10, 10) {
            glyphs.push((c, x));
        }
        rest /= 10;
        x += step;
        if rest == 0 {
            break;
        }
    }
    glyphs
}

/// Meshes of the scene, built once
pub struct DiceScene {
    cube: MeshId,
    glyphs: GlyphSet,
}

impl DiceScene {
    /// Build every mesh the scene needs into a fresh library
    pub fn build() -> (Self, MeshLibrary) {
        let mut library = MeshLibrary::new();
        let mut cube = MeshBuilder::new();
        cube.cuboid(Vec3::splat(-0.5), Vec3::splat(0.5));
        let cube = library.add(cube.build(CUBE_MATERIAL));
        let glyphs = GlyphSet::build(&mut library);
        (Self { cube, glyphs }, library)
    }

    pub fn cube(&self) -> MeshId {
        self.cube
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    /// Model-view every draw starts from
    pub fn base_transform(camera: Mat4) -> Mat4 {
        camera * Mat4::from_scale(Vec3::splat(WORLD_SCALE))
    }

    /// Spin rotation shared by the dice, angles in degrees
    pub fn spin(theta: Vec3) -> Mat4 {
        Mat4::from_rotation_x(theta.x.to_radians())
            * Mat4::from_rotation_y(theta.y.to_radians())
            * Mat4::from_rotation_z(theta.z.to_radians())
    }
}

/// Current model-view plus the stack that saves it around each object
struct Placer<'t> {
    target: &'t mut dyn DrawTarget,
    stack: TransformStack,
    model_view: Mat4,
}

impl Placer<'_> {
    fn push(&mut self) {
        self.stack.push(self.model_view);
    }

    fn pop(&mut self) {
        self.model_view = self.stack.pop();
    }

    fn apply(&mut self, transform: Mat4) {
        self.model_view *= transform;
    }

    fn draw(&mut self, mesh: MeshId, id: Option<PickId>) {
        self.target.assign_id(id);
        self.target.draw(self.model_view, mesh);
        self.target.assign_id(None);
    }

    fn glyph(&mut self, glyphs: &GlyphSet, c: char, x: f32, y: f32, id: Option<PickId>) {
        let Some(mesh) = glyphs.get(c) else {
            return;
        };
        self.push();
        self.apply(Mat4::from_translation(Vec3::new(x, y, TEXT_Z)));
        self.draw(mesh, id);
        self.pop();
    }
}

impl SceneComposer<GameState> for DiceScene {
    fn compose(&self, state: &GameState, target: &mut dyn DrawTarget) {
        let mut placer = Placer {
            target,
            stack: TransformStack::new(),
            model_view: Self::base_transform(state.camera()),
        };
        let spin = Self::spin(state.theta());

        for (i, (&x, &id)) in DIE_OFFSETS.iter().zip(&DIE_IDS).enumerate() {
            placer.push();
            if i == 0 {
                placer.apply(Mat4::from_translation(Vec3::new(
                    0.0,
                    state.bounce_height() as f32,
                    0.0,
                )));
            }
            placer.apply(Mat4::from_translation(Vec3::new(x, DIE_ROW_Y, 0.0)));
            placer.apply(spin);
            placer.draw(self.cube, Some(id));
            placer.pop();
        }

        for (c, x, y) in SCORE_LABEL {
            placer.glyph(&self.glyphs, c, x, y, None);
        }

        for (c, x) in score_glyphs(state.score()) {
            placer.glyph(&self.glyphs, c, x, SCORE_Y, None);
        }

        for (c, x, y) in OPPONENT_LABEL {
            placer.glyph(&self.glyphs, c, x, y, None);
        }

        for (c, x, y) in HOLD_LABEL {
            placer.glyph(&self.glyphs, c, x, y, Some(HOLD_ID));
        }

        if state.has_won() {
            for (c, x, y) in WIN_BANNER {
                placer.glyph(&self.glyphs, c, x, y, None);
            }
        }

        placer.stack.assert_depth(0);
    }
}
