pub mod dice_scene;
pub mod glyphs;
mod mesh;

pub use dice_scene::DiceScene;
pub use glyphs::GlyphSet;
pub use mesh::{Material, Mesh, MeshBuilder, MeshId, MeshLibrary, Vertex};
