pub mod pickable;
pub mod renderer;
pub mod scene;

pub use pickable::*;
pub use renderer::*;
pub use scene::*;
