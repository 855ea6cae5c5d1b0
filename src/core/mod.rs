pub mod clock;
pub mod gpu_context;
pub mod input_adapter;
pub mod surface_renderer;
pub mod timer;

pub use clock::Clock;
pub use gpu_context::GpuContext;
pub use input_adapter::{action_for_key, Input, InputAdapter};
pub use surface_renderer::SurfaceRenderer;
pub use timer::{Accumulator, Countdown};
