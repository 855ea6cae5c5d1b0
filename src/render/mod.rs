mod lighting;
mod rasterizer;
mod recorder;

pub use lighting::{light_in_eye_space, LightSettings};
pub use rasterizer::SoftwareRasterizer;
pub use recorder::{CommandRecorder, DrawCommand, RecordedPass};
