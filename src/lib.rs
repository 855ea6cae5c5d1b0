pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod math;
pub mod picking;
pub mod render;
pub mod scenes;
pub mod traits;

pub use config::AppConfig;
pub use game::GameState;
pub use picking::{FrameOutcome, PickId, PickRequest, PickTarget, PickingPipeline};
pub use render::SoftwareRasterizer;
pub use scenes::DiceScene;
