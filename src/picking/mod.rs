mod bounds;
mod pick_id;
mod pipeline;

pub use bounds::BoundsPicker;
pub use pick_id::{PickId, PickTarget, MAX_PICK_ID, NO_HIT_COLOR};
pub use pipeline::{FrameOutcome, PickCallback, PickPhase, PickRequest, PickingPipeline};
