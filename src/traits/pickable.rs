use crate::picking::{PickId, PickTarget};

/// Capability of a draw target to tag geometry with pick ids.
///
/// Scene composition only talks to this interface, so the hit-testing
/// strategy behind it (color ids, bounding volumes, ...) can change without
/// touching the code that places objects.
pub trait Pickable {
    /// Tag subsequent draws with `id`; `None` marks them not pickable
    fn assign_id(&mut self, id: Option<PickId>);

    /// Switch between lit output and flat id output for subsequent passes
    fn render_in_id_mode(&mut self, enabled: bool);
}

/// Resolves a screen position to whatever the last id pass put there
pub trait HitTester {
    /// `x`, `y` are pixels from the top-left corner of the viewport
    fn hit_test(&self, x: u32, y: u32) -> PickTarget;
}
