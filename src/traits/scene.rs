use super::renderer::DrawTarget;

/// A fixed scene that knows how to place its objects for a given state.
///
/// `compose` must be a pure function of `state`: the same state always
/// produces the same draw sequence, whichever pass mode the target is in.
pub trait SceneComposer<S> {
    fn compose(&self, state: &S, target: &mut dyn DrawTarget);
}
