//! Frame-level picking state machine.
//!
//! A click arms a request. The next frame is rendered in id mode, read back
//! at the requested pixel, and reported as [`FrameOutcome::Hidden`] so the
//! caller knows not to present it. The frame after that is lit again.
//!
//! Only one request is tracked at a time: a newer request replaces an older
//! one that has not been resolved yet, and the replaced callback is dropped
//! without being called.

use std::fmt;

use log::{debug, trace};

use super::pick_id::PickTarget;
use crate::traits::{DrawTarget, FrameUniforms, HitTester, PassMode, SceneComposer};

/// Called once with the resolved target and the caller's context
pub type PickCallback<C> = Box<dyn FnOnce(PickTarget, &mut C)>;

/// A pending pick at a pixel position (top-left origin)
pub struct PickRequest<C> {
    pub x: u32,
    pub y: u32,
    callback: Option<PickCallback<C>>,
}

impl<C> PickRequest<C> {
    /// Request without a callback; the result is only returned
    pub fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            callback: None,
        }
    }

    pub fn on_resolved(mut self, callback: impl FnOnce(PickTarget, &mut C) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl<C> fmt::Debug for PickRequest<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickRequest")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

enum PickState<C> {
    Idle,
    Armed(PickRequest<C>),
    Resolving(PickRequest<C>),
}

/// Observable phase of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickPhase {
    Idle,
    /// A request waits for the next frame
    Armed,
    /// The current frame is an id frame
    Resolving,
}

/// What the caller should do with the frame just rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presentable,
    /// Id frame; must not be shown. Carries the resolved target.
    Hidden(PickTarget),
}

pub struct PickingPipeline<C> {
    state: PickState<C>,
}

impl<C> Default for PickingPipeline<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PickingPipeline<C> {
    pub fn new() -> Self {
        Self {
            state: PickState::Idle,
        }
    }

    pub fn phase(&self) -> PickPhase {
        match self.state {
            PickState::Idle => PickPhase::Idle,
            PickState::Armed(_) => PickPhase::Armed,
            PickState::Resolving(_) => PickPhase::Resolving,
        }
    }

    /// Arm a pick for the next frame. Replaces any unresolved request.
    pub fn request(&mut self, request: PickRequest<C>) {
        debug!("pick requested at ({}, {})", request.x, request.y);
        self.state = match std::mem::replace(&mut self.state, PickState::Idle) {
            PickState::Idle => PickState::Armed(request),
            PickState::Armed(old) => {
                debug!("replacing pending pick at ({}, {})", old.x, old.y);
                PickState::Armed(request)
            }
            PickState::Resolving(old) => {
                debug!("replacing in-flight pick at ({}, {})", old.x, old.y);
                PickState::Resolving(request)
            }
        };
    }

    /// Decide the mode of the frame about to be rendered.
    ///
    /// # Panics
    /// If the previous id frame was never finished with [`Self::end_pass`].
    pub fn begin_pass(&mut self) -> PassMode {
        match std::mem::replace(&mut self.state, PickState::Idle) {
            PickState::Idle => PassMode::Lit,
            PickState::Armed(request) => {
                trace!("id pass for pick at ({}, {})", request.x, request.y);
                self.state = PickState::Resolving(request);
                PassMode::PickId
            }
            PickState::Resolving(_) => {
                panic!("begin_pass called while an id pass is still unresolved")
            }
        }
    }

    /// Finish the current frame. After an id frame, reads the hit from
    /// `hits`, runs the callback and returns the target.
    pub fn end_pass(&mut self, hits: &impl HitTester, context: &mut C) -> Option<PickTarget> {
        let request = match std::mem::replace(&mut self.state, PickState::Idle) {
            PickState::Resolving(request) => request,
            other => {
                self.state = other;
                return None;
            }
        };

        let target = hits.hit_test(request.x, request.y);
        debug!(
            "pick at ({}, {}) resolved to {}",
            request.x,
            request.y,
            target.as_raw()
        );
        if let Some(callback) = request.callback {
            callback(target, context);
        }
        Some(target)
    }

    /// Render one frame of `scene` into `target`, in id mode if a pick is
    /// armed. The scene is composed from `context`, which the callback then
    /// receives mutably.
    pub fn run_frame<T, S>(
        &mut self,
        scene: &S,
        context: &mut C,
        target: &mut T,
        uniforms: &FrameUniforms,
    ) -> FrameOutcome
    where
        T: DrawTarget + HitTester,
        S: SceneComposer<C> + ?Sized,
    {
        let mode = self.begin_pass();
        target.render_in_id_mode(mode == PassMode::PickId);
        target.begin_pass(uniforms);
        scene.compose(&*context, target);
        target.render_in_id_mode(false);

        match self.end_pass(&*target, context) {
            Some(hit) => FrameOutcome::Hidden(hit),
            None => FrameOutcome::Presentable,
        }
    }
}
