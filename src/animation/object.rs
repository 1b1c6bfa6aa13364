//! Per-object animation state.

use super::kind::{AnimationClock, AnimationKind};
use super::transform::Transform;
use crate::util::frame_clock::FrameTime;

/// Stable handle for an object registered with a
/// [`FrameAnimator`](super::FrameAnimator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// An animation start time that transitions once from unset to set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StartTime(Option<f32>);

impl StartTime {
    /// The captured start, if any frame has been observed.
    #[must_use]
    pub fn get(self) -> Option<f32> {
        self.0
    }

    /// Capture `now` if unset and return the (possibly earlier) start.
    pub fn capture(&mut self, now: f32) -> f32 {
        *self.0.get_or_insert(now)
    }
}

/// A visual object with its resting placement and the motion applied on top.
#[derive(Debug, Clone)]
pub struct AnimatedObject {
    id: ObjectId,
    label: String,
    base: Transform,
    kind: AnimationKind,
    /// Seconds added to global time before evaluation (staggering).
    phase_delay: f32,
    start: StartTime,
    current: Transform,
}

impl AnimatedObject {
    pub(crate) fn new(
        id: ObjectId,
        label: String,
        base: Transform,
        kind: AnimationKind,
        phase_delay: f32,
    ) -> Self {
        Self {
            id,
            label,
            base,
            kind,
            phase_delay,
            start: StartTime::default(),
            current: base,
        }
    }

    /// This object's handle.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Human-readable label (e.g. `"globe"`, `"swarm_bear_12"`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resting placement the animation is applied to.
    pub fn base(&self) -> &Transform {
        &self.base
    }

    /// The motion driving this object.
    pub fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    /// Start time captured on the first observed frame.
    pub fn start_time(&self) -> Option<f32> {
        self.start.get()
    }

    /// Transform computed on the most recent frame (the base before any).
    pub fn transform(&self) -> &Transform {
        &self.current
    }

    /// Seconds the kind should be evaluated at for `frame`.
    fn animation_time(&mut self, frame: FrameTime) -> f32 {
        let start = self.start.capture(frame.elapsed);
        match self.kind.clock() {
            AnimationClock::Global => frame.elapsed + self.phase_delay,
            AnimationClock::Local => (frame.elapsed - start).max(0.0),
        }
    }

    /// Recompute the current transform for this frame.
    pub fn update(&mut self, frame: FrameTime) -> &Transform {
        let t = self.animation_time(frame);
        self.current = self.kind.apply(t, &self.base);
        &self.current
    }

    /// Whether a settle-style animation has reached its resting value.
    pub fn is_settled(&self, frame: FrameTime) -> bool {
        self.start.get().is_some_and(|start| {
            self.kind.is_settled((frame.elapsed - start).max(0.0))
        })
    }
}
