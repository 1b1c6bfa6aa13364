//! Frame animator: owns every animated object and advances them once per
//! rendered frame.
//!
//! The host calls [`FrameAnimator::advance`] with the frame's time and then
//! reads transforms back with [`FrameAnimator::transforms`] or
//! [`FrameAnimator::transform`]. Objects never share state; each one is
//! recomputed from its own base transform and start time.

use rustc_hash::FxHashMap;

use super::kind::AnimationKind;
use super::object::{AnimatedObject, ObjectId};
use super::swarm::Swarm;
use super::transform::Transform;
use crate::util::frame_clock::FrameTime;

/// Per-frame transform driver for a set of independently animated objects.
#[derive(Debug, Default)]
pub struct FrameAnimator {
    /// Objects in spawn order.
    objects: Vec<AnimatedObject>,
    /// Index into `objects` by id.
    index: FxHashMap<ObjectId, usize>,
    next_id: u32,
    /// Time of the most recent frame.
    last_frame: Option<FrameTime>,
}

impl FrameAnimator {
    /// Empty animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object resting at `base` and return its handle.
    ///
    /// The object's start time is captured on the next
    /// [`advance`](Self::advance), not here.
    pub fn spawn(
        &mut self,
        label: impl Into<String>,
        base: Transform,
        kind: AnimationKind,
    ) -> ObjectId {
        self.spawn_delayed(label, base, kind, 0.0)
    }

    /// Register an object whose periodic motion is phase-shifted by
    /// `phase_delay` seconds.
    pub fn spawn_delayed(
        &mut self,
        label: impl Into<String>,
        base: Transform,
        kind: AnimationKind,
        phase_delay: f32,
    ) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let label = label.into();
        log::debug!(
            "spawn {label} ({}) as {:?}, delay {phase_delay}",
            kind.name(),
            id
        );

        let _ = self.index.insert(id, self.objects.len());
        self.objects.push(AnimatedObject::new(
            id,
            label,
            base,
            kind,
            phase_delay,
        ));
        id
    }

    /// Register one rotating object per swarm member.
    pub fn spawn_swarm(&mut self, swarm: &Swarm) -> Vec<ObjectId> {
        swarm
            .members()
            .iter()
            .enumerate()
            .map(|(i, member)| {
                self.spawn(
                    format!("swarm_bear_{i}"),
                    member.base_transform(),
                    member.kind(),
                )
            })
            .collect()
    }

    /// Recompute every object's transform for this frame.
    ///
    /// Frames whose elapsed time runs backwards are clamped to the last seen
    /// time so start-relative elapsed values never go negative.
    pub fn advance(&mut self, frame: FrameTime) {
        let frame = match self.last_frame {
            Some(last) if frame.elapsed < last.elapsed => FrameTime {
                elapsed: last.elapsed,
                delta: 0.0,
            },
            _ => frame,
        };
        self.last_frame = Some(frame);

        for object in &mut self.objects {
            let _ = object.update(frame);
        }
    }

    /// Current transform for `id`.
    pub fn transform(&self, id: ObjectId) -> Option<&Transform> {
        self.object(id).map(AnimatedObject::transform)
    }

    /// Object state for `id`.
    pub fn object(&self, id: ObjectId) -> Option<&AnimatedObject> {
        self.index.get(&id).map(|&i| &self.objects[i])
    }

    /// All objects in spawn order.
    pub fn objects(&self) -> &[AnimatedObject] {
        &self.objects
    }

    /// `(id, transform)` for every object, in spawn order.
    pub fn transforms(&self) -> impl Iterator<Item = (ObjectId, &Transform)> {
        self.objects.iter().map(|o| (o.id(), o.transform()))
    }

    /// Remove an object. Returns its final state.
    pub fn remove(&mut self, id: ObjectId) -> Option<AnimatedObject> {
        let pos = self.index.remove(&id)?;
        let removed = self.objects.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no objects are registered.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether every settle-style object has reached its resting value as of
    /// the last frame. Periodic objects are ignored.
    pub fn entrances_settled(&self) -> bool {
        let Some(frame) = self.last_frame else {
            return false;
        };
        self.objects
            .iter()
            .filter(|o| {
                matches!(
                    o.kind(),
                    AnimationKind::GrowAndSettle { .. }
                        | AnimationKind::SlideAndSettle { .. }
                )
            })
            .all(|o| o.is_settled(frame))
    }
}
