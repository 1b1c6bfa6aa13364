//! Per-frame procedural animation of scene objects.

mod animator;
mod kind;
mod object;
pub mod swarm;
mod transform;

pub use animator::FrameAnimator;
pub use kind::{AnimationClock, AnimationKind, Axis};
pub use object::{AnimatedObject, ObjectId, StartTime};
pub use swarm::{Swarm, SwarmMember};
pub use transform::Transform;
