//! The landing page's decorative 3D composition.
//!
//! Builds every animated object from [`SceneOptions`] into a single
//! [`FrameAnimator`]: the rotating globe, the foreground bears hopping along
//! the bottom of the view, the procedurally placed background swarm, and
//! the VR headset rig. Procedural placement runs once here and the result
//! is kept for the scene's lifetime.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::{
    AnimationKind, Axis, FrameAnimator, ObjectId, Swarm, Transform,
};
use crate::options::{HeadsetOptions, SceneOptions};
use crate::util::frame_clock::FrameTime;

/// Handles for the VR headset rig.
///
/// `headset`'s transform is relative to `mount`; the host parents the
/// headset node under the mount node. Controllers are in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadsetRig {
    /// Swaying mount the headset hangs from.
    pub mount: ObjectId,
    /// Headset growing into place.
    pub headset: ObjectId,
    /// Left controller sliding in from the left.
    pub left_controller: ObjectId,
    /// Right controller sliding in from the right.
    pub right_controller: ObjectId,
}

/// The animated scene a host draws once content is shown.
#[derive(Debug)]
pub struct ShowcaseScene {
    animator: FrameAnimator,
    swarm: Swarm,
    globe: ObjectId,
    bears: Vec<ObjectId>,
    swarm_ids: Vec<ObjectId>,
    headset: Option<HeadsetRig>,
}

impl ShowcaseScene {
    /// Build the scene, seeding placement from `options.seed` when set.
    pub fn new(options: &SceneOptions) -> Self {
        match options.seed {
            Some(seed) => {
                Self::with_rng(options, &mut StdRng::seed_from_u64(seed))
            }
            None => Self::with_rng(options, &mut rand::rng()),
        }
    }

    /// Build the scene drawing placement from `rng`.
    pub fn with_rng<R: Rng>(options: &SceneOptions, rng: &mut R) -> Self {
        let mut animator = FrameAnimator::new();

        let globe = animator.spawn(
            "globe",
            Transform::from_position(Vec3::from(options.globe.position))
                .with_uniform_scale(options.globe.scale),
            AnimationKind::Rotate {
                speed: options.globe.speed,
            },
        );

        let bounce = AnimationKind::Bounce {
            frequency: options.bounce.frequency,
            amplitude: options.bounce.amplitude,
            tilt: options.bounce.tilt,
        };
        let bears = options
            .bears
            .iter()
            .enumerate()
            .map(|(i, bear)| {
                animator.spawn_delayed(
                    format!("bear_{i}"),
                    Transform::from_position(Vec3::from(bear.position))
                        .with_uniform_scale(bear.scale)
                        .with_yaw(bear.yaw),
                    bounce,
                    bear.delay,
                )
            })
            .collect();

        let swarm = Swarm::generate(&options.swarm, rng);
        let swarm_ids = animator.spawn_swarm(&swarm);

        let headset = options
            .headset
            .enabled
            .then(|| spawn_headset(&mut animator, &options.headset));

        log::info!(
            "scene built: {} objects ({} swarm)",
            animator.len(),
            swarm_ids.len()
        );

        Self {
            animator,
            swarm,
            globe,
            bears,
            swarm_ids,
            headset,
        }
    }

    /// Recompute every transform for this frame.
    pub fn advance(&mut self, frame: FrameTime) {
        self.animator.advance(frame);
    }

    /// The animator holding every object.
    pub fn animator(&self) -> &FrameAnimator {
        &self.animator
    }

    /// Swarm layout generated at construction.
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Globe handle.
    pub fn globe(&self) -> ObjectId {
        self.globe
    }

    /// Foreground bear handles, in options order.
    pub fn bears(&self) -> &[ObjectId] {
        &self.bears
    }

    /// Swarm member handles, in swarm order.
    pub fn swarm_ids(&self) -> &[ObjectId] {
        &self.swarm_ids
    }

    /// Headset rig handles, when enabled.
    pub fn headset(&self) -> Option<HeadsetRig> {
        self.headset
    }
}

fn spawn_headset(
    animator: &mut FrameAnimator,
    opts: &HeadsetOptions,
) -> HeadsetRig {
    let center = Vec3::from(opts.position);

    let mount = animator.spawn(
        "headset_mount",
        Transform::from_position(center),
        AnimationKind::Sway {
            frequency: opts.sway_frequency,
            amplitude: opts.sway_amplitude,
        },
    );
    let headset = animator.spawn(
        "headset",
        Transform::IDENTITY,
        AnimationKind::GrowAndSettle {
            start_scale: opts.start_scale,
            final_scale: opts.final_scale,
            duration: opts.entrance_duration,
        },
    );

    let mut controller = |label: &str, side: f32| {
        let offset = Vec3::new(
            side * opts.controller_offset,
            -opts.controller_drop,
            0.0,
        );
        let rest = center + offset;
        animator.spawn(
            label,
            Transform::from_position(rest)
                .with_uniform_scale(opts.controller_scale),
            AnimationKind::SlideAndSettle {
                axis: Axis::X,
                start: center.x + side * opts.controller_entry_offset,
                end: rest.x,
                duration: opts.entrance_duration,
            },
        )
    };
    let left_controller = controller("left_controller", -1.0);
    let right_controller = controller("right_controller", 1.0);

    HeadsetRig {
        mount,
        headset,
        left_controller,
        right_controller,
    }
}
