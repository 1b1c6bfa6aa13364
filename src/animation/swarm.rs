//! Procedural placement for the decorative bear swarm.
//!
//! Samples are drawn uniformly inside a bounding box; a sample landing in the
//! central exclusion column (around the globe) is dropped rather than
//! resampled, so the final member count is usually below `count`.

use glam::Vec3;
use rand::Rng;

use super::kind::AnimationKind;
use super::transform::Transform;
use crate::options::SwarmOptions;

/// One placed swarm member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmMember {
    /// World-space position.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
    /// Yaw speed in radians per second.
    pub angular_speed: f32,
}

impl SwarmMember {
    /// Resting transform for this member.
    #[must_use]
    pub fn base_transform(&self) -> Transform {
        Transform::from_position(self.position).with_uniform_scale(self.scale)
    }

    /// Motion applied to this member.
    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        AnimationKind::Rotate {
            speed: self.angular_speed,
        }
    }
}

/// An immutable, generated-once swarm layout.
#[derive(Debug, Clone)]
pub struct Swarm {
    members: Box<[SwarmMember]>,
    skipped: usize,
}

impl Swarm {
    /// Run the placement pass once.
    pub fn generate<R: Rng>(opts: &SwarmOptions, rng: &mut R) -> Self {
        let half = Vec3::from(opts.half_extents);
        let [exclude_x, exclude_z] = opts.exclusion_half_extents;

        let mut members = Vec::with_capacity(opts.count);
        let mut skipped = 0;
        for _ in 0..opts.count {
            let position = Vec3::new(
                sample(rng, -half.x, half.x),
                sample(rng, -half.y, half.y),
                sample(rng, -half.z, half.z),
            );
            if position.x.abs() < exclude_x && position.z.abs() < exclude_z {
                skipped += 1;
                continue;
            }
            members.push(SwarmMember {
                position,
                scale: sample(rng, opts.scale_range[0], opts.scale_range[1]),
                angular_speed: sample(
                    rng,
                    opts.speed_range[0],
                    opts.speed_range[1],
                ),
            });
        }

        log::debug!(
            "swarm placed: {} members, {} skipped in exclusion zone",
            members.len(),
            skipped
        );

        Self {
            members: members.into_boxed_slice(),
            skipped,
        }
    }

    /// Placed members, in generation order.
    pub fn members(&self) -> &[SwarmMember] {
        &self.members
    }

    /// Samples dropped for landing in the exclusion zone.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of placed members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no member survived placement.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Uniform sample in `[min, max)`; a degenerate range yields `min`.
fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_exclusion_zone_is_empty() {
        let opts = SwarmOptions::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let swarm = Swarm::generate(&opts, &mut rng);
            for m in swarm.members() {
                assert!(
                    !(m.position.x.abs() < 4.0 && m.position.z.abs() < 4.0),
                    "member inside exclusion zone: {:?}",
                    m.position
                );
            }
            assert_eq!(swarm.len() + swarm.skipped(), opts.count);
        }
    }

    #[test]
    fn test_members_within_bounds_and_ranges() {
        let opts = SwarmOptions::default();
        let mut rng = StdRng::seed_from_u64(7);
        let swarm = Swarm::generate(&opts, &mut rng);
        assert!(!swarm.is_empty());
        for m in swarm.members() {
            assert!(m.position.x.abs() <= 12.5);
            assert!(m.position.y.abs() <= 7.5);
            assert!(m.position.z.abs() <= 12.5);
            assert!((0.02..0.1).contains(&m.scale));
            assert!((0.1..0.4).contains(&m.angular_speed));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let opts = SwarmOptions::default();
        let a = Swarm::generate(&opts, &mut StdRng::seed_from_u64(42));
        let b = Swarm::generate(&opts, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.members(), b.members());
    }

    #[test]
    fn test_degenerate_ranges_do_not_panic() {
        let opts = SwarmOptions {
            scale_range: [0.05, 0.05],
            speed_range: [0.3, 0.1],
            ..SwarmOptions::default()
        };
        let swarm = Swarm::generate(&opts, &mut StdRng::seed_from_u64(1));
        for m in swarm.members() {
            assert_eq!(m.scale, 0.05);
            assert_eq!(m.angular_speed, 0.3);
        }
    }

    #[test]
    fn test_member_animates_as_rotation() {
        let member = SwarmMember {
            position: Vec3::new(6.0, 1.0, -8.0),
            scale: 0.05,
            angular_speed: 0.2,
        };
        assert_eq!(member.kind(), AnimationKind::Rotate { speed: 0.2 });
        assert_eq!(member.base_transform().scale, Vec3::splat(0.05));
    }
}
