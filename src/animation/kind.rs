//! Closed-form time functions driving a single object's transform.

use glam::Vec3;

use super::transform::Transform;
use crate::util::easing::{ease_out_cubic, lerp, settle_progress};

/// World axis selector for single-axis motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Overwrite this axis' component of `v`.
    #[inline]
    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Self::X => v.x = value,
            Self::Y => v.y = value,
            Self::Z => v.z = value,
        }
    }
}

/// Which time value a kind is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationClock {
    /// Frame time plus the object's phase delay. Periodic kinds use this so
    /// staggered objects stay in a stable phase relationship.
    Global,
    /// Seconds since the object's lazily captured start time.
    Local,
}

/// How an object moves over time.
///
/// Periodic kinds (bounce, rotate, sway) never settle. Settle kinds (grow,
/// slide) saturate once `t >= duration` and hold their final value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// One-directional hop: `y = base.y + max(0, sin(t·ω))·A`, with a
    /// forward/back tilt `rotation.x = sin(t·ω)·tilt`.
    Bounce {
        /// Angular frequency ω (rad/s).
        frequency: f32,
        /// Peak hop height A.
        amplitude: f32,
        /// Peak pitch in radians (0 disables tilting).
        tilt: f32,
    },
    /// Uniform scale eased from `start_scale` to `final_scale`.
    GrowAndSettle {
        /// Scale at t = 0.
        start_scale: f32,
        /// Scale once settled.
        final_scale: f32,
        /// Seconds to settle.
        duration: f32,
    },
    /// One position component eased from `start` to `end`.
    SlideAndSettle {
        /// Axis the slide runs along.
        axis: Axis,
        /// Axis coordinate at t = 0.
        start: f32,
        /// Axis coordinate once settled.
        end: f32,
        /// Seconds to settle.
        duration: f32,
    },
    /// Continuous yaw: `rotation.y = t·speed`.
    Rotate {
        /// Radians per second.
        speed: f32,
    },
    /// Two-axis rocking: `rotation.x = sin(t·ω)·A` and
    /// `rotation.z = cos(t·ω)·A`.
    Sway {
        /// Angular frequency ω (rad/s).
        frequency: f32,
        /// Peak angle A in radians.
        amplitude: f32,
    },
}

impl AnimationKind {
    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bounce { .. } => "bounce",
            Self::GrowAndSettle { .. } => "grow_and_settle",
            Self::SlideAndSettle { .. } => "slide_and_settle",
            Self::Rotate { .. } => "rotate",
            Self::Sway { .. } => "sway",
        }
    }

    /// The time base this kind is evaluated against.
    #[must_use]
    pub fn clock(&self) -> AnimationClock {
        match self {
            Self::GrowAndSettle { .. } | Self::SlideAndSettle { .. } => {
                AnimationClock::Local
            }
            Self::Bounce { .. } | Self::Rotate { .. } | Self::Sway { .. } => {
                AnimationClock::Global
            }
        }
    }

    /// Whether the kind has reached its resting value at time `t`.
    /// Periodic kinds never settle.
    #[must_use]
    pub fn is_settled(&self, t: f32) -> bool {
        match *self {
            Self::GrowAndSettle { duration, .. }
            | Self::SlideAndSettle { duration, .. } => {
                settle_progress(t, duration) >= 1.0
            }
            Self::Bounce { .. } | Self::Rotate { .. } | Self::Sway { .. } => {
                false
            }
        }
    }

    /// Transform of an object resting at `base` after `t` seconds.
    #[must_use]
    pub fn apply(&self, t: f32, base: &Transform) -> Transform {
        let mut out = *base;
        match *self {
            Self::Bounce {
                frequency,
                amplitude,
                tilt,
            } => {
                let wave = (t * frequency).sin();
                out.position.y = base.position.y + wave.max(0.0) * amplitude;
                out.rotation.x = wave * tilt;
            }
            Self::GrowAndSettle {
                start_scale,
                final_scale,
                duration,
            } => {
                let eased = ease_out_cubic(settle_progress(t, duration));
                out.scale = Vec3::splat(lerp(start_scale, final_scale, eased));
            }
            Self::SlideAndSettle {
                axis,
                start,
                end,
                duration,
            } => {
                let eased = ease_out_cubic(settle_progress(t, duration));
                axis.set(&mut out.position, lerp(start, end, eased));
            }
            Self::Rotate { speed } => {
                out.rotation.y = t * speed;
            }
            Self::Sway {
                frequency,
                amplitude,
            } => {
                let phase = t * frequency;
                out.rotation.x = phase.sin() * amplitude;
                out.rotation.z = phase.cos() * amplitude;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const GROW: AnimationKind = AnimationKind::GrowAndSettle {
        start_scale: 0.1,
        final_scale: 0.9,
        duration: 3.0,
    };

    fn scale_at(kind: &AnimationKind, t: f32) -> f32 {
        kind.apply(t, &Transform::IDENTITY).scale.x
    }

    #[test]
    fn test_grow_reference_points() {
        assert!((scale_at(&GROW, 0.0) - 0.1).abs() < 1e-6);
        assert!((scale_at(&GROW, 1.5) - 0.8).abs() < 1e-6);
        assert!((scale_at(&GROW, 3.0) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_grow_holds_after_duration() {
        assert!((scale_at(&GROW, 30.0) - 0.9).abs() < 1e-6);
        assert!(GROW.is_settled(3.0));
        assert!(!GROW.is_settled(2.9));
    }

    #[test]
    fn test_grow_is_monotonic_and_bounded() {
        let mut prev = scale_at(&GROW, 0.0);
        for i in 1..=120 {
            let s = scale_at(&GROW, i as f32 * 0.05);
            assert!(s >= prev);
            assert!((0.1..=0.9 + 1e-6).contains(&s));
            prev = s;
        }
    }

    #[test]
    fn test_slide_moves_only_its_axis() {
        let kind = AnimationKind::SlideAndSettle {
            axis: Axis::X,
            start: -6.0,
            end: -1.5,
            duration: 2.0,
        };
        let base = Transform::from_position(Vec3::new(0.0, 0.5, 2.0));
        let start = kind.apply(0.0, &base);
        let end = kind.apply(2.0, &base);
        assert_eq!(start.position, Vec3::new(-6.0, 0.5, 2.0));
        assert!((end.position.x - -1.5).abs() < 1e-6);
        assert_eq!(end.position.y, 0.5);
        assert_eq!(end.position.z, 2.0);
    }

    #[test]
    fn test_bounce_never_dips_below_base() {
        let kind = AnimationKind::Bounce {
            frequency: 1.5,
            amplitude: 0.4,
            tilt: 0.1,
        };
        let base = Transform::from_position(Vec3::new(-4.0, -2.7, 4.0));
        for i in 0..400 {
            let out = kind.apply(i as f32 * 0.03, &base);
            assert!(out.position.y >= base.position.y);
            assert!(out.position.y <= base.position.y + 0.4 + 1e-6);
        }
    }

    #[test]
    fn test_bounce_peak_and_tilt() {
        let kind = AnimationKind::Bounce {
            frequency: 1.0,
            amplitude: 0.4,
            tilt: 0.1,
        };
        let out = kind.apply(FRAC_PI_2, &Transform::IDENTITY);
        assert!((out.position.y - 0.4).abs() < 1e-5);
        assert!((out.rotation.x - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_is_linear() {
        let kind = AnimationKind::Rotate { speed: 0.3 };
        let out = kind.apply(10.0, &Transform::IDENTITY);
        assert!((out.rotation.y - 3.0).abs() < 1e-5);
        assert!(!kind.is_settled(1e6));
    }

    #[test]
    fn test_sway_axes_share_frequency() {
        let kind = AnimationKind::Sway {
            frequency: 2.0,
            amplitude: 0.2,
        };
        let at_zero = kind.apply(0.0, &Transform::IDENTITY);
        assert!(at_zero.rotation.x.abs() < 1e-6);
        assert!((at_zero.rotation.z - 0.2).abs() < 1e-6);

        for i in 0..50 {
            let r = kind.apply(i as f32 * 0.1, &Transform::IDENTITY).rotation;
            let magnitude = (r.x * r.x + r.z * r.z).sqrt();
            assert!((magnitude - 0.2).abs() < 1e-5);
        }
    }

    #[test]
    fn test_clock_selection() {
        assert_eq!(GROW.clock(), AnimationClock::Local);
        assert_eq!(
            AnimationKind::Rotate { speed: 1.0 }.clock(),
            AnimationClock::Global
        );
    }

    #[test]
    fn test_axis_set_touches_one_component() {
        let mut v = Vec3::ZERO;
        Axis::Z.set(&mut v, 3.0);
        assert_eq!(v, Vec3::new(0.0, 0.0, 3.0));
    }
}
