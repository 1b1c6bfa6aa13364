//! Easing and interpolation helpers for the settle-style animations.
//!
//! The ease clamps its input to [0.0, 1.0] before evaluation, so callers
//! may pass raw `elapsed / duration` ratios without risking overshoot.

/// `1 - (1 - x)³` over the clamped domain [0, 1].
#[inline]
#[must_use]
pub fn ease_out_cubic(x: f32) -> f32 {
    let omx = 1.0 - x.clamp(0.0, 1.0);
    1.0 - omx * omx * omx
}

/// Normalized progress of `elapsed` through `duration`, saturating at 1.
///
/// A non-positive duration counts as already finished.
#[inline]
#[must_use]
pub fn settle_progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
