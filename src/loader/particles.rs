//! Decorative pulsing particles behind the loading overlay.

use std::f32::consts::TAU;

use rand::Rng;

/// Where a particle sits (percent of the viewport) and how it pulses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePosition {
    /// Horizontal position, percent of width.
    pub x_percent: f32,
    /// Vertical position, percent of height.
    pub y_percent: f32,
    /// Seconds before the pulse starts.
    pub delay: f32,
    /// Seconds per pulse cycle.
    pub cycle_duration: f32,
}

impl ParticlePosition {
    /// Opacity multiplier at `t` seconds: 1.0 at the cycle boundary dipping
    /// to 0.5 mid-cycle, held at 1.0 before `delay`.
    #[must_use]
    pub fn pulse(&self, t: f32) -> f32 {
        if t < self.delay || self.cycle_duration <= 0.0 {
            return 1.0;
        }
        let phase = ((t - self.delay) / self.cycle_duration).rem_euclid(1.0);
        0.75 + 0.25 * (phase * TAU).cos()
    }
}

/// A particle layout generated once per loader.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Box<[ParticlePosition]>,
}

impl ParticleField {
    /// Scatter `count` particles: positions in `[0, 100)`, delays in
    /// `[0, 2)`, cycles in `[2, 5)` seconds.
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| ParticlePosition {
                x_percent: rng.random_range(0.0..100.0),
                y_percent: rng.random_range(0.0..100.0),
                delay: rng.random_range(0.0..2.0),
                cycle_duration: rng.random_range(2.0..5.0),
            })
            .collect();
        Self { particles }
    }

    /// Particles in generation order.
    pub fn particles(&self) -> &[ParticlePosition] {
        &self.particles
    }
}
