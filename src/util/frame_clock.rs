//! Frame clock supplying elapsed and delta time to per-frame callbacks.

use web_time::Instant;

/// Time values handed to per-frame animation callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameTime {
    /// Frame time at `elapsed` seconds with no previous frame.
    #[must_use]
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            delta: 0.0,
        }
    }
}

/// Monotonic frame clock with FPS smoothing
pub struct FrameClock {
    /// When the clock started
    start: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Elapsed seconds reported on the last frame (never decreases)
    last_elapsed: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock whose zero is `start`.
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            last_frame: start,
            last_elapsed: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to `now` and return the frame's elapsed/delta pair.
    ///
    /// Instants earlier than the previous frame are treated as a zero-length
    /// frame so elapsed time stays monotonic.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.last_frame);
        if now > self.last_frame {
            self.last_frame = now;
        }

        let elapsed = self
            .last_frame
            .saturating_duration_since(self.start)
            .as_secs_f32()
            .max(self.last_elapsed);
        self.last_elapsed = elapsed;

        let frame_time = delta.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime {
            elapsed,
            delta: frame_time,
        }
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
