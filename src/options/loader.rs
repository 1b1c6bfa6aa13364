use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Loading-screen simulator parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Loader", inline)]
#[serde(default)]
pub struct LoaderOptions {
    /// Milliseconds between progress ticks.
    #[schemars(title = "Tick Interval (ms)", range(min = 16, max = 2000))]
    pub tick_interval_ms: u64,
    /// Half-open `[min, max)` range of the random per-tick increment, in
    /// percent. See [`LoaderOptions::increment_bounds`] for the floor.
    #[schemars(
        title = "Increment Range (%)",
        extend("items" = {"type": "number", "minimum": 0.1, "maximum": 100.0})
    )]
    pub increment_range: [f32; 2],
    /// Delay between reaching 100% and starting the fade-out.
    #[schemars(title = "Fade Delay (ms)", range(min = 0, max = 5000))]
    pub fade_delay_ms: u64,
    /// Delay between the fade-out starting and the completion signal.
    #[schemars(title = "Completion Delay (ms)", range(min = 0, max = 5000))]
    pub completion_delay_ms: u64,
    /// Length of the overlay's opacity fade.
    #[schemars(skip)]
    pub fade_duration_ms: u64,
    /// Decorative particles drawn behind the overlay.
    #[schemars(title = "Particles", range(min = 0, max = 200))]
    pub particle_count: usize,
    /// Status lines, shown in order as progress advances.
    #[schemars(skip)]
    pub status_messages: Vec<String>,
}

impl LoaderOptions {
    /// Smallest per-tick increment the simulator will use.
    pub const MIN_INCREMENT: f32 = 0.1;

    /// `increment_range` clamped to `[MIN_INCREMENT, 100]`, with `max >= min`.
    ///
    /// Every tick then moves progress forward, so a simulator always
    /// completes within `100 / MIN_INCREMENT` ticks. NaN bounds fall back to
    /// the floor.
    pub fn increment_bounds(&self) -> [f32; 2] {
        let [min, max] = self.increment_range;
        let min = min.max(Self::MIN_INCREMENT).min(100.0);
        let max = max.min(100.0).max(min);
        [min, max]
    }

    /// Tick interval as a duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Fade delay as a duration.
    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }

    /// Completion delay as a duration.
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Overlay fade length as a duration.
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            increment_range: [5.0, 20.0],
            fade_delay_ms: 500,
            completion_delay_ms: 500,
            fade_duration_ms: 500,
            particle_count: 20,
            status_messages: vec![
                "Initializing XR Experience...".to_owned(),
                "Loading 3D Models...".to_owned(),
                "Preparing Virtual Environment...".to_owned(),
                "Finalizing Setup...".to_owned(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(range: [f32; 2]) -> [f32; 2] {
        LoaderOptions {
            increment_range: range,
            ..LoaderOptions::default()
        }
        .increment_bounds()
    }

    #[test]
    fn test_increment_bounds_keep_valid_range() {
        assert_eq!(bounds([5.0, 20.0]), [5.0, 20.0]);
    }

    #[test]
    fn test_increment_bounds_floor_degenerate_ranges() {
        assert_eq!(bounds([0.0, 0.0]), [0.1, 0.1]);
        assert_eq!(bounds([-10.0, -5.0]), [0.1, 0.1]);
        assert_eq!(bounds([f32::NAN, f32::NAN]), [0.1, 0.1]);
        assert_eq!(bounds([30.0, 10.0]), [30.0, 30.0]);
        assert_eq!(bounds([500.0, f32::INFINITY]), [100.0, 100.0]);
    }
}
