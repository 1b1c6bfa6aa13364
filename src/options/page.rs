use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Page-level reveal timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Page", inline)]
#[serde(default)]
pub struct PageOptions {
    /// Floor on how long the loading screen stays up, from activation.
    #[schemars(title = "Minimum Duration (ms)", range(min = 0, max = 10000))]
    pub minimum_duration_ms: u64,
    /// Gap between unmounting the loader and showing content.
    #[schemars(title = "Reveal Delay (ms)", range(min = 0, max = 5000))]
    pub reveal_delay_ms: u64,
    /// Length of the content fade-in once shown.
    #[schemars(title = "Content Fade (ms)", range(min = 0, max = 5000))]
    pub content_fade_ms: u64,
}

impl PageOptions {
    /// Minimum visible duration.
    pub fn minimum_duration(&self) -> Duration {
        Duration::from_millis(self.minimum_duration_ms)
    }

    /// Reveal delay.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Content fade-in length.
    pub fn content_fade(&self) -> Duration {
        Duration::from_millis(self.content_fade_ms)
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            minimum_duration_ms: 2000,
            reveal_delay_ms: 500,
            content_fade_ms: 1000,
        }
    }
}
