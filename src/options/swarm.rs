use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Procedural placement of the background bear swarm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Swarm", inline)]
#[serde(default)]
pub struct SwarmOptions {
    /// Samples drawn (members landing in the exclusion zone are dropped).
    #[schemars(title = "Samples", range(min = 0, max = 500))]
    pub count: usize,
    /// Half extents of the sampling box along x, y, z.
    #[schemars(skip)]
    pub half_extents: [f32; 3],
    /// Half extents of the central exclusion column along x and z.
    #[schemars(skip)]
    pub exclusion_half_extents: [f32; 2],
    /// Half-open `[min, max)` uniform scale range.
    #[schemars(title = "Scale Range")]
    pub scale_range: [f32; 2],
    /// Half-open `[min, max)` yaw speed range in rad/s.
    #[schemars(title = "Spin Range")]
    pub speed_range: [f32; 2],
}

impl Default for SwarmOptions {
    fn default() -> Self {
        Self {
            count: 35,
            half_extents: [12.5, 7.5, 12.5],
            exclusion_half_extents: [4.0, 4.0],
            scale_range: [0.02, 0.1],
            speed_range: [0.1, 0.4],
        }
    }
}
