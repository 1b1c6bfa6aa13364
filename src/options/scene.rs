use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::swarm::SwarmOptions;

/// The rotating globe at the centre of the composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Globe", inline)]
#[serde(default)]
pub struct GlobeOptions {
    /// World-space position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Uniform scale.
    #[schemars(
        title = "Scale",
        range(min = 0.1, max = 3.0),
        extend("step" = 0.05)
    )]
    pub scale: f32,
    /// Yaw speed in rad/s.
    #[schemars(
        title = "Spin Speed",
        range(min = 0.0, max = 2.0),
        extend("step" = 0.05)
    )]
    pub speed: f32,
}

impl Default for GlobeOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            scale: 0.6,
            speed: 0.3,
        }
    }
}

/// Hop shared by the foreground bears.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bounce", inline)]
#[serde(default)]
pub struct BounceOptions {
    /// Angular frequency of the hop (rad/s).
    #[schemars(
        title = "Frequency",
        range(min = 0.0, max = 6.0),
        extend("step" = 0.1)
    )]
    pub frequency: f32,
    /// Peak hop height.
    #[schemars(
        title = "Height",
        range(min = 0.0, max = 2.0),
        extend("step" = 0.05)
    )]
    pub amplitude: f32,
    /// Peak pitch while airborne (radians).
    #[schemars(
        title = "Tilt",
        range(min = 0.0, max = 0.5),
        extend("step" = 0.01)
    )]
    pub tilt: f32,
}

impl Default for BounceOptions {
    fn default() -> Self {
        Self {
            frequency: 1.5,
            amplitude: 0.4,
            tilt: 0.1,
        }
    }
}

/// One foreground bear standing along the bottom of the view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct BearOptions {
    /// Resting position (feet on the ground).
    pub position: [f32; 3],
    /// Uniform scale.
    pub scale: f32,
    /// Phase offset of the hop in seconds.
    pub delay: f32,
    /// Fixed facing (yaw, radians).
    pub yaw: f32,
}

impl Default for BearOptions {
    fn default() -> Self {
        Self {
            position: [0.0, -2.6, 4.0],
            scale: 0.1,
            delay: 0.0,
            yaw: PI,
        }
    }
}

fn default_bears() -> Vec<BearOptions> {
    vec![
        BearOptions {
            position: [-4.0, -2.7, 4.0],
            scale: 0.1,
            delay: 0.0,
            yaw: 3.5,
        },
        BearOptions {
            position: [3.0, -2.6, 4.0],
            scale: 0.1,
            delay: 0.5,
            yaw: 2.9,
        },
        BearOptions {
            position: [4.5, -2.6, 4.0],
            scale: 0.1,
            delay: 1.0,
            yaw: 2.8,
        },
    ]
}

/// VR headset and controllers entrance.
///
/// The headset grows into place while its mount sways; each controller
/// slides in along x from off-screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Headset", inline)]
#[serde(default)]
pub struct HeadsetOptions {
    /// Whether the rig is part of the scene.
    #[schemars(title = "Show Headset")]
    pub enabled: bool,
    /// Resting position of the headset mount.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Headset scale when it first appears.
    #[schemars(
        title = "Start Scale",
        range(min = 0.0, max = 2.0),
        extend("step" = 0.05)
    )]
    pub start_scale: f32,
    /// Headset scale once settled.
    #[schemars(
        title = "Final Scale",
        range(min = 0.0, max = 2.0),
        extend("step" = 0.05)
    )]
    pub final_scale: f32,
    /// Seconds for the grow and slide entrances.
    #[schemars(
        title = "Entrance (s)",
        range(min = 0.0, max = 10.0),
        extend("step" = 0.1)
    )]
    pub entrance_duration: f32,
    /// Mount sway frequency (rad/s).
    #[schemars(
        title = "Sway Frequency",
        range(min = 0.0, max = 4.0),
        extend("step" = 0.1)
    )]
    pub sway_frequency: f32,
    /// Mount sway peak angle (radians).
    #[schemars(
        title = "Sway Amplitude",
        range(min = 0.0, max = 0.5),
        extend("step" = 0.01)
    )]
    pub sway_amplitude: f32,
    /// Controller resting offset along x from the headset.
    #[schemars(skip)]
    pub controller_offset: f32,
    /// Controller starting offset along x (off-screen).
    #[schemars(skip)]
    pub controller_entry_offset: f32,
    /// Controller height relative to the headset.
    #[schemars(skip)]
    pub controller_drop: f32,
    /// Uniform controller scale.
    #[schemars(skip)]
    pub controller_scale: f32,
}

impl Default for HeadsetOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            position: [0.0, 1.6, 3.0],
            start_scale: 0.1,
            final_scale: 0.9,
            entrance_duration: 3.0,
            sway_frequency: 0.8,
            sway_amplitude: 0.06,
            controller_offset: 1.4,
            controller_entry_offset: 8.0,
            controller_drop: 0.9,
            controller_scale: 0.5,
        }
    }
}

/// Composition of the decorative 3D scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Seed for procedural placement; `None` draws from the thread RNG.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Central globe.
    pub globe: GlobeOptions,
    /// Foreground bear hop.
    pub bounce: BounceOptions,
    /// Foreground bears.
    #[schemars(skip)]
    pub bears: Vec<BearOptions>,
    /// Background swarm placement.
    pub swarm: SwarmOptions,
    /// VR headset rig.
    pub headset: HeadsetOptions,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            seed: None,
            globe: GlobeOptions::default(),
            bounce: BounceOptions::default(),
            bears: default_bears(),
            swarm: SwarmOptions::default(),
            headset: HeadsetOptions::default(),
        }
    }
}
