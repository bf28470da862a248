use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Initial orbit pose and its limits.
pub struct OrbitOptions {
    /// Starting yaw in degrees.
    #[schemars(skip)]
    pub yaw: f32,
    /// Starting pitch in degrees.
    #[schemars(skip)]
    pub pitch: f32,
    /// Starting distance from the target.
    #[schemars(title = "Distance", range(min = 0.5, max = 50.0), extend("step" = 0.1))]
    pub distance: f32,
    /// Lowest pitch in degrees.
    #[schemars(title = "Min Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub min_pitch: f32,
    /// Highest pitch in degrees.
    #[schemars(title = "Max Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub max_pitch: f32,
    /// Closest distance to the target.
    #[schemars(title = "Min Distance", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub min_distance: f32,
    /// Farthest distance from the target.
    #[schemars(title = "Max Distance", range(min = 0.1, max = 100.0), extend("step" = 0.5))]
    pub max_distance: f32,
    /// World-space offset added to the target position before orbiting,
    /// e.g. to look at a character's head rather than its feet.
    #[schemars(title = "Target Offset")]
    pub target_offset: [f32; 3],
}

impl OrbitOptions {
    /// Target offset as a vector.
    #[must_use]
    pub fn target_offset(&self) -> Vec3 {
        Vec3::from_array(self.target_offset)
    }
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 5.0,
            min_pitch: -20.0,
            max_pitch: 80.0,
            min_distance: 2.0,
            max_distance: 15.0,
            target_offset: [0.0; 3],
        }
    }
}
