use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rotation smoothing for the pose compositor and hard-snap easing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smoothing", inline)]
#[serde(default)]
pub struct SmoothingOptions {
    /// Slerp toward the target rotation and ease hard snaps.
    #[schemars(title = "Smooth Rotation")]
    pub smooth_rotation: bool,
    /// Per-frame slerp rate factor (`smooth_time * dt * 10`).
    #[schemars(title = "Smooth Time", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub smooth_time: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            smooth_rotation: true,
            smooth_time: 0.3,
        }
    }
}
