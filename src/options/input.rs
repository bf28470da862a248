use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::Platform;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer sensitivity and drag-release tuning.
pub struct InputOptions {
    /// Device family assumed when the host does not say otherwise.
    #[schemars(skip)]
    pub platform: Platform,
    /// Degrees of rotation per unit of pointer motion.
    #[schemars(title = "Rotation Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub rotation_speed: f32,
    /// Base zoom sensitivity.
    #[schemars(title = "Zoom Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Multiplier applied to scroll input on top of `zoom_speed`.
    #[schemars(skip)]
    pub scroll_zoom_factor: f32,
    /// Extra rotation multiplier for touch drags.
    #[schemars(title = "Touch Rotation", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub touch_rotation_multiplier: f32,
    /// Extra zoom multiplier for pinch gestures.
    #[schemars(skip)]
    pub touch_zoom_multiplier: f32,
    /// One-finger drag rotates the camera.
    #[schemars(title = "Drag Rotation")]
    pub drag_rotation: bool,
    /// Two-finger pinch zooms the camera.
    #[schemars(title = "Pinch Zoom")]
    pub pinch_zoom: bool,
    /// Last-frame motion below which a mouse release counts as a stop.
    #[schemars(skip)]
    pub desktop_release_threshold: f32,
    /// Last-frame motion below which a touch release counts as a stop.
    #[schemars(skip)]
    pub touch_release_threshold: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Desktop,
            rotation_speed: 2.0,
            zoom_speed: 0.5,
            scroll_zoom_factor: 50.0,
            touch_rotation_multiplier: 0.5,
            touch_zoom_multiplier: 0.01,
            drag_rotation: true,
            pinch_zoom: true,
            desktop_release_threshold: 0.1,
            touch_release_threshold: 10.0,
        }
    }
}
