use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default attraction radius for magnetic snapping, in degrees.
pub const DEFAULT_ATTRACTION_RADIUS: f32 = 15.0;
/// Default attraction strength for magnetic snapping.
pub const DEFAULT_ATTRACTION_STRENGTH: f32 = 5.0;

/// A named viewpoint the camera can align to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Snap Preset")]
#[serde(default)]
pub struct SnapPreset {
    /// Unique name within a registry.
    pub name: String,
    /// Target yaw in degrees.
    pub yaw: f32,
    /// Target pitch in degrees.
    pub pitch: f32,
    /// Target distance from the orbit target.
    pub distance: f32,
    /// Physical key string that triggers this preset (e.g. `"Digit1"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,
    /// Angular radius of the magnetic pull, in degrees.
    #[schemars(range(min = 0.1, max = 50.0))]
    pub attraction_radius: f32,
    /// Strength of the magnetic pull.
    #[schemars(range(min = 0.1, max = 20.0))]
    pub attraction_strength: f32,
}

impl SnapPreset {
    /// Preset with default attraction parameters and no hotkey.
    #[must_use]
    pub fn new(name: impl Into<String>, yaw: f32, pitch: f32, distance: f32) -> Self {
        Self {
            name: name.into(),
            yaw,
            pitch,
            distance,
            ..Self::default()
        }
    }

    /// Bind a hotkey.
    #[must_use]
    pub fn with_hotkey(mut self, key: impl Into<String>) -> Self {
        self.hotkey = Some(key.into());
        self
    }

    /// Override the magnetic attraction parameters.
    #[must_use]
    pub fn with_attraction(mut self, radius: f32, strength: f32) -> Self {
        self.attraction_radius = radius;
        self.attraction_strength = strength;
        self
    }

    /// The four cardinal viewpoints: Front, Right, Back, Left at 30° pitch,
    /// distance 5, bound to `Digit1`..`Digit4`.
    #[must_use]
    pub fn cardinal() -> Vec<Self> {
        [("Front", 0.0), ("Right", 90.0), ("Back", 180.0), ("Left", 270.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (name, yaw))| {
                Self::new(name, yaw, 30.0, 5.0).with_hotkey(format!("Digit{}", i + 1))
            })
            .collect()
    }
}

impl Default for SnapPreset {
    fn default() -> Self {
        Self {
            name: "New Point".to_owned(),
            yaw: 0.0,
            pitch: 30.0,
            distance: 5.0,
            hotkey: None,
            attraction_radius: DEFAULT_ATTRACTION_RADIUS,
            attraction_strength: DEFAULT_ATTRACTION_STRENGTH,
        }
    }
}
