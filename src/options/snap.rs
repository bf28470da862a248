use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::snap::AttractionMode;

/// Which snap strategy a rig runs. Strategies are alternatives, never
/// combined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SnapMode {
    /// Free orbit, presets only reachable by explicit command.
    None,
    /// Discrete interpolation triggered on release, hotkey or command.
    #[default]
    Hard,
    /// Continuous attraction with a locked state.
    Magnetic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Snap", inline)]
#[serde(default)]
/// Snap strategy selection and tuning.
pub struct SnapOptions {
    /// Active strategy.
    #[schemars(title = "Mode")]
    pub mode: SnapMode,
    /// Automatic snapping on/off.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Hard-snap tuning.
    pub hard: HardSnapOptions,
    /// Magnetic-snap tuning.
    pub magnetic: MagneticOptions,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            mode: SnapMode::Hard,
            enabled: true,
            hard: HardSnapOptions::default(),
            magnetic: MagneticOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hard Snap", inline)]
#[serde(default)]
/// Hard-snap trigger distance and speed.
pub struct HardSnapOptions {
    /// Max angular distance (degrees) for release/nearest snaps.
    #[schemars(title = "Angle Threshold", range(min = 0.5, max = 45.0), extend("step" = 0.5))]
    pub angle_threshold: f32,
    /// Progress per second.
    #[schemars(title = "Snap Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub snap_speed: f32,
}

impl Default for HardSnapOptions {
    fn default() -> Self {
        Self {
            angle_threshold: 5.0,
            snap_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Magnetic Snap", inline)]
#[serde(default)]
/// Magnetic attraction, lock and escape tuning.
pub struct MagneticOptions {
    /// Global multiplier on every preset's pull.
    #[schemars(title = "Magnetic Force", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub magnetic_force: f32,
    /// How several in-range presets combine.
    #[schemars(title = "Attraction")]
    pub attraction: AttractionMode,
    /// Angular distance (degrees) under which a preset locks.
    #[schemars(skip)]
    pub lock_angle: f32,
    /// Per-axis error (degrees) under which a lock snaps exactly.
    #[schemars(skip)]
    pub snap_distance_threshold: f32,
    /// Time constant of the locked smoothing, in seconds.
    #[schemars(skip)]
    pub lock_smooth_time: f32,
    /// Distance interpolation rate while locked, per second.
    #[schemars(skip)]
    pub distance_rate: f32,
    /// Rotation delta that breaks a lock with a mouse.
    #[schemars(title = "Escape (Desktop)", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub desktop_escape_threshold: f32,
    /// Rotation delta that breaks a lock on touch.
    #[schemars(title = "Escape (Touch)", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub touch_escape_threshold: f32,
}

impl Default for MagneticOptions {
    fn default() -> Self {
        Self {
            magnetic_force: 10.0,
            attraction: AttractionMode::Sequential,
            lock_angle: 2.0,
            snap_distance_threshold: 1.0,
            lock_smooth_time: 0.1,
            distance_rate: 2.0,
            desktop_escape_threshold: 0.5,
            touch_escape_threshold: 0.3,
        }
    }
}
