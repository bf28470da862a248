//! Centralized rig options with TOML preset support.
//!
//! All tweakable settings (orbit limits, input sensitivity, smoothing, snap
//! strategy, keybindings, preset viewpoints) are consolidated here. Options
//! serialize to/from TOML so a rig configuration can live next to a scene.

mod input;
mod keybindings;
mod orbit;
mod smoothing;
mod snap;

use std::path::Path;

pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use smoothing::SmoothingOptions;
pub use snap::{HardSnapOptions, MagneticOptions, SnapMode, SnapOptions};

use crate::error::RigError;
use crate::snap::SnapPreset;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[snap]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct RigOptions {
    /// Initial pose and limits.
    pub orbit: OrbitOptions,
    /// Pointer sensitivity and release thresholds.
    pub input: InputOptions,
    /// Rotation smoothing.
    pub smoothing: SmoothingOptions,
    /// Snap strategy and tuning.
    pub snap: SnapOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Preset viewpoints. Empty means the four cardinal defaults.
    #[schemars(skip)]
    pub presets: Vec<SnapPreset>,
}

impl RigOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigOptions)
    }

    /// JSON Schema as a pretty-printed string.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::OptionsParse`] if the schema cannot be serialized.
    pub fn json_schema_string() -> Result<String, RigError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Presets to register, falling back to the cardinal defaults.
    #[must_use]
    pub fn effective_presets(&self) -> Vec<SnapPreset> {
        if self.presets.is_empty() {
            SnapPreset::cardinal()
        } else {
            self.presets.clone()
        }
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::OptionsParse`] for malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, RigError> {
        toml::from_str(content).map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Io`] if the file cannot be read and
    /// [`RigError::OptionsParse`] for malformed TOML.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        Self::from_toml(&content)
    }

    /// Serialize to pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::OptionsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, RigError> {
        toml::to_string_pretty(self).map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::snap::AttractionMode;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = RigOptions::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = RigOptions::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn presets_round_trip_through_toml() {
        let opts = RigOptions {
            presets: SnapPreset::cardinal(),
            ..RigOptions::default()
        };
        let parsed = RigOptions::from_toml(&opts.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.presets, opts.presets);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[snap]
mode = "magnetic"

[snap.magnetic]
attraction = "weighted"

[[presets]]
name = "Top"
pitch = 75.0
hotkey = "KeyT"
"#;
        let opts = RigOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.snap.mode, SnapMode::Magnetic);
        assert_eq!(opts.snap.magnetic.attraction, AttractionMode::Weighted);
        // Everything else should be default
        assert_eq!(opts.snap.magnetic.magnetic_force, 10.0);
        assert_eq!(opts.orbit.max_pitch, 80.0);
        assert!(opts.snap.enabled);
        assert_eq!(opts.effective_presets().len(), 1);
        assert_eq!(opts.presets[0].hotkey.as_deref(), Some("KeyT"));
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::CancelSnap)
        );
    }

    #[test]
    fn empty_presets_fall_back_to_cardinal() {
        let names: Vec<_> = RigOptions::default()
            .effective_presets()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Front", "Right", "Back", "Left"]);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = RigOptions::from_toml("[snap\nmode = 3").unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value = serde_json::to_value(RigOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("orbit"));
        assert!(props.contains_key("input"));
        assert!(props.contains_key("smoothing"));
        assert!(props.contains_key("snap"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));
        assert!(!props.contains_key("presets"));

        // Orbit should expose limits but not the starting angles
        let orbit = &props["orbit"]["properties"];
        assert!(orbit.get("max_pitch").is_some());
        assert!(orbit.get("yaw").is_none());
    }
}
