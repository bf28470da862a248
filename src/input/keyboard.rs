use serde::{Deserialize, Serialize};

/// Rig-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// snap_to_nearest = "Space"
/// cancel_snap = "Escape"
/// next_preset = "ArrowRight"
/// ```
///
/// Per-preset hotkeys live on the presets themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Snap to the nearest preset if it is close enough.
    SnapToNearest,
    /// Abort a running snap or release a magnetic lock.
    CancelSnap,
    /// Snap to the preset after the current one, wrapping around.
    NextPreset,
    /// Snap to the preset before the current one, wrapping around.
    PreviousPreset,
}

/// Key string for a winit physical key, in the form presets and bindings
/// use (`"Digit1"`, `"Space"`).
#[cfg(feature = "winit")]
#[must_use]
pub fn key_code_name(code: winit::keyboard::KeyCode) -> String {
    format!("{code:?}")
}
