//! The rig's complete programmatic vocabulary.
//!
//! Hosts that route UI buttons, scripts or network messages to the camera
//! build a [`RigCommand`] and hand it to
//! [`OrbitRig::execute`](super::OrbitRig::execute).

use super::OrbitRig;
use crate::error::RigError;
use crate::options::SnapMode;
use crate::snap::SnapPreset;

/// A camera operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RigCommand {
    // ── Snapping ────────────────────────────────────────────────────
    /// Snap to a preset by registry index.
    SnapToIndex {
        /// Registry index.
        index: usize,
    },

    /// Snap to a preset by name.
    SnapToName {
        /// Preset name.
        name: String,
    },

    /// Snap to the nearest preset if it is close enough.
    SnapToNearest,

    /// Cancel a running snap or release a magnetic lock.
    CancelSnap,

    /// Snap to the preset after the current one, wrapping around.
    NextPreset,

    /// Snap to the preset before the current one, wrapping around.
    PreviousPreset,

    /// Turn automatic snapping on or off.
    SetSnapEnabled {
        /// New state.
        enabled: bool,
    },

    /// Switch snap strategy.
    SetSnapMode {
        /// New strategy.
        mode: SnapMode,
    },

    // ── Presets ─────────────────────────────────────────────────────
    /// Register a preset.
    AddPreset {
        /// The preset to add. Its name must be unused.
        preset: SnapPreset,
    },

    /// Remove a preset by name.
    RemovePreset {
        /// Preset name.
        name: String,
    },

    // ── Orbit ───────────────────────────────────────────────────────
    /// Move the orbit by a delta, as if the user had dragged.
    Orbit {
        /// Yaw delta in degrees.
        yaw: f32,
        /// Pitch delta in degrees.
        pitch: f32,
        /// Distance delta.
        distance: f32,
    },

    /// Set the distance to the target.
    SetDistance {
        /// New distance; clamped to the limits.
        distance: f32,
    },

    /// Return to the starting pose from the options.
    Reset,
}

impl RigCommand {
    /// Apply the command. A failed command leaves the rig unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying rig operation.
    pub fn execute(self, rig: &mut OrbitRig) -> Result<(), RigError> {
        match self {
            Self::SnapToIndex { index } => rig.snap_to_index(index),
            Self::SnapToName { name } => rig.snap_by_name(&name),
            Self::SnapToNearest => {
                let _ = rig.snap_to_nearest();
                Ok(())
            }
            Self::CancelSnap => {
                let _ = rig.cancel_snap();
                Ok(())
            }
            Self::NextPreset => {
                let _ = rig.next_preset();
                Ok(())
            }
            Self::PreviousPreset => {
                let _ = rig.previous_preset();
                Ok(())
            }
            Self::SetSnapEnabled { enabled } => {
                rig.set_snap_enabled(enabled);
                Ok(())
            }
            Self::SetSnapMode { mode } => {
                rig.set_snap_mode(mode);
                Ok(())
            }
            Self::AddPreset { preset } => rig.insert_preset(preset).map(|_| ()),
            Self::RemovePreset { name } => rig.remove_preset(&name).map(|_| ()),
            Self::Orbit {
                yaw,
                pitch,
                distance,
            } => {
                let _ = rig.cancel_snap();
                rig.orientation_mut().apply_delta(yaw, pitch, distance);
                Ok(())
            }
            Self::SetDistance { distance } => {
                rig.set_distance(distance);
                Ok(())
            }
            Self::Reset => {
                rig.reset();
                Ok(())
            }
        }
    }
}
