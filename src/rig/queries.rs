//! Read-only debug queries for overlays and editor gizmos.

use glam::{Quat, Vec3};

use super::OrbitRig;
use crate::camera::pose::orbit_position;
use crate::snap::SnapStatus;

/// Nearest preset to the current orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestPreset {
    /// Registry index.
    pub index: usize,
    /// Preset name.
    pub name: String,
    /// Angular distance in degrees.
    pub angular_distance: f32,
}

/// World-space marker for a preset viewpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetMarker {
    /// Preset name.
    pub name: String,
    /// Where the camera would sit at this preset.
    pub position: Vec3,
    /// Whether the strategy is currently driving toward or holding it.
    pub active: bool,
}

impl OrbitRig {
    /// Current snap session.
    #[must_use]
    pub fn snap_status(&self) -> SnapStatus {
        self.strategy.status()
    }

    /// Nearest preset, or `None` with an empty registry.
    #[must_use]
    pub fn nearest_preset(&self) -> Option<NearestPreset> {
        let (index, angular_distance) =
            self.registry.nearest(self.yaw(), self.pitch())?;
        let preset = self.registry.get(index).ok()?;
        Some(NearestPreset {
            index,
            name: preset.name.clone(),
            angular_distance,
        })
    }

    /// Markers for every preset around the current (offset) target. Empty
    /// without a target.
    #[must_use]
    pub fn preset_markers(&self) -> Vec<PresetMarker> {
        let Some(target) = self.focus_point() else {
            return Vec::new();
        };
        let active = self.strategy.active_target();
        self.registry
            .iter()
            .enumerate()
            .map(|(index, preset)| {
                let rotation = Quat::from_rotation_y(preset.yaw.to_radians())
                    * Quat::from_rotation_x(preset.pitch.to_radians());
                PresetMarker {
                    name: preset.name.clone(),
                    position: orbit_position(rotation, preset.distance, target),
                    active: active == Some(index),
                }
            })
            .collect()
    }

    /// "Snapped to: <name>" while a snap is running or a lock is held.
    #[must_use]
    pub fn status_label(&self) -> Option<String> {
        let index = self.strategy.active_target()?;
        let preset = self.registry.get(index).ok()?;
        Some(format!("Snapped to: {}", preset.name))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::options::{RigOptions, SnapMode};

    #[test]
    fn nearest_reports_name_and_distance() {
        let mut rig = OrbitRig::default();
        rig.orientation_mut().set(85.0, 30.0, 5.0);
        let nearest = rig.nearest_preset().unwrap();
        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.name, "Right");
        assert!((nearest.angular_distance - 5.0).abs() < 1e-4);
    }

    #[test]
    fn markers_need_a_target() {
        let mut rig = OrbitRig::default();
        assert!(rig.preset_markers().is_empty());

        rig.set_target(Rc::new(Vec3::new(0.0, 1.0, 0.0)));
        let markers = rig.preset_markers();
        assert_eq!(markers.len(), 4);
        let front = &markers[0];
        assert!(((front.position - Vec3::Y).length() - 5.0).abs() < 1e-4);
        assert!(front.position.z < 0.0, "front sits on -Z");
        assert!(markers.iter().all(|m| !m.active));
    }

    #[test]
    fn label_tracks_active_preset() {
        let mut options = RigOptions::default();
        options.snap.mode = SnapMode::Magnetic;
        let mut rig = OrbitRig::with_target(options, Rc::new(Vec3::ZERO));
        assert_eq!(rig.status_label(), None);

        rig.snap_by_name("Back").unwrap();
        assert_eq!(rig.status_label().as_deref(), Some("Snapped to: Back"));
        assert!(rig.preset_markers()[2].active);
    }
}
