//! Continuous magnetic snap: `Free ⇄ Locked`.
//!
//! While free, every preset whose attraction radius contains the current
//! orientation pulls it closer, harder the closer it is. Dropping under the
//! lock angle locks onto that preset; the lock then damps the remaining error
//! away and holds the preset until the user drags past the escape threshold.
//! Attraction pauses while the user is dragging, so a slow drag can always
//! leave a preset's radius.

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::registry::SnapRegistry;
use super::{SnapPreset, SnapStatus};
use crate::camera::orientation::OrientationState;
use crate::error::RigError;
use crate::input::{InputDeltas, Platform};
use crate::options::MagneticOptions;
use crate::util::angle::{angular_distance, delta_angle, smooth_damp_angle};

/// How pulls from several in-range presets combine within one frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AttractionMode {
    /// Presets pull one after another in registry order, each starting from
    /// where the previous one left the orientation. Later presets dominate.
    #[default]
    Sequential,
    /// Only the nearest in-range preset pulls, without the global magnetic
    /// force.
    Nearest,
    /// All in-range pulls are measured from the same start orientation and
    /// summed, normalised so the total never overshoots.
    Weighted,
}

/// An active lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticLock {
    /// Registry index of the locked preset.
    pub target: usize,
    /// Smoothing velocity (yaw, pitch) in degrees per second.
    pub velocity: Vec2,
}

/// Magnetic-snap state machine.
#[derive(Debug, Clone)]
pub struct MagneticSnapController {
    options: MagneticOptions,
    lock: Option<MagneticLock>,
    /// Set while the user drives the orbit, or on the frame a lock broke.
    hold_attraction: bool,
}

/// One in-range preset, before force and `dt` are applied.
struct Pull {
    index: usize,
    distance: f32,
    offset: Vec2,
    /// `(1 - distance / radius) * attraction_strength`.
    weight: f32,
}

impl MagneticSnapController {
    /// Create a free controller.
    #[must_use]
    pub fn new(options: MagneticOptions) -> Self {
        Self {
            options,
            lock: None,
            hold_attraction: false,
        }
    }

    /// Current lock, if any.
    #[must_use]
    pub fn lock(&self) -> Option<MagneticLock> {
        self.lock
    }

    /// Whether the controller is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Debug view of the state.
    #[must_use]
    pub fn status(&self) -> SnapStatus {
        match self.lock {
            Some(lock) => SnapStatus::Locked {
                target: lock.target,
            },
            None => SnapStatus::Idle,
        }
    }

    /// Escape threshold for a device family.
    #[must_use]
    pub fn escape_threshold(&self, platform: Platform) -> f32 {
        match platform {
            Platform::Desktop => self.options.desktop_escape_threshold,
            Platform::Touch => self.options.touch_escape_threshold,
        }
    }

    /// Jump straight to `index` and lock onto it. With `lock` false (snapping
    /// disabled) the values are applied but the controller stays free.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::IndexOutOfRange`] for an unknown index; the
    /// orientation is left untouched.
    pub fn force_snap(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        index: usize,
        lock: bool,
    ) -> Result<(), RigError> {
        let preset = registry.get(index)?;
        orientation.set(preset.yaw, preset.pitch, preset.distance);
        self.lock = lock.then_some(MagneticLock {
            target: index,
            velocity: Vec2::ZERO,
        });
        log::debug!("Magnetic snap forced to '{}'", preset.name);
        Ok(())
    }

    /// Force-snap to the nearest preset whose attraction radius contains the
    /// orientation. Returns whether a snap happened.
    pub fn snap_to_nearest(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        lock: bool,
    ) -> bool {
        let Some(pull) = nearest_in_range(registry, orientation) else {
            return false;
        };
        self.force_snap(registry, orientation, pull.index, lock).is_ok()
    }

    /// Release the lock. No-op (returns `false`) when free.
    pub fn cancel(&mut self) -> bool {
        if self.lock.take().is_some() {
            log::debug!("Magnetic lock released");
            true
        } else {
            false
        }
    }

    /// Break the lock when the user pushes hard enough. Runs before the
    /// frame's input is applied. Free attraction is held for the frame when
    /// a drag is in progress or the lock just broke.
    pub fn before_input(&mut self, deltas: &InputDeltas) {
        self.hold_attraction = deltas.drag_active;
        if self.lock.is_some()
            && deltas.rotation_magnitude()
                > self.escape_threshold(deltas.platform)
        {
            self.lock = None;
            self.hold_attraction = true;
            log::debug!("Magnetic lock escaped");
        }
    }

    /// Run one frame of attraction (free) or lock smoothing (locked).
    pub fn advance(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        dt: f32,
    ) {
        let held = std::mem::take(&mut self.hold_attraction);
        if self.lock.is_some() {
            self.hold_lock(registry, orientation, dt);
        } else if !held {
            self.attract(registry, orientation, dt);
        }
    }

    fn hold_lock(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        dt: f32,
    ) {
        let Some(lock) = self.lock.as_mut() else {
            return;
        };
        let Ok(preset) = registry.get(lock.target) else {
            self.lock = None;
            return;
        };

        let yaw_error = delta_angle(orientation.yaw(), preset.yaw);
        let pitch_error = delta_angle(orientation.pitch(), preset.pitch);
        let threshold = self.options.snap_distance_threshold;

        if yaw_error.abs() < threshold && pitch_error.abs() < threshold {
            orientation.set(preset.yaw, preset.pitch, preset.distance);
            return;
        }

        let smooth_time = self.options.lock_smooth_time;
        let yaw = smooth_damp_angle(
            orientation.yaw(),
            preset.yaw,
            &mut lock.velocity.x,
            smooth_time,
            dt,
        );
        let pitch = smooth_damp_angle(
            orientation.pitch(),
            preset.pitch,
            &mut lock.velocity.y,
            smooth_time,
            dt,
        );
        let distance = orientation.distance();
        let t = (dt * self.options.distance_rate).clamp(0.0, 1.0);
        orientation.set(yaw, pitch, distance + (preset.distance - distance) * t);
    }

    fn attract(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        dt: f32,
    ) {
        match self.options.attraction {
            AttractionMode::Sequential => {
                self.attract_sequential(registry, orientation, dt);
            }
            AttractionMode::Nearest => {
                if let Some(pull) = nearest_in_range(registry, orientation) {
                    let amount = (pull.weight * dt).min(1.0);
                    apply_offset(orientation, pull.offset * amount);
                    self.maybe_lock(&pull);
                }
            }
            AttractionMode::Weighted => {
                let in_range = pulls(registry, orientation);
                let force = self.options.magnetic_force * dt;
                let total: f32 = in_range.iter().map(|p| p.weight * force).sum();
                let scale = if total > 1.0 { 1.0 / total } else { 1.0 };
                let offset: Vec2 = in_range
                    .iter()
                    .map(|p| p.offset * p.weight * force * scale)
                    .sum();
                apply_offset(orientation, offset);
                let closest = in_range
                    .iter()
                    .min_by(|a, b| a.distance.total_cmp(&b.distance));
                if let Some(closest) = closest {
                    self.maybe_lock(closest);
                }
            }
        }
    }

    /// Each preset pulls from the orientation the previous one produced.
    fn attract_sequential(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        dt: f32,
    ) {
        for index in 0..registry.len() {
            let Ok(preset) = registry.get(index) else {
                continue;
            };
            if let Some(pull) = pull_for(index, preset, orientation) {
                let amount =
                    (pull.weight * self.options.magnetic_force * dt).min(1.0);
                apply_offset(orientation, pull.offset * amount);
                self.maybe_lock(&pull);
            }
        }
    }

    fn maybe_lock(&mut self, pull: &Pull) {
        if pull.distance < self.options.lock_angle {
            if self.lock.is_none() {
                log::debug!("Magnetic lock engaged on preset {}", pull.index);
            }
            self.lock = Some(MagneticLock {
                target: pull.index,
                velocity: Vec2::ZERO,
            });
        }
    }
}

impl Default for MagneticSnapController {
    fn default() -> Self {
        Self::new(MagneticOptions::default())
    }
}

fn pulls(registry: &SnapRegistry, orientation: &OrientationState) -> Vec<Pull> {
    registry
        .iter()
        .enumerate()
        .filter_map(|(index, preset)| pull_for(index, preset, orientation))
        .collect()
}

fn nearest_in_range(
    registry: &SnapRegistry,
    orientation: &OrientationState,
) -> Option<Pull> {
    pulls(registry, orientation)
        .into_iter()
        .reduce(|best, p| if p.distance < best.distance { p } else { best })
}

fn pull_for(
    index: usize,
    preset: &SnapPreset,
    orientation: &OrientationState,
) -> Option<Pull> {
    let radius = preset.attraction_radius;
    if radius <= 0.0 {
        return None;
    }
    let (yaw, pitch) = (orientation.yaw(), orientation.pitch());
    let distance = angular_distance(yaw, pitch, preset.yaw, preset.pitch);
    if distance >= radius {
        return None;
    }
    Some(Pull {
        index,
        distance,
        // Offset of the orientation from the preset; subtracting it moves
        // toward the preset.
        offset: Vec2::new(
            delta_angle(preset.yaw, yaw),
            delta_angle(preset.pitch, pitch),
        ),
        weight: (1.0 - distance / radius) * preset.attraction_strength,
    })
}

fn apply_offset(orientation: &mut OrientationState, offset: Vec2) {
    orientation.set_yaw(orientation.yaw() - offset.x);
    orientation.set_pitch(orientation.pitch() - offset.y);
}
