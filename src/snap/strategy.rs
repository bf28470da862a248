//! One rig, three snap behaviours.

use super::hard::HardSnapController;
use super::magnetic::MagneticSnapController;
use super::registry::SnapRegistry;
use super::SnapStatus;
use crate::camera::orientation::OrientationState;
use crate::error::RigError;
use crate::input::InputDeltas;
use crate::options::{SmoothingOptions, SnapMode, SnapOptions};
use crate::util::easing::EasingFunction;

/// The snap strategy a rig runs. Exactly one is active at a time.
#[derive(Debug, Clone)]
pub enum SnapStrategy {
    /// Free orbit. Explicit snaps jump straight to the preset.
    None,
    /// Discrete threshold snap.
    Hard(HardSnapController),
    /// Continuous magnetic attraction.
    Magnetic(MagneticSnapController),
}

impl SnapStrategy {
    /// Build the strategy selected by `options.mode`.
    #[must_use]
    pub fn from_options(
        options: &SnapOptions,
        smoothing: &SmoothingOptions,
    ) -> Self {
        match options.mode {
            SnapMode::None => Self::None,
            SnapMode::Hard => Self::Hard(HardSnapController::new(
                options.hard.clone(),
                EasingFunction::for_smoothing(smoothing.smooth_rotation),
            )),
            SnapMode::Magnetic => Self::Magnetic(MagneticSnapController::new(
                options.magnetic.clone(),
            )),
        }
    }

    /// Mode this strategy implements.
    #[must_use]
    pub fn mode(&self) -> SnapMode {
        match self {
            Self::None => SnapMode::None,
            Self::Hard(_) => SnapMode::Hard,
            Self::Magnetic(_) => SnapMode::Magnetic,
        }
    }

    /// Debug view of the session.
    #[must_use]
    pub fn status(&self) -> SnapStatus {
        match self {
            Self::None => SnapStatus::Idle,
            Self::Hard(hard) => hard.status(),
            Self::Magnetic(magnet) => magnet.status(),
        }
    }

    /// Preset the strategy is currently driving toward or holding.
    #[must_use]
    pub fn active_target(&self) -> Option<usize> {
        match self.status() {
            SnapStatus::Idle => None,
            SnapStatus::Snapping { target, .. } | SnapStatus::Locked { target } => {
                Some(target)
            }
        }
    }

    /// Whether the compositor should apply rotation directly instead of
    /// slerping toward it.
    #[must_use]
    pub fn bypasses_smoothing(&self) -> bool {
        self.active_target().is_some()
    }

    /// Runs before the frame's deltas are applied to the orientation.
    pub fn before_input(&mut self, deltas: &InputDeltas) {
        match self {
            Self::None => {}
            Self::Hard(hard) => hard.before_input(deltas),
            Self::Magnetic(magnet) => magnet.before_input(deltas),
        }
    }

    /// Runs after the frame's deltas were applied.
    pub fn after_input(
        &mut self,
        deltas: &InputDeltas,
        registry: &SnapRegistry,
        orientation: &OrientationState,
        enabled: bool,
    ) {
        if let Self::Hard(hard) = self {
            hard.after_input(deltas, registry, orientation, enabled);
        }
    }

    /// Advance any session by `dt` seconds. Magnetic attraction only runs
    /// while snapping is enabled.
    pub fn advance(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        dt: f32,
        enabled: bool,
    ) {
        match self {
            Self::None => {}
            Self::Hard(hard) => hard.advance(registry, orientation, dt),
            Self::Magnetic(magnet) => {
                if enabled {
                    magnet.advance(registry, orientation, dt);
                }
            }
        }
    }

    /// Snap toward preset `index`. Without a strategy, or with magnetic
    /// snapping, the values are applied immediately.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::IndexOutOfRange`] for an unknown index.
    pub fn snap_to(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        index: usize,
        enabled: bool,
    ) -> Result<(), RigError> {
        match self {
            Self::None => {
                let preset = registry.get(index)?;
                orientation.set(preset.yaw, preset.pitch, preset.distance);
                Ok(())
            }
            Self::Hard(hard) => hard.snap_to(registry, index),
            Self::Magnetic(magnet) => {
                magnet.force_snap(registry, orientation, index, enabled)
            }
        }
    }

    /// Snap to the nearest preset if it is close enough for the strategy.
    /// Returns whether a snap started.
    pub fn snap_to_nearest(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        enabled: bool,
    ) -> bool {
        match self {
            Self::None => false,
            Self::Hard(hard) => hard.snap_to_nearest(registry, orientation),
            Self::Magnetic(magnet) => {
                magnet.snap_to_nearest(registry, orientation, enabled)
            }
        }
    }

    /// Cancel a running snap or release a lock.
    pub fn cancel(&mut self) -> bool {
        match self {
            Self::None => false,
            Self::Hard(hard) => hard.cancel(),
            Self::Magnetic(magnet) => magnet.cancel(),
        }
    }
}

impl Default for SnapStrategy {
    fn default() -> Self {
        Self::from_options(&SnapOptions::default(), &SmoothingOptions::default())
    }
}
