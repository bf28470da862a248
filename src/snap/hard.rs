//! Discrete threshold snap: `Idle → Snapping → Idle`.
//!
//! A snap starts from an explicit command, a preset hotkey, or a drag that
//! ends without a fling close enough to a preset. While snapping, progress
//! advances at `snap_speed` per second and the orientation is pulled toward
//! the preset each frame; once progress reaches 0.99 the values are set
//! exactly. Any drag cancels the snap.

use super::registry::SnapRegistry;
use super::SnapStatus;
use crate::camera::orientation::OrientationState;
use crate::error::RigError;
use crate::input::InputDeltas;
use crate::options::HardSnapOptions;
use crate::util::angle::lerp_angle;
use crate::util::easing::EasingFunction;

/// Progress at which a snap is considered finished.
const COMPLETE_AT: f32 = 0.99;

/// A snap in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardSession {
    /// Registry index of the preset being approached.
    pub target: usize,
    /// Normalised progress in `[0, 1]`.
    pub progress: f32,
}

/// Hard-snap state machine. Owns its session; nothing is shared between
/// rigs.
#[derive(Debug, Clone)]
pub struct HardSnapController {
    options: HardSnapOptions,
    easing: EasingFunction,
    session: Option<HardSession>,
}

impl HardSnapController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(options: HardSnapOptions, easing: EasingFunction) -> Self {
        Self {
            options,
            easing,
            session: None,
        }
    }

    /// Current session, if snapping.
    #[must_use]
    pub fn session(&self) -> Option<HardSession> {
        self.session
    }

    /// Whether a snap is in progress.
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.session.is_some()
    }

    /// Debug view of the state.
    #[must_use]
    pub fn status(&self) -> SnapStatus {
        match self.session {
            Some(HardSession { target, progress }) => {
                SnapStatus::Snapping { target, progress }
            }
            None => SnapStatus::Idle,
        }
    }

    /// Start (or restart) a snap toward `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::IndexOutOfRange`] for an unknown index.
    pub fn snap_to(
        &mut self,
        registry: &SnapRegistry,
        index: usize,
    ) -> Result<(), RigError> {
        let preset = registry.get(index)?;
        log::debug!("Hard snap started toward '{}'", preset.name);
        self.session = Some(HardSession {
            target: index,
            progress: 0.0,
        });
        Ok(())
    }

    /// Start a snap toward the nearest preset if it lies within the angle
    /// threshold. Returns whether a snap started.
    pub fn snap_to_nearest(
        &mut self,
        registry: &SnapRegistry,
        orientation: &OrientationState,
    ) -> bool {
        match registry.nearest(orientation.yaw(), orientation.pitch()) {
            Some((index, distance)) if distance <= self.options.angle_threshold => {
                self.snap_to(registry, index).is_ok()
            }
            _ => false,
        }
    }

    /// Abort a running snap. No-op (returns `false`) when idle.
    pub fn cancel(&mut self) -> bool {
        if self.session.take().is_some() {
            log::debug!("Hard snap cancelled");
            true
        } else {
            false
        }
    }

    /// User control preempts snapping: any active drag cancels the session.
    pub fn before_input(&mut self, deltas: &InputDeltas) {
        if deltas.drag_active {
            let _ = self.cancel();
        }
    }

    /// A drag released without a fling snaps to a nearby preset.
    pub fn after_input(
        &mut self,
        deltas: &InputDeltas,
        registry: &SnapRegistry,
        orientation: &OrientationState,
        enabled: bool,
    ) {
        if enabled && deltas.drag_ended && deltas.drag_was_trivial {
            let _ = self.snap_to_nearest(registry, orientation);
        }
    }

    /// Advance the session by `dt` seconds.
    pub fn advance(
        &mut self,
        registry: &SnapRegistry,
        orientation: &mut OrientationState,
        dt: f32,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Ok(preset) = registry.get(session.target) else {
            self.session = None;
            return;
        };

        session.progress =
            (session.progress + dt * self.options.snap_speed).clamp(0.0, 1.0);
        let t = self.easing.evaluate(session.progress);

        if session.progress >= COMPLETE_AT {
            orientation.set(preset.yaw, preset.pitch, preset.distance);
            log::info!("Snapped to: {}", preset.name);
            self.session = None;
            return;
        }

        let distance = orientation.distance();
        orientation.set(
            lerp_angle(orientation.yaw(), preset.yaw, t),
            lerp_angle(orientation.pitch(), preset.pitch, t),
            distance + (preset.distance - distance) * t,
        );
    }
}

impl Default for HardSnapController {
    fn default() -> Self {
        Self::new(HardSnapOptions::default(), EasingFunction::default())
    }
}
