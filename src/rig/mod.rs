//! The orbit rig: one orientation, one preset registry, one snap strategy.
//!
//! A frame runs in two phases. [`OrbitRig::update`] turns the frame's input
//! into deltas, lets the snap strategy react, and mutates the orientation.
//! [`OrbitRig::late_update`] runs after the target has moved for the frame
//! and composes the world-space pose.

mod command;
mod queries;

use std::rc::Rc;

use glam::Vec3;
pub use command::RigCommand;
pub use queries::{NearestPreset, PresetMarker};

use crate::camera::orientation::OrientationState;
use crate::camera::pose::{Pose, PoseCompositor};
use crate::camera::target::TargetProvider;
use crate::error::RigError;
use crate::input::{InputAggregator, InputDeltas, KeyAction, PointerSource};
use crate::options::{RigOptions, SnapMode};
use crate::snap::{SnapPreset, SnapRegistry, SnapStrategy};

/// Third-person orbit camera rig with preset snapping.
pub struct OrbitRig {
    options: RigOptions,
    orientation: OrientationState,
    registry: SnapRegistry,
    input: InputAggregator,
    strategy: SnapStrategy,
    compositor: PoseCompositor,
    snap_enabled: bool,
    target: Option<Rc<dyn TargetProvider>>,
    warned_missing_target: bool,
    last_deltas: InputDeltas,
}

impl std::fmt::Debug for OrbitRig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrbitRig")
            .field("orientation", &self.orientation)
            .field("strategy", &self.strategy)
            .field("snap_enabled", &self.snap_enabled)
            .field("presets", &self.registry.len())
            .field("has_target", &self.target.is_some())
            .finish_non_exhaustive()
    }
}

// ── Construction ──

impl OrbitRig {
    /// Build a rig from options. The rig has no target until
    /// [`set_target`](Self::set_target) is called.
    #[must_use]
    pub fn new(options: RigOptions) -> Self {
        let registry = SnapRegistry::from_presets(options.effective_presets());
        let strategy = SnapStrategy::from_options(&options.snap, &options.smoothing);
        log::debug!(
            "Orbit rig created: {:?} snapping, {} presets",
            strategy.mode(),
            registry.len()
        );
        Self {
            orientation: OrientationState::from_options(&options.orbit),
            input: InputAggregator::new(options.input.clone()),
            compositor: PoseCompositor::new(options.smoothing.clone()),
            snap_enabled: options.snap.enabled,
            registry,
            strategy,
            target: None,
            warned_missing_target: false,
            last_deltas: InputDeltas::default(),
            options,
        }
    }

    /// Build a rig that already follows `target`.
    #[must_use]
    pub fn with_target(
        options: RigOptions,
        target: Rc<dyn TargetProvider>,
    ) -> Self {
        let mut rig = Self::new(options);
        rig.set_target(target);
        rig
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(RigOptions::default())
    }
}

// ── Target ──

impl OrbitRig {
    /// Follow `target`.
    pub fn set_target(&mut self, target: Rc<dyn TargetProvider>) {
        self.target = Some(target);
        self.warned_missing_target = false;
    }

    /// Stop following any target. Frames become no-ops.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Whether a target is assigned.
    #[must_use]
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    fn target_or_warn(&mut self) -> Option<Rc<dyn TargetProvider>> {
        if self.target.is_none() && !self.warned_missing_target {
            log::warn!("Orbit rig has no target; skipping frame updates");
            self.warned_missing_target = true;
        }
        self.target.clone()
    }

    /// Point the camera orbits: target position plus the configured offset.
    fn focus_point(&self) -> Option<Vec3> {
        let target = self.target.as_ref()?;
        Some(target.position() + self.options.orbit.target_offset())
    }
}

// ── Frame ──

impl OrbitRig {
    /// Input and snap phase. Must run before [`late_update`](Self::late_update)
    /// in the same frame.
    pub fn update(&mut self, source: &impl PointerSource, dt: f32) {
        if self.target_or_warn().is_none() {
            return;
        }

        let deltas = self.input.process(source, dt);
        for key in source.keys_pressed() {
            self.handle_key(key);
        }

        self.strategy.before_input(&deltas);
        self.orientation
            .apply_delta(deltas.yaw, deltas.pitch, deltas.distance);
        self.strategy.after_input(
            &deltas,
            &self.registry,
            &self.orientation,
            self.snap_enabled,
        );
        self.strategy.advance(
            &self.registry,
            &mut self.orientation,
            dt,
            self.snap_enabled,
        );
        self.last_deltas = deltas;
    }

    /// Composition phase. Returns `None` when the rig has no target.
    pub fn late_update(&mut self, dt: f32) -> Option<Pose> {
        let _ = self.target_or_warn()?;
        let focus = self.focus_point()?;
        Some(self.compositor.compose(
            &self.orientation,
            focus,
            dt,
            self.strategy.bypasses_smoothing(),
        ))
    }

    /// Preset hotkeys take priority over bound actions.
    fn handle_key(&mut self, key: &str) {
        if let Ok(index) = self.registry.by_hotkey(key) {
            if let Err(e) = self.snap_to_index(index) {
                log::warn!("Hotkey {key} failed: {e}");
            }
            return;
        }
        match self.options.keybindings.lookup(key) {
            Some(KeyAction::SnapToNearest) => {
                if self.snap_enabled {
                    let _ = self.snap_to_nearest();
                }
            }
            Some(KeyAction::CancelSnap) => {
                let _ = self.cancel_snap();
            }
            Some(KeyAction::NextPreset) => {
                let _ = self.next_preset();
            }
            Some(KeyAction::PreviousPreset) => {
                let _ = self.previous_preset();
            }
            None => {}
        }
    }
}

// ── Presets and snapping ──

impl OrbitRig {
    /// Register a preset. Returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::DuplicatePreset`] if the name is taken.
    pub fn add_preset(
        &mut self,
        yaw: f32,
        pitch: f32,
        distance: f32,
        name: &str,
    ) -> Result<usize, RigError> {
        self.insert_preset(SnapPreset::new(name, yaw, pitch, distance))
    }

    /// Register a fully specified preset. Returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::DuplicatePreset`] if the name is taken.
    pub fn insert_preset(
        &mut self,
        preset: SnapPreset,
    ) -> Result<usize, RigError> {
        let name = preset.name.clone();
        let index = self.registry.add(preset)?;
        log::info!("Added snap preset '{name}' at index {index}");
        Ok(index)
    }

    /// Remove a preset by name. Any running snap or lock is reset, since
    /// indices shift.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::NotFound`] if no preset has this name.
    pub fn remove_preset(&mut self, name: &str) -> Result<SnapPreset, RigError> {
        let removed = self.registry.remove(name)?;
        let _ = self.strategy.cancel();
        log::info!("Removed snap preset '{name}'");
        Ok(removed)
    }

    /// Snap to the preset called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::NotFound`] if no preset has this name.
    pub fn snap_by_name(&mut self, name: &str) -> Result<(), RigError> {
        let index = self.registry.by_name(name)?;
        self.snap_to_index(index)
    }

    /// Snap to the preset at `index`. Works even when automatic snapping
    /// is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::IndexOutOfRange`] for an unknown index.
    pub fn snap_to_index(&mut self, index: usize) -> Result<(), RigError> {
        self.strategy.snap_to(
            &self.registry,
            &mut self.orientation,
            index,
            self.snap_enabled,
        )
    }

    /// Snap to the nearest preset if the strategy considers it close
    /// enough. Returns whether a snap happened.
    pub fn snap_to_nearest(&mut self) -> bool {
        self.strategy.snap_to_nearest(
            &self.registry,
            &mut self.orientation,
            self.snap_enabled,
        )
    }

    /// Snap to the preset after the current one, wrapping around. Returns
    /// the new index, or `None` with an empty registry.
    pub fn next_preset(&mut self) -> Option<usize> {
        self.cycle_preset(true)
    }

    /// Snap to the preset before the current one, wrapping around. Returns
    /// the new index, or `None` with an empty registry.
    pub fn previous_preset(&mut self) -> Option<usize> {
        self.cycle_preset(false)
    }

    /// The current preset is the one being snapped to or held, otherwise
    /// the nearest.
    fn cycle_preset(&mut self, forward: bool) -> Option<usize> {
        let len = self.registry.len();
        let current = self
            .strategy
            .active_target()
            .filter(|&index| index < len)
            .or_else(|| {
                self.registry
                    .nearest(self.yaw(), self.pitch())
                    .map(|(index, _)| index)
            })?;
        let index = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.snap_to_index(index).ok().map(|()| index)
    }

    /// Cancel a running snap or release a lock.
    pub fn cancel_snap(&mut self) -> bool {
        self.strategy.cancel()
    }

    /// Toggle automatic snapping. Disabling resets any session.
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        if !enabled {
            let _ = self.strategy.cancel();
        }
        self.snap_enabled = enabled;
        self.options.snap.enabled = enabled;
    }

    /// Whether automatic snapping is on.
    #[must_use]
    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    /// Switch strategy. The previous strategy's session is dropped.
    pub fn set_snap_mode(&mut self, mode: SnapMode) {
        self.options.snap.mode = mode;
        self.strategy =
            SnapStrategy::from_options(&self.options.snap, &self.options.smoothing);
        log::debug!("Snap mode set to {mode:?}");
    }

    /// Dispatch a command.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying rig operation.
    pub fn execute(&mut self, command: RigCommand) -> Result<(), RigError> {
        command.execute(self)
    }
}

// ── Accessors ──

impl OrbitRig {
    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> &OrientationState {
        &self.orientation
    }

    /// Mutable orientation, for hosts that drive the camera directly.
    /// Setters keep the limits.
    pub fn orientation_mut(&mut self) -> &mut OrientationState {
        &mut self.orientation
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.orientation.yaw()
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.orientation.pitch()
    }

    /// Current distance to the target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.orientation.distance()
    }

    /// Set the distance to the target (clamped). Cancels any snap so the
    /// strategy does not pull the distance back.
    pub fn set_distance(&mut self, distance: f32) {
        let _ = self.strategy.cancel();
        self.orientation.set_distance(distance);
    }

    /// Return to the starting yaw, pitch and distance from the options and
    /// drop any snap session.
    pub fn reset(&mut self) {
        let _ = self.strategy.cancel();
        self.orientation = OrientationState::from_options(&self.options.orbit);
        self.compositor.reset();
        log::debug!("Orbit rig reset");
    }

    /// Registered presets.
    #[must_use]
    pub fn registry(&self) -> &SnapRegistry {
        &self.registry
    }

    /// Active strategy.
    #[must_use]
    pub fn strategy(&self) -> &SnapStrategy {
        &self.strategy
    }

    /// Deltas produced by the last `update`.
    #[must_use]
    pub fn last_deltas(&self) -> &InputDeltas {
        &self.last_deltas
    }

    /// Options the rig was built with, including runtime changes.
    #[must_use]
    pub fn options(&self) -> &RigOptions {
        &self.options
    }

    /// Replace the options. Limits, sensitivities, smoothing and strategy are
    /// re-applied; the current yaw, pitch and distance are kept (clamped to
    /// the new limits). Presets are replaced only when `options.presets` is
    /// non-empty.
    pub fn set_options(&mut self, options: RigOptions) {
        let (yaw, pitch, distance) = (self.yaw(), self.pitch(), self.distance());
        self.orientation = OrientationState::from_options(&options.orbit);
        self.orientation.set(yaw, pitch, distance);
        self.input.set_options(options.input.clone());
        self.compositor.set_smoothing(options.smoothing.clone());
        self.strategy =
            SnapStrategy::from_options(&options.snap, &options.smoothing);
        self.snap_enabled = options.snap.enabled;
        if !options.presets.is_empty() {
            self.registry = SnapRegistry::from_presets(options.presets.clone());
        }
        self.options = options;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use glam::{Vec2, Vec3};

    use super::*;
    use crate::input::{FrameInput, Platform, PointerPhase, PointerSample};
    use crate::snap::{AttractionMode, SnapStatus};

    const DT: f32 = 1.0 / 60.0;

    fn rig_with(options: RigOptions) -> OrbitRig {
        OrbitRig::with_target(options, Rc::new(Vec3::ZERO))
    }

    fn magnetic_options() -> RigOptions {
        let mut options = RigOptions::default();
        options.snap.mode = SnapMode::Magnetic;
        options
    }

    fn idle() -> FrameInput {
        FrameInput::new(Platform::Desktop)
    }

    fn drag(delta: Vec2) -> FrameInput {
        idle().with_pointer(PointerSample::moved(0, Vec2::ZERO, delta))
    }

    fn release() -> FrameInput {
        idle().with_pointer(PointerSample::at(0, Vec2::ZERO, PointerPhase::Ended))
    }

    fn run_idle(rig: &mut OrbitRig, frames: usize) {
        for _ in 0..frames {
            rig.update(&idle(), DT);
            let _ = rig.late_update(DT);
        }
    }

    #[test]
    fn limits_hold_under_wild_input() {
        let mut rig = rig_with(RigOptions::default());
        let mut x = 0.37_f32;
        for i in 0..500 {
            x = (x * 3.7).fract();
            let frame = drag(Vec2::new(x * 400.0 - 200.0, 200.0 - x * 300.0))
                .with_scroll(if i % 3 == 0 { x * 4.0 - 2.0 } else { 0.0 });
            rig.update(&frame, DT);
            let limits = rig.orientation().limits();
            assert!(rig.pitch() >= limits.min_pitch && rig.pitch() <= limits.max_pitch);
            assert!(
                rig.distance() >= limits.min_distance
                    && rig.distance() <= limits.max_distance
            );
            assert!(rig.yaw().abs() < 360.0);
        }
    }

    #[test]
    fn hard_snap_by_name_converges() {
        let mut rig = rig_with(RigOptions::default());
        rig.orientation_mut().set(45.0, 10.0, 8.0);
        rig.snap_by_name("Front").unwrap();
        run_idle(&mut rig, 13);
        assert_eq!((rig.yaw(), rig.pitch(), rig.distance()), (0.0, 30.0, 5.0));
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
    }

    #[test]
    fn trivial_release_near_preset_snaps() {
        let mut rig = rig_with(RigOptions::default());
        rig.orientation_mut().set(3.0, 31.0, 5.0);
        rig.update(&drag(Vec2::new(0.05, 0.0)), DT);
        rig.update(&release(), DT);
        assert!(matches!(
            rig.snap_status(),
            SnapStatus::Snapping { target: 0, .. }
        ));
    }

    #[test]
    fn flung_release_does_not_snap() {
        let mut rig = rig_with(RigOptions::default());
        rig.orientation_mut().set(3.0, 31.0, 5.0);
        rig.update(&drag(Vec2::new(0.5, 0.0)), DT);
        rig.update(&release(), DT);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
    }

    #[test]
    fn dragging_cancels_hard_snap() {
        let mut rig = rig_with(RigOptions::default());
        rig.orientation_mut().set(45.0, 10.0, 8.0);
        rig.snap_to_index(0).unwrap();
        rig.update(&idle(), DT);
        assert_ne!(rig.snap_status(), SnapStatus::Idle);
        rig.update(&drag(Vec2::new(5.0, 0.0)), DT);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
    }

    #[test]
    fn hotkeys_and_bound_actions() {
        let mut rig = rig_with(RigOptions::default());
        rig.update(&idle().with_key("Digit3"), DT);
        assert!(matches!(
            rig.snap_status(),
            SnapStatus::Snapping { target: 2, .. }
        ));
        rig.update(&idle().with_key("Escape"), DT);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);

        rig.orientation_mut().set(92.0, 29.0, 5.0);
        rig.update(&idle().with_key("Space"), DT);
        assert!(matches!(
            rig.snap_status(),
            SnapStatus::Snapping { target: 1, .. }
        ));
    }

    #[test]
    fn magnetic_escape_breaks_lock() {
        let mut rig = rig_with(magnetic_options());
        rig.snap_by_name("Front").unwrap();
        assert_eq!(rig.snap_status(), SnapStatus::Locked { target: 0 });

        let rotation_speed = rig.options().input.rotation_speed;
        rig.update(&drag(Vec2::new(0.6 / rotation_speed, 0.0)), DT);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
        assert!((rig.yaw() - 0.6).abs() < 1e-5);
    }

    #[test]
    fn magnetic_lock_holds_small_input() {
        let mut rig = rig_with(magnetic_options());
        rig.snap_by_name("Front").unwrap();
        let rotation_speed = rig.options().input.rotation_speed;
        rig.update(&drag(Vec2::new(0.2 / rotation_speed, 0.0)), DT);
        assert_eq!(rig.snap_status(), SnapStatus::Locked { target: 0 });
        assert_eq!(rig.yaw(), 0.0, "exact snap inside the threshold");
    }

    #[test]
    fn steady_drag_leaves_magnetic_radius() {
        let mut rig = rig_with(magnetic_options());
        rig.snap_by_name("Front").unwrap();
        let step = 2.0 / rig.options().input.rotation_speed;
        for _ in 0..120 {
            rig.update(&drag(Vec2::new(step, 0.0)), DT);
            let _ = rig.late_update(DT);
        }
        assert!((rig.yaw() - 240.0).abs() < 1e-2, "yaw {}", rig.yaw());
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
    }

    #[test]
    fn slow_drag_is_not_cancelled_by_attraction() {
        let mut rig = rig_with(magnetic_options());
        rig.orientation_mut().set(5.0, 30.0, 5.0);
        let step = 0.25 / rig.options().input.rotation_speed;
        for _ in 0..80 {
            rig.update(&drag(Vec2::new(step, 0.0)), DT);
        }
        assert!(rig.yaw() > 15.0, "yaw {}", rig.yaw());

        // Back inside the radius and released: attraction resumes.
        rig.orientation_mut().set(5.0, 30.0, 5.0);
        rig.update(&release(), DT);
        rig.update(&idle(), DT);
        assert!(rig.yaw() < 5.0);
    }

    #[test]
    fn disabling_snap_releases_magnetic_lock() {
        let mut rig = rig_with(magnetic_options());
        rig.snap_by_name("Front").unwrap();
        assert_eq!(rig.snap_status(), SnapStatus::Locked { target: 0 });

        rig.set_snap_enabled(false);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);

        rig.orientation_mut().set(4.0, 30.0, 5.0);
        run_idle(&mut rig, 10);
        assert_eq!(rig.yaw(), 4.0, "no pull while disabled");
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
    }

    #[test]
    fn arrow_keys_cycle_presets() {
        let mut options = RigOptions::default();
        options.snap.mode = SnapMode::None;
        let mut rig = rig_with(options);
        rig.update(&idle().with_key("ArrowRight"), DT);
        assert_eq!(rig.yaw(), 90.0);
        rig.update(&idle().with_key("ArrowLeft"), DT);
        rig.update(&idle().with_key("ArrowLeft"), DT);
        assert_eq!(rig.yaw(), 270.0);
    }

    #[test]
    fn hard_cycling_steps_from_the_running_snap() {
        let mut rig = rig_with(RigOptions::default());
        rig.snap_to_index(2).unwrap();
        assert_eq!(rig.next_preset(), Some(3));
        assert_eq!(rig.next_preset(), Some(0));
        assert!(matches!(
            rig.snap_status(),
            SnapStatus::Snapping { target: 0, .. }
        ));
    }

    #[test]
    fn target_offset_shifts_the_orbit() {
        let mut options = RigOptions::default();
        options.orbit.target_offset = [0.0, 1.5, 0.0];
        let mut rig = rig_with(options);
        let pose = rig.late_update(DT).unwrap();
        assert!(pose.target.abs_diff_eq(Vec3::new(0.0, 1.5, 0.0), 1e-6));
        assert!(((pose.position - pose.target).length() - 5.0).abs() < 1e-4);
        let marker = &rig.preset_markers()[0];
        assert!(((marker.position - pose.target).length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn forced_snap_is_idempotent() {
        let mut rig = rig_with(magnetic_options());
        rig.orientation_mut().set(20.0, 5.0, 9.0);
        rig.snap_to_index(1).unwrap();
        let once = rig.orientation().clone();
        rig.snap_to_index(1).unwrap();
        assert_eq!(rig.orientation(), &once);
    }

    #[test]
    fn weighted_attraction_from_options() {
        let mut options = magnetic_options();
        options.snap.magnetic.attraction = AttractionMode::Weighted;
        let mut rig = rig_with(options);
        rig.orientation_mut().set(6.0, 30.0, 5.0);
        rig.update(&idle(), DT);
        assert!(rig.yaw() < 6.0 && rig.yaw() > 0.0);
    }

    #[test]
    fn yaw_wraps_like_small_steps() {
        let mut big = rig_with(RigOptions::default());
        let mut small = rig_with(RigOptions::default());
        big.set_snap_enabled(false);
        small.set_snap_enabled(false);
        let speed = big.options().input.rotation_speed;
        for _ in 0..5 {
            big.update(&drag(Vec2::new(370.0 / speed, 0.0)), DT);
            small.update(&drag(Vec2::new(10.0 / speed, 0.0)), DT);
        }
        let big_pose = big.late_update(DT).unwrap();
        let small_pose = small.late_update(DT).unwrap();
        assert!(big_pose.position.abs_diff_eq(small_pose.position, 1e-3));
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let mut rig = OrbitRig::default();
        let before = rig.orientation().clone();
        rig.update(&drag(Vec2::new(50.0, 20.0)), DT);
        rig.update(&drag(Vec2::new(50.0, 20.0)), DT);
        assert_eq!(rig.orientation(), &before);
        assert!(rig.late_update(DT).is_none());

        rig.set_target(Rc::new(Vec3::X));
        assert!(rig.late_update(DT).is_some());
    }

    #[test]
    fn pose_follows_moving_target() {
        let target = Rc::new(Cell::new(Vec3::ZERO));
        let mut rig = OrbitRig::with_target(RigOptions::default(), target.clone());
        let first = rig.late_update(DT).unwrap();
        target.set(Vec3::new(10.0, 0.0, 0.0));
        let second = rig.late_update(DT).unwrap();
        assert!((second.position - first.position)
            .abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn failed_commands_leave_state() {
        let mut rig = rig_with(RigOptions::default());
        rig.orientation_mut().set(12.0, 20.0, 7.0);
        let before = rig.orientation().clone();
        assert!(matches!(
            rig.snap_by_name("Nowhere"),
            Err(RigError::NotFound(_))
        ));
        assert!(matches!(
            rig.snap_to_index(9),
            Err(RigError::IndexOutOfRange { index: 9, len: 4 })
        ));
        assert!(matches!(
            rig.add_preset(0.0, 0.0, 5.0, "Front"),
            Err(RigError::DuplicatePreset(_))
        ));
        assert_eq!(rig.orientation(), &before);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
        assert_eq!(rig.registry().len(), 4);
    }

    #[test]
    fn disabling_snap_resets_session() {
        let mut rig = rig_with(RigOptions::default());
        rig.snap_to_index(2).unwrap();
        rig.set_snap_enabled(false);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);

        rig.orientation_mut().set(2.0, 30.0, 5.0);
        rig.update(&drag(Vec2::new(0.01, 0.0)), DT);
        rig.update(&release(), DT);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
    }

    #[test]
    fn removing_preset_resets_session() {
        let mut rig = rig_with(RigOptions::default());
        rig.snap_to_index(3).unwrap();
        let removed = rig.remove_preset("Right").unwrap();
        assert_eq!(removed.yaw, 90.0);
        assert_eq!(rig.snap_status(), SnapStatus::Idle);
        assert_eq!(rig.registry().by_name("Left").unwrap(), 2);
    }

    #[test]
    fn set_options_keeps_pose_within_new_limits() {
        let mut rig = rig_with(RigOptions::default());
        rig.orientation_mut().set(40.0, 70.0, 12.0);
        let mut options = RigOptions::default();
        options.orbit.max_pitch = 45.0;
        options.orbit.max_distance = 10.0;
        options.snap.mode = SnapMode::None;
        rig.set_options(options);
        assert_eq!(rig.yaw(), 40.0);
        assert_eq!(rig.pitch(), 45.0);
        assert_eq!(rig.distance(), 10.0);
        assert_eq!(rig.strategy().mode(), SnapMode::None);
    }
}
