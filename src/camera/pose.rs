//! Turns an orientation into a world-space camera pose.

use glam::{Mat3, Mat4, Quat, Vec3};

use super::orientation::OrientationState;
use crate::options::SmoothingOptions;

/// Squared length under which a look direction counts as degenerate.
const DEGENERATE_EPSILON: f32 = 1e-8;

/// World-space camera pose for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Camera position.
    pub position: Vec3,
    /// Orbital rotation, possibly lagging the orientation while smoothing.
    pub rotation: Quat,
    /// Rotation whose local +Z faces the target with world Y up.
    pub look_rotation: Quat,
    /// Point the camera orbits.
    pub target: Vec3,
}

impl Pose {
    /// Right-handed view matrix looking along `look_rotation`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.look_rotation * Vec3::Z,
            self.look_rotation * Vec3::Y,
        )
    }

    /// Unit vector from the camera toward the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.look_rotation * Vec3::Z
    }
}

/// Position on the orbit of `rotation` at `distance` around `target`.
#[inline]
#[must_use]
pub fn orbit_position(rotation: Quat, distance: f32, target: Vec3) -> Vec3 {
    rotation * Vec3::new(0.0, 0.0, -distance) + target
}

/// Rotation with local +Z along `forward` and world Y as up hint. Returns
/// `None` when `forward` is zero or parallel to Y.
#[must_use]
pub fn look_rotation(forward: Vec3) -> Option<Quat> {
    let forward = forward.try_normalize()?;
    let right = Vec3::Y.cross(forward);
    if right.length_squared() < DEGENERATE_EPSILON {
        return None;
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}

/// Composes poses, carrying the smoothed rotation between frames.
#[derive(Debug, Clone, Default)]
pub struct PoseCompositor {
    smoothing: SmoothingOptions,
    current: Option<Quat>,
}

impl PoseCompositor {
    /// Create a compositor with no rotation history.
    #[must_use]
    pub fn new(smoothing: SmoothingOptions) -> Self {
        Self {
            smoothing,
            current: None,
        }
    }

    /// Current smoothing options.
    #[must_use]
    pub fn smoothing(&self) -> &SmoothingOptions {
        &self.smoothing
    }

    /// Replace the smoothing options. The rotation history is kept.
    pub fn set_smoothing(&mut self, smoothing: SmoothingOptions) {
        self.smoothing = smoothing;
    }

    /// Rotation emitted by the last `compose`.
    #[must_use]
    pub fn current_rotation(&self) -> Option<Quat> {
        self.current
    }

    /// Forget the rotation history; the next pose starts unsmoothed.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Build this frame's pose.
    ///
    /// With smoothing on and `direct` false the rotation slerps from the
    /// previous one by `smooth_time * dt * 10`, which ties the lag to frame
    /// rate. `direct` (a snap is driving the orientation) applies the target
    /// rotation as is.
    pub fn compose(
        &mut self,
        orientation: &OrientationState,
        target: Vec3,
        dt: f32,
        direct: bool,
    ) -> Pose {
        let wanted = orientation.rotation();
        let rotation = match self.current {
            Some(previous) if self.smoothing.smooth_rotation && !direct => {
                let t = (self.smoothing.smooth_time * dt * 10.0).clamp(0.0, 1.0);
                previous.slerp(wanted, t).normalize()
            }
            _ => wanted,
        };
        self.current = Some(rotation);

        let position = orbit_position(rotation, orientation.distance(), target);
        let facing = look_rotation(target - position).unwrap_or(rotation);

        Pose {
            position,
            rotation,
            look_rotation: facing,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::orientation::OrbitLimits;

    fn state(yaw: f32, pitch: f32, distance: f32) -> OrientationState {
        OrientationState::new(yaw, pitch, distance, OrbitLimits::default())
    }

    #[test]
    fn position_sits_behind_target() {
        let mut compositor = PoseCompositor::new(SmoothingOptions {
            smooth_rotation: false,
            ..SmoothingOptions::default()
        });
        let pose = compositor.compose(&state(0.0, 0.0, 5.0), Vec3::ZERO, 0.016, false);
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));

        let pose = compositor.compose(&state(90.0, 0.0, 5.0), Vec3::ONE, 0.016, false);
        assert!(pose
            .position
            .abs_diff_eq(Vec3::new(-4.0, 1.0, 1.0), 1e-5));
    }

    #[test]
    fn positive_pitch_raises_camera() {
        let mut compositor = PoseCompositor::default();
        let pose = compositor.compose(&state(0.0, 30.0, 5.0), Vec3::ZERO, 0.016, true);
        assert!(pose.position.y > 0.0);
        assert!((pose.position.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn look_rotation_faces_target() {
        let mut compositor = PoseCompositor::default();
        let target = Vec3::new(3.0, 1.0, -2.0);
        let pose = compositor.compose(&state(37.0, 20.0, 6.0), target, 0.016, false);
        let to_target = (target - pose.position).normalize();
        assert!(pose.forward().abs_diff_eq(to_target, 1e-4));
        assert!((pose.look_rotation * Vec3::X).y.abs() < 1e-4, "no roll");
    }

    #[test]
    fn smoothing_lags_then_direct_catches_up() {
        let mut compositor = PoseCompositor::default();
        let _ = compositor.compose(&state(0.0, 30.0, 5.0), Vec3::ZERO, 0.016, false);
        let turned = state(90.0, 30.0, 5.0);

        let lagging = compositor.compose(&turned, Vec3::ZERO, 0.016, false);
        assert!(lagging.rotation.angle_between(turned.rotation()) > 0.1);
        // The look rotation still faces the target while the orbit lags.
        let to_target = (Vec3::ZERO - lagging.position).normalize();
        assert!(lagging.forward().abs_diff_eq(to_target, 1e-4));

        let direct = compositor.compose(&turned, Vec3::ZERO, 0.016, true);
        assert!(direct.rotation.abs_diff_eq(turned.rotation(), 1e-6));
    }

    #[test]
    fn view_matrix_maps_target_ahead() {
        let mut compositor = PoseCompositor::default();
        let pose = compositor.compose(&state(45.0, 10.0, 5.0), Vec3::ZERO, 0.016, true);
        let view_space = pose.view_matrix().transform_point3(pose.target);
        // Right-handed view space looks down -Z.
        assert!(view_space.z < 0.0);
        assert!(view_space.x.abs() < 1e-4 && view_space.y.abs() < 1e-4);
    }

    #[test]
    fn vertical_look_falls_back() {
        assert!(look_rotation(Vec3::Y).is_none());
        assert!(look_rotation(Vec3::ZERO).is_none());
        assert!(look_rotation(Vec3::Z).is_some());
    }
}
