use glam::Quat;

use crate::options::OrbitOptions;
use crate::util::angle::wrap_yaw;

/// Pitch and distance bounds for an orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Lowest allowed pitch in degrees.
    pub min_pitch: f32,
    /// Highest allowed pitch in degrees.
    pub max_pitch: f32,
    /// Closest allowed distance to the target.
    pub min_distance: f32,
    /// Farthest allowed distance from the target.
    pub max_distance: f32,
}

impl OrbitLimits {
    /// Build limits, swapping any inverted pair so clamping stays valid.
    #[must_use]
    pub fn new(min_pitch: f32, max_pitch: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            min_pitch: min_pitch.min(max_pitch),
            max_pitch: max_pitch.max(min_pitch),
            min_distance: min_distance.min(max_distance),
            max_distance: max_distance.max(min_distance),
        }
    }

    /// Clamp a pitch into `[min_pitch, max_pitch]`.
    #[inline]
    #[must_use]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(self.min_pitch, self.max_pitch)
    }

    /// Clamp a distance into `[min_distance, max_distance]`.
    #[inline]
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self::new(-20.0, 80.0, 2.0, 15.0)
    }
}

/// Yaw, pitch and distance of the camera around its target.
///
/// Every setter re-applies the limits, so the observable state never leaves
/// the configured bounds. Yaw is kept in `(-360, 360)`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationState {
    yaw: f32,
    pitch: f32,
    distance: f32,
    limits: OrbitLimits,
}

impl OrientationState {
    /// Create a state, clamping the initial values to `limits`.
    #[must_use]
    pub fn new(yaw: f32, pitch: f32, distance: f32, limits: OrbitLimits) -> Self {
        Self {
            yaw: wrap_yaw(yaw),
            pitch: limits.clamp_pitch(pitch),
            distance: limits.clamp_distance(distance),
            limits,
        }
    }

    /// Build the initial state from orbit options.
    #[must_use]
    pub fn from_options(options: &OrbitOptions) -> Self {
        let limits = OrbitLimits::new(
            options.min_pitch,
            options.max_pitch,
            options.min_distance,
            options.max_distance,
        );
        Self::new(options.yaw, options.pitch, options.distance, limits)
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Distance from the target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Active limits.
    #[must_use]
    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    /// Replace the limits and re-clamp the current values.
    pub fn set_limits(&mut self, limits: OrbitLimits) {
        self.limits = limits;
        self.pitch = limits.clamp_pitch(self.pitch);
        self.distance = limits.clamp_distance(self.distance);
    }

    /// Set the yaw.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_yaw(yaw);
    }

    /// Set the pitch (clamped).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = self.limits.clamp_pitch(pitch);
    }

    /// Set the distance (clamped).
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = self.limits.clamp_distance(distance);
    }

    /// Set all three values at once.
    pub fn set(&mut self, yaw: f32, pitch: f32, distance: f32) {
        self.set_yaw(yaw);
        self.set_pitch(pitch);
        self.set_distance(distance);
    }

    /// Add deltas to all three values.
    pub fn apply_delta(&mut self, yaw: f32, pitch: f32, distance: f32) {
        self.set(self.yaw + yaw, self.pitch + pitch, self.distance + distance);
    }

    /// Orbital rotation: pitch about local X, then yaw about local Y, no
    /// roll.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
            * Quat::from_rotation_x(self.pitch.to_radians())
    }
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::from_options(&OrbitOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn clamps_on_every_setter() {
        let mut state = OrientationState::new(0.0, 0.0, 5.0, OrbitLimits::default());
        state.set_pitch(120.0);
        assert_eq!(state.pitch(), 80.0);
        state.apply_delta(0.0, -500.0, 100.0);
        assert_eq!(state.pitch(), -20.0);
        assert_eq!(state.distance(), 15.0);
        state.set_distance(0.1);
        assert_eq!(state.distance(), 2.0);
    }

    #[test]
    fn clamp_invariant_over_random_walk() {
        let mut state = OrientationState::default();
        let limits = state.limits();
        let mut seed = 7_u32;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let a = (seed >> 16) as f32 / 65_535.0 - 0.5;
            state.apply_delta(a * 400.0, a * 90.0, -a * 20.0);
            assert!(state.pitch() >= limits.min_pitch && state.pitch() <= limits.max_pitch);
            assert!(
                state.distance() >= limits.min_distance
                    && state.distance() <= limits.max_distance
            );
            assert!(state.yaw().abs() < 360.0);
        }
    }

    #[test]
    fn inverted_limits_are_normalised() {
        let limits = OrbitLimits::new(80.0, -20.0, 15.0, 2.0);
        assert_eq!(limits.min_pitch, -20.0);
        assert_eq!(limits.max_distance, 15.0);
    }

    #[test]
    fn set_limits_reclamps() {
        let mut state = OrientationState::new(0.0, 70.0, 12.0, OrbitLimits::default());
        state.set_limits(OrbitLimits::new(0.0, 45.0, 1.0, 10.0));
        assert_eq!(state.pitch(), 45.0);
        assert_eq!(state.distance(), 10.0);
    }

    #[test]
    fn rotation_places_positive_pitch_above_target() {
        let state = OrientationState::new(0.0, 30.0, 5.0, OrbitLimits::default());
        let offset = state.rotation() * Vec3::new(0.0, 0.0, -5.0);
        assert!(offset.y > 0.0);
        assert!((offset.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn yaw_ninety_orbits_to_negative_x() {
        let state = OrientationState::new(90.0, 0.0, 5.0, OrbitLimits::default());
        let offset = state.rotation() * Vec3::new(0.0, 0.0, -5.0);
        assert!((offset - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-4);
    }
}
