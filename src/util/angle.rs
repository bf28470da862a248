//! Degree-based angle helpers shared by the snap controllers.
//!
//! All functions take and return degrees. Differences are always the signed
//! shortest path, in `(-180, 180]`.

/// Wrap `t` into `[0, length)`.
#[inline]
#[must_use]
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Signed shortest-path difference from `current` to `target`, in
/// `(-180, 180]`.
#[inline]
#[must_use]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = repeat(target - current, 360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Euclidean combination of the yaw and pitch shortest-path differences.
#[inline]
#[must_use]
pub fn angular_distance(yaw: f32, pitch: f32, other_yaw: f32, other_pitch: f32) -> f32 {
    let dy = delta_angle(yaw, other_yaw);
    let dp = delta_angle(pitch, other_pitch);
    (dy * dy + dp * dp).sqrt()
}

/// Interpolate from `a` toward `b` along the shortest arc. `t` is clamped to
/// `[0, 1]`.
#[inline]
#[must_use]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    a + delta_angle(a, b) * t.clamp(0.0, 1.0)
}

/// Reduce a yaw to `(-360, 360)` so trigonometry never sees large values.
#[inline]
#[must_use]
pub fn wrap_yaw(yaw: f32) -> f32 {
    yaw % 360.0
}

/// Critically damped spring toward `target`.
///
/// `velocity` is the caller-owned smoothing state and is updated in place.
/// A non-positive `dt` leaves both value and velocity untouched.
#[must_use]
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Never overshoot.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// [`smooth_damp`] toward `target` along the shortest arc.
#[must_use]
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_angle_takes_short_way_round() {
        assert_eq!(delta_angle(350.0, 10.0), 20.0);
        assert_eq!(delta_angle(10.0, 350.0), -20.0);
        assert_eq!(delta_angle(0.0, 180.0), 180.0);
        assert_eq!(delta_angle(0.0, -180.0), 180.0);
        assert_eq!(delta_angle(45.0, 0.0), -45.0);
    }

    #[test]
    fn lerp_angle_crosses_zero() {
        let mid = lerp_angle(350.0, 10.0, 0.5);
        assert!((mid - 360.0).abs() < 1e-4);
        assert_eq!(lerp_angle(0.0, 90.0, 2.0), 90.0);
    }

    #[test]
    fn angular_distance_combines_axes() {
        let d = angular_distance(3.0, 34.0, 0.0, 30.0);
        assert!((d - 5.0).abs() < 1e-5);
        let wrapped = angular_distance(-357.0, 30.0, 0.0, 30.0);
        assert!((wrapped - 3.0).abs() < 1e-4);
    }

    #[test]
    fn wrap_yaw_keeps_sign() {
        assert_eq!(wrap_yaw(370.0), 10.0);
        assert_eq!(wrap_yaw(-370.0), -10.0);
        assert_eq!(wrap_yaw(90.0), 90.0);
    }

    #[test]
    fn smooth_damp_converges_without_overshoot() {
        let mut value = 0.0;
        let mut velocity = 0.0;
        for _ in 0..300 {
            value = smooth_damp(value, 10.0, &mut velocity, 0.1, 1.0 / 60.0);
            assert!(value <= 10.0);
        }
        assert!((value - 10.0).abs() < 1e-3);
    }

    #[test]
    fn smooth_damp_angle_wraps() {
        let mut velocity = 0.0;
        let next = smooth_damp_angle(350.0, 10.0, &mut velocity, 0.1, 1.0 / 60.0);
        assert!(next > 350.0, "should move upward through 360, got {next}");
    }

    #[test]
    fn smooth_damp_ignores_zero_dt() {
        let mut velocity = 3.0;
        assert_eq!(smooth_damp(1.0, 5.0, &mut velocity, 0.1, 0.0), 1.0);
        assert_eq!(velocity, 3.0);
    }
}
