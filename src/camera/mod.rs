//! Orbit camera state and pose composition.
//!
//! Yaw/pitch/distance live in [`orientation::OrientationState`]; the
//! [`pose::PoseCompositor`] turns them into a world-space [`pose::Pose`]
//! around whatever [`target::TargetProvider`] the rig follows.

/// Yaw, pitch, distance and their limits.
pub mod orientation;
/// World-space pose composition with rotation smoothing.
pub mod pose;
/// Orbit target abstraction.
pub mod target;
