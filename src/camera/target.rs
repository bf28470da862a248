//! What the rig orbits.

use std::cell::Cell;

use glam::Vec3;

/// Read-only view of the orbit target's world position.
///
/// The rig reads the position once per late update, after the target has
/// been moved for the frame.
pub trait TargetProvider {
    /// Current world position.
    fn position(&self) -> Vec3;
}

impl TargetProvider for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

/// Shared mutable target, e.g. a unit the game moves each frame.
impl TargetProvider for Cell<Vec3> {
    fn position(&self) -> Vec3 {
        self.get()
    }
}
