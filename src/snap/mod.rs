//! Preset viewpoints and the strategies that snap onto them.

/// Discrete threshold snap.
pub mod hard;
/// Continuous magnetic attraction with locking.
pub mod magnetic;
/// Named preset viewpoints.
pub mod preset;
/// Ordered preset storage and nearest-preset search.
pub mod registry;
/// Dispatch over the configured strategy.
pub mod strategy;

pub use hard::{HardSession, HardSnapController};
pub use magnetic::{AttractionMode, MagneticLock, MagneticSnapController};
pub use preset::SnapPreset;
pub use registry::SnapRegistry;
pub use strategy::SnapStrategy;

/// Read-only view of a strategy's session, for debug overlays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SnapStatus {
    /// No snap in progress and no lock held.
    #[default]
    Idle,
    /// A hard snap is interpolating toward `target`.
    Snapping {
        /// Registry index of the preset.
        target: usize,
        /// Normalised progress in `[0, 1]`.
        progress: f32,
    },
    /// The magnetic controller holds `target`.
    Locked {
        /// Registry index of the preset.
        target: usize,
    },
}
