use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which family of pointer device is driving the rig.
///
/// Desktop pointer motion is applied per frame as-is; touch motion is scaled
/// by the frame time and a per-platform multiplier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Mouse or trackpad.
    #[default]
    Desktop,
    /// Touch screen.
    Touch,
}

/// Lifecycle phase of a pointer during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer went down this frame.
    Began,
    /// Pointer is down and moved this frame.
    Moved,
    /// Pointer is down and did not move.
    Stationary,
    /// Pointer was released this frame.
    Ended,
    /// The platform cancelled the pointer this frame.
    Cancelled,
}

impl PointerPhase {
    /// Whether the pointer is still down.
    #[must_use]
    pub fn is_held(self) -> bool {
        matches!(self, Self::Began | Self::Moved | Self::Stationary)
    }

    /// Whether the pointer left the surface this frame.
    #[must_use]
    pub fn is_released(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One pointer (mouse button drag or finger) as seen in a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Platform identifier, stable while the pointer is down.
    pub id: u64,
    /// Screen position.
    pub position: Vec2,
    /// Motion since the previous frame.
    pub delta: Vec2,
    /// Phase this frame.
    pub phase: PointerPhase,
}

impl PointerSample {
    /// A held pointer that moved by `delta`.
    #[must_use]
    pub fn moved(id: u64, position: Vec2, delta: Vec2) -> Self {
        Self {
            id,
            position,
            delta,
            phase: PointerPhase::Moved,
        }
    }

    /// A pointer with no motion in the given phase.
    #[must_use]
    pub fn at(id: u64, position: Vec2, phase: PointerPhase) -> Self {
        Self {
            id,
            position,
            delta: Vec2::ZERO,
            phase,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::TouchPhase> for PointerPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Began,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}
