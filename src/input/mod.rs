//! Input handling: pointer sample types, the platform capability trait, key
//! actions, and the aggregator that turns raw frames into orbit deltas.

/// Platform-agnostic pointer samples.
pub mod event;
/// Bindable rig actions.
pub mod keyboard;
/// Converts raw frames into orbit deltas.
pub mod processor;
/// The per-frame pointer capability trait.
pub mod source;

pub use event::{Platform, PointerPhase, PointerSample};
pub use keyboard::KeyAction;
pub use processor::{InputAggregator, InputDeltas};
pub use source::{FrameInput, PointerSource};
