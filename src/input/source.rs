use super::event::{Platform, PointerSample};

/// Capability set of a platform's pointer input for one frame.
///
/// Engines implement this over their own input state; [`FrameInput`] is a
/// plain value implementation for hosts that collect samples themselves.
pub trait PointerSource {
    /// Device family the samples come from.
    fn platform(&self) -> Platform;

    /// Active pointers this frame, including ones released this frame.
    fn pointers(&self) -> &[PointerSample];

    /// Scroll wheel amount this frame (positive = zoom in).
    fn scroll(&self) -> f32 {
        0.0
    }

    /// Physical key strings pressed this frame (`"Digit1"`, `"Escape"`).
    fn keys_pressed(&self) -> &[String] {
        &[]
    }
}

/// One frame's worth of input samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Device family.
    pub platform: Platform,
    /// Pointer samples.
    pub pointers: Vec<PointerSample>,
    /// Scroll amount.
    pub scroll: f32,
    /// Keys pressed this frame.
    pub keys_pressed: Vec<String>,
}

impl FrameInput {
    /// Empty frame for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Add a pointer sample.
    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerSample) -> Self {
        self.pointers.push(pointer);
        self
    }

    /// Set the scroll amount.
    #[must_use]
    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    /// Add a key press.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.keys_pressed.push(key.into());
        self
    }
}

impl PointerSource for FrameInput {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn pointers(&self) -> &[PointerSample] {
        &self.pointers
    }

    fn scroll(&self) -> f32 {
        self.scroll
    }

    fn keys_pressed(&self) -> &[String] {
        &self.keys_pressed
    }
}
