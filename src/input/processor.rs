//! Converts raw per-frame pointer samples into orbit deltas.
//!
//! The `InputAggregator` owns all transient input state (drag tracking, the
//! last drag motion, pinch distance). It never touches the orientation; the
//! rig applies the produced [`InputDeltas`] after the snap strategy has seen
//! them.

use glam::Vec2;

use super::event::{Platform, PointerPhase, PointerSample};
use super::source::PointerSource;
use crate::options::InputOptions;

/// Scroll amounts at or below this are ignored.
const SCROLL_DEADZONE: f32 = 0.01;

/// Orbit deltas and drag lifecycle flags for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputDeltas {
    /// Device family that produced the frame.
    pub platform: Platform,
    /// Yaw change in degrees.
    pub yaw: f32,
    /// Pitch change in degrees.
    pub pitch: f32,
    /// Distance change.
    pub distance: f32,
    /// A drag began this frame.
    pub drag_started: bool,
    /// A drag is in progress (includes the starting frame).
    pub drag_active: bool,
    /// A drag finished this frame.
    pub drag_ended: bool,
    /// The finished drag's last motion was below the release threshold.
    pub drag_was_trivial: bool,
}

impl InputDeltas {
    /// Magnitude of the combined yaw/pitch change.
    #[must_use]
    pub fn rotation_magnitude(&self) -> f32 {
        Vec2::new(self.yaw, self.pitch).length()
    }

    /// Whether the frame carries any orbit motion.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0 && self.distance == 0.0
    }
}

/// Turns [`PointerSource`] frames into [`InputDeltas`].
#[derive(Debug, Clone)]
pub struct InputAggregator {
    options: InputOptions,
    was_dragging: bool,
    last_drag_delta: Vec2,
    pinch_distance: Option<f32>,
}

impl InputAggregator {
    /// Create an aggregator with the given tuning.
    #[must_use]
    pub fn new(options: InputOptions) -> Self {
        Self {
            options,
            was_dragging: false,
            last_drag_delta: Vec2::ZERO,
            pinch_distance: None,
        }
    }

    /// Read-only access to the tuning.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Replace the tuning. Drag state is kept.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.was_dragging
    }

    /// Process one frame of input.
    pub fn process(&mut self, source: &impl PointerSource, dt: f32) -> InputDeltas {
        let mut out = InputDeltas {
            platform: source.platform(),
            ..InputDeltas::default()
        };

        match out.platform {
            Platform::Desktop => self.process_desktop(source.pointers(), &mut out),
            Platform::Touch => self.process_touch(source.pointers(), dt, &mut out),
        }

        let scroll = source.scroll();
        if scroll.abs() > SCROLL_DEADZONE {
            out.distance -= scroll * self.options.zoom_speed * self.options.scroll_zoom_factor;
        }

        out
    }

    /// Mouse drag: raw motion times rotation speed, independent of `dt`.
    fn process_desktop(&mut self, pointers: &[PointerSample], out: &mut InputDeltas) {
        if let Some(pointer) = pointers.iter().find(|p| p.phase.is_held()) {
            out.drag_started = !self.was_dragging;
            out.drag_active = true;
            out.yaw += pointer.delta.x * self.options.rotation_speed;
            out.pitch -= pointer.delta.y * self.options.rotation_speed;
            self.last_drag_delta = pointer.delta;
            self.was_dragging = true;
        } else if self.was_dragging {
            self.finish_drag(self.options.desktop_release_threshold, out);
        }
    }

    /// Touch: one finger rotates (frame-time scaled), two fingers pinch.
    fn process_touch(&mut self, pointers: &[PointerSample], dt: f32, out: &mut InputDeltas) {
        if pointers.len() != 2 {
            self.pinch_distance = None;
        }

        match pointers {
            [pointer] if self.options.drag_rotation => self.touch_drag(pointer, dt, out),
            [a, b] => {
                if self.was_dragging {
                    // A second finger turns the drag into a pinch.
                    self.was_dragging = false;
                    out.drag_ended = true;
                }
                if self.options.pinch_zoom {
                    self.pinch(a, b, out);
                }
            }
            _ => {
                if self.was_dragging {
                    self.was_dragging = false;
                    out.drag_ended = true;
                }
            }
        }
    }

    fn touch_drag(&mut self, pointer: &PointerSample, dt: f32, out: &mut InputDeltas) {
        match pointer.phase {
            PointerPhase::Began => {
                out.drag_started = true;
                out.drag_active = true;
            }
            PointerPhase::Moved => {
                let scale =
                    self.options.rotation_speed * self.options.touch_rotation_multiplier * dt;
                out.drag_started = !self.was_dragging;
                out.drag_active = true;
                out.yaw += pointer.delta.x * scale;
                out.pitch -= pointer.delta.y * scale;
                self.last_drag_delta = pointer.delta;
                self.was_dragging = true;
            }
            PointerPhase::Stationary => out.drag_active = true,
            PointerPhase::Ended | PointerPhase::Cancelled => {
                if self.was_dragging {
                    self.finish_drag(self.options.touch_release_threshold, out);
                }
            }
        }
    }

    fn pinch(&mut self, a: &PointerSample, b: &PointerSample, out: &mut InputDeltas) {
        let current = a.position.distance(b.position);
        let began = a.phase == PointerPhase::Began || b.phase == PointerPhase::Began;
        let moved = a.phase == PointerPhase::Moved || b.phase == PointerPhase::Moved;

        match self.pinch_distance {
            Some(previous) if !began => {
                if moved {
                    out.distance += (previous - current)
                        * self.options.zoom_speed
                        * self.options.touch_zoom_multiplier;
                    self.pinch_distance = Some(current);
                }
            }
            _ => self.pinch_distance = Some(current),
        }
    }

    fn finish_drag(&mut self, threshold: f32, out: &mut InputDeltas) {
        self.was_dragging = false;
        out.drag_ended = true;
        out.drag_was_trivial = self.last_drag_delta.length() < threshold;
    }
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new(InputOptions::default())
    }
}
