//! Shared math helpers.
//!
//! Degree-based angle arithmetic (shortest-path deltas, wrapping, damped
//! springs) and the easing curves used by snap interpolation.

pub mod angle;
pub mod easing;
