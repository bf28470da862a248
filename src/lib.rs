// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Third-person orbit camera rig with preset snapping.
//!
//! The rig rotates around a target under pointer, touch and scroll input and
//! can settle onto curated preset viewpoints, either by a discrete
//! interpolated snap when a drag ends near a preset or by continuous magnetic
//! attraction that locks onto nearby presets.
//!
//! # Key entry points
//!
//! - [`rig::OrbitRig`] - owns the orientation, presets and snap strategy
//! - [`input::PointerSource`] - per-frame input samples fed to the rig
//! - [`options::RigOptions`] - runtime configuration (limits, sensitivity,
//!   smoothing, snap tuning, keybindings, presets)
//! - [`camera::pose::Pose`] - the world-space pose emitted each frame
//!
//! # Frame order
//!
//! [`rig::OrbitRig::update`] runs input and snapping; after the target has
//! moved for the frame, [`rig::OrbitRig::late_update`] composes the pose.
//! Rigs hold no global state, so several can run side by side.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod rig;
pub mod snap;
pub mod util;

pub use error::RigError;
pub use rig::{OrbitRig, RigCommand};
