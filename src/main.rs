//! Headless demo: drives an orbit rig through a scripted session and logs
//! the resulting poses.
//!
//! Usage: `orbit-snap [options.toml]`. Run with `RUST_LOG=debug` to see
//! snap transitions.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use orbit_snap::camera::pose::Pose;
use orbit_snap::input::{FrameInput, Platform, PointerPhase, PointerSample};
use orbit_snap::options::{RigOptions, SnapMode};
use orbit_snap::{OrbitRig, RigCommand};

const DT: f32 = 1.0 / 60.0;

/// One scripted step: the input for a number of frames.
struct Step {
    label: &'static str,
    frames: usize,
    input: FrameInput,
}

fn script(platform: Platform) -> Vec<Step> {
    let idle = || FrameInput::new(platform);
    let drag = |delta: Vec2| {
        idle().with_pointer(PointerSample::moved(0, Vec2::ZERO, delta))
    };
    let release = || {
        idle().with_pointer(PointerSample::at(0, Vec2::ZERO, PointerPhase::Ended))
    };
    vec![
        Step {
            label: "drag toward the right preset",
            frames: 20,
            input: drag(Vec2::new(2.2, -0.1)),
        },
        Step {
            label: "slow down before letting go",
            frames: 1,
            input: drag(Vec2::new(0.02, 0.0)),
        },
        Step {
            label: "release",
            frames: 1,
            input: release(),
        },
        Step {
            label: "settle",
            frames: 30,
            input: idle(),
        },
        Step {
            label: "hotkey to the back preset",
            frames: 1,
            input: idle().with_key("Digit3"),
        },
        Step {
            label: "zoom while snapping",
            frames: 30,
            input: idle().with_scroll(0.05),
        },
    ]
}

fn log_pose(label: &str, rig: &OrbitRig, pose: &Pose) {
    log::info!(
        "{label}: yaw {:.1} pitch {:.1} distance {:.2} -> position ({:.2}, \
         {:.2}, {:.2})",
        rig.yaw(),
        rig.pitch(),
        rig.distance(),
        pose.position.x,
        pose.position.y,
        pose.position.z,
    );
    if let Some(status) = rig.status_label() {
        log::info!("  {status}");
    }
}

fn run(rig: &mut OrbitRig, target: &Cell<Vec3>) {
    for step in script(rig.options().input.platform) {
        let mut last = None;
        for _ in 0..step.frames {
            rig.update(&step.input, DT);
            // Let the target drift so the pose has something to follow.
            target.set(target.get() + Vec3::new(0.01, 0.0, 0.0));
            last = rig.late_update(DT);
        }
        if let Some(pose) = last {
            log_pose(step.label, rig, &pose);
        }
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match RigOptions::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => RigOptions::default(),
    };

    let target = Rc::new(Cell::new(Vec3::ZERO));
    let mut rig = OrbitRig::with_target(options, target.clone());
    log::info!("Running scripted session with {:?} snapping", rig.strategy().mode());
    run(&mut rig, &target);

    if let Err(e) = rig.execute(RigCommand::SetSnapMode {
        mode: SnapMode::Magnetic,
    }) {
        log::error!("{e}");
        std::process::exit(1);
    }
    rig.orientation_mut().set(8.0, 28.0, 6.0);
    log::info!("Switched to magnetic snapping");
    run(&mut rig, &target);

    for marker in rig.preset_markers() {
        log::debug!(
            "preset {} at {:?}{}",
            marker.name,
            marker.position,
            if marker.active { " (active)" } else { "" }
        );
    }
}
