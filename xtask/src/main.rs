//! Workspace tasks: `cargo run -p orbit-snap-xtask -- <command>`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use orbit_snap::options::RigOptions;
use orbit_snap::snap::SnapPreset;

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Build tasks for the orbit-snap workspace")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the options JSON schema (for settings UIs).
    Schema {
        /// Output file
        #[arg(short, long, default_value = "target/rig-options.schema.json")]
        out: PathBuf,
    },
    /// Write a default options TOML file with the cardinal presets filled in.
    Preset {
        /// Output file
        #[arg(short, long, default_value = "target/rig-options.toml")]
        out: PathBuf,
    },
}

fn write(out: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, content)
        .with_context(|| format!("writing {}", out.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Schema { out } => {
            let schema = RigOptions::json_schema_string()?;
            write(&out, &schema)
        }
        Command::Preset { out } => {
            let options = RigOptions {
                presets: SnapPreset::cardinal(),
                ..RigOptions::default()
            };
            options
                .save(&out)
                .with_context(|| format!("saving {}", out.display()))
        }
    }
}
