// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Swept AABB collision driver.
#[derive(Parser, Debug)]
#[command(name = "sweep-cli", version, about = "Swept AABB collision driver")]
pub struct Cli {
    /// Raise the default log level to debug (`RUST_LOG` still wins).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding saved preferences (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sweep one moving box against one static box and print the result.
    Test(TestArgs),
    /// Step an agent through a scene and print one JSON line per frame.
    Run(RunArgs),
    /// Inspect or write saved preferences.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug)]
pub struct TestArgs {
    /// Mover origin (min corner), as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub mover: [f32; 3],

    /// Mover displacement for this step, as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub velocity: [f32; 3],

    /// Obstacle origin (min corner), as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub obstacle: [f32; 3],

    /// Mover size, as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "1,1,1")]
    pub mover_extent: [f32; 3],

    /// Obstacle size, as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "1,1,1")]
    pub obstacle_extent: [f32; 3],
}

/// Overrides for a run; anything unset comes from saved preferences.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scene description (JSON). Uses the built-in demo scene when omitted.
    #[arg(long, value_name = "FILE")]
    pub scene: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Seconds per frame.
    #[arg(long)]
    pub dt: Option<f32>,

    /// Broad sweeps per frame.
    #[arg(long)]
    pub max_sweeps: Option<u32>,

    /// Clearance kept in front of the last contact.
    #[arg(long)]
    pub skin: Option<f32>,

    /// Walking speed (units per second).
    #[arg(long)]
    pub walk_speed: Option<f32>,

    /// Downward speed (units per second).
    #[arg(long, allow_hyphen_values = true)]
    pub gravity: Option<f32>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective preferences.
    Show,
    /// Write the defaults if nothing is saved yet.
    Init,
    /// Overwrite saved preferences with the defaults.
    Reset,
}

/// Parses `x,y,z` into three finite floats.
pub fn parse_vec3(raw: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got {raw:?}"));
    };
    let mut out = [0.0_f32; 3];
    for (slot, part) in out.iter_mut().zip([x, y, z]) {
        let value: f32 = part
            .parse()
            .map_err(|err| format!("invalid component {part:?}: {err}"))?;
        if !value.is_finite() {
            return Err(format!("component {part:?} is not finite"));
        }
        *slot = value;
    }
    Ok(out)
}
