// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `sweep-cli`: headless driver for the swept AABB engine.
//!
//! - `test` sweeps a single mover against a single obstacle.
//! - `run` steps an agent through a scene and prints one JSON line per frame.
//! - `config` shows, initializes, or resets saved preferences.
//!
//! Logs go to stderr and honor `RUST_LOG`; stdout carries JSON only.

mod cli;
mod scene;
mod sim;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glam::Vec3;
use serde::Serialize;
use sweep_app_core::config::ConfigService;
use sweep_app_core::config_port::PrefsPort;
use sweep_app_core::prefs::SimPrefs;
use sweep_config_fs::FsConfigStore;
use sweep_geom::{sweep_test_observed, Axis, ContactResolver, ResolveConfig, SweptBox, TracingObserver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ConfigAction, RunArgs, TestArgs};
use crate::scene::Scene;
use crate::sim::{MotionParams, Simulation};

#[derive(Serialize)]
struct TestReport {
    hit: bool,
    time_fraction: f32,
    normal: [f32; 3],
    axis: Option<Axis>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config_dir = cli.config_dir.as_deref();
    match cli.command {
        Command::Test(args) => run_test(&args),
        Command::Run(args) => run_sim(&args, config_dir),
        Command::Config { action } => run_config(action, config_dir),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_prefs(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("failed to open config store")?;
    Ok(ConfigService::new(store))
}

fn run_test(args: &TestArgs) -> Result<()> {
    let mover = SweptBox::new(
        Vec3::from(args.mover),
        Vec3::from(args.mover_extent),
        Vec3::from(args.velocity),
    )
    .context("invalid mover")?;
    let obstacle = SweptBox::obstacle(Vec3::from(args.obstacle), Vec3::from(args.obstacle_extent))
        .context("invalid obstacle")?;

    let result = sweep_test_observed(&mover, &obstacle, &mut TracingObserver);
    let report = TestReport {
        hit: result.is_hit(),
        time_fraction: result.time_fraction(),
        normal: result.normal().to_array(),
        axis: result.axis(),
    };
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn run_sim(args: &RunArgs, config_dir: Option<&Path>) -> Result<()> {
    // Saved prefs are best-effort: a broken store falls back to defaults.
    let prefs = match open_prefs(config_dir) {
        Ok(service) => service.load_or_init().unwrap_or_else(|err| {
            warn!(?err, "failed to load prefs; using defaults");
            SimPrefs::default()
        }),
        Err(err) => {
            warn!(?err, "no config store; using defaults");
            SimPrefs::default()
        }
    };

    let frames = args.frames.unwrap_or(prefs.frame.frames);
    let dt = args.dt.unwrap_or(prefs.frame.dt);
    if !(dt.is_finite() && dt > 0.0) {
        bail!("dt must be a positive number of seconds, got {dt}");
    }
    let config = ResolveConfig::new(
        args.max_sweeps.unwrap_or(prefs.resolve.max_sweeps),
        args.skin.unwrap_or(prefs.resolve.skin),
    )
    .context("invalid resolver settings")?;
    let motion = MotionParams {
        walk_speed: args.walk_speed.unwrap_or(prefs.motion.walk_speed),
        gravity: args.gravity.unwrap_or(prefs.motion.gravity),
    };

    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };
    let mut sim =
        Simulation::new(&scene, motion, ContactResolver::new(config)).context("invalid scene")?;
    info!(
        frames,
        dt,
        max_sweeps = config.max_sweeps(),
        obstacles = sim.obstacles().len(),
        "starting run"
    );

    let mut out = io::stdout().lock();
    let mut observer = TracingObserver;
    for _ in 0..frames {
        let report = sim.step(dt, &mut observer).context("frame failed")?;
        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
    }
    out.flush()?;
    info!(position = ?sim.position(), "run finished");
    Ok(())
}

fn run_config(action: ConfigAction, config_dir: Option<&Path>) -> Result<()> {
    let service = open_prefs(config_dir)?;
    let prefs = match action {
        ConfigAction::Show => service
            .load_prefs()
            .context("failed to load prefs")?
            .unwrap_or_default(),
        ConfigAction::Init => service.load_or_init().context("failed to initialize prefs")?,
        ConfigAction::Reset => {
            let prefs = SimPrefs::default();
            service.save_prefs(&prefs).context("failed to save prefs")?;
            prefs
        }
    };
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &prefs)?;
    writeln!(out)?;
    Ok(())
}
