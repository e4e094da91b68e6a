// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless frame loop.
//!
//! Each frame the agent's intended displacement is rebuilt from scratch as
//! `(walk * walk_speed + (0, -gravity, 0)) * dt`, resolved against every
//! obstacle, and applied. Velocity is not carried across frames.

use glam::Vec3;
use serde::Serialize;
use sweep_geom::{Axis, ContactResolver, GeomError, SweepObserver, SweptBox};
use tracing::{debug, warn};

use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub walk_speed: f32,
    pub gravity: f32,
}

/// What happened during one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u32,
    pub position: [f32; 3],
    pub displacement: [f32; 3],
    pub time_fraction: f32,
    pub normal: [f32; 3],
    pub sweeps: u32,
    pub blocked: Vec<Axis>,
}

pub struct Simulation {
    position: Vec3,
    extent: Vec3,
    walk: Vec3,
    obstacles: Vec<SweptBox>,
    motion: MotionParams,
    resolver: ContactResolver,
    frame: u32,
}

impl Simulation {
    pub fn new(
        scene: &Scene,
        motion: MotionParams,
        resolver: ContactResolver,
    ) -> Result<Self, GeomError> {
        let agent = SweptBox::new(
            Vec3::from(scene.agent.position),
            Vec3::from(scene.agent.extent),
            Vec3::ZERO,
        )?;
        let obstacles = scene.obstacle_boxes()?;
        debug!(obstacles = obstacles.len(), "scene loaded");
        Ok(Self {
            position: agent.origin(),
            extent: agent.extent(),
            walk: Vec3::from(scene.walk).normalize_or_zero(),
            obstacles,
            motion,
            resolver,
            frame: 0,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn obstacles(&self) -> &[SweptBox] {
        &self.obstacles
    }

    /// Intended displacement for a frame lasting `dt` seconds.
    pub fn desired_velocity(&self, dt: f32) -> Vec3 {
        (self.walk * self.motion.walk_speed + Vec3::NEG_Y * self.motion.gravity) * dt
    }

    /// Advances one frame, reporting sweep internals to `observer`.
    pub fn step<O>(&mut self, dt: f32, observer: &mut O) -> Result<FrameReport, GeomError>
    where
        O: SweepObserver + ?Sized,
    {
        let mover = SweptBox::new(self.position, self.extent, self.desired_velocity(dt))?;
        let resolution = self.resolver.resolve_observed(&mover, &self.obstacles, observer);
        let moved = mover.translated(resolution.displacement())?;
        self.position = moved.origin();

        // Discrete check after the move; a hit here means the sweep let the
        // agent through.
        if let Some(index) = self.obstacles.iter().position(|o| moved.overlaps(o)) {
            warn!(frame = self.frame, index, position = ?self.position, "agent overlaps an obstacle");
        }

        let last = resolution.last();
        let report = FrameReport {
            frame: self.frame,
            position: self.position.to_array(),
            displacement: resolution.displacement().to_array(),
            time_fraction: last.time_fraction(),
            normal: last.normal().to_array(),
            sweeps: resolution.sweeps(),
            blocked: resolution.blocked().iter().collect(),
        };
        debug!(frame = self.frame, position = ?self.position, sweeps = report.sweeps, "frame");
        self.frame += 1;
        Ok(report)
    }
}
