// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene descriptions loaded from JSON.
//!
//! A scene holds one agent, a walking direction, free-standing obstacles,
//! and chunk origins. Each chunk expands to a 2x2x2 block of unit cubes
//! growing towards `+x`, `-y` and `-z` from its origin, plus a marker cube
//! at `origin + (1, 1, 1)`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use sweep_geom::{GeomError, SweptBox};

/// Cubes per chunk edge.
pub const CHUNK_SIZE: u8 = 2;

fn unit_extent() -> [f32; 3] {
    [1.0; 3]
}

fn default_walk() -> [f32; 3] {
    [1.0, 0.0, 0.0]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSpec {
    pub position: [f32; 3],
    #[serde(default = "unit_extent")]
    pub extent: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObstacleSpec {
    pub origin: [f32; 3],
    #[serde(default = "unit_extent")]
    pub extent: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub agent: AgentSpec,
    /// Walking direction; normalized by the simulation.
    #[serde(default = "default_walk")]
    pub walk: [f32; 3],
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
    #[serde(default)]
    pub chunks: Vec<[f32; 3]>,
}

impl Scene {
    /// One chunk at the origin with the agent dropping onto it while
    /// walking along `+x`.
    pub fn demo() -> Self {
        Self {
            agent: AgentSpec {
                position: [0.0, 1.5, -1.0],
                extent: unit_extent(),
            },
            walk: default_walk(),
            obstacles: Vec::new(),
            chunks: vec![[0.0; 3]],
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse scene {}", path.display()))
    }

    /// Every static box in the scene: explicit obstacles first, then chunk
    /// cubes in chunk order.
    pub fn obstacle_boxes(&self) -> Result<Vec<SweptBox>, GeomError> {
        let cubes_per_chunk = usize::from(CHUNK_SIZE).pow(3) + 1;
        let mut boxes = Vec::with_capacity(self.obstacles.len() + self.chunks.len() * cubes_per_chunk);
        for spec in &self.obstacles {
            boxes.push(SweptBox::obstacle(Vec3::from(spec.origin), Vec3::from(spec.extent))?);
        }
        for origin in &self.chunks {
            for cube in chunk_cubes(Vec3::from(*origin)) {
                boxes.push(SweptBox::unit_obstacle(cube)?);
            }
        }
        Ok(boxes)
    }
}

/// Min corners of the unit cubes making up a chunk at `origin`.
pub fn chunk_cubes(origin: Vec3) -> Vec<Vec3> {
    let n = CHUNK_SIZE;
    let mut cubes = Vec::with_capacity(usize::from(n).pow(3) + 1);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                cubes.push(origin + Vec3::new(f32::from(x), -f32::from(y), -f32::from(z)));
            }
        }
    }
    cubes.push(origin + Vec3::ONE);
    cubes
}
