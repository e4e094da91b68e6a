// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved simulation preferences used by the headless driver.

use serde::{Deserialize, Serialize};

/// Saved preferences for a simulation run.
///
/// Every section falls back to its defaults when missing, so partially
/// written files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimPrefs {
    /// Agent motion parameters.
    pub motion: MotionPrefs,
    /// Contact resolution parameters.
    pub resolve: ResolvePrefs,
    /// Frame timing.
    pub frame: FramePrefs,
}

/// Agent motion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionPrefs {
    /// Horizontal walking speed (units per second).
    pub walk_speed: f32,
    /// Downward speed added every frame (units per second).
    pub gravity: f32,
}

impl Default for MotionPrefs {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            gravity: 9.81,
        }
    }
}

/// Slide loop parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolvePrefs {
    /// Broad sweeps per frame.
    pub max_sweeps: u32,
    /// Clearance kept in front of the last contact.
    pub skin: f32,
}

impl Default for ResolvePrefs {
    fn default() -> Self {
        Self {
            max_sweeps: 2,
            skin: 0.0,
        }
    }
}

/// Frame timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramePrefs {
    /// Seconds per frame.
    pub dt: f32,
    /// Frames per run.
    pub frames: u32,
}

impl Default for FramePrefs {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            frames: 120,
        }
    }
}
