// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounded contact resolution for one simulation step.
//!
//! The slide loop approximates sliding along walls and into corners: after a
//! hit it clears the velocity component along the contact normal and sweeps
//! again with what is left, up to a fixed number of sweeps. It does not
//! recompute gaps after clearing an axis and does not handle three-surface
//! corners beyond the bound.

mod config;
mod slide;

pub use config::{ResolveConfig, DEFAULT_MAX_SWEEPS};
pub use slide::{BlockedAxes, ContactResolver, Resolution, SlideLoop, SlidePhase, SlideStep};
