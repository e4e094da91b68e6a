// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Swept axis-aligned box collision.

This crate provides:
- A validated box value (`SweptBox`) carrying origin, extent, and the
  displacement intended for one simulation step.
- The pairwise swept test (`sweep_test`) returning the latest safe fraction of
  motion and the contact normal.
- A broad sweep (`sweep`) selecting the earliest hit across many static boxes.
- A bounded slide loop (`ContactResolver`, `SlideLoop`) that zeroes blocked
  velocity axes and re-sweeps.
- An injectable observer (`SweepObserver`) for diagnostic events.

Design notes:
- Pure functions of their inputs: no globals, no caches, no cross-step state.
- Float32 throughout. Zero-velocity axes use IEEE-754 infinities instead of
  dividing by zero, so the pairwise test is total over well-formed boxes.
- Obstacles are static and expressed in world space; the caller resolves
  transforms and excludes the mover from the obstacle set.
"]

/// Error type for box and resolver construction.
pub mod error;
/// Axis helpers and numeric constants.
pub mod math;
/// Diagnostic events and observers.
pub mod observe;
/// Bounded contact resolution (slide loop).
pub mod resolve;
/// Pairwise and broad swept tests.
pub mod sweep;
/// Foundational value types (box, collision result).
pub mod types;

pub use error::GeomError;
pub use math::{Axis, CONTACT_EPSILON};
pub use observe::{NoopObserver, RecordingObserver, SweepEvent, SweepObserver, TracingObserver};
pub use resolve::{
    BlockedAxes, ContactResolver, ResolveConfig, Resolution, SlideLoop, SlidePhase, SlideStep,
};
pub use sweep::broad::{earliest, earliest_observed, sweep, sweep_observed, BroadHit};
pub use sweep::pairwise::{sweep_test, sweep_test_observed};
pub use types::result::CollisionResult;
pub use types::swept_box::SweptBox;
