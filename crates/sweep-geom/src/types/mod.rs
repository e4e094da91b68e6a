// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value types exchanged with the sweep functions.
//!
//! Semantics notes:
//! - Boxes are built fresh every step and never mutated in place; helpers that
//!   "change" a box return a new value.
//! - Overlap for the discrete check is exclusive on faces, matching the sweep
//!   test, where touching boxes are separated until motion carries them in.

#[doc = "Collision outcome of a swept test."]
pub mod result;
#[doc = "Axis-aligned box with a per-step displacement."]
pub mod swept_box;
