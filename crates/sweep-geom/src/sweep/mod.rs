// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Swept tests of one moving box against static boxes.
//!
//! Contract (applies to both levels):
//! - Results obey the [`CollisionResult`](crate::CollisionResult) invariants.
//! - The tests are exact; no epsilon is applied to gaps or times.
//! - Obstacle velocity is ignored; obstacles are treated as static.
//! - Broad ties resolve to the first obstacle in iteration order. That order is
//!   whatever the caller supplies and is not otherwise meaningful.

#[doc = "Earliest hit across a collection of static boxes."]
pub mod broad;
#[doc = "Per-axis time of impact for one mover against one static box."]
pub mod pairwise;
