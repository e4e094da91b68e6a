// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use glam::Vec3;

use crate::math::Axis;

/// Outcome of a swept test.
///
/// Invariants:
/// - `time_fraction` lies in `[0, 1]`.
/// - `time_fraction == 1` exactly when `normal` is the zero vector.
/// - Otherwise `normal` has exactly one non-zero component, `+1` or `-1`,
///   pointing from the obstacle back toward the mover.
///
/// Results are only produced by the sweep functions, which keeps the
/// invariants closed.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CollisionResult {
    normal: Vec3,
    time_fraction: f32,
}

impl CollisionResult {
    /// No collision: the full motion is safe.
    pub const NONE: Self = Self {
        normal: Vec3::ZERO,
        time_fraction: 1.0,
    };

    pub(crate) fn hit(axis: Axis, sign: f32, time_fraction: f32) -> Self {
        Self {
            normal: axis.unit() * sign,
            time_fraction,
        }
    }

    /// Contact normal, or zero when nothing was hit.
    #[must_use]
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Largest safe fraction of the intended motion.
    #[must_use]
    pub const fn time_fraction(&self) -> f32 {
        self.time_fraction
    }

    /// Returns `true` if the motion was blocked before completing.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.time_fraction < 1.0
    }

    /// Axis the motion was blocked along.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.of(self.normal) != 0.0)
    }
}

impl Default for CollisionResult {
    fn default() -> Self {
        Self::NONE
    }
}
