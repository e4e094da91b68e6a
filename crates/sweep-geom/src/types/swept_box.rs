// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use glam::Vec3;

use crate::error::GeomError;
use crate::math::Axis;

/// Axis-aligned box in world coordinates with the displacement it intends to
/// travel during one step.
///
/// Invariants:
/// - `extent` components are strictly positive.
/// - All components are finite.
/// - Static obstacles carry a zero `velocity`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweptBox {
    origin: Vec3,
    extent: Vec3,
    velocity: Vec3,
}

fn check_finite(field: &'static str, v: Vec3) -> Result<(), GeomError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(GeomError::NonFinite { field })
    }
}

impl SweptBox {
    /// Constructs a box from its minimum corner, size, and per-step displacement.
    ///
    /// # Errors
    /// [`GeomError::NonFinite`] if any component is NaN or infinite, and
    /// [`GeomError::NonPositiveExtent`] if any extent component is `<= 0`.
    pub fn new(origin: Vec3, extent: Vec3, velocity: Vec3) -> Result<Self, GeomError> {
        check_finite("origin", origin)?;
        check_finite("extent", extent)?;
        check_finite("velocity", velocity)?;
        for axis in Axis::ALL {
            let value = axis.of(extent);
            if value <= 0.0 {
                return Err(GeomError::NonPositiveExtent { axis, value });
            }
        }
        Ok(Self {
            origin,
            extent,
            velocity,
        })
    }

    /// Unit-sized box (`1 x 1 x 1`) at `origin`.
    pub fn unit(origin: Vec3, velocity: Vec3) -> Result<Self, GeomError> {
        Self::new(origin, Vec3::ONE, velocity)
    }

    /// Static obstacle (zero velocity).
    pub fn obstacle(origin: Vec3, extent: Vec3) -> Result<Self, GeomError> {
        Self::new(origin, extent, Vec3::ZERO)
    }

    /// Static unit-sized obstacle.
    pub fn unit_obstacle(origin: Vec3) -> Result<Self, GeomError> {
        Self::new(origin, Vec3::ONE, Vec3::ZERO)
    }

    /// Minimum corner.
    #[must_use]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Size along each axis.
    #[must_use]
    pub const fn extent(&self) -> Vec3 {
        self.extent
    }

    /// Displacement intended for the current step.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Minimum corner (alias of [`Self::origin`]).
    #[must_use]
    pub const fn min(&self) -> Vec3 {
        self.origin
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.origin + self.extent
    }

    /// Returns `true` if the box carries no displacement.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.velocity == Vec3::ZERO
    }

    /// Same box with a different displacement.
    ///
    /// # Errors
    /// [`GeomError::NonFinite`] if `velocity` has a non-finite component.
    pub fn with_velocity(&self, velocity: Vec3) -> Result<Self, GeomError> {
        check_finite("velocity", velocity)?;
        Ok(Self { velocity, ..*self })
    }

    /// Same box moved by `delta`.
    ///
    /// # Errors
    /// [`GeomError::NonFinite`] if the moved origin is not finite.
    pub fn translated(&self, delta: Vec3) -> Result<Self, GeomError> {
        let origin = self.origin + delta;
        check_finite("origin", origin)?;
        Ok(Self { origin, ..*self })
    }

    /// Same box with the displacement along `axis` replaced by `value`.
    ///
    /// `value` is always derived from the current (finite) velocity.
    #[must_use]
    pub(crate) fn with_motion_along(&self, axis: Axis, value: f32) -> Self {
        Self {
            velocity: axis.with(self.velocity, value),
            ..*self
        }
    }

    /// Returns `true` if the two boxes share interior volume.
    ///
    /// Exclusive on faces: boxes that merely touch do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_min = self.min();
        let a_max = self.max();
        let b_min = other.min();
        let b_max = other.max();
        Axis::ALL.into_iter().all(|axis| {
            let i = axis.index();
            a_max[i] > b_min[i] && a_min[i] < b_max[i]
        })
    }
}
