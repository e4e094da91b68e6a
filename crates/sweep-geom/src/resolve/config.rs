// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::GeomError;

/// Sweeps per step used by [`ResolveConfig::default`].
pub const DEFAULT_MAX_SWEEPS: u32 = 2;

/// Parameters of the slide loop.
///
/// - `max_sweeps`: total broad sweeps per step, at least one.
/// - `skin`: clearance in world units kept along the normal of each contact.
///   A hit axis keeps the part of its motion that closes the gap down to
///   `skin`; zero clears the axis outright.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolveConfig {
    max_sweeps: u32,
    skin: f32,
}

impl ResolveConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// [`GeomError::InvalidConfig`] if `max_sweeps` is zero or `skin` is
    /// negative or not finite.
    pub fn new(max_sweeps: u32, skin: f32) -> Result<Self, GeomError> {
        if max_sweeps == 0 {
            return Err(GeomError::InvalidConfig("max_sweeps must be at least 1"));
        }
        if !skin.is_finite() || skin < 0.0 {
            return Err(GeomError::InvalidConfig("skin must be finite and >= 0"));
        }
        Ok(Self { max_sweeps, skin })
    }

    /// Total broad sweeps per step.
    #[must_use]
    pub const fn max_sweeps(&self) -> u32 {
        self.max_sweeps
    }

    /// Clearance kept in front of the last contact.
    #[must_use]
    pub const fn skin(&self) -> f32 {
        self.skin
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
            skin: 0.0,
        }
    }
}
