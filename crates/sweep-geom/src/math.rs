// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use glam::Vec3;

/// Residual gap below which callers may treat two boxes as touching.
///
/// Scaled for agent speeds of a few metres per second against unit-sized
/// obstacles. The sweep tests never apply it; it exists for drivers that need
/// to keep a non-zero clearance between steps.
pub const CONTACT_EPSILON: f32 = 1e-7;

/// World axis. Declaration order is the tie-break priority of the sweep test.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Horizontal (red) axis.
    X,
    /// Vertical (green) axis.
    Y,
    /// Horizontal (blue) axis.
    Z,
}

impl Axis {
    /// All axes in priority order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis in a `Vec3`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Positive unit vector along this axis.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    /// Reads this axis' component of `v`.
    #[must_use]
    pub fn of(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Returns `v` with this axis' component replaced by `value`.
    #[must_use]
    pub fn with(self, v: Vec3, value: f32) -> Vec3 {
        let mut out = v;
        out[self.index()] = value;
        out
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}
