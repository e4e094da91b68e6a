// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::math::Axis;

/// Precondition violations rejected at construction time.
///
/// The sweep functions themselves never fail; only building a box or a
/// resolver configuration from caller-supplied numbers can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A box extent component was zero or negative.
    #[error("extent along {axis} must be positive, got {value}")]
    NonPositiveExtent {
        /// Offending axis.
        axis: Axis,
        /// Offending extent value.
        value: f32,
    },
    /// A vector had a NaN or infinite component.
    #[error("{field} has a non-finite component")]
    NonFinite {
        /// Name of the rejected input (`origin`, `extent`, `velocity`, ...).
        field: &'static str,
    },
    /// Resolver configuration outside its valid range.
    #[error("invalid resolver config: {0}")]
    InvalidConfig(&'static str),
}
