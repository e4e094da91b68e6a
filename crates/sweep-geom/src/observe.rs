// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Diagnostic hooks for the sweep functions.
//!
//! Every `*_observed` entry point takes a caller-owned observer and reports
//! intermediate values to it. Nothing here is process-wide: a test hands in a
//! [`RecordingObserver`] and asserts on the stream, a driver hands in a
//! [`TracingObserver`], and the plain entry points use [`NoopObserver`].

use glam::Vec3;
use tracing::{debug, trace};

use crate::math::Axis;
use crate::types::result::CollisionResult;

/// Intermediate values reported during a sweep.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SweepEvent {
    /// A motionless axis was already separated; the pair cannot collide.
    EarlyOut {
        /// Separated axis.
        axis: Axis,
    },
    /// Entry and exit times along one axis (`-inf`/`+inf` for motionless axes).
    AxisTimes {
        /// Axis being reported.
        axis: Axis,
        /// Time the leading face reaches the obstacle.
        entry: f32,
        /// Time the trailing face leaves the obstacle.
        exit: f32,
    },
    /// The combined entry/exit window ruled out a collision.
    Miss {
        /// Latest per-axis entry time.
        entry_time: f32,
        /// Earliest per-axis exit time.
        exit_time: f32,
    },
    /// The pair collides.
    Contact {
        /// Blocking axis.
        axis: Axis,
        /// Safe fraction of the motion.
        time_fraction: f32,
    },
    /// A broad sweep finished.
    Broad {
        /// Number of obstacles tested.
        obstacles: usize,
        /// Index of the earliest hit, if any.
        winner: Option<usize>,
    },
    /// One pass of the slide loop finished its sweep.
    SlideIteration {
        /// 1-based sweep number within the step.
        attempt: u32,
        /// Velocity the mover was swept with.
        velocity: Vec3,
        /// Earliest hit of this pass.
        result: CollisionResult,
    },
    /// The slide loop produced its final displacement.
    SlideFinished {
        /// Sweeps performed.
        sweeps: u32,
        /// Displacement to apply this step.
        displacement: Vec3,
    },
}

/// Receiver for [`SweepEvent`]s.
pub trait SweepObserver {
    /// Called once per event, in the order the sweep computes them.
    fn on_event(&mut self, event: &SweepEvent);
}

impl<F> SweepObserver for F
where
    F: FnMut(&SweepEvent),
{
    fn on_event(&mut self, event: &SweepEvent) {
        self(event);
    }
}

/// Discards every event.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: &SweepEvent) {}
}

/// Collects events in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Vec<SweepEvent>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events seen so far.
    #[must_use]
    pub fn events(&self) -> &[SweepEvent] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<SweepEvent> {
        self.events
    }

    /// Drops recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SweepObserver for RecordingObserver {
    fn on_event(&mut self, event: &SweepEvent) {
        self.events.push(*event);
    }
}

/// Forwards events to `tracing`: per-pair detail at `trace`, per-step
/// summaries at `debug`.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingObserver;

impl SweepObserver for TracingObserver {
    fn on_event(&mut self, event: &SweepEvent) {
        match *event {
            SweepEvent::EarlyOut { axis } => trace!(%axis, "separated on motionless axis"),
            SweepEvent::AxisTimes { axis, entry, exit } => {
                trace!(%axis, entry, exit, "axis times");
            }
            SweepEvent::Miss {
                entry_time,
                exit_time,
            } => trace!(entry_time, exit_time, "no collision"),
            SweepEvent::Contact {
                axis,
                time_fraction,
            } => trace!(%axis, time_fraction, "collision"),
            SweepEvent::Broad { obstacles, winner } => {
                debug!(obstacles, ?winner, "broad sweep");
            }
            SweepEvent::SlideIteration {
                attempt,
                velocity,
                result,
            } => debug!(
                attempt,
                velocity = ?velocity,
                time_fraction = result.time_fraction(),
                normal = ?result.normal(),
                "slide iteration"
            ),
            SweepEvent::SlideFinished {
                sweeps,
                displacement,
            } => debug!(sweeps, displacement = ?displacement, "slide finished"),
        }
    }
}
