// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use glam::Vec3;

use crate::math::Axis;
use crate::observe::{NoopObserver, SweepEvent, SweepObserver};
use crate::resolve::config::ResolveConfig;
use crate::sweep::broad::sweep_observed;
use crate::types::result::CollisionResult;
use crate::types::swept_box::SweptBox;

/// Axes whose velocity component was cleared during a step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BlockedAxes {
    flags: [bool; 3],
}

impl BlockedAxes {
    /// Returns `true` if `axis` was blocked.
    #[must_use]
    pub const fn contains(&self, axis: Axis) -> bool {
        self.flags[axis.index()]
    }

    /// Returns `true` if nothing was blocked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.flags[0] || self.flags[1] || self.flags[2])
    }

    /// Blocked axes in priority order.
    pub fn iter(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(|axis| self.contains(*axis))
    }

    fn insert(&mut self, axis: Axis) {
        self.flags[axis.index()] = true;
    }
}

/// Final outcome of one step of the slide loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Resolution {
    displacement: Vec3,
    velocity: Vec3,
    last: CollisionResult,
    sweeps: u32,
    blocked: BlockedAxes,
}

impl Resolution {
    /// Displacement to add to the mover's position this step.
    #[must_use]
    pub const fn displacement(&self) -> Vec3 {
        self.displacement
    }

    /// Velocity after clearing blocked axes (before scaling by the last
    /// time fraction).
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Result of the final sweep.
    #[must_use]
    pub const fn last(&self) -> CollisionResult {
        self.last
    }

    /// Number of broad sweeps performed.
    #[must_use]
    pub const fn sweeps(&self) -> u32 {
        self.sweeps
    }

    /// Axes cleared during the step.
    #[must_use]
    pub const fn blocked(&self) -> BlockedAxes {
        self.blocked
    }
}

/// Where the slide loop currently is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlidePhase {
    /// The next call to [`SlideLoop::advance`] performs sweep `attempt`
    /// (1-based).
    Sweeping {
        /// Upcoming sweep number.
        attempt: u32,
    },
    /// The loop has produced its resolution.
    Finished,
}

/// Outcome of one [`SlideLoop::advance`] call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SlideStep {
    /// A blocked axis was cleared and another sweep is allowed.
    Continue,
    /// No further sweeps; apply the resolution.
    Finished(Resolution),
}

/// The slide loop as an explicit state machine.
///
/// Each [`advance`](Self::advance) performs exactly one broad sweep with the
/// mover rebuilt from the already-reduced velocity. On a hit the component
/// along the normal is cleared, or with a non-zero skin cut down to the part
/// of the gap that leaves `skin` of clearance. The loop continues while the
/// sweep budget lasts and the mover still moves. The final displacement is
/// the reduced velocity scaled by the last sweep's time fraction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlideLoop {
    config: ResolveConfig,
    mover: SweptBox,
    phase: SlidePhase,
    last: CollisionResult,
    sweeps: u32,
    blocked: BlockedAxes,
}

impl SlideLoop {
    /// Starts a loop for `mover`, whose velocity is the full intended
    /// displacement of the step.
    #[must_use]
    pub fn new(mover: &SweptBox, config: ResolveConfig) -> Self {
        Self {
            config,
            mover: *mover,
            phase: SlidePhase::Sweeping { attempt: 1 },
            last: CollisionResult::NONE,
            sweeps: 0,
            blocked: BlockedAxes::default(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Velocity the next sweep will use.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.mover.velocity()
    }

    /// Runs one sweep against `obstacles`.
    ///
    /// Calling this after the loop finished performs no sweep and returns the
    /// same resolution again.
    pub fn advance<O>(&mut self, obstacles: &[SweptBox], observer: &mut O) -> SlideStep
    where
        O: SweepObserver + ?Sized,
    {
        let attempt = match self.phase {
            SlidePhase::Finished => return SlideStep::Finished(self.resolution()),
            SlidePhase::Sweeping { attempt } => attempt,
        };

        let result = sweep_observed(&self.mover, obstacles, observer);
        observer.on_event(&SweepEvent::SlideIteration {
            attempt,
            velocity: self.mover.velocity(),
            result,
        });
        self.last = result;
        self.sweeps = attempt;

        if let Some(axis) = result.axis() {
            self.blocked.insert(axis);
            let approach = self.approach_along(axis, result.time_fraction());
            self.mover = self.mover.with_motion_along(axis, approach);
            if attempt < self.config.max_sweeps() && !self.mover.is_static() {
                self.phase = SlidePhase::Sweeping {
                    attempt: attempt + 1,
                };
                return SlideStep::Continue;
            }
        }

        self.phase = SlidePhase::Finished;
        let resolution = self.resolution();
        observer.on_event(&SweepEvent::SlideFinished {
            sweeps: resolution.sweeps,
            displacement: resolution.displacement,
        });
        SlideStep::Finished(resolution)
    }

    fn resolution(&self) -> Resolution {
        let velocity = self.mover.velocity();
        Resolution {
            displacement: velocity * self.last.time_fraction(),
            velocity,
            last: self.last,
            sweeps: self.sweeps,
            blocked: self.blocked,
        }
    }

    /// Motion left along the blocked `axis` after a hit at `time_fraction`.
    ///
    /// The gap to the contact face is `time_fraction * |v|`. Without skin the
    /// axis is cleared and that gap is left as is; with skin the mover may
    /// still close it down to `skin`, but is never pushed back.
    fn approach_along(&self, axis: Axis, time_fraction: f32) -> f32 {
        let skin = self.config.skin();
        if skin <= 0.0 {
            return 0.0;
        }
        let v = axis.of(self.mover.velocity());
        let gap = time_fraction * v.abs();
        (gap - skin).max(0.0).copysign(v)
    }
}

/// Runs the slide loop to completion.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ContactResolver {
    config: ResolveConfig,
}

impl ContactResolver {
    /// Creates a resolver with `config`.
    #[must_use]
    pub const fn new(config: ResolveConfig) -> Self {
        Self { config }
    }

    /// Resolver configuration.
    #[must_use]
    pub const fn config(&self) -> ResolveConfig {
        self.config
    }

    /// Resolves one step of `mover` against the static `obstacles`.
    #[must_use]
    pub fn resolve(&self, mover: &SweptBox, obstacles: &[SweptBox]) -> Resolution {
        self.resolve_observed(mover, obstacles, &mut NoopObserver)
    }

    /// [`resolve`](Self::resolve) reporting intermediate values to `observer`.
    pub fn resolve_observed<O>(
        &self,
        mover: &SweptBox,
        obstacles: &[SweptBox],
        observer: &mut O,
    ) -> Resolution
    where
        O: SweepObserver + ?Sized,
    {
        let mut slide = SlideLoop::new(mover, self.config);
        loop {
            if let SlideStep::Finished(resolution) = slide.advance(obstacles, observer) {
                return resolution;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]
    use super::*;
    use crate::observe::RecordingObserver;

    fn mover(velocity: [f32; 3]) -> SweptBox {
        SweptBox::unit(Vec3::ZERO, Vec3::from(velocity)).expect("valid mover")
    }

    fn wall_x() -> SweptBox {
        // Occupies x in [2, 3], spans y/z widely.
        SweptBox::obstacle(Vec3::new(2.0, -5.0, -5.0), Vec3::new(1.0, 10.0, 10.0))
            .expect("valid wall")
    }

    fn ceiling_y() -> SweptBox {
        // Occupies y in [2, 3].
        SweptBox::obstacle(Vec3::new(-5.0, 2.0, -5.0), Vec3::new(10.0, 1.0, 10.0))
            .expect("valid ceiling")
    }

    #[test]
    fn unobstructed_motion_is_applied_in_full() {
        let r = ContactResolver::default().resolve(&mover([1.0, 2.0, 3.0]), &[]);
        assert_eq!(r.displacement(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(r.sweeps(), 1);
        assert!(r.blocked().is_empty());
        assert_eq!(r.last(), CollisionResult::NONE);
    }

    #[test]
    fn slides_along_a_wall() {
        let r = ContactResolver::default().resolve(&mover([2.0, 0.0, 1.0]), &[wall_x()]);
        assert_eq!(r.displacement(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.velocity(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.sweeps(), 2);
        assert!(r.blocked().contains(Axis::X));
        assert_eq!(r.blocked().iter().collect::<Vec<_>>(), vec![Axis::X]);
    }

    #[test]
    fn single_sweep_scales_reduced_velocity_by_first_hit() {
        let config = ResolveConfig::new(1, 0.0).expect("valid config");
        let r = ContactResolver::new(config).resolve(&mover([2.0, 0.0, 1.0]), &[wall_x()]);
        assert_eq!(r.displacement(), Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(r.sweeps(), 1);
        assert_eq!(r.last().time_fraction(), 0.5);
    }

    #[test]
    fn corner_blocks_both_axes_within_the_bound() {
        let r = ContactResolver::default()
            .resolve(&mover([2.0, 2.0, 0.0]), &[wall_x(), ceiling_y()]);
        assert_eq!(r.displacement(), Vec3::ZERO);
        assert_eq!(r.sweeps(), 2);
        assert_eq!(
            r.blocked().iter().collect::<Vec<_>>(),
            vec![Axis::X, Axis::Y]
        );
    }

    #[test]
    fn state_machine_steps_are_observable() {
        let obstacles = [wall_x()];
        let mut slide = SlideLoop::new(&mover([2.0, 0.0, 1.0]), ResolveConfig::default());
        assert_eq!(slide.phase(), SlidePhase::Sweeping { attempt: 1 });

        assert_eq!(slide.advance(&obstacles, &mut NoopObserver), SlideStep::Continue);
        assert_eq!(slide.phase(), SlidePhase::Sweeping { attempt: 2 });
        assert_eq!(slide.velocity(), Vec3::new(0.0, 0.0, 1.0));

        let SlideStep::Finished(first) = slide.advance(&obstacles, &mut NoopObserver) else {
            panic!("second sweep must finish the loop");
        };
        assert_eq!(slide.phase(), SlidePhase::Finished);

        let mut rec = RecordingObserver::new();
        assert_eq!(
            slide.advance(&obstacles, &mut rec),
            SlideStep::Finished(first)
        );
        assert!(rec.events().is_empty(), "finished loop must not sweep again");
    }

    fn front_z() -> SweptBox {
        // Occupies z in [2, 3].
        SweptBox::obstacle(Vec3::new(-5.0, -5.0, 2.0), Vec3::new(10.0, 10.0, 1.0))
            .expect("valid front wall")
    }

    /// Clearance between the mover's leading x face and `wall_x` after
    /// applying `displacement`.
    fn gap_to_wall(mover: &SweptBox, displacement: Vec3) -> f32 {
        wall_x().min().x - (mover.max().x + displacement.x)
    }

    #[test]
    fn without_skin_the_gap_along_the_normal_is_left_open() {
        let m = mover([2.0, 0.0, 0.0]);
        let r = ContactResolver::default().resolve(&m, &[wall_x()]);
        assert_eq!(r.displacement(), Vec3::ZERO);
        assert_eq!(gap_to_wall(&m, r.displacement()), 1.0);
    }

    #[test]
    fn skin_closes_the_gap_down_to_the_clearance() {
        let config = ResolveConfig::new(2, 0.1).expect("valid config");
        let m = mover([2.0, 0.0, 1.0]);
        let r = ContactResolver::new(config).resolve(&m, &[wall_x()]);
        assert!((gap_to_wall(&m, r.displacement()) - 0.1).abs() < 1e-5);
        // Sliding along the wall is untouched.
        assert_eq!(r.displacement().z, 1.0);
        assert!(r.blocked().contains(Axis::X));
        assert_eq!(r.sweeps(), 2);
    }

    #[test]
    fn skin_on_the_last_sweep_keeps_at_least_the_clearance() {
        let config = ResolveConfig::new(1, 0.1).expect("valid config");
        let m = mover([2.0, 0.0, 1.0]);
        let r = ContactResolver::new(config).resolve(&m, &[wall_x()]);
        assert!(gap_to_wall(&m, r.displacement()) >= 0.1);
        assert!(r.displacement().x > 0.0);
        assert_eq!(r.displacement().z, 0.5);
    }

    #[test]
    fn skin_never_pushes_the_mover_back() {
        let config = ResolveConfig::new(2, 0.1).expect("valid config");
        let m = SweptBox::unit(Vec3::new(0.95, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0))
            .expect("valid mover");
        let before = gap_to_wall(&m, Vec3::ZERO);
        let r = ContactResolver::new(config).resolve(&m, &[wall_x()]);
        assert_eq!(r.displacement(), Vec3::ZERO);
        assert_eq!(gap_to_wall(&m, r.displacement()), before);
        assert_eq!(r.sweeps(), 1);
    }

    #[test]
    fn stops_sweeping_once_every_axis_is_blocked() {
        let config = ResolveConfig::new(4, 0.0).expect("valid config");
        let mut rec = RecordingObserver::new();
        let r = ContactResolver::new(config).resolve_observed(
            &mover([2.0, 2.0, 2.0]),
            &[wall_x(), ceiling_y(), front_z()],
            &mut rec,
        );
        assert_eq!(r.sweeps(), 3);
        assert_eq!(r.displacement(), Vec3::ZERO);
        assert_eq!(
            r.blocked().iter().collect::<Vec<_>>(),
            vec![Axis::X, Axis::Y, Axis::Z]
        );
        let iterations = rec
            .events()
            .iter()
            .filter(|e| matches!(e, SweepEvent::SlideIteration { .. }))
            .count();
        assert_eq!(iterations, 3);
    }

    #[test]
    fn emits_iteration_and_finish_events() {
        let mut rec = RecordingObserver::new();
        let _ = ContactResolver::default().resolve_observed(
            &mover([2.0, 0.0, 1.0]),
            &[wall_x()],
            &mut rec,
        );
        let slide_events: Vec<_> = rec
            .events()
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    SweepEvent::SlideIteration { .. } | SweepEvent::SlideFinished { .. }
                )
            })
            .collect();
        assert_eq!(slide_events.len(), 3);
        assert!(matches!(
            slide_events[2],
            SweepEvent::SlideFinished { sweeps: 2, .. }
        ));
    }
}
