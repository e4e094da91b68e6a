// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::observe::{NoopObserver, SweepEvent, SweepObserver};
use crate::sweep::pairwise::sweep_test_observed;
use crate::types::result::CollisionResult;
use crate::types::swept_box::SweptBox;

/// Earliest hit of a broad sweep together with the obstacle that caused it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BroadHit {
    /// Position of the blocking obstacle in the caller's iteration order.
    pub index: usize,
    /// Pairwise result against that obstacle.
    pub result: CollisionResult,
}

/// Sweeps `mover` against every obstacle and returns the earliest hit.
///
/// The mover must not be part of `obstacles`; every obstacle is treated as
/// static regardless of its velocity. Equal time fractions keep the first
/// obstacle seen.
#[must_use]
pub fn earliest<'a, I>(mover: &SweptBox, obstacles: I) -> Option<BroadHit>
where
    I: IntoIterator<Item = &'a SweptBox>,
{
    earliest_observed(mover, obstacles, &mut NoopObserver)
}

/// [`earliest`] reporting intermediate values to `observer`.
pub fn earliest_observed<'a, I, O>(
    mover: &SweptBox,
    obstacles: I,
    observer: &mut O,
) -> Option<BroadHit>
where
    I: IntoIterator<Item = &'a SweptBox>,
    O: SweepObserver + ?Sized,
{
    let mut best: Option<BroadHit> = None;
    let mut tested = 0usize;
    for (index, obstacle) in obstacles.into_iter().enumerate() {
        tested += 1;
        let result = sweep_test_observed(mover, obstacle, observer);
        if !result.is_hit() {
            continue;
        }
        let earlier = best.is_none_or(|b| result.time_fraction() < b.result.time_fraction());
        if earlier {
            best = Some(BroadHit { index, result });
        }
    }
    observer.on_event(&SweepEvent::Broad {
        obstacles: tested,
        winner: best.map(|hit| hit.index),
    });
    best
}

/// Sweeps `mover` against every obstacle and returns the earliest collision,
/// or [`CollisionResult::NONE`] when the collection is empty or nothing is hit.
#[must_use]
pub fn sweep<'a, I>(mover: &SweptBox, obstacles: I) -> CollisionResult
where
    I: IntoIterator<Item = &'a SweptBox>,
{
    sweep_observed(mover, obstacles, &mut NoopObserver)
}

/// [`sweep`] reporting intermediate values to `observer`.
pub fn sweep_observed<'a, I, O>(mover: &SweptBox, obstacles: I, observer: &mut O) -> CollisionResult
where
    I: IntoIterator<Item = &'a SweptBox>,
    O: SweepObserver + ?Sized,
{
    earliest_observed(mover, obstacles, observer).map_or(CollisionResult::NONE, |hit| hit.result)
}
