// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Axis;
use crate::observe::{NoopObserver, SweepEvent, SweepObserver};
use crate::types::result::CollisionResult;
use crate::types::swept_box::SweptBox;

/// Sweeps `mover` along its velocity against the static `obstacle`.
///
/// Returns the largest fraction of the motion that keeps the boxes apart and
/// the normal of first contact, or [`CollisionResult::NONE`] when the full
/// motion is safe.
///
/// Per axis the gap to the near face (entry) and far face (exit) is divided by
/// the velocity. A motionless axis contributes `-inf`/`+inf`, unless the boxes
/// are already apart on it, in which case no collision is possible at all.
/// The hit is accepted only when the latest entry lies in `[0, 1)` and before
/// the earliest exit.
#[must_use]
pub fn sweep_test(mover: &SweptBox, obstacle: &SweptBox) -> CollisionResult {
    sweep_test_observed(mover, obstacle, &mut NoopObserver)
}

/// [`sweep_test`] reporting intermediate values to `observer`.
pub fn sweep_test_observed<O>(
    mover: &SweptBox,
    obstacle: &SweptBox,
    observer: &mut O,
) -> CollisionResult
where
    O: SweepObserver + ?Sized,
{
    let a_min = mover.min();
    let a_max = mover.max();
    let b_min = obstacle.min();
    let b_max = obstacle.max();
    let velocity = mover.velocity();

    // A motionless axis that is already separated can never close.
    for axis in Axis::ALL {
        let i = axis.index();
        if velocity[i] == 0.0 && (a_max[i] <= b_min[i] || a_min[i] >= b_max[i]) {
            observer.on_event(&SweepEvent::EarlyOut { axis });
            return CollisionResult::NONE;
        }
    }

    let mut entry = [f32::NEG_INFINITY; 3];
    let mut exit = [f32::INFINITY; 3];
    for axis in Axis::ALL {
        let i = axis.index();
        let v = velocity[i];
        if v != 0.0 {
            let (near, far) = if v > 0.0 {
                (b_min[i] - a_max[i], b_max[i] - a_min[i])
            } else {
                (b_max[i] - a_min[i], b_min[i] - a_max[i])
            };
            entry[i] = near / v;
            exit[i] = far / v;
        }
        observer.on_event(&SweepEvent::AxisTimes {
            axis,
            entry: entry[i],
            exit: exit[i],
        });
    }

    let entry_time = entry[0].max(entry[1]).max(entry[2]);
    let exit_time = exit[0].min(exit[1]).min(exit[2]);

    // `entry_time == 1` would be contact exactly at the end of the motion; the
    // full step is safe then, so it is reported as no hit.
    if entry_time >= exit_time || entry_time < 0.0 || entry_time >= 1.0 {
        observer.on_event(&SweepEvent::Miss {
            entry_time,
            exit_time,
        });
        return CollisionResult::NONE;
    }

    // Touching while closing at negative speed yields `0 / -v == -0.0`.
    let entry_time = entry_time + 0.0;
    let axis = contact_axis(entry);
    let sign = if axis.of(velocity) >= 0.0 { -1.0 } else { 1.0 };
    observer.on_event(&SweepEvent::Contact {
        axis,
        time_fraction: entry_time,
    });
    CollisionResult::hit(axis, sign, entry_time)
}

/// Axis with the strictly greatest entry time; earlier axes win ties.
fn contact_axis(entry: [f32; 3]) -> Axis {
    let mut best = Axis::X;
    for axis in [Axis::Y, Axis::Z] {
        if entry[axis.index()] > entry[best.index()] {
            best = axis;
        }
    }
    best
}
