//! Shift bucket allocation.
//!
//! The central state machine of the engine: it walks a time pointer
//! forward from the (adjusted) clock-in point and drains the worked
//! minutes into surcharge buckets according to the shift-type rules.

use crate::error::{EngineError, EngineResult};
use crate::models::{HourBuckets, ShiftType};

use super::time::{minutes_to_hours, MINUTES_PER_DAY};

/// Cap on normal-rate minutes within a Matutino shift (8 hours).
pub const NORMAL_CAP_MINUTES: u32 = 480;

/// Minute mark (19:00) where Vespertino normal hours end and the 25%
/// surcharge window begins.
pub const VESPERTINO_SURCHARGE_START: u32 = 1140;

/// Minute allocations per rate bucket, before hour conversion.
///
/// For supported shift types the four buckets always sum to exactly the
/// worked minutes handed to [`allocate_buckets`]: no minute is lost or
/// duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketMinutes {
    /// Minutes at the normal rate.
    pub normal: u32,
    /// Minutes at the 25% surcharge rate.
    pub pct25: u32,
    /// Minutes at the 50% surcharge rate.
    pub pct50: u32,
    /// Minutes at the 100% surcharge rate.
    pub pct100: u32,
}

impl BucketMinutes {
    /// Total allocated minutes.
    pub fn total(&self) -> u32 {
        self.normal + self.pct25 + self.pct50 + self.pct100
    }

    /// Converts each bucket to hours, rounding to 2 decimals per bucket
    /// independently. The holiday bucket is always zero here; holiday
    /// overrides never reach the allocator.
    pub fn to_hours(&self) -> HourBuckets {
        HourBuckets {
            normal: minutes_to_hours(self.normal),
            pct25: minutes_to_hours(self.pct25),
            pct50: minutes_to_hours(self.pct50),
            pct100: minutes_to_hours(self.pct100),
            holiday: minutes_to_hours(0),
        }
    }
}

/// Allocates worked minutes into rate buckets for one shift.
///
/// `anchor` is the calculation start point in minutes since midnight,
/// already adjusted for early arrival (see the resolver): it is never
/// earlier than the programmed start. `programmed_end` is the shift's
/// programmed end in minutes since midnight.
///
/// Walk order per shift type:
///
/// - **Matutino**: normal from the anchor up to the programmed end,
///   capped at [`NORMAL_CAP_MINUTES`]; then 50% from
///   `max(pointer, programmed end)` up to midnight; then 100% for
///   whatever remains past midnight.
/// - **Vespertino**: normal from the anchor up to 19:00; 25% from
///   `max(pointer, 19:00)` up to the programmed end; 50% from
///   `max(pointer, programmed end)` up to midnight; 100% for the rest.
/// - **Mixto**: no rules are defined; fails with
///   [`EngineError::UnsupportedShiftType`].
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::allocate_buckets;
/// use attendance_engine::models::ShiftType;
///
/// // Late arrival 08:10, shift programmed 08:00-17:00, 680 worked minutes.
/// let buckets = allocate_buckets(680, ShiftType::Matutino, 1020, 490).unwrap();
/// assert_eq!(buckets.normal, 480); // capped at 8h
/// assert_eq!(buckets.pct50, 200);
/// assert_eq!(buckets.pct100, 0);
/// ```
pub fn allocate_buckets(
    worked_minutes: u32,
    shift_type: ShiftType,
    programmed_end: u32,
    anchor: u32,
) -> EngineResult<BucketMinutes> {
    match shift_type {
        ShiftType::Matutino => Ok(allocate_matutino(worked_minutes, programmed_end, anchor)),
        ShiftType::Vespertino => Ok(allocate_vespertino(worked_minutes, programmed_end, anchor)),
        ShiftType::Mixto => Err(EngineError::UnsupportedShiftType {
            tag: shift_type.tag().to_string(),
        }),
    }
}

fn allocate_matutino(worked_minutes: u32, programmed_end: u32, anchor: u32) -> BucketMinutes {
    let mut remaining = worked_minutes;
    let mut pointer = anchor;

    // Phase 1: normal, up to the programmed end, capped at 8h.
    let normal_window = programmed_end.saturating_sub(pointer);
    let normal = normal_window.min(NORMAL_CAP_MINUTES).min(remaining);
    remaining -= normal;
    pointer += normal;

    // Phase 2: 50%, from the later of pointer and programmed end, up to
    // the 24:00 mark.
    let fifty_start = pointer.max(programmed_end);
    let pct50 = MINUTES_PER_DAY.saturating_sub(fifty_start).min(remaining);
    remaining -= pct50;

    // Phase 3: 100% past midnight takes whatever is left.
    BucketMinutes {
        normal,
        pct25: 0,
        pct50,
        pct100: remaining,
    }
}

fn allocate_vespertino(worked_minutes: u32, programmed_end: u32, anchor: u32) -> BucketMinutes {
    let mut remaining = worked_minutes;
    let mut pointer = anchor;

    // Phase 1: normal, up to the 19:00 mark.
    let normal = VESPERTINO_SURCHARGE_START
        .saturating_sub(pointer)
        .min(remaining);
    remaining -= normal;
    pointer += normal;

    // Phase 2: 25%, from 19:00 (or the pointer, if later) up to the
    // programmed end.
    let quarter_start = pointer.max(VESPERTINO_SURCHARGE_START);
    let pct25 = programmed_end
        .saturating_sub(quarter_start)
        .min(remaining);
    remaining -= pct25;
    pointer = quarter_start + pct25;

    // Phase 3: 50%, from the programmed end up to the 24:00 mark.
    let fifty_start = pointer.max(programmed_end);
    let pct50 = MINUTES_PER_DAY.saturating_sub(fifty_start).min(remaining);
    remaining -= pct50;

    // Phase 4: 100% past midnight.
    BucketMinutes {
        normal,
        pct25,
        pct50,
        pct100: remaining,
    }
}
