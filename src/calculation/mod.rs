//! Calculation logic for the attendance hours engine.
//!
//! This module contains the full apportionment pipeline: time-of-day
//! arithmetic, meal-break deduction, the per-shift-type bucket allocator,
//! the special-case resolver (rest days, holidays, administrative staff,
//! cross-midnight shift changes) and the batch recompute loop.

mod allocator;
mod batch;
mod breaks;
mod resolver;
mod time;

pub use allocator::{
    allocate_buckets, BucketMinutes, NORMAL_CAP_MINUTES, VESPERTINO_SURCHARGE_START,
};
pub use batch::recompute_batch;
pub use breaks::{calculate_break_minutes, DEFAULT_BREAK_MINUTES, SIDE_MEAL_FLOOR_MINUTES};
pub use resolver::{compute_hours, compute_hours_full, DayContext, RecomputeOptions};
pub use time::{
    add_minutes_to_time, interval_minutes, minutes_to_hours, parse_time_to_minutes,
    MINUTES_PER_DAY,
};
