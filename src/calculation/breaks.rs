//! Meal-break deduction.
//!
//! An attendance record carries up to three meal intervals (breakfast,
//! lunch, snack). Their total is subtracted from the clocked span before
//! any bucket allocation happens.

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::time::{interval_minutes, parse_time_to_minutes};

/// Break minutes assumed when a record carries no meal interval at all.
pub const DEFAULT_BREAK_MINUTES: u32 = 30;

/// Minimum charged duration for breakfast and snack intervals.
///
/// Lunch is charged at its actual duration, uncapped.
pub const SIDE_MEAL_FLOOR_MINUTES: u32 = 30;

/// Sums the break minutes to deduct from a record's clocked span.
///
/// A meal pair counts only when both its start and end are recorded.
/// Breakfast and snack are floored at [`SIDE_MEAL_FLOOR_MINUTES`]; lunch
/// uses its actual duration. When no pair is recorded at all the result is
/// [`DEFAULT_BREAK_MINUTES`] (an unrecorded standard break); the default
/// does NOT apply once at least one pair is present.
///
/// A malformed time string inside a present pair fails with
/// [`crate::error::EngineError::InvalidTimeFormat`].
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_break_minutes;
/// use attendance_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     id: "rec_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     entry_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     entry_time: Some("08:00".to_string()),
///     exit_date: None,
///     exit_time: Some("17:00".to_string()),
///     breakfast_start: None,
///     breakfast_end: None,
///     lunch_start: Some("12:00".to_string()),
///     lunch_end: Some("13:00".to_string()),
///     snack_start: None,
///     snack_end: None,
///     hours: None,
/// };
/// assert_eq!(calculate_break_minutes(&record).unwrap(), 60);
/// ```
pub fn calculate_break_minutes(record: &AttendanceRecord) -> EngineResult<u32> {
    // (start, end, floored) per meal; lunch is the only unfloored one.
    let meals = [
        (&record.breakfast_start, &record.breakfast_end, true),
        (&record.lunch_start, &record.lunch_end, false),
        (&record.snack_start, &record.snack_end, true),
    ];

    let mut total = 0u32;
    let mut any_recorded = false;

    for (start, end, floored) in meals {
        let (Some(start), Some(end)) = (start, end) else {
            continue;
        };
        let start_min = parse_time_to_minutes(start)?;
        let end_min = parse_time_to_minutes(end)?;
        let mut duration = interval_minutes(start_min, end_min);
        if floored {
            duration = duration.max(SIDE_MEAL_FLOOR_MINUTES);
        }
        total += duration;
        any_recorded = true;
    }

    if !any_recorded {
        return Ok(DEFAULT_BREAK_MINUTES);
    }
    Ok(total)
}
