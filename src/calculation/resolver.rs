//! Computation-path resolution.
//!
//! Decides which rules apply to one attendance record: rest-day override,
//! holiday override, the administrative-staff carve-out, the cross-midnight
//! shift-change split, and finally the standard allocator path. Everything
//! here is pure: the record and its resolved day contexts go in, a fresh
//! set of hour buckets comes out.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, EmployeeContext, HourBuckets, ScheduleResolution, Shift};

use super::allocator::{allocate_buckets, NORMAL_CAP_MINUTES};
use super::breaks::calculate_break_minutes;
use super::time::{interval_minutes, minutes_to_hours, parse_time_to_minutes};

/// End of the first virtual sub-record when a record is split at a shift
/// change: 23:59 in minutes since midnight.
const FIRST_SEGMENT_END: u32 = 1439;

/// The resolved calendar context for one date of a record.
///
/// The caller (batch loop or HTTP shim) resolves these from the backing
/// store; the computation itself never reaches out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayContext {
    /// The employee's effective schedule on the date.
    pub schedule: ScheduleResolution,
    /// Whether the date is a calendar holiday.
    pub is_holiday: bool,
}

impl DayContext {
    /// A working day under the given shift, not a holiday.
    pub fn working(shift: Shift) -> Self {
        Self {
            schedule: ScheduleResolution {
                shift: Some(shift),
                is_rest_day: false,
            },
            is_holiday: false,
        }
    }

    /// A scheduled rest day.
    pub fn rest_day() -> Self {
        Self {
            schedule: ScheduleResolution {
                shift: None,
                is_rest_day: true,
            },
            is_holiday: false,
        }
    }
}

/// Options for a recompute run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecomputeOptions {
    /// When set, administrative employees get the simplified overtime
    /// split (first 8h normal, remainder at 50%). When unset they are
    /// paid everything at the normal rate.
    #[serde(default)]
    pub apply_administrative_overtime: bool,
}

/// Apportions one record's worked time into hour buckets along the
/// standard (shift-based) path.
///
/// Decision order:
///
/// 1. Rest day on the entry date: everything to the 100% bucket. The
///    holiday flag is not consulted in this branch.
/// 2. Holiday on the entry date: everything to the holiday bucket.
/// 3. Entry and exit on different dates with different effective
///    schedules: split at midnight and sum both halves.
/// 4. Otherwise: adjust the anchor (no credit for early arrival, lateness
///    not backdated) and run the bucket allocator.
///
/// `exit_day` is only consulted for the split check; pass `None` for
/// records that do not cross midnight.
///
/// # Errors
///
/// - [`EngineError::InvalidTimeFormat`] when the entry or exit time is
///   absent or malformed (also for malformed recorded meal pairs).
/// - [`EngineError::MissingSchedule`] when a needed shift is unresolved.
/// - [`EngineError::UnsupportedShiftType`] for shift types without rules.
pub fn compute_hours(
    record: &AttendanceRecord,
    entry_day: &DayContext,
    exit_day: Option<&DayContext>,
) -> EngineResult<HourBuckets> {
    let (worked, entry_min) = net_worked_minutes(record)?;

    if entry_day.schedule.is_rest_day {
        return Ok(rest_day_buckets(worked));
    }
    if entry_day.is_holiday {
        return Ok(holiday_buckets(worked));
    }

    if record.crosses_midnight() {
        if let Some(exit_ctx) = exit_day {
            if !entry_day.schedule.same_assignment(&exit_ctx.schedule) {
                return split_at_midnight(record, entry_day, exit_ctx);
            }
        }
    }

    let shift = entry_day
        .schedule
        .shift
        .as_ref()
        .ok_or_else(|| missing_schedule(record, false))?;
    allocate_for_shift(worked, entry_min, shift)
}

/// Apportions one record's worked time, including the administrative-staff
/// carve-out. This is the entry point the batch recompute uses.
///
/// Rest-day and holiday overrides apply exactly as in [`compute_hours`].
/// After those, the administrative path is selected when the employee is
/// flagged administrative OR no shift resolves for the entry date:
///
/// - administrative and `apply_administrative_overtime` set: first 8h at
///   the normal rate, the whole remainder at 50% (never split to 100%);
/// - otherwise: everything at the normal rate; overtime is never
///   computed for unflagged staff.
///
/// Employees with a resolved shift and no administrative flag fall
/// through to [`compute_hours`].
pub fn compute_hours_full(
    record: &AttendanceRecord,
    entry_day: &DayContext,
    exit_day: Option<&DayContext>,
    employee: &EmployeeContext,
    options: &RecomputeOptions,
) -> EngineResult<HourBuckets> {
    let (worked, _) = net_worked_minutes(record)?;

    if entry_day.schedule.is_rest_day {
        return Ok(rest_day_buckets(worked));
    }
    if entry_day.is_holiday {
        return Ok(holiday_buckets(worked));
    }

    if employee.is_administrative || entry_day.schedule.shift.is_none() {
        if employee.is_administrative && options.apply_administrative_overtime {
            let normal = worked.min(NORMAL_CAP_MINUTES);
            let mut buckets = HourBuckets::zero();
            buckets.normal = minutes_to_hours(normal);
            buckets.pct50 = minutes_to_hours(worked - normal);
            return Ok(buckets);
        }
        let mut buckets = HourBuckets::zero();
        buckets.normal = minutes_to_hours(worked);
        return Ok(buckets);
    }

    compute_hours(record, entry_day, exit_day)
}

/// Parses the mandatory entry and exit clock times.
fn clocked_minutes(record: &AttendanceRecord) -> EngineResult<(u32, u32)> {
    let entry = parse_time_to_minutes(required_time(&record.entry_time, "entry_time")?)?;
    let exit = parse_time_to_minutes(required_time(&record.exit_time, "exit_time")?)?;
    Ok((entry, exit))
}

/// Net worked minutes (clocked span minus meal breaks, floored at zero)
/// plus the raw clock-in minute.
fn net_worked_minutes(record: &AttendanceRecord) -> EngineResult<(u32, u32)> {
    let (entry_min, exit_min) = clocked_minutes(record)?;
    let gross = interval_minutes(entry_min, exit_min);
    let breaks = calculate_break_minutes(record)?;
    Ok((gross.saturating_sub(breaks), entry_min))
}

fn required_time<'a>(field: &'a Option<String>, name: &str) -> EngineResult<&'a str> {
    field
        .as_deref()
        .ok_or_else(|| EngineError::InvalidTimeFormat {
            value: name.to_string(),
        })
}

fn missing_schedule(record: &AttendanceRecord, exit_date: bool) -> EngineError {
    EngineError::MissingSchedule {
        employee_id: record.employee_id.clone(),
        date: if exit_date {
            record.effective_exit_date()
        } else {
            record.entry_date
        },
    }
}

fn rest_day_buckets(worked: u32) -> HourBuckets {
    let mut buckets = HourBuckets::zero();
    buckets.pct100 = minutes_to_hours(worked);
    buckets
}

fn holiday_buckets(worked: u32) -> HourBuckets {
    let mut buckets = HourBuckets::zero();
    buckets.holiday = minutes_to_hours(worked);
    buckets
}

/// Runs the allocator for one shift, applying the anchor adjustment: an
/// early clock-in is anchored at the programmed start (no credit for
/// early arrival); a late one keeps its own clock-in (lateness is not
/// backdated).
fn allocate_for_shift(worked: u32, clock_in: u32, shift: &Shift) -> EngineResult<HourBuckets> {
    let start = parse_time_to_minutes(&shift.start_time)?;
    let end = parse_time_to_minutes(&shift.end_time)?;
    let anchor = if clock_in <= start { start } else { clock_in };
    Ok(allocate_buckets(worked, shift.shift_type, end, anchor)?.to_hours())
}

/// Splits a record whose shift changes at midnight into two virtual
/// sub-records (entry to 23:59 under the entry-day shift, 00:00 to exit
/// under the exit-day shift) and sums the two allocations.
///
/// The full meal deduction (including the once-only unrecorded-break
/// default) is charged to the first segment.
fn split_at_midnight(
    record: &AttendanceRecord,
    entry_day: &DayContext,
    exit_day: &DayContext,
) -> EngineResult<HourBuckets> {
    let (entry_min, exit_min) = clocked_minutes(record)?;
    let breaks = calculate_break_minutes(record)?;

    let entry_shift = entry_day
        .schedule
        .shift
        .as_ref()
        .ok_or_else(|| missing_schedule(record, false))?;
    let exit_shift = exit_day
        .schedule
        .shift
        .as_ref()
        .ok_or_else(|| missing_schedule(record, true))?;

    let first_gross = interval_minutes(entry_min, FIRST_SEGMENT_END);
    let first_worked = first_gross.saturating_sub(breaks);
    let first = allocate_for_shift(first_worked, entry_min, entry_shift)?;

    // The second segment starts at 00:00, so its gross span is the exit
    // minute itself and its clock-in is always at or before the
    // programmed start.
    let second = allocate_for_shift(exit_min, 0, exit_shift)?;

    Ok(first.combine(&second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    fn matutino_shift() -> Shift {
        Shift {
            id: "shift_mat".to_string(),
            name: "Jornada matutina".to_string(),
            start_time: "08:00".to_string(),
            end_time: "17:00".to_string(),
            shift_type: ShiftType::Matutino,
        }
    }

    fn vespertino_shift() -> Shift {
        Shift {
            id: "shift_ves".to_string(),
            name: "Jornada vespertina".to_string(),
            start_time: "14:00".to_string(),
            end_time: "22:00".to_string(),
            shift_type: ShiftType::Vespertino,
        }
    }

    fn make_record(entry: &str, exit: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: "rec_001".to_string(),
            employee_id: "emp_001".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            entry_time: Some(entry.to_string()),
            exit_date: Some(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()),
            exit_time: Some(exit.to_string()),
            breakfast_start: None,
            breakfast_end: None,
            lunch_start: None,
            lunch_end: None,
            snack_start: None,
            snack_end: None,
            hours: None,
        }
    }

    /// RS-001: on-time full matutino day with a recorded lunch
    #[test]
    fn test_standard_matutino_day_with_lunch() {
        let mut record = make_record("08:00", "17:00");
        record.lunch_start = Some("12:00".to_string());
        record.lunch_end = Some("13:00".to_string());

        let ctx = DayContext::working(matutino_shift());
        let buckets = compute_hours(&record, &ctx, None).unwrap();

        assert_eq!(buckets.normal, dec(800, 2)); // 8.00
        assert_eq!(buckets.pct25, Decimal::ZERO);
        assert_eq!(buckets.pct50, Decimal::ZERO);
        assert_eq!(buckets.pct100, Decimal::ZERO);
        assert_eq!(buckets.holiday, Decimal::ZERO);
        assert_eq!(buckets.total(), dec(800, 2));
    }

    /// RS-002: late arrival, unrecorded break, evening overtime
    #[test]
    fn test_late_arrival_with_default_break_and_overtime() {
        let record = make_record("08:10", "20:00");
        let ctx = DayContext::working(matutino_shift());

        let buckets = compute_hours(&record, &ctx, None).unwrap();

        // (20:00 - 08:10) - 30 default = 680 worked minutes; normal caps
        // at 480, the remaining 200 land in the 50% window.
        assert_eq!(buckets.normal, dec(800, 2));
        assert_eq!(buckets.pct50, dec(333, 2)); // 3.33
        assert_eq!(buckets.pct100, Decimal::ZERO);
        assert_eq!(buckets.total(), dec(1133, 2));
    }

    /// RS-003: early arrival is anchored at the programmed start
    #[test]
    fn test_early_arrival_not_credited_before_start() {
        let record = make_record("07:30", "17:00");
        let ctx = DayContext::working(matutino_shift());

        let buckets = compute_hours(&record, &ctx, None).unwrap();

        // Worked = 570 - 30 default = 540; anchored at 08:00 the normal
        // window caps at 480 and the excess 60 runs from 17:00 at 50%.
        assert_eq!(buckets.normal, dec(800, 2));
        assert_eq!(buckets.pct50, dec(100, 2));
    }

    /// RS-004: rest day sends everything to the 100% bucket
    #[test]
    fn test_rest_day_override() {
        let record = make_record("09:00", "13:00");
        let ctx = DayContext::rest_day();

        let buckets = compute_hours(&record, &ctx, None).unwrap();

        // 240 - 30 default = 210 minutes = 3.5h
        assert_eq!(buckets.pct100, dec(350, 2));
        assert_eq!(buckets.normal, Decimal::ZERO);
        assert_eq!(buckets.holiday, Decimal::ZERO);
    }

    /// RS-005: rest day wins over holiday
    #[test]
    fn test_rest_day_takes_precedence_over_holiday() {
        let record = make_record("09:00", "13:00");
        let mut ctx = DayContext::rest_day();
        ctx.is_holiday = true;

        let buckets = compute_hours(&record, &ctx, None).unwrap();

        assert_eq!(buckets.pct100, dec(350, 2));
        assert_eq!(buckets.holiday, Decimal::ZERO);
    }

    /// RS-006: holiday sends everything to the holiday bucket
    #[test]
    fn test_holiday_override() {
        let record = make_record("08:00", "17:00");
        let mut ctx = DayContext::working(matutino_shift());
        ctx.is_holiday = true;

        let buckets = compute_hours(&record, &ctx, None).unwrap();

        // 540 - 30 default = 510 minutes = 8.5h, all holiday.
        assert_eq!(buckets.holiday, dec(850, 2));
        assert_eq!(buckets.normal, Decimal::ZERO);
        assert_eq!(buckets.pct50, Decimal::ZERO);
    }

    /// RS-007: overnight record with an unchanged schedule does not split
    #[test]
    fn test_overnight_same_shift_uses_wraparound() {
        let mut record = make_record("22:00", "06:00");
        record.exit_date = Some(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());

        let entry_ctx = DayContext::working(vespertino_shift());
        let exit_ctx = DayContext::working(vespertino_shift());

        let buckets = compute_hours(&record, &entry_ctx, Some(&exit_ctx)).unwrap();

        // 480 - 30 default = 450 worked from anchor 22:00: the 50% window
        // (22:00-24:00) takes 120, the rest crosses midnight at 100%.
        assert_eq!(buckets.pct50, dec(200, 2));
        assert_eq!(buckets.pct100, dec(550, 2));
        assert_eq!(buckets.normal, Decimal::ZERO);
    }

    /// RS-008: midnight shift change splits the record in two
    #[test]
    fn test_cross_midnight_shift_change_splits() {
        let mut record = make_record("22:00", "02:00");
        record.exit_date = Some(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());

        let entry_ctx = DayContext::working(vespertino_shift());
        let exit_ctx = DayContext::working(matutino_shift());

        let buckets = compute_hours(&record, &entry_ctx, Some(&exit_ctx)).unwrap();

        // First segment 22:00-23:59 gross 119 minus the 30 default = 89
        // minutes, all inside the vespertino 50% window -> 1.48h.
        // Second segment 00:00-02:00 = 120 minutes anchored at the
        // matutino programmed start -> 2.00h normal.
        assert_eq!(buckets.pct50, dec(148, 2));
        assert_eq!(buckets.normal, dec(200, 2));
        assert_eq!(buckets.pct100, Decimal::ZERO);
        assert_eq!(buckets.total(), dec(348, 2));
    }

    /// RS-009: split without an exit-day shift is an error
    #[test]
    fn test_split_requires_exit_day_shift() {
        let mut record = make_record("22:00", "02:00");
        record.exit_date = Some(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());

        let entry_ctx = DayContext::working(vespertino_shift());
        let exit_ctx = DayContext::rest_day();

        let err = compute_hours(&record, &entry_ctx, Some(&exit_ctx)).unwrap_err();
        assert!(matches!(err, EngineError::MissingSchedule { .. }));
    }

    /// RS-010: missing entry time aborts the record
    #[test]
    fn test_missing_entry_time_is_invalid() {
        let mut record = make_record("08:00", "17:00");
        record.entry_time = None;

        let ctx = DayContext::working(matutino_shift());
        let err = compute_hours(&record, &ctx, None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTimeFormat { .. }));
    }

    /// RS-011: malformed exit time aborts the record
    #[test]
    fn test_malformed_exit_time_is_invalid() {
        let mut record = make_record("08:00", "5pm");
        let ctx = DayContext::working(matutino_shift());
        let err = compute_hours(&record, &ctx, None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTimeFormat { .. }));
    }

    /// RS-012: standard path without a shift is an error
    #[test]
    fn test_standard_path_without_shift_is_missing_schedule() {
        let record = make_record("08:00", "17:00");
        let ctx = DayContext::default();
        let err = compute_hours(&record, &ctx, None).unwrap_err();
        assert!(matches!(err, EngineError::MissingSchedule { .. }));
    }

    /// RS-013: computation is pure and repeatable
    #[test]
    fn test_compute_hours_is_idempotent() {
        let record = make_record("08:10", "20:00");
        let ctx = DayContext::working(matutino_shift());

        let first = compute_hours(&record, &ctx, None).unwrap();
        let second = compute_hours(&record, &ctx, None).unwrap();
        assert_eq!(first, second);
    }

    // =========================================================================
    // compute_hours_full: administrative carve-out
    // =========================================================================

    /// RS-020: administrative staff without the overtime option
    #[test]
    fn test_administrative_without_overtime_all_normal() {
        let record = make_record("08:00", "19:00");
        let ctx = DayContext::working(matutino_shift());
        let employee = EmployeeContext::administrative(Some("Talento Humano".to_string()));

        let buckets = compute_hours_full(
            &record,
            &ctx,
            None,
            &employee,
            &RecomputeOptions::default(),
        )
        .unwrap();

        // 660 - 30 default = 630 minutes, all normal: no overtime for the
        // administrative path when the option is off.
        assert_eq!(buckets.normal, dec(1050, 2));
        assert_eq!(buckets.pct50, Decimal::ZERO);
    }

    /// RS-021: administrative staff with the overtime option
    #[test]
    fn test_administrative_with_overtime_splits_at_8h() {
        let record = make_record("08:00", "19:00");
        let ctx = DayContext::working(matutino_shift());
        let employee = EmployeeContext::administrative(None);
        let options = RecomputeOptions {
            apply_administrative_overtime: true,
        };

        let buckets = compute_hours_full(&record, &ctx, None, &employee, &options).unwrap();

        // 630 worked minutes: 480 normal, 150 at 50%, never 100%.
        assert_eq!(buckets.normal, dec(800, 2));
        assert_eq!(buckets.pct50, dec(250, 2));
        assert_eq!(buckets.pct100, Decimal::ZERO);
    }

    /// RS-022: no shift resolved and not administrative -> all normal
    #[test]
    fn test_unscheduled_regular_employee_all_normal() {
        let record = make_record("09:00", "13:00");
        let ctx = DayContext::default();
        let options = RecomputeOptions {
            apply_administrative_overtime: true,
        };

        let buckets =
            compute_hours_full(&record, &ctx, None, &EmployeeContext::regular(), &options)
                .unwrap();

        // The overtime option only applies to flagged staff.
        assert_eq!(buckets.normal, dec(350, 2));
        assert_eq!(buckets.pct50, Decimal::ZERO);
    }

    /// RS-023: administrative rest day still goes to the 100% bucket
    #[test]
    fn test_administrative_rest_day_override() {
        let record = make_record("09:00", "13:00");
        let ctx = DayContext::rest_day();
        let employee = EmployeeContext::administrative(None);
        let options = RecomputeOptions {
            apply_administrative_overtime: true,
        };

        let buckets = compute_hours_full(&record, &ctx, None, &employee, &options).unwrap();
        assert_eq!(buckets.pct100, dec(350, 2));
        assert_eq!(buckets.normal, Decimal::ZERO);
    }

    /// RS-024: administrative holiday goes to the holiday bucket
    #[test]
    fn test_administrative_holiday_override() {
        let record = make_record("09:00", "13:00");
        let mut ctx = DayContext::working(matutino_shift());
        ctx.is_holiday = true;
        let employee = EmployeeContext::administrative(None);

        let buckets = compute_hours_full(
            &record,
            &ctx,
            None,
            &employee,
            &RecomputeOptions::default(),
        )
        .unwrap();
        assert_eq!(buckets.holiday, dec(350, 2));
    }

    /// RS-025: scheduled regular staff falls through to the standard path
    #[test]
    fn test_full_entry_defers_to_standard_path() {
        let mut record = make_record("08:00", "17:00");
        record.lunch_start = Some("12:00".to_string());
        record.lunch_end = Some("13:00".to_string());
        let ctx = DayContext::working(matutino_shift());

        let full = compute_hours_full(
            &record,
            &ctx,
            None,
            &EmployeeContext::regular(),
            &RecomputeOptions::default(),
        )
        .unwrap();
        let standard = compute_hours(&record, &ctx, None).unwrap();
        assert_eq!(full, standard);
    }

    /// RS-026: mixto shift surfaces the unsupported-type error
    #[test]
    fn test_mixto_shift_is_rejected() {
        let record = make_record("08:00", "17:00");
        let shift = Shift {
            id: "shift_mix".to_string(),
            name: "Jornada mixta".to_string(),
            start_time: "10:00".to_string(),
            end_time: "19:00".to_string(),
            shift_type: ShiftType::Mixto,
        };
        let ctx = DayContext::working(shift);

        let err = compute_hours(&record, &ctx, None).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedShiftType { .. }));
    }
}
