//! Request types for the attendance hours engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/recompute` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayContext, RecomputeOptions};
use crate::models::{AttendanceRecord, EmployeeContext, ScheduleResolution, Shift, ShiftType};

/// Request body for the `/calculate` endpoint.
///
/// Self-contained: the record plus its resolved calendar and employee
/// context travel in the payload, so the handler never touches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The attendance record to apportion.
    pub record: AttendanceRecordRequest,
    /// The calendar context for the entry date.
    pub entry_day: DayContextRequest,
    /// The calendar context for the exit date, when the record crosses
    /// midnight.
    #[serde(default)]
    pub exit_day: Option<DayContextRequest>,
    /// The employee context.
    #[serde(default)]
    pub employee: EmployeeContextRequest,
    /// Computation options.
    #[serde(default)]
    pub options: RecomputeOptions,
}

/// Attendance record fields in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date the employee clocked in.
    pub entry_date: NaiveDate,
    /// Clock-in time of day.
    #[serde(default)]
    pub entry_time: Option<String>,
    /// The calendar date the employee clocked out.
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
    /// Clock-out time of day.
    #[serde(default)]
    pub exit_time: Option<String>,
    /// Breakfast break start.
    #[serde(default)]
    pub breakfast_start: Option<String>,
    /// Breakfast break end.
    #[serde(default)]
    pub breakfast_end: Option<String>,
    /// Lunch break start.
    #[serde(default)]
    pub lunch_start: Option<String>,
    /// Lunch break end.
    #[serde(default)]
    pub lunch_end: Option<String>,
    /// Snack break start.
    #[serde(default)]
    pub snack_start: Option<String>,
    /// Snack break end.
    #[serde(default)]
    pub snack_end: Option<String>,
}

/// Calendar context for one date in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayContextRequest {
    /// The shift effective on the date, if any.
    #[serde(default)]
    pub shift: Option<ShiftRequest>,
    /// Whether the date is a scheduled rest day.
    #[serde(default)]
    pub is_rest_day: bool,
    /// Whether the date is a calendar holiday.
    #[serde(default)]
    pub is_holiday: bool,
}

/// Shift information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// Human-readable shift name.
    #[serde(default)]
    pub name: String,
    /// Programmed start time of day.
    pub start_time: String,
    /// Programmed end time of day.
    pub end_time: String,
    /// The shift type tag.
    pub shift_type: ShiftType,
}

/// Employee context in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeContextRequest {
    /// The employee's area, if known.
    #[serde(default)]
    pub area: Option<String>,
    /// Whether the employee is administrative staff.
    #[serde(default)]
    pub is_administrative: bool,
}

/// Request body for the `/recompute` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeRequest {
    /// The attendance records to recompute.
    pub record_ids: Vec<String>,
    /// Computation options.
    #[serde(default)]
    pub options: RecomputeOptions,
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            id: req.id,
            employee_id: req.employee_id,
            entry_date: req.entry_date,
            entry_time: req.entry_time,
            exit_date: req.exit_date,
            exit_time: req.exit_time,
            breakfast_start: req.breakfast_start,
            breakfast_end: req.breakfast_end,
            lunch_start: req.lunch_start,
            lunch_end: req.lunch_end,
            snack_start: req.snack_start,
            snack_end: req.snack_end,
            hours: None,
        }
    }
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        Shift {
            id: req.id,
            name: req.name,
            start_time: req.start_time,
            end_time: req.end_time,
            shift_type: req.shift_type,
        }
    }
}

impl From<DayContextRequest> for DayContext {
    fn from(req: DayContextRequest) -> Self {
        DayContext {
            schedule: ScheduleResolution {
                shift: req.shift.map(Into::into),
                is_rest_day: req.is_rest_day,
            },
            is_holiday: req.is_holiday,
        }
    }
}

impl From<EmployeeContextRequest> for EmployeeContext {
    fn from(req: EmployeeContextRequest) -> Self {
        EmployeeContext {
            area: req.area,
            is_administrative: req.is_administrative,
        }
    }
}
