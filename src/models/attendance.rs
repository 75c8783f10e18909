//! Attendance record model and hour buckets.
//!
//! The [`AttendanceRecord`] is the unit of work for the engine: a raw
//! clock-in/clock-out capture with up to three meal-break intervals. The
//! engine never mutates a record in place; computed hours come back as an
//! [`HourBuckets`] value that the caller persists.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw attendance capture for one employee and one working day.
///
/// Time-of-day fields stay in the store's wire format (`"HH:MM"` or
/// `"HH:MM:SS"`); parsing them, and failing on malformed values, is the
/// engine's job. A record created by the entry-registration flow has no
/// exit fields yet; such records are skipped by the batch recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date the employee clocked in.
    pub entry_date: NaiveDate,
    /// Clock-in time of day.
    pub entry_time: Option<String>,
    /// The calendar date the employee clocked out (may be the day after
    /// `entry_date` for overnight work).
    pub exit_date: Option<NaiveDate>,
    /// Clock-out time of day.
    pub exit_time: Option<String>,
    /// Breakfast break start.
    pub breakfast_start: Option<String>,
    /// Breakfast break end.
    pub breakfast_end: Option<String>,
    /// Lunch break start.
    pub lunch_start: Option<String>,
    /// Lunch break end.
    pub lunch_end: Option<String>,
    /// Snack break start.
    pub snack_start: Option<String>,
    /// Snack break end.
    pub snack_end: Option<String>,
    /// The last persisted bucket computation, if any.
    #[serde(default)]
    pub hours: Option<HourBuckets>,
}

impl AttendanceRecord {
    /// Returns the date the record's exit belongs to, defaulting to the
    /// entry date when the exit date was not captured separately.
    pub fn effective_exit_date(&self) -> NaiveDate {
        self.exit_date.unwrap_or(self.entry_date)
    }

    /// True when the record spans two calendar days.
    pub fn crosses_midnight(&self) -> bool {
        self.effective_exit_date() != self.entry_date
    }
}

/// The five pay-rate hour buckets produced by a computation.
///
/// Each bucket is in hours, rounded to 2 decimal places independently.
/// Serialized field names keep the store's column names.
///
/// # Example
///
/// ```
/// use attendance_engine::models::HourBuckets;
/// use rust_decimal::Decimal;
///
/// let buckets = HourBuckets {
///     normal: Decimal::new(800, 2),  // 8.00
///     pct25: Decimal::ZERO,
///     pct50: Decimal::new(333, 2),   // 3.33
///     pct100: Decimal::ZERO,
///     holiday: Decimal::ZERO,
/// };
/// assert_eq!(buckets.total(), Decimal::new(1133, 2)); // 11.33
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBuckets {
    /// Hours at the normal rate.
    #[serde(rename = "horas_normales")]
    pub normal: Decimal,
    /// Hours at the 25% surcharge rate.
    #[serde(rename = "horas_25")]
    pub pct25: Decimal,
    /// Hours at the 50% surcharge rate.
    #[serde(rename = "horas_50")]
    pub pct50: Decimal,
    /// Hours at the 100% surcharge rate.
    #[serde(rename = "horas_100")]
    pub pct100: Decimal,
    /// Hours at the holiday rate.
    #[serde(rename = "horas_feriado")]
    pub holiday: Decimal,
}

impl HourBuckets {
    /// An all-zero bucket set.
    pub fn zero() -> Self {
        Self {
            normal: Decimal::ZERO,
            pct25: Decimal::ZERO,
            pct50: Decimal::ZERO,
            pct100: Decimal::ZERO,
            holiday: Decimal::ZERO,
        }
    }

    /// The derived total: the sum of the five already-rounded buckets.
    ///
    /// The buckets are rounded individually when produced; the total is
    /// their plain sum and is never re-rounded.
    pub fn total(&self) -> Decimal {
        self.normal + self.pct25 + self.pct50 + self.pct100 + self.holiday
    }

    /// Bucket-wise sum of two computations (used when a record is split
    /// at midnight and each half is apportioned separately).
    pub fn combine(&self, other: &HourBuckets) -> HourBuckets {
        HourBuckets {
            normal: self.normal + other.normal,
            pct25: self.pct25 + other.pct25,
            pct50: self.pct50 + other.pct50,
            pct100: self.pct100 + other.pct100,
            holiday: self.holiday + other.holiday,
        }
    }
}
