//! Collaborator interfaces to the backing record store.
//!
//! The engine does not own persistence. It consumes a small lookup
//! surface (records, schedules, shifts, holidays, employee areas) and
//! writes back nothing but bucket fields. [`MemoryStore`] is the bundled
//! implementation used by tests and the HTTP surface; production callers
//! adapt their own storage to [`AttendanceStore`].

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, HourBuckets, ScheduleResolution, Shift};

/// The record-store surface the engine computes against.
///
/// All lookups are synchronous; implementations are free to prefetch or
/// cache. Saving buckets for one record must not depend on any other
/// record (last-write-wins is acceptable: recomputation is idempotent
/// given the same inputs).
pub trait AttendanceStore {
    /// Loads an attendance record by id.
    fn load_record(&self, record_id: &str) -> EngineResult<AttendanceRecord>;

    /// Persists the five bucket fields for a record.
    fn save_buckets(&self, record_id: &str, buckets: &HourBuckets) -> EngineResult<()>;

    /// Resolves the employee's schedule effective on `date`: the most
    /// recent entry with an effective date on or before `date` (a
    /// schedule persists forward until superseded). Returns an empty
    /// resolution when the employee has no entry yet.
    fn effective_schedule(&self, employee_id: &str, date: NaiveDate) -> ScheduleResolution;

    /// Looks up a shift template by id.
    fn shift_by_id(&self, shift_id: &str) -> Option<Shift>;

    /// Whether `date` is a calendar holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// The area the employee is assigned to, if known.
    fn employee_area(&self, employee_id: &str) -> Option<String>;
}
