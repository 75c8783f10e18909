//! In-memory attendance store.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, Holiday, HourBuckets, ScheduleEntry, ScheduleResolution, Shift,
};

use super::AttendanceStore;

/// A thread-safe in-memory [`AttendanceStore`].
///
/// Backs the bundled HTTP surface and the test suites. Schedule entries
/// keep their insertion order, so two entries sharing an effective date
/// resolve to the one inserted last, matching the versioned-by-creation
/// semantics of the backing system.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, AttendanceRecord>>,
    shifts: RwLock<HashMap<String, Shift>>,
    schedules: RwLock<Vec<ScheduleEntry>>,
    holidays: RwLock<HashMap<NaiveDate, Holiday>>,
    areas: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) an attendance record.
    pub fn insert_record(&self, record: AttendanceRecord) {
        self.records
            .write()
            .expect("records lock poisoned")
            .insert(record.id.clone(), record);
    }

    /// Inserts (or replaces) a shift template.
    pub fn insert_shift(&self, shift: Shift) {
        self.shifts
            .write()
            .expect("shifts lock poisoned")
            .insert(shift.id.clone(), shift);
    }

    /// Appends a schedule entry. Later insertions supersede earlier ones
    /// with the same effective date.
    pub fn insert_schedule(&self, entry: ScheduleEntry) {
        self.schedules
            .write()
            .expect("schedules lock poisoned")
            .push(entry);
    }

    /// Registers a calendar holiday.
    pub fn insert_holiday(&self, holiday: Holiday) {
        self.holidays
            .write()
            .expect("holidays lock poisoned")
            .insert(holiday.date, holiday);
    }

    /// Records the area an employee belongs to.
    pub fn set_employee_area(&self, employee_id: &str, area: &str) {
        self.areas
            .write()
            .expect("areas lock poisoned")
            .insert(employee_id.to_string(), area.to_string());
    }
}

impl AttendanceStore for MemoryStore {
    fn load_record(&self, record_id: &str) -> EngineResult<AttendanceRecord> {
        self.records
            .read()
            .expect("records lock poisoned")
            .get(record_id)
            .cloned()
            .ok_or_else(|| EngineError::RecordNotFound {
                record_id: record_id.to_string(),
            })
    }

    fn save_buckets(&self, record_id: &str, buckets: &HourBuckets) -> EngineResult<()> {
        let mut records = self.records.write().expect("records lock poisoned");
        let record = records
            .get_mut(record_id)
            .ok_or_else(|| EngineError::RecordNotFound {
                record_id: record_id.to_string(),
            })?;
        record.hours = Some(*buckets);
        Ok(())
    }

    fn effective_schedule(&self, employee_id: &str, date: NaiveDate) -> ScheduleResolution {
        let schedules = self.schedules.read().expect("schedules lock poisoned");

        // Latest effective date wins; insertion order breaks ties.
        let mut effective: Option<&ScheduleEntry> = None;
        for entry in schedules.iter() {
            if entry.employee_id != employee_id || entry.effective_date > date {
                continue;
            }
            match effective {
                Some(current) if current.effective_date > entry.effective_date => {}
                _ => effective = Some(entry),
            }
        }

        let Some(entry) = effective else {
            return ScheduleResolution::none();
        };

        if entry.is_rest_day {
            return ScheduleResolution {
                shift: None,
                is_rest_day: true,
            };
        }

        let shift = entry
            .shift_id
            .as_deref()
            .and_then(|id| self.shift_by_id(id));
        ScheduleResolution {
            shift,
            is_rest_day: false,
        }
    }

    fn shift_by_id(&self, shift_id: &str) -> Option<Shift> {
        self.shifts
            .read()
            .expect("shifts lock poisoned")
            .get(shift_id)
            .cloned()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays
            .read()
            .expect("holidays lock poisoned")
            .contains_key(&date)
    }

    fn employee_area(&self, employee_id: &str) -> Option<String> {
        self.areas
            .read()
            .expect("areas lock poisoned")
            .get(employee_id)
            .cloned()
    }
}
