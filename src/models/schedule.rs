//! Employee schedule models.
//!
//! A [`ScheduleEntry`] binds an employee to either a shift or a rest-day
//! flag from a given date onward. Entries persist forward until superseded
//! by a newer entry, so resolution selects the most recent entry with
//! `effective_date <= target`, not only exact-date matches.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Shift;

/// One row of an employee's schedule history.
///
/// Rest day and shift assignment are mutually exclusive: a rest-day entry
/// carries no shift reference. Multiple entries may share an effective
/// date; the one inserted last wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The employee this entry applies to.
    pub employee_id: String,
    /// The first date this entry is effective on.
    pub effective_date: NaiveDate,
    /// The assigned shift, absent for rest-day entries.
    pub shift_id: Option<String>,
    /// True when the entry marks a scheduled non-working day.
    #[serde(default)]
    pub is_rest_day: bool,
}

/// The outcome of resolving an employee's schedule for a target date.
///
/// Produced by the collaborator store; consumed read-only by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleResolution {
    /// The resolved shift, if the effective entry assigns one.
    pub shift: Option<Shift>,
    /// True when the effective entry marks a rest day.
    pub is_rest_day: bool,
}

impl ScheduleResolution {
    /// A resolution with no effective entry at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when neither a shift nor a rest-day flag was resolved.
    pub fn is_empty(&self) -> bool {
        self.shift.is_none() && !self.is_rest_day
    }

    /// True when two resolutions would drive the same computation: same
    /// shift (by id) and same rest-day flag. Used by the cross-midnight
    /// split check.
    pub fn same_assignment(&self, other: &ScheduleResolution) -> bool {
        let self_shift = self.shift.as_ref().map(|s| s.id.as_str());
        let other_shift = other.shift.as_ref().map(|s| s.id.as_str());
        self_shift == other_shift && self.is_rest_day == other.is_rest_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;

    fn make_shift(id: &str) -> Shift {
        Shift {
            id: id.to_string(),
            name: "Jornada matutina".to_string(),
            start_time: "08:00".to_string(),
            end_time: "17:00".to_string(),
            shift_type: ShiftType::Matutino,
        }
    }

    #[test]
    fn test_none_resolution_is_empty() {
        assert!(ScheduleResolution::none().is_empty());
    }

    #[test]
    fn test_rest_day_resolution_is_not_empty() {
        let resolution = ScheduleResolution {
            shift: None,
            is_rest_day: true,
        };
        assert!(!resolution.is_empty());
    }

    #[test]
    fn test_same_assignment_compares_shift_ids() {
        let a = ScheduleResolution {
            shift: Some(make_shift("shift_a")),
            is_rest_day: false,
        };
        let b = ScheduleResolution {
            shift: Some(make_shift("shift_a")),
            is_rest_day: false,
        };
        let c = ScheduleResolution {
            shift: Some(make_shift("shift_b")),
            is_rest_day: false,
        };
        assert!(a.same_assignment(&b));
        assert!(!a.same_assignment(&c));
    }

    #[test]
    fn test_same_assignment_distinguishes_rest_day() {
        let working = ScheduleResolution {
            shift: None,
            is_rest_day: false,
        };
        let resting = ScheduleResolution {
            shift: None,
            is_rest_day: true,
        };
        assert!(!working.same_assignment(&resting));
    }

    #[test]
    fn test_entry_deserialization_defaults_rest_day() {
        let json = r#"{
            "employee_id": "emp_001",
            "effective_date": "2025-03-01",
            "shift_id": "shift_a"
        }"#;
        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_rest_day);
        assert_eq!(entry.shift_id.as_deref(), Some("shift_a"));
    }
}
