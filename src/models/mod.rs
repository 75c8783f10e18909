//! Core data models for the attendance hours engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod batch;
mod employee;
mod holiday;
mod schedule;
mod shift;

pub use attendance::{AttendanceRecord, HourBuckets};
pub use batch::{BatchSummary, OmittedRecord, ProcessedRecord};
pub use employee::EmployeeContext;
pub use holiday::Holiday;
pub use schedule::{ScheduleEntry, ScheduleResolution};
pub use shift::{Shift, ShiftType};
