//! Attendance Hours Apportionment Engine
//!
//! This crate partitions raw clock-in/clock-out attendance records into
//! pay-rate hour buckets (normal, 25%, 50%, 100%, holiday) following
//! Ecuadorian shift rules: jornada templates (Matutino/Vespertino),
//! rest days, calendar holidays and the administrative-staff carve-out.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
