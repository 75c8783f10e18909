//! Employee context for hour computation.
//!
//! The engine does not own employee records; it only needs the resolved
//! area and the administrative flag, prefetched once per batch.

use serde::{Deserialize, Serialize};

/// Resolved employee facts the computation depends on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeContext {
    /// The area the employee is assigned to, if known.
    pub area: Option<String>,
    /// True when the employee is administrative staff (explicit roster
    /// membership or administrative area), selecting the simplified
    /// normal/50% overtime split instead of shift-based bucketing.
    pub is_administrative: bool,
}

impl EmployeeContext {
    /// A context for regular (non-administrative) staff with no area.
    pub fn regular() -> Self {
        Self::default()
    }

    /// A context for administrative staff.
    pub fn administrative(area: Option<String>) -> Self {
        Self {
            area,
            is_administrative: true,
        }
    }
}
