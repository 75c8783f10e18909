//! Shift (jornada) model and related types.
//!
//! A shift is a named template with a programmed start time, end time and
//! a type tag that selects the surcharge rules applied by the allocator.

use serde::{Deserialize, Serialize};

/// The type tag of a shift, selecting which bucket rules apply.
///
/// The variants mirror the tags stored by the surrounding system, so the
/// serialized forms keep the original casing (`"Matutino"`, `"Vespertino"`,
/// `"mixto"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Morning-anchored shift: normal hours run to the programmed end
    /// (capped at 8h), then 50% up to midnight, then 100%.
    #[serde(rename = "Matutino")]
    Matutino,
    /// Evening-anchored shift: normal hours run to 19:00, 25% to the
    /// programmed end, 50% to midnight, then 100%.
    #[serde(rename = "Vespertino")]
    Vespertino,
    /// Mixed shift. No bucket rules are defined for this tag; the
    /// allocator rejects it with an explicit error.
    #[serde(rename = "mixto")]
    Mixto,
}

impl ShiftType {
    /// Returns the tag exactly as the backing store writes it.
    pub fn tag(&self) -> &'static str {
        match self {
            ShiftType::Matutino => "Matutino",
            ShiftType::Vespertino => "Vespertino",
            ShiftType::Mixto => "mixto",
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A shift template ("jornada") an employee can be scheduled into.
///
/// Immutable reference data: the engine looks shifts up but never mutates
/// them. The programmed times stay in the store's wire format
/// (`"HH:MM"` or `"HH:MM:SS"`) and are parsed at computation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// Human-readable shift name (e.g., "Jornada matutina oficina").
    pub name: String,
    /// Programmed start time of day.
    pub start_time: String,
    /// Programmed end time of day.
    pub end_time: String,
    /// The type tag selecting the bucket rules.
    pub shift_type: ShiftType,
}
