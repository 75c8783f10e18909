//! Calendar holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar date marked as a holiday.
///
/// Presence of a holiday on a record's date overrides all rate buckets:
/// every worked hour goes to the holiday bucket.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 5, 24).unwrap(),
///     name: "Batalla de Pichincha".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday date.
    pub date: NaiveDate,
    /// The holiday name.
    pub name: String,
}
