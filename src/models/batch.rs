//! Batch recompute summary models.
//!
//! A batch run never fails as a whole: every record either lands in the
//! processed list with its freshly computed buckets or in the omitted list
//! with the reason it was skipped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::HourBuckets;

/// A record successfully recomputed and persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// The record identifier.
    pub record_id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The buckets that were persisted.
    pub buckets: HourBuckets,
}

/// A record skipped during a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmittedRecord {
    /// The record identifier.
    pub record_id: String,
    /// Why the record was skipped.
    pub reason: String,
}

/// The complete outcome of one batch recompute invocation.
///
/// # Example
///
/// ```
/// use attendance_engine::models::BatchSummary;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let summary = BatchSummary {
///     batch_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: env!("CARGO_PKG_VERSION").to_string(),
///     total: 0,
///     processed: vec![],
///     omitted: vec![],
/// };
/// assert_eq!(summary.processed_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Unique identifier for this batch run.
    pub batch_id: Uuid,
    /// When the batch was run.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that ran the batch.
    pub engine_version: String,
    /// How many records the batch was asked to recompute.
    pub total: usize,
    /// Records recomputed and persisted.
    pub processed: Vec<ProcessedRecord>,
    /// Records skipped, with reasons.
    pub omitted: Vec<OmittedRecord>,
}

impl BatchSummary {
    /// Number of records recomputed and persisted.
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Number of records skipped.
    pub fn omitted_count(&self) -> usize {
        self.omitted.len()
    }
}
