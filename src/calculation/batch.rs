//! Batch recomputation over persisted attendance records.
//!
//! Iterates a set of record ids, resolves each record's calendar and
//! employee context, recomputes its buckets and persists them. Errors are
//! demoted per record: one bad record never aborts the batch.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AdministrativeRoster;
use crate::models::{
    AttendanceRecord, BatchSummary, EmployeeContext, HourBuckets, OmittedRecord, ProcessedRecord,
};
use crate::store::AttendanceStore;

use super::resolver::{compute_hours_full, DayContext, RecomputeOptions};

/// Recomputes the hour buckets for every record in `record_ids`.
///
/// The employee area/administrative context is prefetched once per
/// distinct employee, so adding records for the same employee does not
/// add collaborator lookups. Per record the engine resolves the schedule
/// and holiday flags for the entry date (and the exit date, when the
/// record crosses midnight), runs
/// [`compute_hours_full`](super::compute_hours_full) and persists the
/// result.
///
/// Every failure (a missing record, a malformed time, an unresolvable
/// schedule, a persistence error) lands that record in the omitted list
/// with the error message as its reason. The function itself never fails.
pub fn recompute_batch<S: AttendanceStore>(
    store: &S,
    roster: &AdministrativeRoster,
    record_ids: &[String],
    options: &RecomputeOptions,
) -> BatchSummary {
    let batch_id = Uuid::new_v4();
    info!(
        batch_id = %batch_id,
        total = record_ids.len(),
        apply_administrative_overtime = options.apply_administrative_overtime,
        "Starting batch recompute"
    );

    let mut processed = Vec::new();
    let mut omitted = Vec::new();

    // Load everything up front; load failures are omissions too.
    let mut records = Vec::new();
    for record_id in record_ids {
        match store.load_record(record_id) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(batch_id = %batch_id, record_id = %record_id, error = %err, "Record skipped");
                omitted.push(OmittedRecord {
                    record_id: record_id.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let contexts = prefetch_employee_contexts(store, roster, &records);

    for record in &records {
        let employee = contexts
            .get(record.employee_id.as_str())
            .cloned()
            .unwrap_or_default();

        match recompute_record(store, record, &employee, options) {
            Ok(buckets) => {
                processed.push(ProcessedRecord {
                    record_id: record.id.clone(),
                    employee_id: record.employee_id.clone(),
                    buckets,
                });
            }
            Err(reason) => {
                warn!(batch_id = %batch_id, record_id = %record.id, error = %reason, "Record skipped");
                omitted.push(OmittedRecord {
                    record_id: record.id.clone(),
                    reason,
                });
            }
        }
    }

    info!(
        batch_id = %batch_id,
        processed = processed.len(),
        omitted = omitted.len(),
        "Batch recompute finished"
    );

    BatchSummary {
        batch_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        total: record_ids.len(),
        processed,
        omitted,
    }
}

/// One collaborator round-trip per distinct employee in the batch.
fn prefetch_employee_contexts<S: AttendanceStore>(
    store: &S,
    roster: &AdministrativeRoster,
    records: &[AttendanceRecord],
) -> HashMap<String, EmployeeContext> {
    let mut contexts = HashMap::new();
    for record in records {
        if contexts.contains_key(record.employee_id.as_str()) {
            continue;
        }
        let area = store.employee_area(&record.employee_id);
        let is_administrative = roster.is_administrative(&record.employee_id, area.as_deref());
        contexts.insert(
            record.employee_id.clone(),
            EmployeeContext {
                area,
                is_administrative,
            },
        );
    }
    contexts
}

/// Computes and persists one record. Returns the omission reason on any
/// failure.
fn recompute_record<S: AttendanceStore>(
    store: &S,
    record: &AttendanceRecord,
    employee: &EmployeeContext,
    options: &RecomputeOptions,
) -> Result<HourBuckets, String> {
    let entry_day = DayContext {
        schedule: store.effective_schedule(&record.employee_id, record.entry_date),
        is_holiday: store.is_holiday(record.entry_date),
    };

    let exit_day = if record.crosses_midnight() {
        let exit_date = record.effective_exit_date();
        Some(DayContext {
            schedule: store.effective_schedule(&record.employee_id, exit_date),
            is_holiday: store.is_holiday(exit_date),
        })
    } else {
        None
    };

    let buckets = compute_hours_full(record, &entry_day, exit_day.as_ref(), employee, options)
        .map_err(|err| err.to_string())?;

    store
        .save_buckets(&record.id, &buckets)
        .map_err(|err| err.to_string())?;

    Ok(buckets)
}
