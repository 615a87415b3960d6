//! Interval overlap predicate and conflict scans.
//!
//! One predicate, two call sites (visitor scope and room scope), so the
//! boundary behavior cannot drift between them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use portaria_store::model::Appointment;
use portaria_store::store::AppointmentStore;

use crate::error::ServiceResult;

/// ## Summary
/// Whether an existing appointment's interval conflicts with the candidate
/// range `[start, end)`.
///
/// The three-way disjunction is deliberate and load-bearing:
/// - existing covers the candidate start,
/// - existing covers the candidate end,
/// - existing sits fully inside the candidate.
///
/// Back-to-back intervals (existing ends exactly at `start`, or starts
/// exactly at `end`) satisfy none of the three and do not conflict.
#[must_use]
pub fn overlaps(existing: &Appointment, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    (existing.starts_at <= start && existing.ends_at > start)
        || (existing.starts_at < end && existing.ends_at >= end)
        || (existing.starts_at >= start && existing.ends_at <= end)
}

/// ## Summary
/// Active, slot-occupying appointments of one visitor, in any room, that
/// conflict with the candidate range. `exclude` skips one appointment id so
/// an edit does not conflict with itself.
///
/// ## Errors
/// Propagates store faults.
pub async fn conflicts_for_visitor<S: AppointmentStore>(
    store: &S,
    visitor_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude: Option<Uuid>,
) -> ServiceResult<Vec<Appointment>> {
    let appointments = store.appointments_for_visitor(visitor_id).await?;
    Ok(filter_conflicts(appointments, start, end, exclude))
}

/// ## Summary
/// Active, slot-occupying appointments in one room that conflict with the
/// candidate range. Used as a capacity count, not an exclusion.
///
/// ## Errors
/// Propagates store faults.
pub async fn conflicts_for_room<S: AppointmentStore>(
    store: &S,
    room_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude: Option<Uuid>,
) -> ServiceResult<Vec<Appointment>> {
    let appointments = store.appointments_for_room(room_id).await?;
    Ok(filter_conflicts(appointments, start, end, exclude))
}

fn filter_conflicts(
    appointments: Vec<Appointment>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude: Option<Uuid>,
) -> Vec<Appointment> {
    appointments
        .into_iter()
        .filter(|a| exclude != Some(a.id))
        .filter(Appointment::occupies_slot)
        .filter(|a| overlaps(a, start, end))
        .collect()
}
