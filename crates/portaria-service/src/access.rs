//! Physical entry/exit logging.
//!
//! The access log is the external driver of appointment status: a check-in
//! tied to an appointment moves it Pending -> InProgress, the matching
//! check-out moves it InProgress -> Finished.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use portaria_core::clock::Clock;
use portaria_store::model::{AccessRecord, AppointmentStatus};
use portaria_store::store::{AccessStore, AppointmentStore};

use crate::error::{ServiceError, ServiceResult};

/// A visitor arriving at the door.
#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub visitor_id: Uuid,
    pub room_id: Uuid,
    /// The booking being fulfilled; `None` for standalone walk-ins.
    pub appointment_id: Option<Uuid>,
    /// Defaults to the clock's now.
    pub entered_at: Option<DateTime<Utc>>,
}

/// Outcome of a check-in. Being already inside is a business rejection, not
/// an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckInOutcome {
    Entered { record: AccessRecord },
    AlreadyInside { open_record: AccessRecord },
}

/// ## Summary
/// Registers a visitor's entry. Rejected when the visitor already has an
/// open access record. When the entry fulfils a pending appointment, the
/// appointment moves to in-progress.
///
/// ## Errors
/// `NotFound` if the referenced appointment does not exist; store faults
/// propagate.
pub async fn check_in<S, C>(
    store: &S,
    clock: &C,
    request: CheckInRequest,
) -> ServiceResult<CheckInOutcome>
where
    S: AccessStore + AppointmentStore,
    C: Clock,
{
    if let Some(open_record) = store.open_access_for_visitor(request.visitor_id).await? {
        tracing::debug!(visitor_id = %request.visitor_id, "check-in rejected: already inside");
        return Ok(CheckInOutcome::AlreadyInside { open_record });
    }

    if let Some(appointment_id) = request.appointment_id {
        let Some(mut appointment) = store.appointment_by_id(appointment_id).await? else {
            return Err(ServiceError::NotFound(format!("appointment {appointment_id}")));
        };
        if appointment.status == AppointmentStatus::Pending {
            appointment.status = AppointmentStatus::InProgress;
            store.update_appointment(appointment).await?;
        }
    }

    let record = AccessRecord {
        id: Uuid::new_v4(),
        visitor_id: request.visitor_id,
        room_id: request.room_id,
        appointment_id: request.appointment_id,
        entered_at: request.entered_at.unwrap_or_else(|| clock.now_utc()),
        exited_at: None,
        active: true,
    };
    store.insert_access(record.clone()).await?;

    tracing::info!(
        access_id = %record.id,
        visitor_id = %record.visitor_id,
        room_id = %record.room_id,
        "visitor checked in"
    );

    Ok(CheckInOutcome::Entered { record })
}

/// ## Summary
/// Stamps a visitor's exit. When the access fulfils an in-progress
/// appointment, the appointment moves to finished.
///
/// ## Errors
/// `NotFound` for an unknown access id, `Conflict` when the record is
/// already closed; store faults propagate.
pub async fn check_out<S, C>(
    store: &S,
    clock: &C,
    access_id: Uuid,
    exited_at: Option<DateTime<Utc>>,
) -> ServiceResult<AccessRecord>
where
    S: AccessStore + AppointmentStore,
    C: Clock,
{
    let Some(mut record) = store.access_by_id(access_id).await? else {
        return Err(ServiceError::NotFound(format!("access {access_id}")));
    };
    if !record.is_open() {
        return Err(ServiceError::Conflict(format!("access {access_id} already closed")));
    }

    record.exited_at = Some(exited_at.unwrap_or_else(|| clock.now_utc()));
    store.update_access(record.clone()).await?;

    if let Some(appointment_id) = record.appointment_id
        && let Some(mut appointment) = store.appointment_by_id(appointment_id).await?
        && appointment.status == AppointmentStatus::InProgress
    {
        appointment.status = AppointmentStatus::Finished;
        store.update_appointment(appointment).await?;
    }

    tracing::info!(access_id = %record.id, visitor_id = %record.visitor_id, "visitor checked out");

    Ok(record)
}
