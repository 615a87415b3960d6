//! Appointment booking: validate-then-write.
//!
//! The validate and write steps are not serialized against concurrent
//! callers; two requests can both pass validation for the last slot before
//! either writes. Closing that race belongs to the storage layer (a
//! uniqueness or capacity constraint), not to this service.

use serde::Serialize;
use uuid::Uuid;

use portaria_store::model::{Appointment, AppointmentStatus};
use portaria_store::store::{AppointmentStore, HolidayStore, RoomStore};

use crate::error::{ServiceError, ServiceResult};
use crate::scheduling::validate::{Validation, ValidationRequest, validate};

/// Outcome of a create or reschedule call. A failed validation is a normal
/// outcome, not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingOutcome {
    Booked { appointment: Appointment },
    Rejected { validation: Validation },
}

/// ## Summary
/// Validates and creates a pending appointment.
///
/// ## Errors
/// Propagates store faults; business rejections come back as
/// [`BookingOutcome::Rejected`].
pub async fn create<S>(store: &S, request: &ValidationRequest) -> ServiceResult<BookingOutcome>
where
    S: RoomStore + HolidayStore + AppointmentStore,
{
    let validation = validate(store, request).await?;
    if !validation.valid {
        return Ok(BookingOutcome::Rejected { validation });
    }

    let appointment = Appointment {
        id: Uuid::new_v4(),
        visitor_id: request.visitor_id,
        room_id: request.room_id,
        starts_at: request.starts_at,
        ends_at: request.ends_at,
        status: AppointmentStatus::Pending,
        active: true,
    };
    store.insert_appointment(appointment.clone()).await?;

    tracing::info!(
        appointment_id = %appointment.id,
        room_id = %appointment.room_id,
        visitor_id = %appointment.visitor_id,
        starts_at = %appointment.starts_at,
        "appointment created"
    );

    Ok(BookingOutcome::Booked { appointment })
}

/// ## Summary
/// Moves an existing appointment to a new room/visitor/range after
/// revalidating with the appointment itself excluded from conflict checks.
///
/// ## Errors
/// `NotFound` if the appointment does not exist; store faults propagate.
pub async fn reschedule<S>(
    store: &S,
    appointment_id: Uuid,
    request: &ValidationRequest,
) -> ServiceResult<BookingOutcome>
where
    S: RoomStore + HolidayStore + AppointmentStore,
{
    let Some(existing) = store.appointment_by_id(appointment_id).await? else {
        return Err(ServiceError::NotFound(format!("appointment {appointment_id}")));
    };

    let revalidation = ValidationRequest {
        exclude_appointment_id: Some(appointment_id),
        ..request.clone()
    };
    let validation = validate(store, &revalidation).await?;
    if !validation.valid {
        return Ok(BookingOutcome::Rejected { validation });
    }

    let updated = Appointment {
        visitor_id: request.visitor_id,
        room_id: request.room_id,
        starts_at: request.starts_at,
        ends_at: request.ends_at,
        ..existing
    };
    store.update_appointment(updated.clone()).await?;

    tracing::info!(appointment_id = %updated.id, "appointment rescheduled");

    Ok(BookingOutcome::Booked { appointment: updated })
}

/// ## Summary
/// Cancels an appointment by status change. The record stays active; soft
/// delete is independent of cancellation.
///
/// ## Errors
/// `NotFound` if the appointment does not exist; store faults propagate.
pub async fn cancel<S: AppointmentStore>(
    store: &S,
    appointment_id: Uuid,
) -> ServiceResult<Appointment> {
    let Some(mut appointment) = store.appointment_by_id(appointment_id).await? else {
        return Err(ServiceError::NotFound(format!("appointment {appointment_id}")));
    };

    appointment.status = AppointmentStatus::Cancelled;
    store.update_appointment(appointment.clone()).await?;

    tracing::info!(appointment_id = %appointment.id, "appointment cancelled");

    Ok(appointment)
}
