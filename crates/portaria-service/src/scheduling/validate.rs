//! Pass/fail validation of a prospective appointment.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use portaria_core::error::CoreResult;
use portaria_core::util::wallclock::parse_wall_clock;
use portaria_store::store::{AppointmentStore, HolidayStore, RoomStore};

use crate::error::ServiceResult;
use crate::scheduling::holiday::holiday_on;
use crate::scheduling::overlap::{conflicts_for_room, conflicts_for_visitor};

/// A prospective appointment to validate.
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    pub room_id: Uuid,
    pub visitor_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// Set when revalidating an edit, so the appointment does not conflict
    /// with itself.
    pub exclude_appointment_id: Option<Uuid>,
}

impl ValidationRequest {
    /// ## Summary
    /// Builds a request from wall-clock datetime strings, the shape callers
    /// hand over the wire.
    ///
    /// ## Errors
    /// Returns the core invalid-date/time error on malformed input; this is
    /// a request-level failure, not a business rejection.
    pub fn from_wall_clock(
        room_id: Uuid,
        visitor_id: Uuid,
        starts_at: &str,
        ends_at: &str,
        exclude_appointment_id: Option<Uuid>,
    ) -> CoreResult<Self> {
        Ok(Self {
            room_id,
            visitor_id,
            starts_at: parse_wall_clock(starts_at)?,
            ends_at: parse_wall_clock(ends_at)?,
            exclude_appointment_id,
        })
    }
}

/// Machine-discriminable rejection reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    RoomNotFound,
    Holiday,
    VisitorConflict,
    RoomFull,
}

/// Outcome of [`validate`]. A rejection is a value, never an error.
#[derive(Debug, Clone, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
    /// Name of the room holding the visitor's conflicting appointment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_room: Option<String>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: "Appointment is valid".to_owned(),
            reason: None,
            conflicting_room: None,
        }
    }

    fn rejected(reason: RejectionReason, message: String) -> Self {
        Self {
            valid: false,
            message,
            reason: Some(reason),
            conflicting_room: None,
        }
    }
}

/// ## Summary
/// Validates a prospective appointment, short-circuiting on the first
/// failing rule: room exists and is active, start date is not a holiday,
/// the visitor has no overlapping appointment in any room, and the room
/// still has capacity for the range.
///
/// Pure read/decide; nothing is written.
///
/// ## Errors
/// Propagates store faults. Business rejections are carried in the
/// returned [`Validation`].
pub async fn validate<S>(store: &S, request: &ValidationRequest) -> ServiceResult<Validation>
where
    S: RoomStore + HolidayStore + AppointmentStore,
{
    let room = match store.room_by_id(request.room_id).await? {
        Some(room) if room.active => room,
        _ => {
            return Ok(Validation::rejected(
                RejectionReason::RoomNotFound,
                "Room not found".to_owned(),
            ));
        }
    };

    if let Some(holiday) = holiday_on(store, request.starts_at.date_naive()).await? {
        return Ok(Validation::rejected(
            RejectionReason::Holiday,
            format!("Holiday: {}", holiday.description),
        ));
    }

    let visitor_conflicts = conflicts_for_visitor(
        store,
        request.visitor_id,
        request.starts_at,
        request.ends_at,
        request.exclude_appointment_id,
    )
    .await?;

    if let Some(first) = visitor_conflicts.first() {
        let conflicting_room = store
            .room_by_id(first.room_id)
            .await?
            .map_or_else(|| "unknown".to_owned(), |r| r.name);
        tracing::debug!(
            visitor_id = %request.visitor_id,
            conflict_count = visitor_conflicts.len(),
            room = %conflicting_room,
            "visitor already booked in the requested range"
        );
        return Ok(Validation {
            valid: false,
            message: format!(
                "Visitor already has an appointment in this time range ({conflicting_room})"
            ),
            reason: Some(RejectionReason::VisitorConflict),
            conflicting_room: Some(conflicting_room),
        });
    }

    let room_conflicts = conflicts_for_room(
        store,
        request.room_id,
        request.starts_at,
        request.ends_at,
        request.exclude_appointment_id,
    )
    .await?;

    let occupied = u32::try_from(room_conflicts.len()).unwrap_or(u32::MAX);
    if occupied >= room.effective_capacity(request.starts_at.date_naive()) {
        return Ok(Validation::rejected(
            RejectionReason::RoomFull,
            "Room has no capacity left for this time range".to_owned(),
        ));
    }

    Ok(Validation::ok())
}
