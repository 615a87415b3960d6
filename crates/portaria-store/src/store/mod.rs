//! Abstract data access for the scheduling services.
//!
//! Rooms, holidays, and visitors are administered elsewhere; the core only
//! reads them. Appointments and access records are the two collections the
//! services write. Every method returns a [`StoreResult`] so infrastructure
//! faults propagate unmodified.

// AFIT without an explicit Send bound: services stay generic over the
// concrete store, they never box these futures.
#![allow(async_fn_in_trait)]

pub mod memory;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::model::{AccessRecord, Appointment, Holiday, Room, Visitor};

/// Read access to the room registry.
pub trait RoomStore: Send + Sync {
    async fn room_by_id(&self, id: Uuid) -> StoreResult<Option<Room>>;

    /// Active rooms, ordered by name.
    async fn active_rooms(&self) -> StoreResult<Vec<Room>>;
}

/// Read access to the holiday calendar.
pub trait HolidayStore: Send + Sync {
    /// First active holiday on the date, if any.
    async fn active_holiday_on(&self, date: NaiveDate) -> StoreResult<Option<Holiday>>;
}

/// Read access to the visitor registry.
pub trait VisitorStore: Send + Sync {
    async fn visitor_by_id(&self, id: Uuid) -> StoreResult<Option<Visitor>>;
}

/// Appointment reads and writes.
///
/// List methods return active (non-soft-deleted) records only; status
/// filtering stays in the service layer so the occupancy rule lives in one
/// place.
pub trait AppointmentStore: Send + Sync {
    async fn insert_appointment(&self, appointment: Appointment) -> StoreResult<()>;

    /// ## Errors
    /// `RecordNotFound` if no appointment with the given id exists.
    async fn update_appointment(&self, appointment: Appointment) -> StoreResult<()>;

    async fn appointment_by_id(&self, id: Uuid) -> StoreResult<Option<Appointment>>;

    /// Active appointments, most recent start first.
    async fn active_appointments(&self) -> StoreResult<Vec<Appointment>>;

    /// Active appointments for one visitor, any room, most recent first.
    async fn appointments_for_visitor(&self, visitor_id: Uuid) -> StoreResult<Vec<Appointment>>;

    /// Active appointments in one room, most recent first.
    async fn appointments_for_room(&self, room_id: Uuid) -> StoreResult<Vec<Appointment>>;

    /// Active appointments in one room starting on the given calendar date,
    /// chronological.
    async fn appointments_for_room_on(
        &self,
        room_id: Uuid,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>>;

    /// Active appointments starting inside the optional range, both bounds
    /// inclusive, chronological.
    async fn appointments_between(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> StoreResult<Vec<Appointment>>;

    /// Active pending appointments, chronological.
    async fn pending_appointments(&self) -> StoreResult<Vec<Appointment>>;
}

/// Entry/exit record reads and writes.
pub trait AccessStore: Send + Sync {
    async fn insert_access(&self, record: AccessRecord) -> StoreResult<()>;

    /// ## Errors
    /// `RecordNotFound` if no record with the given id exists.
    async fn update_access(&self, record: AccessRecord) -> StoreResult<()>;

    async fn access_by_id(&self, id: Uuid) -> StoreResult<Option<AccessRecord>>;

    /// The visitor's open record (inside the building), if any.
    async fn open_access_for_visitor(&self, visitor_id: Uuid)
    -> StoreResult<Option<AccessRecord>>;

    /// All open records, most recent entry first.
    async fn open_accesses(&self) -> StoreResult<Vec<AccessRecord>>;

    /// Active records for one visitor, most recent entry first.
    async fn accesses_for_visitor(&self, visitor_id: Uuid) -> StoreResult<Vec<AccessRecord>>;

    /// Active records for one room, most recent entry first.
    async fn accesses_for_room(&self, room_id: Uuid) -> StoreResult<Vec<AccessRecord>>;

    /// Active records with entry inside the (inclusive optional) range,
    /// most recent first.
    async fn accesses_between(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> StoreResult<Vec<AccessRecord>>;

    /// First active record tied to an appointment, if any.
    async fn access_for_appointment(
        &self,
        appointment_id: Uuid,
    ) -> StoreResult<Option<AccessRecord>>;
}
