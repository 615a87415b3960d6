//! In-memory store implementation.
//!
//! Reference implementation of the store traits, used by the app binary
//! (seeded from JSON) and by tests. A `tokio::sync::RwLock` over plain maps
//! is enough: every operation is a bounded read or a single-record write.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::model::{AccessRecord, Appointment, Holiday, Room, Visitor};
use crate::store::{AccessStore, AppointmentStore, HolidayStore, RoomStore, VisitorStore};

#[derive(Debug, Default)]
struct Inner {
    rooms: HashMap<Uuid, Room>,
    // Insertion order decides which holiday wins when data carries
    // duplicates for a date
    holidays: Vec<Holiday>,
    visitors: HashMap<Uuid, Visitor>,
    appointments: HashMap<Uuid, Appointment>,
    accesses: HashMap<Uuid, AccessRecord>,
}

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a room. Registry writes are a seeding/test
    /// concern, so they live on the concrete store rather than the traits.
    pub async fn upsert_room(&self, room: Room) {
        self.inner.write().await.rooms.insert(room.id, room);
    }

    /// Inserts or replaces a holiday.
    pub async fn upsert_holiday(&self, holiday: Holiday) {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.holidays.iter_mut().find(|h| h.id == holiday.id) {
            *existing = holiday;
        } else {
            inner.holidays.push(holiday);
        }
    }

    /// Inserts or replaces a visitor.
    pub async fn upsert_visitor(&self, visitor: Visitor) {
        self.inner.write().await.visitors.insert(visitor.id, visitor);
    }
}

impl RoomStore for MemoryStore {
    async fn room_by_id(&self, id: Uuid) -> StoreResult<Option<Room>> {
        Ok(self.inner.read().await.rooms.get(&id).cloned())
    }

    async fn active_rooms(&self) -> StoreResult<Vec<Room>> {
        let inner = self.inner.read().await;
        let mut rooms: Vec<Room> = inner.rooms.values().filter(|r| r.active).cloned().collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rooms)
    }
}

impl HolidayStore for MemoryStore {
    async fn active_holiday_on(&self, date: NaiveDate) -> StoreResult<Option<Holiday>> {
        let inner = self.inner.read().await;
        Ok(inner
            .holidays
            .iter()
            .find(|h| h.active && h.date == date)
            .cloned())
    }
}

impl VisitorStore for MemoryStore {
    async fn visitor_by_id(&self, id: Uuid) -> StoreResult<Option<Visitor>> {
        Ok(self.inner.read().await.visitors.get(&id).cloned())
    }
}

impl AppointmentStore for MemoryStore {
    async fn insert_appointment(&self, appointment: Appointment) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .appointments
            .insert(appointment.id, appointment);
        Ok(())
    }

    async fn update_appointment(&self, appointment: Appointment) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let Some(slot) = inner.appointments.get_mut(&appointment.id) else {
            return Err(StoreError::RecordNotFound {
                kind: "appointment",
                id: appointment.id,
            });
        };
        *slot = appointment;
        Ok(())
    }

    async fn appointment_by_id(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        Ok(self.inner.read().await.appointments.get(&id).cloned())
    }

    async fn active_appointments(&self) -> StoreResult<Vec<Appointment>> {
        Ok(self.collect_appointments(|_| true, Order::Descending).await)
    }

    async fn appointments_for_visitor(&self, visitor_id: Uuid) -> StoreResult<Vec<Appointment>> {
        Ok(self
            .collect_appointments(|a| a.visitor_id == visitor_id, Order::Descending)
            .await)
    }

    async fn appointments_for_room(&self, room_id: Uuid) -> StoreResult<Vec<Appointment>> {
        Ok(self
            .collect_appointments(|a| a.room_id == room_id, Order::Descending)
            .await)
    }

    async fn appointments_for_room_on(
        &self,
        room_id: Uuid,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>> {
        Ok(self
            .collect_appointments(
                |a| a.room_id == room_id && a.starts_at.date_naive() == date,
                Order::Ascending,
            )
            .await)
    }

    async fn appointments_between(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> StoreResult<Vec<Appointment>> {
        Ok(self
            .collect_appointments(
                |a| {
                    from.is_none_or(|f| a.starts_at >= f) && to.is_none_or(|t| a.starts_at <= t)
                },
                Order::Ascending,
            )
            .await)
    }

    async fn pending_appointments(&self) -> StoreResult<Vec<Appointment>> {
        Ok(self
            .collect_appointments(
                |a| a.status == crate::model::AppointmentStatus::Pending,
                Order::Ascending,
            )
            .await)
    }
}

impl AccessStore for MemoryStore {
    async fn insert_access(&self, record: AccessRecord) -> StoreResult<()> {
        self.inner.write().await.accesses.insert(record.id, record);
        Ok(())
    }

    async fn update_access(&self, record: AccessRecord) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let Some(slot) = inner.accesses.get_mut(&record.id) else {
            return Err(StoreError::RecordNotFound {
                kind: "access",
                id: record.id,
            });
        };
        *slot = record;
        Ok(())
    }

    async fn access_by_id(&self, id: Uuid) -> StoreResult<Option<AccessRecord>> {
        Ok(self.inner.read().await.accesses.get(&id).cloned())
    }

    async fn open_access_for_visitor(
        &self,
        visitor_id: Uuid,
    ) -> StoreResult<Option<AccessRecord>> {
        let inner = self.inner.read().await;
        let mut open: Vec<&AccessRecord> = inner
            .accesses
            .values()
            .filter(|r| r.visitor_id == visitor_id && r.is_open())
            .collect();
        open.sort_by_key(|r| r.entered_at);
        Ok(open.first().map(|r| (*r).clone()))
    }

    async fn open_accesses(&self) -> StoreResult<Vec<AccessRecord>> {
        Ok(self.collect_accesses(AccessRecord::is_open).await)
    }

    async fn accesses_for_visitor(&self, visitor_id: Uuid) -> StoreResult<Vec<AccessRecord>> {
        Ok(self
            .collect_accesses(|r| r.active && r.visitor_id == visitor_id)
            .await)
    }

    async fn accesses_for_room(&self, room_id: Uuid) -> StoreResult<Vec<AccessRecord>> {
        Ok(self
            .collect_accesses(|r| r.active && r.room_id == room_id)
            .await)
    }

    async fn accesses_between(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> StoreResult<Vec<AccessRecord>> {
        Ok(self
            .collect_accesses(|r| {
                r.active
                    && from.is_none_or(|f| r.entered_at >= f)
                    && to.is_none_or(|t| r.entered_at <= t)
            })
            .await)
    }

    async fn access_for_appointment(
        &self,
        appointment_id: Uuid,
    ) -> StoreResult<Option<AccessRecord>> {
        let inner = self.inner.read().await;
        let mut matches: Vec<&AccessRecord> = inner
            .accesses
            .values()
            .filter(|r| r.active && r.appointment_id == Some(appointment_id))
            .collect();
        matches.sort_by_key(|r| r.entered_at);
        Ok(matches.first().map(|r| (*r).clone()))
    }
}

#[derive(Clone, Copy)]
enum Order {
    Ascending,
    Descending,
}

impl MemoryStore {
    async fn collect_appointments<F>(&self, filter: F, order: Order) -> Vec<Appointment>
    where
        F: Fn(&Appointment) -> bool,
    {
        let inner = self.inner.read().await;
        let mut appointments: Vec<Appointment> = inner
            .appointments
            .values()
            .filter(|a| a.active && filter(a))
            .cloned()
            .collect();
        appointments.sort_by_key(|a| a.starts_at);
        if matches!(order, Order::Descending) {
            appointments.reverse();
        }
        appointments
    }

    async fn collect_accesses<F>(&self, filter: F) -> Vec<AccessRecord>
    where
        F: Fn(&AccessRecord) -> bool,
    {
        let inner = self.inner.read().await;
        let mut records: Vec<AccessRecord> =
            inner.accesses.values().filter(|r| filter(r)).cloned().collect();
        records.sort_by_key(|r| std::cmp::Reverse(r.entered_at));
        records
    }
}
