#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]
//! Test helpers: fixture builders over the in-memory store.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use portaria_test::component::model::{
    Appointment, AppointmentStatus, CapacityVariation, Holiday, HolidayKind, Room, TimeWindow,
    Visitor, WeeklySchedule,
};
use portaria_test::component::store::AppointmentStore;
use portaria_test::component::store::memory::MemoryStore;
use portaria_test::component::types::WeekDay;
use portaria_test::component::util::wallclock::parse_wall_clock;

pub fn clock_time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid clock time")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn instant(s: &str) -> DateTime<Utc> {
    parse_wall_clock(s).expect("valid wall-clock string")
}

/// A room with the same window on each listed weekday.
pub struct RoomFixture {
    pub name: &'static str,
    pub capacity: u32,
    pub days: &'static [WeekDay],
    pub open: (u32, u32),
    pub close: (u32, u32),
}

impl RoomFixture {
    pub async fn seed(self, store: &MemoryStore) -> Room {
        let mut schedule = WeeklySchedule::new();
        let window = TimeWindow::new(
            clock_time(self.open.0, self.open.1),
            clock_time(self.close.0, self.close.1),
        )
        .expect("valid window");
        for &day in self.days {
            schedule.add_window(day, window).expect("disjoint windows");
        }
        let room = Room {
            id: Uuid::new_v4(),
            name: self.name.to_owned(),
            capacity: self.capacity,
            capacity_variation: CapacityVariation::Day,
            schedule,
            active: true,
        };
        store.upsert_room(room.clone()).await;
        room
    }
}

pub async fn seed_holiday(store: &MemoryStore, on: NaiveDate, description: &str) -> Holiday {
    let holiday = Holiday {
        id: Uuid::new_v4(),
        date: on,
        description: description.to_owned(),
        kind: HolidayKind::National,
        active: true,
    };
    store.upsert_holiday(holiday.clone()).await;
    holiday
}

pub async fn seed_visitor(store: &MemoryStore, name: &str) -> Visitor {
    let visitor = Visitor {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        birth_date: date(1990, 1, 1),
        has_disability: false,
        priority_tier: 1,
        active: true,
    };
    store.upsert_visitor(visitor.clone()).await;
    visitor
}

pub async fn seed_appointment(
    store: &MemoryStore,
    room: &Room,
    visitor_id: Uuid,
    start: &str,
    end: &str,
    status: AppointmentStatus,
) -> Appointment {
    let appointment = Appointment {
        id: Uuid::new_v4(),
        visitor_id,
        room_id: room.id,
        starts_at: instant(start),
        ends_at: instant(end),
        status,
        active: true,
    };
    store
        .insert_appointment(appointment.clone())
        .await
        .expect("insert appointment");
    appointment
}
