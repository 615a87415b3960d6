#![allow(clippy::wildcard_imports, clippy::expect_used)]
//! End-to-end booking lifecycle: book, enter, leave, and the slot
//! accounting along the way.

use portaria_test::app::seed::{SeedDocument, apply_seed};
use portaria_test::component::access::{CheckInOutcome, CheckInRequest, check_in, check_out};
use portaria_test::component::booking::{self, BookingOutcome};
use portaria_test::component::clock::FixedClock;
use portaria_test::component::model::AppointmentStatus;
use portaria_test::component::priority::classify;
use portaria_test::component::scheduling::SchedulerSettings;
use portaria_test::component::scheduling::slots::available_slots;
use portaria_test::component::scheduling::validate::ValidationRequest;
use portaria_test::component::store::memory::MemoryStore;
use portaria_test::component::store::{AppointmentStore, VisitorStore};
use portaria_test::component::types::WeekDay;
use uuid::Uuid;

use super::helpers::*;

fn one_room() -> RoomFixture {
    RoomFixture {
        name: "Sala 1",
        capacity: 1,
        days: &[WeekDay::Monday],
        open: (8, 0),
        close: (12, 0),
    }
}

fn clock() -> FixedClock {
    FixedClock(instant("2025-06-02T10:02"))
}

async fn book(
    store: &MemoryStore,
    room_id: Uuid,
    visitor_id: Uuid,
    start: &str,
    end: &str,
) -> BookingOutcome {
    let request = ValidationRequest::from_wall_clock(room_id, visitor_id, start, end, None)
        .expect("valid request");
    booking::create(store, &request).await.expect("booking call")
}

/// The whole arc: a booking takes the slot's only vacancy, the visitor
/// checks in and out, and the finished appointment releases the slot.
#[test_log::test(tokio::test)]
async fn booking_checkin_checkout_releases_the_slot() {
    let store = MemoryStore::new();
    let room = one_room().seed(&store).await;
    let visitor = seed_visitor(&store, "Maria").await;
    let settings = SchedulerSettings::default();
    let monday = date(2025, 6, 2);

    let outcome = book(&store, room.id, visitor.id, "2025-06-02T10:00", "2025-06-02T11:00").await;
    let BookingOutcome::Booked { appointment } = outcome else {
        panic!("expected the booking to pass");
    };
    let result = available_slots(&store, &settings, room.id, monday).await.expect("slots");
    assert!(!result.slots[2].available, "10:00 slot should be taken");

    // Arrival moves the appointment to in-progress; the slot stays taken
    let entered = check_in(
        &store,
        &clock(),
        CheckInRequest {
            visitor_id: visitor.id,
            room_id: room.id,
            appointment_id: Some(appointment.id),
            entered_at: None,
        },
    )
    .await
    .expect("check-in");
    let CheckInOutcome::Entered { record } = entered else {
        panic!("expected an entry");
    };
    let in_progress = store
        .appointment_by_id(appointment.id)
        .await
        .expect("lookup")
        .expect("appointment");
    assert_eq!(in_progress.status, AppointmentStatus::InProgress);
    let result = available_slots(&store, &settings, room.id, monday).await.expect("slots");
    assert!(!result.slots[2].available);

    // Departure finishes the appointment and frees the slot
    check_out(&store, &clock(), record.id, Some(instant("2025-06-02T10:45")))
        .await
        .expect("check-out");
    let finished = store
        .appointment_by_id(appointment.id)
        .await
        .expect("lookup")
        .expect("appointment");
    assert_eq!(finished.status, AppointmentStatus::Finished);
    let result = available_slots(&store, &settings, room.id, monday).await.expect("slots");
    assert!(result.slots[2].available);
    assert_eq!(result.slots[2].vacancies, 1);
}

/// A cancelled booking no longer blocks the room or the visitor.
#[test_log::test(tokio::test)]
async fn cancelling_frees_room_and_visitor() {
    let store = MemoryStore::new();
    let room = one_room().seed(&store).await;
    let visitor = seed_visitor(&store, "Maria").await;

    let outcome = book(&store, room.id, visitor.id, "2025-06-02T10:00", "2025-06-02T11:00").await;
    let BookingOutcome::Booked { appointment } = outcome else {
        panic!("expected the booking to pass");
    };

    // Both the room (capacity 1) and the visitor are blocked
    let retry = book(&store, room.id, visitor.id, "2025-06-02T10:00", "2025-06-02T11:00").await;
    assert!(matches!(retry, BookingOutcome::Rejected { .. }));

    booking::cancel(&store, appointment.id).await.expect("cancel");
    let retry = book(&store, room.id, visitor.id, "2025-06-02T10:00", "2025-06-02T11:00").await;
    assert!(matches!(retry, BookingOutcome::Booked { .. }));
}

/// Rescheduling over a range that only overlaps the appointment's own old
/// range passes, while landing on another visitor's booking does not.
#[test_log::test(tokio::test)]
async fn reschedule_respects_other_bookings() {
    let store = MemoryStore::new();
    let room = one_room().seed(&store).await;
    let maria = seed_visitor(&store, "Maria").await;
    let joao = seed_visitor(&store, "João").await;

    let BookingOutcome::Booked { appointment } =
        book(&store, room.id, maria.id, "2025-06-02T08:00", "2025-06-02T09:00").await
    else {
        panic!("expected the booking to pass");
    };
    assert!(matches!(
        book(&store, room.id, joao.id, "2025-06-02T10:00", "2025-06-02T11:00").await,
        BookingOutcome::Booked { .. }
    ));

    let shifted = ValidationRequest::from_wall_clock(
        room.id,
        maria.id,
        "2025-06-02T08:30",
        "2025-06-02T09:30",
        None,
    )
    .expect("valid request");
    let outcome = booking::reschedule(&store, appointment.id, &shifted)
        .await
        .expect("reschedule call");
    assert!(matches!(outcome, BookingOutcome::Booked { .. }));

    let onto_joao = ValidationRequest::from_wall_clock(
        room.id,
        maria.id,
        "2025-06-02T10:30",
        "2025-06-02T11:30",
        None,
    )
    .expect("valid request");
    let outcome = booking::reschedule(&store, appointment.id, &onto_joao)
        .await
        .expect("reschedule call");
    assert!(matches!(outcome, BookingOutcome::Rejected { .. }));
}

/// A seed document loads rooms, visitors, and appointments that the
/// services can use straight away.
#[test_log::test(tokio::test)]
async fn seeded_store_drives_the_services() {
    let raw = r#"{
        "rooms": [
            {
                "id": "4f1c2c1e-0000-4000-8000-000000000001",
                "name": "Sala 1",
                "capacity": 1,
                "capacity_variation": 2,
                "schedule": { "1": [ { "open": "08:00", "close": "12:00" } ] },
                "active": true
            }
        ],
        "visitors": [
            {
                "id": "4f1c2c1e-0000-4000-8000-000000000002",
                "name": "Maria",
                "birth_date": "1944-03-10",
                "has_disability": true,
                "priority_tier": 6,
                "active": true
            }
        ],
        "appointments": [
            {
                "id": "4f1c2c1e-0000-4000-8000-000000000003",
                "visitor_id": "4f1c2c1e-0000-4000-8000-000000000002",
                "room_id": "4f1c2c1e-0000-4000-8000-000000000001",
                "starts_at": "2025-06-02T09:00:00Z",
                "ends_at": "2025-06-02T10:00:00Z",
                "status": 1,
                "active": true
            }
        ]
    }"#;
    let document: SeedDocument = serde_json::from_str(raw).expect("seed JSON");
    let store = MemoryStore::new();
    apply_seed(&store, document).await.expect("apply seed");

    let room_id = Uuid::parse_str("4f1c2c1e-0000-4000-8000-000000000001").expect("uuid");
    let visitor_id = Uuid::parse_str("4f1c2c1e-0000-4000-8000-000000000002").expect("uuid");

    // The seeded appointment fills the 09:00 slot
    let result =
        available_slots(&store, &SchedulerSettings::default(), room_id, date(2025, 6, 2))
            .await
            .expect("slots");
    assert!(!result.slots[1].available);

    // And blocks the seeded visitor's overlapping request
    let retry = book(&store, room_id, visitor_id, "2025-06-02T09:30", "2025-06-02T10:30").await;
    assert!(matches!(retry, BookingOutcome::Rejected { .. }));

    // Priority classification works off the seeded record
    let visitor = store
        .visitor_by_id(visitor_id)
        .await
        .expect("lookup")
        .expect("visitor");
    assert_eq!(classify(&visitor, &clock()), 6);
}
