#![allow(clippy::wildcard_imports, clippy::expect_used)]
//! Scheduling engine scenarios: slot generation and validation end to end.

use portaria_test::component::model::AppointmentStatus;
use portaria_test::component::scheduling::SchedulerSettings;
use portaria_test::component::scheduling::slots::{UnavailableReason, available_slots};
use portaria_test::component::scheduling::validate::{
    RejectionReason, ValidationRequest, validate,
};
use portaria_test::component::store::memory::MemoryStore;
use portaria_test::component::types::WeekDay;
use uuid::Uuid;

use super::helpers::*;

fn sala_um() -> RoomFixture {
    RoomFixture {
        name: "Sala 1",
        capacity: 2,
        days: &[WeekDay::Monday],
        open: (8, 0),
        close: (12, 0),
    }
}

// ============================================================================
// Slot generation
// ============================================================================

/// Scenario A: empty Monday 08:00-12:00, capacity 2 -> four fully vacant
/// one-hour slots.
#[test_log::test(tokio::test)]
async fn four_hour_window_yields_four_slots() {
    let store = MemoryStore::new();
    let room = sala_um().seed(&store).await;

    let result = available_slots(&store, &SchedulerSettings::default(), room.id, date(2025, 6, 2))
        .await
        .expect("slot query");

    assert!(result.available);
    let labels: Vec<&str> = result.slots.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["08:00", "09:00", "10:00", "11:00"]);
    assert!(result.slots.iter().all(|s| s.vacancies == 2 && s.available));
}

/// Scenario B: one booking leaves a vacancy, a second one fills the slot.
#[test_log::test(tokio::test)]
async fn slot_fills_up_booking_by_booking() {
    let store = MemoryStore::new();
    let room = sala_um().seed(&store).await;
    let settings = SchedulerSettings::default();

    seed_appointment(
        &store,
        &room,
        Uuid::new_v4(),
        "2025-06-02T09:00",
        "2025-06-02T10:00",
        AppointmentStatus::Pending,
    )
    .await;
    let result = available_slots(&store, &settings, room.id, date(2025, 6, 2))
        .await
        .expect("slot query");
    // Boundary-inclusive counting: the 09:00 booking also touches the
    // 08:00 slot's end and the 10:00 slot's start
    let vacancies: Vec<u32> = result.slots.iter().map(|s| s.vacancies).collect();
    assert_eq!(vacancies, [1, 1, 1, 2]);
    assert!(result.slots[1].available);

    seed_appointment(
        &store,
        &room,
        Uuid::new_v4(),
        "2025-06-02T09:00",
        "2025-06-02T10:00",
        AppointmentStatus::Pending,
    )
    .await;
    let result = available_slots(&store, &settings, room.id, date(2025, 6, 2))
        .await
        .expect("slot query");
    let vacancies: Vec<u32> = result.slots.iter().map(|s| s.vacancies).collect();
    assert_eq!(vacancies, [0, 0, 0, 2]);
    assert!(!result.slots[1].available);
}

/// A room with no windows on the queried weekday reports "closed".
#[test_log::test(tokio::test)]
async fn closed_weekday_has_no_slots() {
    let store = MemoryStore::new();
    let room = sala_um().seed(&store).await;

    // 2025-06-04 is a Wednesday
    let result = available_slots(&store, &SchedulerSettings::default(), room.id, date(2025, 6, 4))
        .await
        .expect("slot query");

    assert!(!result.available);
    assert_eq!(result.reason, Some(UnavailableReason::RoomClosed));
    assert!(result.slots.is_empty());
}

/// Scenario D: the queried date is a holiday and the next open day is the
/// Monday eight days later, because the Monday in between is blocked too.
#[test_log::test(tokio::test)]
async fn holiday_suggests_next_open_day() {
    let store = MemoryStore::new();
    let room = sala_um().seed(&store).await;
    // Sunday the 1st is the queried holiday; Monday the 2nd is blocked as
    // well, so Monday the 9th is the first bookable day
    seed_holiday(&store, date(2025, 6, 1), "Christmas").await;
    seed_holiday(&store, date(2025, 6, 2), "Bridge day").await;

    let result = available_slots(&store, &SchedulerSettings::default(), room.id, date(2025, 6, 1))
        .await
        .expect("slot query");

    assert_eq!(result.reason, Some(UnavailableReason::Holiday));
    assert_eq!(result.holiday_description.as_deref(), Some("Christmas"));
    let suggestion = result.suggestion.expect("a suggestion within 30 days");
    assert_eq!(suggestion.date, date(2025, 6, 9));
}

/// Window remainders shorter than a slot are not offered: a 08:00-09:30
/// window yields the 08:00 slot only.
#[test_log::test(tokio::test)]
async fn partial_trailing_hour_is_not_offered() {
    let store = MemoryStore::new();
    let room = RoomFixture {
        name: "Sala curta",
        capacity: 1,
        days: &[WeekDay::Monday],
        open: (8, 0),
        close: (9, 30),
    }
    .seed(&store)
    .await;

    let result = available_slots(&store, &SchedulerSettings::default(), room.id, date(2025, 6, 2))
        .await
        .expect("slot query");
    let labels: Vec<&str> = result.slots.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["08:00"]);
}

// ============================================================================
// Validation
// ============================================================================

/// Scenario C: visitor booked in Room A 10:00-11:00 cannot take Room B
/// 10:30-11:30; the rejection names Room A.
#[test_log::test(tokio::test)]
async fn cross_room_double_booking_is_rejected() {
    let store = MemoryStore::new();
    let room_a = RoomFixture {
        name: "Room A",
        capacity: 2,
        days: &[WeekDay::Monday],
        open: (8, 0),
        close: (18, 0),
    }
    .seed(&store)
    .await;
    let room_b = RoomFixture {
        name: "Room B",
        capacity: 2,
        days: &[WeekDay::Monday],
        open: (8, 0),
        close: (18, 0),
    }
    .seed(&store)
    .await;
    let visitor = seed_visitor(&store, "Maria").await;
    seed_appointment(
        &store,
        &room_a,
        visitor.id,
        "2025-06-02T10:00",
        "2025-06-02T11:00",
        AppointmentStatus::Pending,
    )
    .await;

    let request = ValidationRequest::from_wall_clock(
        room_b.id,
        visitor.id,
        "2025-06-02T10:30",
        "2025-06-02T11:30",
        None,
    )
    .expect("valid request");
    let outcome = validate(&store, &request).await.expect("validation");

    assert!(!outcome.valid);
    assert_eq!(outcome.reason, Some(RejectionReason::VisitorConflict));
    assert_eq!(outcome.conflicting_room.as_deref(), Some("Room A"));
}

/// The back-to-back boundary: an appointment ending exactly when the
/// candidate begins does not conflict.
#[test_log::test(tokio::test)]
async fn adjacent_ranges_do_not_conflict() {
    let store = MemoryStore::new();
    let room = RoomFixture {
        name: "Sala 1",
        capacity: 1,
        days: &[WeekDay::Monday],
        open: (8, 0),
        close: (18, 0),
    }
    .seed(&store)
    .await;
    let visitor = seed_visitor(&store, "João").await;
    seed_appointment(
        &store,
        &room,
        visitor.id,
        "2025-06-02T10:00",
        "2025-06-02T11:00",
        AppointmentStatus::Pending,
    )
    .await;

    let request = ValidationRequest::from_wall_clock(
        room.id,
        visitor.id,
        "2025-06-02T11:00",
        "2025-06-02T12:00",
        None,
    )
    .expect("valid request");
    let outcome = validate(&store, &request).await.expect("validation");
    assert!(outcome.valid, "{}", outcome.message);
}

/// An identical range conflicts (exact-match case).
#[test_log::test(tokio::test)]
async fn identical_range_conflicts() {
    let store = MemoryStore::new();
    let room = RoomFixture {
        name: "Sala 1",
        capacity: 5,
        days: &[WeekDay::Monday],
        open: (8, 0),
        close: (18, 0),
    }
    .seed(&store)
    .await;
    let visitor = seed_visitor(&store, "Maria").await;
    seed_appointment(
        &store,
        &room,
        visitor.id,
        "2025-06-02T10:00",
        "2025-06-02T11:00",
        AppointmentStatus::Pending,
    )
    .await;

    let request = ValidationRequest::from_wall_clock(
        room.id,
        visitor.id,
        "2025-06-02T10:00",
        "2025-06-02T11:00",
        None,
    )
    .expect("valid request");
    let outcome = validate(&store, &request).await.expect("validation");
    assert_eq!(outcome.reason, Some(RejectionReason::VisitorConflict));
}
