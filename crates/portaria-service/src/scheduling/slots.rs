//! Bookable slot generation for a room and date.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;
use uuid::Uuid;

use portaria_core::types::WeekDay;
use portaria_store::model::{Appointment, Room, TimeWindow};
use portaria_store::store::{AppointmentStore, HolidayStore, RoomStore};

use portaria_core::error::CoreError;

use crate::error::ServiceResult;
use crate::scheduling::SchedulerSettings;
use crate::scheduling::holiday::{holiday_on, next_available_day};

/// One fixed-duration candidate booking window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Clock label, "HH:MM".
    pub label: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub vacancies: u32,
    pub capacity: u32,
    pub available: bool,
}

/// Machine-discriminable reason a date yields no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    RoomNotFound,
    Holiday,
    RoomClosed,
}

/// Pointer to the next bookable day when the requested date is blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub date: NaiveDate,
    pub message: String,
}

/// Outcome of [`available_slots`].
#[derive(Debug, Clone, Serialize)]
pub struct SlotsResult {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnavailableReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    pub slots: Vec<Slot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_windows: Option<Vec<TimeWindow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SlotsResult {
    fn unavailable(reason: UnavailableReason, message: String) -> Self {
        Self {
            available: false,
            reason: Some(reason),
            holiday_description: None,
            suggestion: None,
            slots: Vec::new(),
            operating_windows: None,
            message: Some(message),
        }
    }
}

/// ## Summary
/// Computes the ordered bookable slots for a room on a calendar date.
///
/// Order of checks: room exists and is active, date is not a holiday (with
/// a look-ahead suggestion when it is), the room operates on that weekday.
/// Then, per operating window, walks in fixed steps from the opening time
/// and counts occupying appointments against the room's capacity for the
/// date. Windows are stored sorted by opening time, so the combined slot
/// list is chronological.
///
/// ## Errors
/// Propagates store faults and rejects a zero slot duration as an invalid
/// configuration; business outcomes are carried in the result.
pub async fn available_slots<S>(
    store: &S,
    settings: &SchedulerSettings,
    room_id: Uuid,
    date: NaiveDate,
) -> ServiceResult<SlotsResult>
where
    S: RoomStore + HolidayStore + AppointmentStore,
{
    if settings.slot_minutes == 0 {
        return Err(CoreError::InvalidConfiguration(
            "slot_minutes must be positive".to_owned(),
        )
        .into());
    }

    let room = match store.room_by_id(room_id).await? {
        Some(room) if room.active => room,
        _ => {
            tracing::debug!(%room_id, "slot query for missing or inactive room");
            return Ok(SlotsResult::unavailable(
                UnavailableReason::RoomNotFound,
                "Room not found or inactive".to_owned(),
            ));
        }
    };

    if let Some(holiday) = holiday_on(store, date).await? {
        return holiday_result(store, settings, &room, date, &holiday.description).await;
    }

    let weekday = WeekDay::of(date);
    let windows = room.schedule.windows_for(weekday);
    if windows.is_empty() {
        return Ok(SlotsResult::unavailable(
            UnavailableReason::RoomClosed,
            format!("The room does not operate on {weekday}s"),
        ));
    }

    let appointments: Vec<Appointment> = store
        .appointments_for_room_on(room.id, date)
        .await?
        .into_iter()
        .filter(Appointment::occupies_slot)
        .collect();

    let capacity = room.effective_capacity(date);
    let step = TimeDelta::minutes(i64::from(settings.slot_minutes));
    let mut slots = Vec::new();

    for window in windows {
        walk_window(&mut slots, window, date, step, capacity, &appointments);
    }

    tracing::debug!(
        room = %room.name,
        %date,
        slot_count = slots.len(),
        "generated slots"
    );

    Ok(SlotsResult {
        available: slots.iter().any(|s| s.available),
        reason: None,
        holiday_description: None,
        suggestion: None,
        slots,
        operating_windows: Some(windows.to_vec()),
        message: None,
    })
}

/// Occupancy rule for slot counting. Interval ends are inclusive on both
/// sides, unlike the booking conflict rule: an appointment ending exactly
/// at the slot's start, or starting exactly at its end, still occupies the
/// slot. Existing stored vacancy figures were produced under this counting
/// and must be reproduced exactly.
fn occupies(existing: &Appointment, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    let covers =
        |instant: DateTime<Utc>| existing.starts_at <= instant && instant <= existing.ends_at;
    covers(start) || covers(end) || (existing.starts_at >= start && existing.ends_at <= end)
}

/// Emits the slots of one operating window into `slots`.
///
/// The walk stops as soon as a candidate's end would pass the closing time,
/// so a trailing remainder shorter than the step is never offered.
fn walk_window(
    slots: &mut Vec<Slot>,
    window: &TimeWindow,
    date: NaiveDate,
    step: TimeDelta,
    capacity: u32,
    appointments: &[Appointment],
) {
    let close = date.and_time(window.close).and_utc();
    let mut start = date.and_time(window.open).and_utc();

    loop {
        let end = start + step;
        if end > close {
            break;
        }

        let occupied = appointments.iter().filter(|a| occupies(a, start, end)).count();
        let occupied = u32::try_from(occupied).unwrap_or(u32::MAX);
        let vacancies = capacity.saturating_sub(occupied);

        slots.push(Slot {
            label: start.format("%H:%M").to_string(),
            starts_at: start,
            ends_at: end,
            vacancies,
            capacity,
            available: vacancies > 0,
        });

        start = end;
    }
}

async fn holiday_result<S>(
    store: &S,
    settings: &SchedulerSettings,
    room: &Room,
    date: NaiveDate,
    description: &str,
) -> ServiceResult<SlotsResult>
where
    S: HolidayStore,
{
    let suggestion = next_available_day(store, room, date, settings.lookahead_days)
        .await?
        .map(|next| Suggestion {
            date: next,
            message: format!(
                "Next available date: {}, {}",
                WeekDay::of(next),
                next.format("%d/%m/%Y")
            ),
        });

    let message = if suggestion.is_some() {
        format!("Holiday: {description}")
    } else {
        format!(
            "Holiday: {description}. No available date found within the next {} days.",
            settings.lookahead_days
        )
    };

    tracing::debug!(room = %room.name, %date, holiday = description, "date blocked by holiday");

    Ok(SlotsResult {
        available: false,
        reason: Some(UnavailableReason::Holiday),
        holiday_description: Some(description.to_owned()),
        suggestion,
        slots: Vec::new(),
        operating_windows: None,
        message: Some(message),
    })
}
