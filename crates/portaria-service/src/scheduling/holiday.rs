//! Holiday lookup and the next-open-day scan.

use chrono::{Days, NaiveDate};

use portaria_core::types::WeekDay;
use portaria_store::model::{Holiday, Room};
use portaria_store::store::HolidayStore;

use crate::error::ServiceResult;

/// ## Summary
/// First active holiday on the date, if any. Date-only granularity: stored
/// holidays and the query are both calendar dates, so no midnight
/// normalization is left to the caller.
///
/// ## Errors
/// Propagates store faults.
pub async fn holiday_on<S: HolidayStore>(
    store: &S,
    date: NaiveDate,
) -> ServiceResult<Option<Holiday>> {
    Ok(store.active_holiday_on(date).await?)
}

/// ## Summary
/// First date strictly after `from` that is not a holiday and on which the
/// room operates, scanning one day at a time up to `lookahead_days`.
/// `None` when the scan window is exhausted.
///
/// ## Errors
/// Propagates store faults.
pub async fn next_available_day<S: HolidayStore>(
    store: &S,
    room: &Room,
    from: NaiveDate,
    lookahead_days: u32,
) -> ServiceResult<Option<NaiveDate>> {
    let mut candidate = from;
    for _ in 0..lookahead_days {
        let Some(next) = candidate.checked_add_days(Days::new(1)) else {
            // Calendar overflow; nothing bookable out there
            return Ok(None);
        };
        candidate = next;

        if store.active_holiday_on(candidate).await?.is_some() {
            tracing::trace!(date = %candidate, "look-ahead skipped holiday");
            continue;
        }
        if !room.schedule.operates_on(WeekDay::of(candidate)) {
            tracing::trace!(date = %candidate, "look-ahead skipped closed weekday");
            continue;
        }
        return Ok(Some(candidate));
    }
    Ok(None)
}
