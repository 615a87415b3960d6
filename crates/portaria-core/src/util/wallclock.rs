//! Facility wall-clock date/time parsing.
//!
//! ## Summary
//! The facility runs in a single implicit timezone. Datetime strings without
//! a `Z` suffix are wall-clock readings: the numeric components are taken as
//! UTC components verbatim, with no offset applied. Stored data was written
//! under this convention, so it must round-trip exactly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{CoreError, CoreResult};

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// A full datetime string is also accepted; its date part is used.
///
/// ## Errors
/// Returns [`CoreError::InvalidDate`] if the input matches neither shape.
pub fn parse_local_date(input: &str) -> CoreResult<NaiveDate> {
    if input.contains('T') {
        return Ok(parse_wall_clock(input)?.date_naive());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(input.to_owned()))
}

/// Parses a wall-clock datetime string into an absolute instant.
///
/// Accepted shapes, in order:
/// - `...Z` / RFC 3339 with offset: taken as the instant it names.
/// - `YYYY-MM-DDTHH:MM[:SS]`: wall-clock numbers become the UTC numbers.
/// - `YYYY-MM-DD`: midnight wall-clock.
///
/// ## Errors
/// Returns [`CoreError::InvalidDateTime`] on anything else, including an
/// empty string.
pub fn parse_wall_clock(input: &str) -> CoreResult<DateTime<Utc>> {
    if input.is_empty() {
        return Err(CoreError::InvalidDateTime(input.to_owned()));
    }

    if input.ends_with('Z') || input.ends_with('z') {
        return DateTime::parse_from_rfc3339(input)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| CoreError::InvalidDateTime(input.to_owned()));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(CoreError::InvalidDateTime(input.to_owned()))
}

/// Midnight instant for a calendar date, under the wall-clock convention.
#[must_use]
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
