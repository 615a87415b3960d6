//! Room model and its weekly operating schedule.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portaria_core::error::{CoreError, CoreResult};
use portaria_core::types::WeekDay;

/// A contiguous open-to-close interval during which a room accepts bookings
/// on a given weekday. Clock times only; the calendar date comes from the
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "hhmm")]
    pub open: NaiveTime,
    #[serde(with = "hhmm")]
    pub close: NaiveTime,
}

impl TimeWindow {
    /// ## Summary
    /// Builds a window, rejecting inverted or empty intervals.
    ///
    /// ## Errors
    /// Returns a validation error unless `open < close`.
    pub fn new(open: NaiveTime, close: NaiveTime) -> CoreResult<Self> {
        if open < close {
            Ok(Self { open, close })
        } else {
            Err(CoreError::ValidationError(format!(
                "window open {open} must precede close {close}"
            )))
        }
    }

    /// Whether two windows on the same day share any instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.open < other.close && other.open < self.close
    }
}

/// Weekly operating hours: weekday index (Sunday = 0) to an ordered list of
/// disjoint windows. A missing or empty entry means the room is closed that
/// day, which is a valid state rather than an error.
///
/// Serialized as `{"1": [{"open": "08:00", "close": "12:00"}], ...}`, the
/// shape existing room records already use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u8, Vec<TimeWindow>>")]
#[serde(into = "BTreeMap<u8, Vec<TimeWindow>>")]
pub struct WeeklySchedule {
    days: BTreeMap<u8, Vec<TimeWindow>>,
}

impl WeeklySchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Adds a window to a weekday, keeping the day's list sorted by opening
    /// time.
    ///
    /// ## Errors
    /// Returns a validation error if the window overlaps one already
    /// configured for that day.
    pub fn add_window(&mut self, day: WeekDay, window: TimeWindow) -> CoreResult<()> {
        let windows = self.days.entry(day.index()).or_default();
        if windows.iter().any(|existing| existing.overlaps(&window)) {
            return Err(CoreError::ValidationError(format!(
                "overlapping windows configured for {day}"
            )));
        }
        windows.push(window);
        windows.sort_by_key(|w| w.open);
        Ok(())
    }

    /// Ordered windows for a weekday; empty slice when the room is closed.
    #[must_use]
    pub fn windows_for(&self, day: WeekDay) -> &[TimeWindow] {
        self.days
            .get(&day.index())
            .map_or(&[], Vec::as_slice)
    }

    /// Whether the room operates at all on the given weekday.
    #[must_use]
    pub fn operates_on(&self, day: WeekDay) -> bool {
        !self.windows_for(day).is_empty()
    }
}

impl TryFrom<BTreeMap<u8, Vec<TimeWindow>>> for WeeklySchedule {
    type Error = CoreError;

    fn try_from(raw: BTreeMap<u8, Vec<TimeWindow>>) -> CoreResult<Self> {
        let mut schedule = Self::new();
        for (index, windows) in raw {
            let Some(day) = WeekDay::from_index(index) else {
                return Err(CoreError::ValidationError(format!(
                    "weekday index {index} out of range"
                )));
            };
            for window in windows {
                // Re-validate through new(): stored data is not trusted to
                // uphold open < close
                let window = TimeWindow::new(window.open, window.close)?;
                schedule.add_window(day, window)?;
            }
        }
        Ok(schedule)
    }
}

impl From<WeeklySchedule> for BTreeMap<u8, Vec<TimeWindow>> {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule.days
    }
}

/// Capacity-variation period recorded on a room.
///
/// The numeric codes 1-4 are a wire contract. The unit is recorded but does
/// not currently alter the capacity computation; see
/// [`Room::effective_capacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CapacityVariation {
    Hour,
    Day,
    Week,
    Month,
}

impl CapacityVariation {
    #[must_use]
    pub const fn as_code(self) -> u8 {
        match self {
            Self::Hour => 1,
            Self::Day => 2,
            Self::Week => 3,
            Self::Month => 4,
        }
    }

    /// ## Errors
    /// Returns an error for codes outside 1-4.
    pub const fn from_code(code: u8) -> CoreResult<Self> {
        match code {
            1 => Ok(Self::Hour),
            2 => Ok(Self::Day),
            3 => Ok(Self::Week),
            4 => Ok(Self::Month),
            _ => Err(CoreError::InvariantViolation(
                "unrecognized capacity variation code",
            )),
        }
    }
}

impl From<CapacityVariation> for u8 {
    fn from(variation: CapacityVariation) -> Self {
        variation.as_code()
    }
}

impl TryFrom<u8> for CapacityVariation {
    type Error = CoreError;

    fn try_from(code: u8) -> CoreResult<Self> {
        Self::from_code(code)
    }
}

/// A bookable room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    /// Concurrent bookings allowed per slot.
    pub capacity: u32,
    pub capacity_variation: CapacityVariation,
    pub schedule: WeeklySchedule,
    pub active: bool,
}

impl Room {
    /// Capacity in effect on a date.
    ///
    /// The variation unit is an inert hook: every unit currently yields the
    /// base capacity. The date parameter stays so call sites do not change
    /// if the hook ever becomes real.
    #[must_use]
    pub fn effective_capacity(&self, _date: NaiveDate) -> u32 {
        self.capacity
    }
}

mod hhmm {
    //! `NaiveTime` as "HH:MM", the clock-time shape stored schedules use.

    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|_| D::Error::custom(format!("invalid clock time: {raw}")))
    }
}
