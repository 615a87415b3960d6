//! Holiday calendar model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portaria_core::error::{CoreError, CoreResult};

/// Administrative scope of a holiday. Informational only; every kind blocks
/// scheduling the same way. Codes 1-3 are a wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HolidayKind {
    National,
    State,
    Municipal,
}

impl HolidayKind {
    #[must_use]
    pub const fn as_code(self) -> u8 {
        match self {
            Self::National => 1,
            Self::State => 2,
            Self::Municipal => 3,
        }
    }

    /// ## Errors
    /// Returns an error for codes outside 1-3.
    pub const fn from_code(code: u8) -> CoreResult<Self> {
        match code {
            1 => Ok(Self::National),
            2 => Ok(Self::State),
            3 => Ok(Self::Municipal),
            _ => Err(CoreError::InvariantViolation("unrecognized holiday kind code")),
        }
    }
}

impl From<HolidayKind> for u8 {
    fn from(kind: HolidayKind) -> Self {
        kind.as_code()
    }
}

impl TryFrom<u8> for HolidayKind {
    type Error = CoreError;

    fn try_from(code: u8) -> CoreResult<Self> {
        Self::from_code(code)
    }
}

/// A calendar date on which no appointments may be scheduled.
///
/// Date-only granularity; lookup normalizes both sides to midnight. At most
/// one active holiday per date is expected, and the first match wins if the
/// data violates that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub kind: HolidayKind,
    pub active: bool,
}
