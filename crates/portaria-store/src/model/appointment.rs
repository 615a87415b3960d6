//! Appointment model and status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portaria_core::error::{CoreError, CoreResult};

/// Appointment lifecycle status.
///
/// The numeric codes 1/3/4/5 are a wire contract with stored records and
/// downstream consumers; the gap at 2 is part of that contract and must not
/// be compacted. `from_code(2)` is therefore an error, not a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AppointmentStatus {
    Pending,
    InProgress,
    Finished,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub const fn as_code(self) -> u8 {
        match self {
            Self::Pending => 1,
            Self::InProgress => 3,
            Self::Finished => 4,
            Self::Cancelled => 5,
        }
    }

    /// ## Errors
    /// Returns an error for any code outside {1, 3, 4, 5}, including the
    /// unassigned 2.
    pub const fn from_code(code: u8) -> CoreResult<Self> {
        match code {
            1 => Ok(Self::Pending),
            3 => Ok(Self::InProgress),
            4 => Ok(Self::Finished),
            5 => Ok(Self::Cancelled),
            _ => Err(CoreError::InvariantViolation("unrecognized appointment status code")),
        }
    }

    /// Whether an appointment in this status occupies its time range for
    /// conflict and capacity purposes.
    #[must_use]
    pub const fn occupies_slot(self) -> bool {
        !matches!(self, Self::Cancelled | Self::Finished)
    }
}

impl From<AppointmentStatus> for u8 {
    fn from(status: AppointmentStatus) -> Self {
        status.as_code()
    }
}

impl TryFrom<u8> for AppointmentStatus {
    type Error = CoreError;

    fn try_from(code: u8) -> CoreResult<Self> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// A scheduled visit of one visitor to one room.
///
/// `starts_at`/`ends_at` hold facility wall-clock numbers under the UTC
/// convention of `portaria_core::util::wallclock`. The `active` flag is a
/// soft delete independent of `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub visitor_id: Uuid,
    pub room_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub active: bool,
}

impl Appointment {
    /// Whether this record counts toward conflict and capacity checks:
    /// active and in a status that occupies its slot.
    #[must_use]
    pub const fn occupies_slot(&self) -> bool {
        self.active && self.status.occupies_slot()
    }
}
