//! Physical entry/exit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One visit through the door: entry stamped at creation, exit stamped
/// later. `appointment_id` links the record to the booking it fulfils;
/// standalone walk-ins carry `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRecord {
    pub id: Uuid,
    pub visitor_id: Uuid,
    pub room_id: Uuid,
    pub appointment_id: Option<Uuid>,
    pub entered_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
    pub active: bool,
}

impl AccessRecord {
    /// The visitor is still inside while no exit is stamped.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.active && self.exited_at.is_none()
    }
}
