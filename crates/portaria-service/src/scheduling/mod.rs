//! The scheduling/availability engine.
//!
//! Four cooperating pieces:
//! - [`overlap`]: the single interval-overlap predicate and the
//!   visitor/room conflict scans built on it.
//! - [`holiday`]: holiday lookup and the bounded next-open-day scan.
//! - [`slots`]: bookable slot generation for a room and date.
//! - [`validate`]: the pass/fail pipeline for a prospective appointment.

pub mod holiday;
pub mod overlap;
pub mod slots;
pub mod validate;

use portaria_core::config::SchedulingConfig;
use portaria_core::constants::{LOOKAHEAD_DAYS, SLOT_DURATION_MINUTES};

/// Tunables for slot generation and the holiday look-ahead.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerSettings {
    /// Fixed slot length in minutes.
    pub slot_minutes: u32,
    /// How many days past the requested date the look-ahead scans.
    pub lookahead_days: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            slot_minutes: SLOT_DURATION_MINUTES,
            lookahead_days: LOOKAHEAD_DAYS,
        }
    }
}

impl From<&SchedulingConfig> for SchedulerSettings {
    fn from(config: &SchedulingConfig) -> Self {
        Self {
            slot_minutes: config.slot_minutes,
            lookahead_days: config.lookahead_days,
        }
    }
}
