/// Scheduling constants shared across crates
///
/// Bookable slots are fixed-length; rooms do not configure their own
/// duration.
pub const SLOT_DURATION_MINUTES: u32 = 60;

/// How many days `next_available_day` scans past the requested date before
/// giving up.
pub const LOOKAHEAD_DAYS: u32 = 30;

/// Default filename for the in-memory store seed document.
pub const DEFAULT_SEED_PATH: &str = "seed.json";
