//! Visitor priority classification.
//!
//! Tiers: 6 = 80+ with disability, 5 = 60+ with disability, 4 = disability,
//! 3 = 80+, 2 = 60+, 1 = everyone else.

use chrono::{Datelike, NaiveDate};

use portaria_core::clock::Clock;
use portaria_store::model::Visitor;

/// ## Summary
/// Priority tier for a birth date and disability flag, as of `today`.
#[must_use]
pub fn priority_tier(birth_date: NaiveDate, has_disability: bool, today: NaiveDate) -> u8 {
    let age = age_in_years(birth_date, today);

    match (age, has_disability) {
        (80.., true) => 6,
        (60.., true) => 5,
        (_, true) => 4,
        (80.., false) => 3,
        (60.., false) => 2,
        _ => 1,
    }
}

/// Tier for a visitor record, as of the injected clock's today.
#[must_use]
pub fn classify<C: Clock>(visitor: &Visitor, clock: &C) -> u8 {
    priority_tier(visitor.birth_date, visitor.has_disability, clock.today())
}

/// Completed years between two dates, counting a birthday on `today` as
/// completed.
fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}
