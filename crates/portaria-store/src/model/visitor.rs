//! Visitor model.
//!
//! The scheduling core only needs the id to scope conflict checks; the
//! remaining fields feed the priority classification service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visitor {
    pub id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub has_disability: bool,
    /// Tier 1-6 computed by the priority service; stored, not derived on
    /// read.
    pub priority_tier: u8,
    pub active: bool,
}
