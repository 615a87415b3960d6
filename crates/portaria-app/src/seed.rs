//! JSON seed document loading.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use portaria_store::model::{Appointment, Holiday, Room, Visitor};
use portaria_store::store::AppointmentStore;
use portaria_store::store::memory::MemoryStore;

/// Initial data set for the in-memory store.
#[derive(Debug, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    #[serde(default)]
    pub visitors: Vec<Visitor>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// ## Summary
/// Reads and parses a seed document.
///
/// ## Errors
/// Returns an error if the file cannot be read or is not valid seed JSON.
pub async fn read_seed(path: &Path) -> anyhow::Result<SeedDocument> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
}

/// ## Summary
/// Applies a seed document to the store.
///
/// ## Errors
/// Propagates store faults.
pub async fn apply_seed(
    store: &MemoryStore,
    document: SeedDocument,
) -> anyhow::Result<()> {
    let counts = (
        document.rooms.len(),
        document.holidays.len(),
        document.visitors.len(),
        document.appointments.len(),
    );

    for room in document.rooms {
        store.upsert_room(room).await;
    }
    for holiday in document.holidays {
        store.upsert_holiday(holiday).await;
    }
    for visitor in document.visitors {
        store.upsert_visitor(visitor).await;
    }
    for appointment in document.appointments {
        store.insert_appointment(appointment).await?;
    }

    tracing::info!(
        rooms = counts.0,
        holidays = counts.1,
        visitors = counts.2,
        appointments = counts.3,
        "seed applied"
    );

    Ok(())
}
