//! Availability report over every active room.

use chrono::NaiveDate;

use portaria_service::scheduling::SchedulerSettings;
use portaria_service::scheduling::slots::available_slots;
use portaria_store::store::RoomStore;
use portaria_store::store::memory::MemoryStore;

/// ## Summary
/// Logs the slot availability of every active room for a date.
///
/// ## Errors
/// Propagates store faults.
pub async fn availability_report(
    store: &MemoryStore,
    settings: &SchedulerSettings,
    date: NaiveDate,
) -> anyhow::Result<()> {
    let rooms = store.active_rooms().await?;
    tracing::info!(%date, room_count = rooms.len(), "availability report");

    for room in rooms {
        let result = available_slots(store, settings, room.id, date).await?;

        if let Some(message) = &result.message {
            tracing::info!(room = %room.name, available = result.available, "{message}");
        }
        if let Some(suggestion) = &result.suggestion {
            tracing::info!(room = %room.name, date = %suggestion.date, "{}", suggestion.message);
        }
        for slot in &result.slots {
            tracing::info!(
                room = %room.name,
                slot = %slot.label,
                vacancies = slot.vacancies,
                capacity = slot.capacity,
                available = slot.available,
                "slot"
            );
        }
    }

    Ok(())
}
