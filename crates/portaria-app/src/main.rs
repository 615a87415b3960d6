use std::path::Path;

use portaria_app::report::availability_report;
use portaria_app::seed::{apply_seed, read_seed};
use portaria_core::clock::{Clock, SystemClock};
use portaria_core::config::load_config;
use portaria_service::scheduling::SchedulerSettings;
use portaria_store::store::memory::MemoryStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Portaria visitor-management");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = MemoryStore::new();
    let document = read_seed(Path::new(&config.seed.path)).await?;
    apply_seed(&store, document).await?;

    let settings = SchedulerSettings::from(&config.scheduling);
    let today = SystemClock.today();

    availability_report(&store, &settings, today).await?;

    Ok(())
}
