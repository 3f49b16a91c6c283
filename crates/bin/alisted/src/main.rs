//! # alisted — Aliste hub daemon
//!
//! Composition root that wires the simulated hub, the fan and light
//! platforms and the entity registry together.
//!
//! ## Responsibilities
//! - Load configuration (file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Build the virtual hub and store it under its config entry
//! - Set up the fan and light platforms into one entity registry
//! - Log every published snapshot until Ctrl-C, then detach all entities
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use aliste_adapter_entities::{AlisteEntity, AlisteFan, AlisteLight, fan, light};
use aliste_adapter_virtual::VirtualDevice;
use aliste_app::hub_store::HubStore;
use aliste_app::services::entity_registry::EntityRegistry;
use aliste_app::state_bus::InProcessStateBus;
use aliste_domain::device::DOMAIN;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Hub
    let entry_id = config.entry_id();
    let hubs = HubStore::new();
    hubs.insert(DOMAIN, entry_id, Arc::new(config.build_hub()?));

    // State bus
    let bus = Arc::new(InProcessStateBus::new(256));
    let mut updates = bus.subscribe();
    let registry = EntityRegistry::new(Arc::clone(&bus));

    // Platforms
    fan::setup_entry(&hubs, entry_id, &|fans: Vec<AlisteFan<VirtualDevice>>| {
        registry.add_entities(fans.into_iter().map(AlisteEntity::Fan).collect());
    })?;
    light::setup_entry(&hubs, entry_id, &|lights: Vec<AlisteLight<VirtualDevice>>| {
        registry.add_entities(lights.into_iter().map(AlisteEntity::Light).collect());
    })?;
    tracing::info!(%entry_id, entities = registry.len(), "alisted ready");

    let watcher = tokio::spawn(async move {
        loop {
            match updates.recv().await {
                Ok(snapshot) => tracing::info!(
                    unique_id = %snapshot.unique_id,
                    name = %snapshot.name,
                    state = %snapshot.state,
                    "state written"
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "state watcher lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    registry.shutdown();
    hubs.remove(DOMAIN, entry_id);
    watcher.abort();

    Ok(())
}
