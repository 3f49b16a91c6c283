//! # aliste-adapter-entities
//!
//! Fan and light entities for Aliste hub devices.
//!
//! ## Provided platforms
//!
//! | Platform | Device type | Entity | Behaviour |
//! |----------|-------------|--------|-----------|
//! | [`fan`] | `FAN` | [`AlisteFan`] | On/off, percentage, four preset speeds |
//! | [`light`] | `LIGHT` | [`AlisteLight`] | On/off |
//!
//! Each platform's `setup_entry` reads the hub stored for a config entry,
//! builds one entity per matching device and hands them to the host.
//! [`AlisteEntity`] lets a host keep both kinds in one registry.
//!
//! ## Dependency rule
//!
//! Depends on `aliste-app` (port traits) and `aliste-domain` only.

mod device_entity;
pub mod fan;
pub mod light;

#[cfg(test)]
mod testing;

pub use fan::AlisteFan;
pub use light::AlisteLight;

use std::sync::Arc;

use aliste_app::hub_store::HubStore;
use aliste_app::ports::{DeviceHandle, Entity, Hub, StateWriter};
use aliste_domain::device::{DOMAIN, DeviceType};
use aliste_domain::entity::EntitySnapshot;
use aliste_domain::error::AlisteError;
use aliste_domain::id::{ConfigEntryId, UniqueId};
use aliste_domain::service::ServiceCall;

/// Either kind of Aliste entity.
pub enum AlisteEntity<D: DeviceHandle> {
    Fan(AlisteFan<D>),
    Light(AlisteLight<D>),
}

impl<D: DeviceHandle> Entity for AlisteEntity<D> {
    fn unique_id(&self) -> UniqueId {
        match self {
            Self::Fan(e) => e.unique_id(),
            Self::Light(e) => e.unique_id(),
        }
    }

    fn snapshot(&self) -> Result<EntitySnapshot, AlisteError> {
        match self {
            Self::Fan(e) => e.snapshot(),
            Self::Light(e) => e.snapshot(),
        }
    }

    fn added_to_platform(&self, writer: Arc<dyn StateWriter>) {
        match self {
            Self::Fan(e) => e.added_to_platform(writer),
            Self::Light(e) => e.added_to_platform(writer),
        }
    }

    fn will_remove_from_platform(&self) {
        match self {
            Self::Fan(e) => e.will_remove_from_platform(),
            Self::Light(e) => e.will_remove_from_platform(),
        }
    }

    async fn handle_service_call(&self, call: ServiceCall) -> Result<(), AlisteError> {
        match self {
            Self::Fan(e) => e.handle_service_call(call).await,
            Self::Light(e) => e.handle_service_call(call).await,
        }
    }
}

/// Devices of the entry's hub tagged `device_type`, in hub order.
fn devices_of_type<H: Hub>(
    hubs: &HubStore<H>,
    entry_id: ConfigEntryId,
    device_type: DeviceType,
) -> Result<Vec<Arc<H::Device>>, AlisteError> {
    let hub = hubs.get(DOMAIN, entry_id)?;
    Ok(hub
        .devices()
        .into_iter()
        .filter(|device| device.device_type() == device_type)
        .collect())
}
