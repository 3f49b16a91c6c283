//! Aliste light — an on/off channel.
//!
//! Light channels share the dimmer handle type, but the entity only switches
//! them; no brightness is exposed.

use std::sync::Arc;

use aliste_app::hub_store::HubStore;
use aliste_app::ports::{AddEntities, DeviceHandle, Entity, Hub, StateWriter};
use aliste_domain::device::{DeviceInfo, DeviceType};
use aliste_domain::entity::EntitySnapshot;
use aliste_domain::error::AlisteError;
use aliste_domain::id::{ConfigEntryId, UniqueId};
use aliste_domain::service::ServiceCall;

use crate::device_entity::DeviceEntity;

/// Frontend icon for lights.
pub const ICON: &str = "mdi:lightbulb";

/// Build one [`AlisteLight`] per `LIGHT` device of the entry's hub and hand
/// them to `add_entities`.
///
/// # Errors
///
/// Returns [`AlisteError::NotFound`] when no hub is stored for `entry_id`.
#[tracing::instrument(skip_all, fields(%entry_id))]
pub fn setup_entry<H, A>(
    hubs: &HubStore<H>,
    entry_id: ConfigEntryId,
    add_entities: &A,
) -> Result<(), AlisteError>
where
    H: Hub,
    A: AddEntities<AlisteLight<H::Device>>,
{
    let lights: Vec<_> = crate::devices_of_type(hubs, entry_id, DeviceType::Light)?
        .into_iter()
        .map(AlisteLight::new)
        .collect();
    tracing::info!(count = lights.len(), "light entities discovered");
    add_entities.add_entities(lights);
    Ok(())
}

/// A hub channel controlled as a light.
pub struct AlisteLight<D: DeviceHandle> {
    base: DeviceEntity<D>,
}

impl<D: DeviceHandle> AlisteLight<D> {
    #[must_use]
    pub fn new(device: Arc<D>) -> Self {
        Self {
            base: DeviceEntity::new(device),
        }
    }

    #[must_use]
    pub fn unique_id(&self) -> UniqueId {
        self.base.unique_id()
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.base.name()
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        ICON
    }

    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        self.base.device_info()
    }

    /// # Errors
    ///
    /// Returns [`AlisteError::InvalidSwitchState`] if the device state is not
    /// a level.
    pub fn is_on(&self) -> Result<bool, AlisteError> {
        Ok(self.base.switch_state()?.is_on())
    }

    /// # Errors
    ///
    /// Returns the device's error if the command fails.
    pub async fn turn_on(&self) -> Result<(), AlisteError> {
        self.base.device().turn_on().await
    }

    /// # Errors
    ///
    /// Returns the device's error if the command fails.
    pub async fn turn_off(&self) -> Result<(), AlisteError> {
        self.base.device().turn_off().await
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.base.is_attached()
    }
}

impl<D: DeviceHandle> Entity for AlisteLight<D> {
    fn unique_id(&self) -> UniqueId {
        self.base.unique_id()
    }

    fn snapshot(&self) -> Result<EntitySnapshot, AlisteError> {
        let state = self.base.switch_state()?;
        Ok(self.base.snapshot_builder(ICON, state).build())
    }

    fn added_to_platform(&self, writer: Arc<dyn StateWriter>) {
        self.base.attach(writer);
    }

    fn will_remove_from_platform(&self) {
        self.base.detach();
    }

    async fn handle_service_call(&self, call: ServiceCall) -> Result<(), AlisteError> {
        match call {
            ServiceCall::TurnOn { .. } => self.turn_on().await,
            ServiceCall::TurnOff => self.turn_off().await,
            other => Err(AlisteError::UnsupportedService {
                platform: "light",
                service: other.name().to_string(),
            }),
        }
    }
}
