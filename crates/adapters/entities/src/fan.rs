//! Aliste fan — a dimmer channel exposed as a fan with four preset speeds.
//!
//! The hub only knows a continuous level, so presets are derived from it by
//! [`PresetMode::from_state`]. While the fan is off the level says nothing
//! about speed; the entity then reports the preset it last applied, and a
//! bare `turn_on` resumes it.

use std::sync::{Arc, Mutex, PoisonError};

use aliste_app::hub_store::HubStore;
use aliste_app::ports::{AddEntities, DeviceHandle, Entity, Hub, StateWriter};
use aliste_domain::device::{DeviceInfo, DeviceType};
use aliste_domain::entity::{AttributeValue, EntitySnapshot, FanFeature};
use aliste_domain::error::AlisteError;
use aliste_domain::id::{ConfigEntryId, UniqueId};
use aliste_domain::preset::PresetMode;
use aliste_domain::service::ServiceCall;
use aliste_domain::switch_state::SwitchState;

use crate::device_entity::DeviceEntity;

/// Frontend icon for fans.
pub const ICON: &str = "mdi:fan";

const SUPPORTED_FEATURES: [FanFeature; 4] = [
    FanFeature::SetSpeed,
    FanFeature::PresetMode,
    FanFeature::TurnOff,
    FanFeature::TurnOn,
];

/// Build one [`AlisteFan`] per `FAN` device of the entry's hub and hand them
/// to `add_entities`.
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
    A: AddEntities<AlisteFan<H::Device>>,
{
    let fans: Vec<_> = crate::devices_of_type(hubs, entry_id, DeviceType::Fan)?
        .into_iter()
        .map(AlisteFan::new)
        .collect();
    tracing::info!(count = fans.len(), "fan entities discovered");
    add_entities.add_entities(fans);
    Ok(())
}

/// A hub channel controlled as a fan.
pub struct AlisteFan<D: DeviceHandle> {
    base: DeviceEntity<D>,
    last_preset_mode: Mutex<PresetMode>,
}

impl<D: DeviceHandle> AlisteFan<D> {
    /// Wrap `device`. The remembered preset starts at [`PresetMode::Medium`].
    #[must_use]
    pub fn new(device: Arc<D>) -> Self {
        Self {
            base: DeviceEntity::new(device),
            last_preset_mode: Mutex::new(PresetMode::default()),
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

    #[must_use]
    pub fn supported_features(&self) -> &'static [FanFeature] {
        &SUPPORTED_FEATURES
    }

    #[must_use]
    pub fn preset_modes(&self) -> &'static [PresetMode] {
        &PresetMode::ALL
    }

    /// The preset matching the current level, or the remembered one while off.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::InvalidSwitchState`] if the device state is not
    /// a level.
    pub fn preset_mode(&self) -> Result<PresetMode, AlisteError> {
        Ok(self.preset_for(self.base.switch_state()?))
    }

    /// Preset that a bare `turn_on` would apply.
    #[must_use]
    pub fn last_preset_mode(&self) -> PresetMode {
        *self
            .last_preset_mode
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Current level as a percentage in `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::InvalidSwitchState`] if the device state is not
    /// a level.
    pub fn percentage(&self) -> Result<f64, AlisteError> {
        Ok(self.base.switch_state()?.percentage())
    }

    /// # Errors
    ///
    /// Returns [`AlisteError::InvalidSwitchState`] if the device state is not
    /// a level.
    pub fn is_on(&self) -> Result<bool, AlisteError> {
        Ok(self.base.switch_state()?.is_on())
    }

    /// Dim to the preset named `preset_mode` and remember it.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::UnknownPresetMode`] for a name outside the
    /// vocabulary (nothing is sent and the remembered preset is kept), or the
    /// device's error if the dim command fails.
    pub async fn set_preset_mode(&self, preset_mode: &str) -> Result<(), AlisteError> {
        let preset = preset_mode.parse::<PresetMode>()?;
        self.apply_preset(preset).await
    }

    /// Dim to `percentage` / 100. The remembered preset is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::InvalidSwitchState`] when `percentage > 100`,
    /// or the device's error if the dim command fails.
    pub async fn set_percentage(&self, percentage: u8) -> Result<(), AlisteError> {
        let level = SwitchState::from_percentage(percentage)?;
        self.base.device().dim(level).await
    }

    /// Turn on, honouring `preset_mode` first, then `percentage`, else
    /// resuming the remembered preset. `speed` is accepted for compatibility
    /// and ignored.
    ///
    /// # Errors
    ///
    /// Same as [`set_preset_mode`](Self::set_preset_mode) and
    /// [`set_percentage`](Self::set_percentage).
    pub async fn turn_on(
        &self,
        _speed: Option<&str>,
        percentage: Option<u8>,
        preset_mode: Option<&str>,
    ) -> Result<(), AlisteError> {
        if let Some(preset_mode) = preset_mode {
            self.set_preset_mode(preset_mode).await
        } else if let Some(percentage) = percentage {
            self.set_percentage(percentage).await
        } else {
            self.apply_preset(self.last_preset_mode()).await
        }
    }

    /// Turn off. The remembered preset survives for the next `turn_on`.
    ///
    /// # Errors
    ///
    /// Returns the device's error if the command fails.
    pub async fn turn_off(&self) -> Result<(), AlisteError> {
        self.base.device().turn_off().await
    }

    /// Whether the entity currently listens to device changes.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.base.is_attached()
    }

    async fn apply_preset(&self, preset: PresetMode) -> Result<(), AlisteError> {
        self.base.device().dim(preset.level()).await?;
        *self
            .last_preset_mode
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = preset;
        tracing::debug!(unique_id = %self.unique_id(), %preset, "preset applied");
        Ok(())
    }

    fn preset_for(&self, state: SwitchState) -> PresetMode {
        PresetMode::from_state(state).unwrap_or_else(|| self.last_preset_mode())
    }
}

impl<D: DeviceHandle> Entity for AlisteFan<D> {
    fn unique_id(&self) -> UniqueId {
        self.base.unique_id()
    }

    fn snapshot(&self) -> Result<EntitySnapshot, AlisteError> {
        let state = self.base.switch_state()?;
        Ok(self
            .base
            .snapshot_builder(ICON, state)
            .attribute("percentage", state.percentage())
            .attribute("preset_mode", self.preset_for(state).as_str())
            .attribute(
                "preset_modes",
                PresetMode::names().into_iter().collect::<AttributeValue>(),
            )
            .attribute(
                "supported_features",
                SUPPORTED_FEATURES
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<AttributeValue>(),
            )
            .build())
    }

    fn added_to_platform(&self, writer: Arc<dyn StateWriter>) {
        self.base.attach(writer);
    }

    fn will_remove_from_platform(&self) {
        self.base.detach();
    }

    async fn handle_service_call(&self, call: ServiceCall) -> Result<(), AlisteError> {
        match call {
            ServiceCall::TurnOn {
                speed,
                percentage,
                preset_mode,
            } => {
                self.turn_on(speed.as_deref(), percentage, preset_mode.as_deref())
                    .await
            }
            ServiceCall::TurnOff => self.turn_off().await,
            ServiceCall::SetPercentage(percentage) => self.set_percentage(percentage).await,
            ServiceCall::SetPresetMode(preset_mode) => self.set_preset_mode(&preset_mode).await,
        }
    }
}
