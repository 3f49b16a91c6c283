//! Simulated switch channel.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aliste_app::ports::{DeviceHandle, StateCallback};
use aliste_domain::device::DeviceType;
use aliste_domain::error::AlisteError;
use aliste_domain::id::UniqueId;
use aliste_domain::switch_state::SwitchState;

use crate::config::VirtualDeviceConfig;
use crate::error::VirtualError;

/// A channel whose state lives in memory.
pub struct VirtualDevice {
    device_id: String,
    switch_id: String,
    room_name: String,
    name: String,
    device_type: DeviceType,
    state: Mutex<String>,
    callbacks: Mutex<Vec<StateCallback>>,
    offline: AtomicBool,
}

impl From<VirtualDeviceConfig> for VirtualDevice {
    fn from(config: VirtualDeviceConfig) -> Self {
        Self {
            device_id: config.device_id,
            switch_id: config.switch_id,
            room_name: config.room_name,
            name: config.name,
            device_type: config.device_type,
            state: Mutex::new(config.switch_state),
            callbacks: Mutex::default(),
            offline: AtomicBool::new(config.offline),
        }
    }
}

impl VirtualDevice {
    #[must_use]
    pub fn unique_id(&self) -> UniqueId {
        UniqueId::for_switch(&self.device_id, &self.switch_id)
    }

    /// Replace the raw state as if the hub had pushed an update, then notify.
    ///
    /// The value is stored verbatim, malformed strings included.
    pub fn set_external_state(&self, raw: impl Into<String>) {
        let raw = raw.into();
        tracing::debug!(unique_id = %self.unique_id(), state = %raw, "external state change");
        self.store(raw);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.lock_callbacks().len()
    }

    fn command(&self, raw: String) -> Result<(), AlisteError> {
        if self.is_offline() {
            let unique_id = self.unique_id().to_string();
            tracing::warn!(%unique_id, "command rejected, device offline");
            return Err(VirtualError::Offline { unique_id }.into());
        }
        self.store(raw);
        Ok(())
    }

    // Callbacks run after both locks are released so they may read the state.
    fn store(&self, raw: String) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = raw;
        let callbacks = self.lock_callbacks().clone();
        for callback in callbacks {
            callback();
        }
    }

    fn lock_callbacks(&self) -> MutexGuard<'_, Vec<StateCallback>> {
        self.callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceHandle for VirtualDevice {
    fn device_id(&self) -> &str {
        &self.device_id
    }

    fn switch_id(&self) -> &str {
        &self.switch_id
    }

    fn room_name(&self) -> &str {
        &self.room_name
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn device_type(&self) -> DeviceType {
        self.device_type
    }

    fn switch_state(&self) -> String {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn dim(&self, level: SwitchState) -> impl Future<Output = Result<(), AlisteError>> + Send {
        let result = self.command(level.to_string());
        async move { result }
    }

    fn turn_on(&self) -> impl Future<Output = Result<(), AlisteError>> + Send {
        let result = self.command(SwitchState::FULL.to_string());
        async move { result }
    }

    fn turn_off(&self) -> impl Future<Output = Result<(), AlisteError>> + Send {
        let result = self.command(SwitchState::OFF.to_string());
        async move { result }
    }

    fn register_callback(&self, callback: StateCallback) {
        self.lock_callbacks().push(callback);
    }

    fn remove_callback(&self, callback: &StateCallback) {
        self.lock_callbacks().retain(|cb| !Arc::ptr_eq(cb, callback));
    }
}
