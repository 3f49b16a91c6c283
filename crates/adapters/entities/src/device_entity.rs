//! Shared core of the fan and light entities: identity, state parsing, and
//! the change-notification bridge.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aliste_app::ports::{DeviceHandle, StateCallback, StateWriter};
use aliste_app::subscription::CallbackSubscription;
use aliste_domain::device::DeviceInfo;
use aliste_domain::entity::{EntitySnapshot, EntitySnapshotBuilder};
use aliste_domain::error::AlisteError;
use aliste_domain::id::UniqueId;
use aliste_domain::switch_state::SwitchState;

/// One device handle plus its (optional) callback registration.
pub(crate) struct DeviceEntity<D: DeviceHandle> {
    device: Arc<D>,
    subscription: Mutex<Option<CallbackSubscription<D>>>,
}

impl<D: DeviceHandle> DeviceEntity<D> {
    pub(crate) fn new(device: Arc<D>) -> Self {
        Self {
            device,
            subscription: Mutex::new(None),
        }
    }

    pub(crate) fn device(&self) -> &D {
        &self.device
    }

    pub(crate) fn unique_id(&self) -> UniqueId {
        UniqueId::for_switch(self.device.device_id(), self.device.switch_id())
    }

    /// `"{room} {name}"`.
    pub(crate) fn name(&self) -> String {
        format!("{} {}", self.device.room_name(), self.device.name())
    }

    pub(crate) fn device_info(&self) -> DeviceInfo {
        DeviceInfo::aliste(&self.unique_id(), self.name())
    }

    /// The device's current level. The only place the raw state is parsed.
    pub(crate) fn switch_state(&self) -> Result<SwitchState, AlisteError> {
        self.device
            .switch_state()
            .parse::<SwitchState>()
            .map_err(AlisteError::from)
    }

    /// Snapshot builder pre-filled with identity, icon and on/off state.
    pub(crate) fn snapshot_builder(
        &self,
        icon: &str,
        state: SwitchState,
    ) -> EntitySnapshotBuilder {
        EntitySnapshot::builder(self.unique_id(), self.device_info())
            .name(self.name())
            .icon(icon)
            .state(state.is_on())
    }

    /// Forward device changes to `writer` until [`detach`](Self::detach).
    ///
    /// Attaching twice replaces the earlier registration.
    pub(crate) fn attach(&self, writer: Arc<dyn StateWriter>) {
        let unique_id = self.unique_id();
        tracing::debug!(%unique_id, "subscribing to device changes");
        let callback: StateCallback = Arc::new(move || writer.write_state(&unique_id));
        let subscription = CallbackSubscription::register(Arc::clone(&self.device), callback);
        *self.lock_subscription() = Some(subscription);
    }

    pub(crate) fn detach(&self) {
        if self.lock_subscription().take().is_some() {
            tracing::debug!(unique_id = %self.unique_id(), "unsubscribed from device changes");
        }
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.lock_subscription().is_some()
    }

    fn lock_subscription(&self) -> MutexGuard<'_, Option<CallbackSubscription<D>>> {
        self.subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
