//! Scoped device-callback registration.

use std::sync::Arc;

use crate::ports::{DeviceHandle, StateCallback};

/// Keeps a callback registered with a device for as long as it lives.
///
/// Dropping the subscription removes the callback, so deregistration happens
/// on every exit path, including an entity dropped without an explicit
/// detach.
pub struct CallbackSubscription<D: DeviceHandle> {
    device: Arc<D>,
    callback: StateCallback,
}

impl<D: DeviceHandle> CallbackSubscription<D> {
    /// Register `callback` with `device`.
    #[must_use]
    pub fn register(device: Arc<D>, callback: StateCallback) -> Self {
        device.register_callback(Arc::clone(&callback));
        Self { device, callback }
    }
}

impl<D: DeviceHandle> Drop for CallbackSubscription<D> {
    fn drop(&mut self) {
        self.device.remove_callback(&self.callback);
    }
}

impl<D: DeviceHandle> std::fmt::Debug for CallbackSubscription<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSubscription")
            .field("device_id", &self.device.device_id())
            .field("switch_id", &self.device.switch_id())
            .finish_non_exhaustive()
    }
}
