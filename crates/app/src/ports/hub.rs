//! Hub port — the session object for one configured Aliste account.

use std::sync::Arc;

use crate::ports::DeviceHandle;

/// Enumerates the device handles the hub client has already fetched and
/// classified.
pub trait Hub: Send + Sync {
    type Device: DeviceHandle;

    /// Every device of the account's home, in the hub's enumeration order.
    fn devices(&self) -> Vec<Arc<Self::Device>>;
}
