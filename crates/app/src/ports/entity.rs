//! Entity port — what every adapter entity exposes to the host.

use std::future::Future;
use std::sync::Arc;

use aliste_domain::entity::EntitySnapshot;
use aliste_domain::error::AlisteError;
use aliste_domain::id::UniqueId;
use aliste_domain::service::ServiceCall;

use crate::ports::StateWriter;

/// An adapter entity bridging one device handle into the host.
///
/// The host drives the lifecycle:
///
/// 1. [`added_to_platform`](Self::added_to_platform) — subscribe to device
///    changes, forwarding them to `writer`
/// 2. [`snapshot`](Self::snapshot) / [`handle_service_call`](Self::handle_service_call)
///    — any number of times
/// 3. [`will_remove_from_platform`](Self::will_remove_from_platform) — drop
///    the subscription
pub trait Entity: Send + Sync {
    fn unique_id(&self) -> UniqueId;

    /// Compute the current state from the device handle.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::InvalidSwitchState`] when the device reports a
    /// state that is not a number in `[0, 1]`.
    fn snapshot(&self) -> Result<EntitySnapshot, AlisteError>;

    fn added_to_platform(&self, writer: Arc<dyn StateWriter>);

    fn will_remove_from_platform(&self);

    /// Execute a host service call against the device.
    fn handle_service_call(
        &self,
        call: ServiceCall,
    ) -> impl Future<Output = Result<(), AlisteError>> + Send;
}
