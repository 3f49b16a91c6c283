//! Device handle port — one switch channel owned by the hub client.
//!
//! The hub client owns and mutates the handle; adapters only hold a shared
//! `Arc` to it. All commands are forwarded as-is: retries and timeouts are the
//! client's business.

use std::future::Future;
use std::sync::Arc;

use aliste_domain::device::DeviceType;
use aliste_domain::error::AlisteError;
use aliste_domain::switch_state::SwitchState;

/// Callback invoked by a device handle whenever its state changes.
///
/// Handles identify registered callbacks by pointer (`Arc::ptr_eq`), so the
/// same `Arc` must be passed to [`DeviceHandle::remove_callback`].
pub type StateCallback = Arc<dyn Fn() + Send + Sync>;

/// One physical switch or dimmer channel exposed by the hub.
pub trait DeviceHandle: Send + Sync {
    fn device_id(&self) -> &str;

    fn switch_id(&self) -> &str;

    fn room_name(&self) -> &str;

    fn name(&self) -> &str;

    fn device_type(&self) -> DeviceType;

    /// Raw switch state as reported by the hub (a string-encoded number).
    ///
    /// Interpret it through [`SwitchState`]'s `FromStr` impl.
    fn switch_state(&self) -> String;

    /// Dim the channel to `level`.
    fn dim(&self, level: SwitchState) -> impl Future<Output = Result<(), AlisteError>> + Send;

    fn turn_on(&self) -> impl Future<Output = Result<(), AlisteError>> + Send;

    fn turn_off(&self) -> impl Future<Output = Result<(), AlisteError>> + Send;

    /// Start notifying `callback` on every state change.
    fn register_callback(&self, callback: StateCallback);

    /// Stop notifying `callback`. Unknown callbacks are ignored.
    fn remove_callback(&self, callback: &StateCallback);
}
