//! # aliste-adapter-virtual
//!
//! An in-memory stand-in for the Aliste cloud hub. Each configured channel
//! becomes a [`VirtualDevice`] whose commands update its own state and notify
//! registered callbacks, the way the real hub pushes websocket updates.
//!
//! ## Behaviour
//!
//! | Command | Resulting raw state |
//! |---------|---------------------|
//! | `dim(level)` | `level`, e.g. `"0.5"` |
//! | `turn_on` | `"1"` |
//! | `turn_off` | `"0"` |
//! | `set_external_state(raw)` | `raw`, verbatim |
//!
//! Marking a device offline makes every command fail with
//! [`VirtualError::Offline`].
//!
//! ## Dependency rule
//!
//! Depends on `aliste-app` (port traits) and `aliste-domain` only.

pub mod config;
mod device;
pub mod error;
mod hub;

pub use config::VirtualDeviceConfig;
pub use device::VirtualDevice;
pub use error::VirtualError;
pub use hub::VirtualHub;
