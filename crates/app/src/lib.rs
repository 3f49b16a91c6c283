//! # aliste-app
//!
//! Application layer — **port definitions** (traits) and the host-side
//! services that drive adapter entities.
//!
//! ## Responsibilities
//! - Define **port traits** for the collaborators the adapters consume:
//!   - `DeviceHandle` — one hub channel: identity, raw state, commands,
//!     change callbacks
//!   - `Hub` — enumerates the device handles of one configured account
//!   - `Entity` — what every adapter entity exposes to the host
//!   - `StateWriter` / `AddEntities` — host callbacks
//! - Provide `CallbackSubscription`, the scoped guard that keeps device
//!   callback registration symmetric
//! - Provide **in-process infrastructure**: `HubStore` (per-config-entry hub
//!   storage), `InProcessStateBus`, `EntityRegistry`
//!
//! ## Dependency rule
//! Depends on `aliste-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod hub_store;
pub mod ports;
pub mod services;
pub mod state_bus;
pub mod subscription;
