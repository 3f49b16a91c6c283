//! Port definitions — traits that adapters and the host implement.
//!
//! Ports are the boundaries between the adapter entities and the outside
//! world. They are defined here (in `app`) so that both the adapters and the
//! host-side services can depend on them without creating circular
//! dependencies.

pub mod device;
pub mod entity;
pub mod hub;
pub mod platform;
pub mod state_bus;

pub use device::{DeviceHandle, StateCallback};
pub use entity::Entity;
pub use hub::Hub;
pub use platform::{AddEntities, StateWriter};
pub use state_bus::StatePublisher;
