//! Host-side services.
//!
//! Each service accepts port trait implementations via generic parameters,
//! keeping this layer decoupled from concrete adapters.

pub mod entity_registry;
