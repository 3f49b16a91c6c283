//! # aliste-domain
//!
//! Pure domain model for the Aliste hub adapters.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, the workspace error enum
//! - Define the **switch state** value object (a validated `[0, 1]` dim level)
//! - Define the fan **preset** vocabulary and its level thresholds
//! - Define **device** metadata (type tags, registry info)
//! - Define **entity snapshots** (what the host platform reads back)
//! - Define **service calls** (`turn_on`, `set_preset_mode`, …)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod entity;
pub mod preset;
pub mod service;
pub mod switch_state;
