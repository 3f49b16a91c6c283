//! Entity — what the host platform reads back from an adapter.
//!
//! Adapters compute an [`EntitySnapshot`] on demand from their device handle;
//! the host stores and renders it. Snapshots are plain data and never hold a
//! reference to the device.

mod attribute_value;
mod feature;
mod snapshot;
mod state;

pub use attribute_value::AttributeValue;
pub use feature::FanFeature;
pub use snapshot::{EntitySnapshot, EntitySnapshotBuilder, Timestamp};
pub use state::EntityState;
