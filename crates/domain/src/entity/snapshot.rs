//! Point-in-time view of an adapter entity.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::device::DeviceInfo;
use crate::entity::{AttributeValue, EntityState};
use crate::id::UniqueId;

/// UTC timestamp used for `last_updated`.
pub type Timestamp = DateTime<Utc>;

/// Everything the host reads from an entity after a state write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub unique_id: UniqueId,
    pub name: String,
    pub icon: String,
    pub state: EntityState,
    pub attributes: BTreeMap<String, AttributeValue>,
    pub device_info: DeviceInfo,
    pub last_updated: Timestamp,
}

impl EntitySnapshot {
    /// Start a snapshot for the entity `unique_id`.
    #[must_use]
    pub fn builder(unique_id: UniqueId, device_info: DeviceInfo) -> EntitySnapshotBuilder {
        EntitySnapshotBuilder {
            unique_id,
            device_info,
            name: String::new(),
            icon: String::new(),
            state: EntityState::default(),
            attributes: BTreeMap::new(),
        }
    }

    /// Look up an attribute by key.
    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

/// Step-by-step builder for [`EntitySnapshot`].
#[derive(Debug)]
pub struct EntitySnapshotBuilder {
    unique_id: UniqueId,
    device_info: DeviceInfo,
    name: String,
    icon: String,
    state: EntityState,
    attributes: BTreeMap<String, AttributeValue>,
}

impl EntitySnapshotBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<EntityState>) -> Self {
        self.state = state.into();
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Stamp the snapshot with the current time.
    #[must_use]
    pub fn build(self) -> EntitySnapshot {
        EntitySnapshot {
            unique_id: self.unique_id,
            name: self.name,
            icon: self.icon,
            state: self.state,
            attributes: self.attributes,
            device_info: self.device_info,
            last_updated: Utc::now(),
        }
    }
}
