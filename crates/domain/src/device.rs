//! Device metadata — hub type tags and the registry info attached to entities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::UniqueId;

/// Integration domain; keys hub storage and device identifiers.
pub const DOMAIN: &str = "aliste";

/// Manufacturer reported for every device.
pub const MANUFACTURER: &str = "Aliste";

/// Model reported for every device; the hub does not expose one.
pub const MODEL: &str = "-";

/// Firmware version stamp reported for every device.
pub const SW_VERSION: &str = "20";

/// Classification the hub assigns to each switch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceType {
    Fan,
    Light,
    Switch,
    Curtain,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fan => "FAN",
            Self::Light => "LIGHT",
            Self::Switch => "SWITCH",
            Self::Curtain => "CURTAIN",
        })
    }
}

/// Device-registry record for the physical device behind an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// `(domain, unique_id)` pairs identifying the device.
    pub identifiers: Vec<(String, String)>,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub sw_version: String,
}

impl DeviceInfo {
    /// Registry info for an Aliste channel. Manufacturer, model and firmware
    /// are fixed.
    #[must_use]
    pub fn aliste(unique_id: &UniqueId, name: impl Into<String>) -> Self {
        Self {
            identifiers: vec![(DOMAIN.to_string(), unique_id.to_string())],
            name: name.into(),
            manufacturer: MANUFACTURER.to_string(),
            model: MODEL.to_string(),
            sw_version: SW_VERSION.to_string(),
        }
    }
}
