//! Declarative description of simulated channels.

use serde::Deserialize;

use aliste_domain::device::DeviceType;

/// One simulated hub channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VirtualDeviceConfig {
    pub device_id: String,
    pub switch_id: String,
    pub room_name: String,
    pub name: String,
    pub device_type: DeviceType,
    /// Initial raw state, `"0"` when omitted.
    #[serde(default = "default_switch_state")]
    pub switch_state: String,
    /// Start the device offline.
    #[serde(default)]
    pub offline: bool,
}

fn default_switch_state() -> String {
    "0".to_string()
}
