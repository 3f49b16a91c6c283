//! Simulated hub session.

use std::collections::HashSet;
use std::sync::Arc;

use aliste_app::ports::Hub;
use aliste_domain::id::UniqueId;
use aliste_domain::switch_state::SwitchState;

use crate::config::VirtualDeviceConfig;
use crate::device::VirtualDevice;
use crate::error::VirtualError;

/// A hub over a fixed, configured set of [`VirtualDevice`]s.
#[derive(Default)]
pub struct VirtualHub {
    devices: Vec<Arc<VirtualDevice>>,
}

impl VirtualHub {
    /// Build a hub from channel configurations, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualError::InvalidConfig`] when two channels share a
    /// unique id or an initial state is not a level in `[0, 1]`.
    pub fn from_configs(
        configs: impl IntoIterator<Item = VirtualDeviceConfig>,
    ) -> Result<Self, VirtualError> {
        let mut seen = HashSet::new();
        let mut devices = Vec::new();
        for config in configs {
            let unique_id = UniqueId::for_switch(&config.device_id, &config.switch_id);
            if let Err(err) = config.switch_state.parse::<SwitchState>() {
                return Err(VirtualError::InvalidConfig {
                    unique_id: unique_id.to_string(),
                    reason: err.to_string(),
                });
            }
            if !seen.insert(unique_id.clone()) {
                return Err(VirtualError::InvalidConfig {
                    unique_id: unique_id.to_string(),
                    reason: "duplicate channel".to_string(),
                });
            }
            devices.push(Arc::new(VirtualDevice::from(config)));
        }
        tracing::info!(count = devices.len(), "virtual hub ready");
        Ok(Self { devices })
    }

    /// Look a channel up by its unique id.
    #[must_use]
    pub fn device(&self, unique_id: &UniqueId) -> Option<Arc<VirtualDevice>> {
        self.devices
            .iter()
            .find(|device| &device.unique_id() == unique_id)
            .cloned()
    }
}

impl Hub for VirtualHub {
    type Device = VirtualDevice;

    fn devices(&self) -> Vec<Arc<VirtualDevice>> {
        self.devices.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliste_app::ports::DeviceHandle;
    use aliste_domain::device::DeviceType;

    fn config(device_id: &str, switch_id: &str, device_type: DeviceType) -> VirtualDeviceConfig {
        VirtualDeviceConfig {
            device_id: device_id.to_string(),
            switch_id: switch_id.to_string(),
            room_name: "Hall".to_string(),
            name: "Channel".to_string(),
            device_type,
            switch_state: "0".to_string(),
            offline: false,
        }
    }

    #[test]
    fn should_keep_configuration_order() {
        let hub = VirtualHub::from_configs([
            config("b", "0", DeviceType::Light),
            config("a", "1", DeviceType::Fan),
        ])
        .unwrap();

        let ids: Vec<_> = hub
            .devices()
            .iter()
            .map(|d| d.unique_id().to_string())
            .collect();
        assert_eq!(ids, vec!["b_0", "a_1"]);
    }

    #[test]
    fn should_reject_duplicate_channels() {
        let result = VirtualHub::from_configs([
            config("a", "1", DeviceType::Fan),
            config("a", "1", DeviceType::Light),
        ]);
        assert!(matches!(
            result,
            Err(VirtualError::InvalidConfig { unique_id, .. }) if unique_id == "a_1"
        ));
    }

    #[test]
    fn should_reject_out_of_range_initial_state() {
        let mut bad = config("a", "1", DeviceType::Fan);
        bad.switch_state = "1.5".to_string();
        assert!(VirtualHub::from_configs([bad]).is_err());
    }

    #[test]
    fn should_find_device_by_unique_id() {
        let hub = VirtualHub::from_configs([config("a", "1", DeviceType::Fan)]).unwrap();

        let device = hub.device(&UniqueId::from("a_1")).unwrap();
        assert_eq!(device.device_type(), DeviceType::Fan);
        assert!(hub.device(&UniqueId::from("a_2")).is_none());
    }

    #[test]
    fn should_share_handles_between_calls() {
        let hub = VirtualHub::from_configs([config("a", "1", DeviceType::Fan)]).unwrap();
        let first = hub.devices();
        let second = hub.devices();
        assert!(Arc::ptr_eq(&first[0], &second[0]));
    }

    #[test]
    fn should_start_empty_by_default() {
        assert!(VirtualHub::default().devices().is_empty());
    }
}
