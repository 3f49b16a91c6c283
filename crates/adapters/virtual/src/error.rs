//! Virtual hub error types.

use aliste_domain::error::AlisteError;

/// Errors raised by simulated devices.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// The device was marked offline and rejects commands.
    #[error("device {unique_id} is offline")]
    Offline { unique_id: String },

    /// A configured device could not be built.
    #[error("invalid device configuration for {unique_id}: {reason}")]
    InvalidConfig { unique_id: String, reason: String },
}

impl VirtualError {
    /// Convert into [`AlisteError::Device`] for propagation across port
    /// boundaries.
    pub fn into_domain(self) -> AlisteError {
        AlisteError::Device(Box::new(self))
    }
}

impl From<VirtualError> for AlisteError {
    fn from(err: VirtualError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_offline_error() {
        let err = VirtualError::Offline {
            unique_id: "abc_1".to_string(),
        };
        assert_eq!(err.to_string(), "device abc_1 is offline");
    }

    #[test]
    fn should_convert_into_device_error_keeping_source() {
        let err: AlisteError = VirtualError::Offline {
            unique_id: "abc_1".to_string(),
        }
        .into();
        let AlisteError::Device(source) = err else {
            panic!("expected a device error");
        };
        assert!(source.downcast_ref::<VirtualError>().is_some());
    }
}
