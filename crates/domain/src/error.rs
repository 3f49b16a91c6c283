//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`AlisteError`]
//! via `From` when crossing a port boundary.

/// Workspace-wide error.
#[derive(Debug, thiserror::Error)]
pub enum AlisteError {
    /// A switch state or dim level could not be interpreted.
    #[error("invalid switch state")]
    InvalidSwitchState(#[from] SwitchStateError),

    /// A preset mode outside the fan vocabulary was requested.
    #[error("unknown preset mode {0:?}")]
    UnknownPresetMode(String),

    /// The entity does not support the requested service.
    #[error("service {service} is not supported by {platform} entities")]
    UnsupportedService {
        platform: &'static str,
        service: String,
    },

    /// Service data did not match the expected shape.
    #[error("invalid service data")]
    InvalidServiceData(#[source] serde_json::Error),

    /// A lookup found nothing.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// A device command failed. The original error is kept as the source.
    #[error("device command failed")]
    Device(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Why a raw switch state was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwitchStateError {
    /// The raw value is not a number.
    #[error("switch state {0:?} is not a number")]
    NotANumber(String),

    /// The value is a number but not a finite value in `[0, 1]`.
    #[error("switch state {0} is outside [0, 1]")]
    OutOfRange(f64),
}

/// A lookup by key returned nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
