//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `alisted.toml` in the working directory, or at the path named by
//! `ALISTED_CONFIG`. Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use serde::Deserialize;

use aliste_adapter_virtual::{VirtualDeviceConfig, VirtualError, VirtualHub};
use aliste_domain::device::DeviceType;
use aliste_domain::id::ConfigEntryId;

const DEFAULT_PATH: &str = "alisted.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// The simulated hub account.
    pub hub: HubConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One hub account and its channels.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Config entry the hub is stored under. Generated once, when the
    /// configuration is built, if the file omits it.
    pub entry_id: ConfigEntryId,
    pub devices: Vec<VirtualDeviceConfig>,
}

impl Config {
    /// Load configuration from `alisted.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("ALISTED_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ALISTED_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn entry_id(&self) -> ConfigEntryId {
        self.hub.entry_id
    }

    /// Build the simulated hub from the configured channels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Hub`] for duplicate channels or an initial
    /// state outside `[0, 1]`.
    pub fn build_hub(&self) -> Result<VirtualHub, ConfigError> {
        Ok(VirtualHub::from_configs(self.hub.devices.iter().cloned())?)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "alisted=info,aliste=info".to_string(),
        }
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        let channel = |switch_id: &str, name: &str, device_type| VirtualDeviceConfig {
            device_id: "demo01".to_string(),
            switch_id: switch_id.to_string(),
            room_name: "Living Room".to_string(),
            name: name.to_string(),
            device_type,
            switch_state: "0".to_string(),
            offline: false,
        };
        Self {
            entry_id: ConfigEntryId::new(),
            devices: vec![
                channel("0", "Ceiling Fan", DeviceType::Fan),
                channel("1", "Lamp", DeviceType::Light),
            ],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// The hub channels are inconsistent.
    #[error("invalid hub configuration")]
    Hub(#[from] VirtualError),
}
