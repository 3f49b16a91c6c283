//! Service — a command the host dispatches to one entity.
//!
//! The host addresses services by name (`turn_on`, `set_preset_mode`, …) and
//! passes loosely-typed JSON data. [`ServiceCall::from_parts`] turns that into
//! a typed call so adapters never look at raw JSON.

use serde::Deserialize;

use crate::error::AlisteError;

/// A typed service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    /// Turn on. Fans honour `preset_mode` first, then `percentage`; lights
    /// ignore both. `speed` is a legacy argument kept for compatibility.
    TurnOn {
        speed: Option<String>,
        percentage: Option<u8>,
        preset_mode: Option<String>,
    },
    TurnOff,
    SetPercentage(u8),
    SetPresetMode(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TurnOnData {
    speed: Option<String>,
    percentage: Option<u8>,
    preset_mode: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PercentageData {
    percentage: u8,
}

#[derive(Debug, Deserialize)]
struct PresetModeData {
    preset_mode: String,
}

impl ServiceCall {
    /// Plain `turn_on` with no arguments.
    #[must_use]
    pub fn turn_on() -> Self {
        Self::TurnOn {
            speed: None,
            percentage: None,
            preset_mode: None,
        }
    }

    /// Parse a service name and its JSON data.
    ///
    /// A `null` payload is treated as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::UnsupportedService`] for an unknown service name
    /// and [`AlisteError::InvalidServiceData`] when the data does not fit.
    pub fn from_parts(service: &str, data: serde_json::Value) -> Result<Self, AlisteError> {
        let data = if data.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            data
        };
        match service {
            "turn_on" => {
                let d: TurnOnData = parse(data)?;
                Ok(Self::TurnOn {
                    speed: d.speed,
                    percentage: d.percentage,
                    preset_mode: d.preset_mode,
                })
            }
            "turn_off" => Ok(Self::TurnOff),
            "set_percentage" => {
                parse::<PercentageData>(data).map(|d| Self::SetPercentage(d.percentage))
            }
            "set_preset_mode" => {
                parse::<PresetModeData>(data).map(|d| Self::SetPresetMode(d.preset_mode))
            }
            other => Err(AlisteError::UnsupportedService {
                platform: "aliste",
                service: other.to_string(),
            }),
        }
    }

    /// Service name as the host addresses it.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TurnOn { .. } => "turn_on",
            Self::TurnOff => "turn_off",
            Self::SetPercentage(_) => "set_percentage",
            Self::SetPresetMode(_) => "set_preset_mode",
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(data: serde_json::Value) -> Result<T, AlisteError> {
    serde_json::from_value(data).map_err(AlisteError::InvalidServiceData)
}
