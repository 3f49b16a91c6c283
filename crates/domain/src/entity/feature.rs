//! Capabilities a fan entity advertises to the host.

use serde::{Deserialize, Serialize};

/// One fan capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanFeature {
    SetSpeed,
    PresetMode,
    TurnOn,
    TurnOff,
}

impl FanFeature {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SetSpeed => "set_speed",
            Self::PresetMode => "preset_mode",
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
        }
    }
}
