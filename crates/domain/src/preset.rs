//! Fan preset modes — named speed buckets over the continuous dim level.
//!
//! | Preset | Canonical level | Reported for state `s` |
//! |--------|-----------------|------------------------|
//! | `Low` | 0.25 | `0 < s <= 0.25` |
//! | `Medium` | 0.50 | `0.25 < s <= 0.50` |
//! | `High` | 0.75 | `0.50 < s <= 0.75` |
//! | `Max` | 1.00 | `0.75 < s` |
//!
//! A state of exactly `0` maps to no preset: the hub reports nothing about
//! speed while the fan is off.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlisteError;
use crate::switch_state::SwitchState;

/// A discrete fan speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PresetMode {
    Low,
    #[default]
    Medium,
    High,
    Max,
}

impl PresetMode {
    /// Every preset, slowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Max];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Max => "Max",
        }
    }

    /// Level the device is dimmed to when this preset is selected.
    #[must_use]
    pub const fn level(self) -> SwitchState {
        match self {
            Self::Low => SwitchState::QUARTER,
            Self::Medium => SwitchState::HALF,
            Self::High => SwitchState::THREE_QUARTERS,
            Self::Max => SwitchState::FULL,
        }
    }

    /// Bucket a reported state. Thresholds are checked from the top down and
    /// each bucket includes its upper bound.
    #[must_use]
    pub fn from_state(state: SwitchState) -> Option<Self> {
        let s = state.level();
        if s > 0.75 {
            Some(Self::Max)
        } else if s > 0.5 {
            Some(Self::High)
        } else if s > 0.25 {
            Some(Self::Medium)
        } else if s > 0.0 {
            Some(Self::Low)
        } else {
            None
        }
    }

    /// Names of every preset, slowest first.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }
}

impl fmt::Display for PresetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetMode {
    type Err = AlisteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AlisteError::UnknownPresetMode(s.to_string()))
    }
}
