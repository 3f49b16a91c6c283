//! Switch state — the continuous dim level a hub reports for one channel.
//!
//! Hubs transmit the level as a string-encoded number. [`SwitchState`] is the
//! single place where that string is interpreted; anything that is not a
//! finite number in `[0, 1]` is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SwitchStateError;

/// A validated dim level in `[0, 1]`. `0` means off.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SwitchState(f64);

impl SwitchState {
    pub const OFF: Self = Self(0.0);
    pub const QUARTER: Self = Self(0.25);
    pub const HALF: Self = Self(0.5);
    pub const THREE_QUARTERS: Self = Self(0.75);
    pub const FULL: Self = Self(1.0);

    /// Validate a numeric level.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchStateError::OutOfRange`] for NaN, infinities, and
    /// values outside `[0, 1]`.
    pub fn from_level(level: f64) -> Result<Self, SwitchStateError> {
        if level.is_finite() && (0.0..=1.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(SwitchStateError::OutOfRange(level))
        }
    }

    /// Convert a `0..=100` percentage into a level.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchStateError::OutOfRange`] when `percentage > 100`.
    pub fn from_percentage(percentage: u8) -> Result<Self, SwitchStateError> {
        Self::from_level(f64::from(percentage) / 100.0)
    }

    #[must_use]
    pub fn level(self) -> f64 {
        self.0
    }

    /// Level scaled to `[0, 100]`.
    #[must_use]
    pub fn percentage(self) -> f64 {
        self.0 * 100.0
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        self.0 > 0.0
    }
}

impl FromStr for SwitchState {
    type Err = SwitchStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: f64 = s
            .trim()
            .parse()
            .map_err(|_| SwitchStateError::NotANumber(s.to_string()))?;
        Self::from_level(level)
    }
}

impl TryFrom<f64> for SwitchState {
    type Error = SwitchStateError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_level(value)
    }
}

impl From<SwitchState> for f64 {
    fn from(value: SwitchState) -> Self {
        value.0
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
