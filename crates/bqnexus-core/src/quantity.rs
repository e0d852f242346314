//! Requested notebook size.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Number of questions requested for a notebook, always within
/// [`Quantity::MIN`, `Quantity::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 100;
    pub const DEFAULT: u32 = 20;

    /// Clamp any value into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Apply a signed step, saturating at both bounds.
    pub fn adjust(&mut self, delta: i64) {
        *self = Self::clamped((self.0 as i64).saturating_add(delta));
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::clamped(i64::deserialize(deserializer)?))
    }
}
