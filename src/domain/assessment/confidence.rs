//! Confidence value object (65-95 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heuristic confidence in a recommendation, always within 65..=95.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Confidence(u8);

impl Confidence {
    /// Lowest confidence ever reported.
    pub const MIN: Self = Self(65);

    /// Highest confidence ever reported.
    pub const MAX: Self = Self(95);

    /// Creates a Confidence, clamping into the reportable range.
    pub fn new(value: u32) -> Self {
        let clamped = value.clamp(Self::MIN.0 as u32, Self::MAX.0 as u32);
        Self(clamped as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u32> for Confidence {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for u32 {
    fn from(confidence: Confidence) -> Self {
        u32::from(confidence.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
