//! Defines the `AirCategory` enum, mapping the 1–5 category scale used by
//! the `AirAndPollen` forecast entries.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity scale for air-quality and pollen forecast entries.
///
/// Upstream documents `CategoryValue` as ranging from 1 (good conditions)
/// to 5 (bad conditions). Values outside that range resolve to
/// [`AirCategory::Unknown`] with the raw value retained.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AirCategory {
    /// Value 1: good conditions.
    Good,
    /// Value 2.
    Moderate,
    /// Value 3.
    Unhealthy,
    /// Value 4.
    VeryUnhealthy,
    /// Value 5: hazardous conditions.
    Hazardous,
    /// Any value outside 1–5, preserved verbatim.
    Unknown(i32),
}

impl AirCategory {
    /// Resolves a raw category value into an `AirCategory`. Never fails.
    pub fn from_value(value: i32) -> Self {
        match value {
            1 => AirCategory::Good,
            2 => AirCategory::Moderate,
            3 => AirCategory::Unhealthy,
            4 => AirCategory::VeryUnhealthy,
            5 => AirCategory::Hazardous,
            other => {
                log::warn!("Unrecognized AccuWeather air category value {}", other);
                AirCategory::Unknown(other)
            }
        }
    }

    /// Returns the raw category value, including retained unknown values.
    pub fn value(&self) -> i32 {
        match self {
            AirCategory::Good => 1,
            AirCategory::Moderate => 2,
            AirCategory::Unhealthy => 3,
            AirCategory::VeryUnhealthy => 4,
            AirCategory::Hazardous => 5,
            AirCategory::Unknown(value) => *value,
        }
    }
}

impl Serialize for AirCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for AirCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(AirCategory::from_value(i32::deserialize(deserializer)?))
    }
}
