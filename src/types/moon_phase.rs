//! Defines the `MoonPhase` enum, mapping the numeric moon-phase "age"
//! reported in daypart forecasts to named lunar phases.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The phase of the moon, resolved from the numeric `Age` field of the
/// lunar almanac block (0 = new moon through 7 = waning crescent).
///
/// Values outside 0–7 resolve to [`MoonPhase::Unknown`] with the raw
/// value retained.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoonPhase {
    /// Age 0.
    NewMoon,
    /// Age 1.
    WaxingCrescent,
    /// Age 2.
    FirstQuarter,
    /// Age 3.
    WaxingGibbous,
    /// Age 4.
    FullMoon,
    /// Age 5.
    WaningGibbous,
    /// Age 6.
    LastQuarter,
    /// Age 7.
    WaningCrescent,
    /// Any age outside 0–7, preserved verbatim.
    Unknown(i32),
}

impl MoonPhase {
    /// Resolves a raw phase age into a `MoonPhase`. Never fails.
    pub fn from_age(age: i32) -> Self {
        match age {
            0 => MoonPhase::NewMoon,
            1 => MoonPhase::WaxingCrescent,
            2 => MoonPhase::FirstQuarter,
            3 => MoonPhase::WaxingGibbous,
            4 => MoonPhase::FullMoon,
            5 => MoonPhase::WaningGibbous,
            6 => MoonPhase::LastQuarter,
            7 => MoonPhase::WaningCrescent,
            other => {
                log::warn!("Unrecognized AccuWeather moon phase age {}", other);
                MoonPhase::Unknown(other)
            }
        }
    }

    /// Returns the raw phase age, including retained unknown values.
    pub fn age(&self) -> i32 {
        match self {
            MoonPhase::NewMoon => 0,
            MoonPhase::WaxingCrescent => 1,
            MoonPhase::FirstQuarter => 2,
            MoonPhase::WaxingGibbous => 3,
            MoonPhase::FullMoon => 4,
            MoonPhase::WaningGibbous => 5,
            MoonPhase::LastQuarter => 6,
            MoonPhase::WaningCrescent => 7,
            MoonPhase::Unknown(age) => *age,
        }
    }
}

impl Serialize for MoonPhase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.age())
    }
}

impl<'de> Deserialize<'de> for MoonPhase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(MoonPhase::from_age(i32::deserialize(deserializer)?))
    }
}
