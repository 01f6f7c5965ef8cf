//! Defines the wind types shared by AccuWeather observations and forecasts.
//!
//! Forecast endpoints report wind speed as a single-system [`Measurement`];
//! the current-conditions endpoint reports it as a metric/imperial
//! [`DualMeasurement`]. The two are kept as distinct named types sharing
//! one [`WindDirection`] rather than a single type with nullable branches.

use crate::types::measurement::{DualMeasurement, Measurement};
use serde::{Deserialize, Serialize};

/// Wind direction: compass degrees plus cardinal text in the requested
/// language and in English.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindDirection {
    /// Compass degrees, 0 = north, 90 = east, 180 = south, 270 = west.
    /// Out-of-range values from upstream are kept as received.
    pub degrees: i32,
    /// Cardinal direction text in the language requested from the API.
    pub localized: String,
    /// Cardinal direction text in English.
    pub english: String,
}

/// Wind as reported by forecast endpoints: single-system speed plus
/// direction.
///
/// Wind-gust payloads frequently omit the direction while still carrying a
/// speed; an absent or null `Direction` is an expected upstream quirk and
/// parses as `None`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindForecast {
    /// Wind speed with its unit and unit type.
    pub speed: Measurement,
    /// Wind direction, absent on most gust payloads.
    #[serde(default)]
    pub direction: Option<WindDirection>,
}

/// Wind as reported by the current-conditions endpoint: dual-system speed
/// plus direction.
///
/// The same gust quirk applies as for [`WindForecast`]: `Direction` may be
/// absent or null while the speed is present.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindObservation {
    /// Wind speed in both unit systems.
    pub speed: DualMeasurement,
    /// Wind direction, absent on most gust payloads.
    #[serde(default)]
    pub direction: Option<WindDirection>,
}
