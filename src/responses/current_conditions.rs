//! Models for the AccuWeather current-conditions endpoint: a single
//! point-in-time observation snapshot.
//!
//! Unlike the forecast endpoints, every quantity here is reported in both
//! unit systems ([`DualMeasurement`]), and the snapshot carries derived
//! summaries: precipitation over trailing windows, temperature extremes
//! over trailing windows, and the barometric pressure tendency.

use crate::error::AccuWeatherError;
use crate::types::measurement::DualMeasurement;
use crate::types::pressure_tendency::PressureTendency;
use crate::types::time::TimePoint;
use crate::types::weather_icon::WeatherIcon;
use crate::types::wind::WindObservation;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single current-weather observation for a location.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentConditions {
    /// Observation time as a local ISO-8601 datetime with offset.
    pub local_observation_date_time: DateTime<FixedOffset>,
    /// Observation time as epoch seconds.
    pub epoch_time: i64,
    /// Sensible weather description in the requested language, e.g.
    /// "Mostly Sunny".
    pub weather_text: String,
    /// The sensible weather icon for this observation.
    pub weather_icon: WeatherIcon,
    /// Whether it is daytime at the location.
    pub is_day_time: bool,
    /// Observed temperature.
    pub temperature: Option<DualMeasurement>,
    /// AccuWeather RealFeel perceived temperature.
    pub real_feel_temperature: Option<DualMeasurement>,
    /// RealFeel perceived temperature in the shade.
    pub real_feel_temperature_shade: Option<DualMeasurement>,
    /// Relative humidity as a percentage.
    pub relative_humidity: Option<i32>,
    /// Dew point temperature.
    pub dew_point: Option<DualMeasurement>,
    /// Wind speed and direction.
    pub wind: Option<WindObservation>,
    /// Wind gust speed. Its direction is usually absent upstream.
    pub wind_gust: Option<WindObservation>,
    /// Ultraviolet index, 0–12.
    #[serde(rename = "UVIndex")]
    pub uv_index: Option<i32>,
    /// Description of the ultraviolet index.
    #[serde(rename = "UVIndexText")]
    pub uv_index_text: Option<String>,
    /// Horizontal visibility.
    pub visibility: Option<DualMeasurement>,
    /// What obstructs visibility, if anything: smoke, fog, dust, ...
    pub obstructions_to_visibility: Option<String>,
    /// Percentage of sky covered by clouds.
    pub cloud_cover: Option<f64>,
    /// Height of the lowest continuous cloud deck.
    pub ceiling: Option<DualMeasurement>,
    /// Barometric pressure.
    pub pressure: Option<DualMeasurement>,
    /// Pressure trend relative to a prior observation.
    pub pressure_tendency: Option<PressureTendency>,
    /// Temperature difference from the observation 24 hours earlier.
    #[serde(rename = "Past24HourTemperatureDeparture")]
    pub past_24_hour_temperature_departure: Option<DualMeasurement>,
    /// Perceived temperature from air temperature, humidity and wind.
    /// May differ from the RealFeel value.
    pub apparent_temperature: Option<DualMeasurement>,
    /// Perceived temperature on exposed skin due to wind.
    pub wind_chill_temperature: Option<DualMeasurement>,
    /// Liquid-equivalent precipitation over the past hour.
    #[serde(rename = "Precip1hr")]
    pub precip_1hr: Option<DualMeasurement>,
    /// Precipitation accumulated over trailing windows up to 24 hours.
    pub precipitation_summary: Option<PrecipitationSummary>,
    /// Temperature extremes over trailing 6/12/24-hour windows.
    pub temperature_summary: Option<TemperatureSummary>,
    /// Link to this report on the AccuWeather mobile site.
    pub mobile_link: Option<String>,
    /// Link to this report on the AccuWeather full site.
    pub link: Option<String>,
}

impl CurrentConditions {
    /// The observation instant in both of its wire representations.
    pub fn observed_at(&self) -> TimePoint {
        TimePoint::new(self.local_observation_date_time, self.epoch_time)
    }
}

/// Liquid-equivalent precipitation accumulated over trailing time windows
/// (melted snow, sleet and freezing rain included).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrecipitationSummary {
    /// Instantaneous precipitation.
    pub precipitation: Option<DualMeasurement>,
    /// Accumulation over the past hour.
    pub past_hour: Option<DualMeasurement>,
    /// Accumulation over the past 3 hours.
    #[serde(rename = "Past3Hours")]
    pub past_3_hours: Option<DualMeasurement>,
    /// Accumulation over the past 6 hours.
    #[serde(rename = "Past6Hours")]
    pub past_6_hours: Option<DualMeasurement>,
    /// Accumulation over the past 9 hours.
    #[serde(rename = "Past9Hours")]
    pub past_9_hours: Option<DualMeasurement>,
    /// Accumulation over the past 12 hours.
    #[serde(rename = "Past12Hours")]
    pub past_12_hours: Option<DualMeasurement>,
    /// Accumulation over the past 18 hours.
    #[serde(rename = "Past18Hours")]
    pub past_18_hours: Option<DualMeasurement>,
    /// Accumulation over the past 24 hours.
    #[serde(rename = "Past24Hours")]
    pub past_24_hours: Option<DualMeasurement>,
}

/// Observed temperature extremes over trailing time windows.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureSummary {
    /// Extremes over the past 6 hours.
    #[serde(rename = "Past6HourRange")]
    pub past_6_hour_range: Option<TemperatureRange>,
    /// Extremes over the past 12 hours.
    #[serde(rename = "Past12HourRange")]
    pub past_12_hour_range: Option<TemperatureRange>,
    /// Extremes over the past 24 hours.
    #[serde(rename = "Past24HourRange")]
    pub past_24_hour_range: Option<TemperatureRange>,
}

/// Maximum and minimum temperature over one trailing window.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureRange {
    /// The maximum (high) temperature over the window.
    pub maximum: Option<DualMeasurement>,
    /// The minimum (low) temperature over the window.
    pub minimum: Option<DualMeasurement>,
}

/// Parses a current-conditions response: a single JSON observation object.
///
/// # Errors
///
/// Returns [`AccuWeatherError::CurrentConditionsResponse`] when the text is
/// not valid JSON or a required field is missing or of the wrong type.
pub fn parse_current_conditions(json: &str) -> Result<CurrentConditions, AccuWeatherError> {
    serde_json::from_str(json).map_err(AccuWeatherError::CurrentConditionsResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pressure_tendency::PressureTendencyCode;
    use crate::types::unit_type::UnitType;

    const OBSERVATION: &str = r#"{
        "LocalObservationDateTime": "2024-03-09T14:07:00-05:00",
        "EpochTime": 1710011220,
        "WeatherText": "Mostly cloudy",
        "WeatherIcon": 6,
        "IsDayTime": true,
        "Temperature": {
            "Metric": {"Value": 8.9, "Unit": "C", "UnitType": 17},
            "Imperial": {"Value": 48.0, "Unit": "F", "UnitType": 18}
        },
        "RealFeelTemperature": {
            "Metric": {"Value": 5.6, "Unit": "C", "UnitType": 17},
            "Imperial": {"Value": 42.0, "Unit": "F", "UnitType": 18}
        },
        "RelativeHumidity": 62,
        "DewPoint": {
            "Metric": {"Value": 2.2, "Unit": "C", "UnitType": 17},
            "Imperial": {"Value": 36.0, "Unit": "F", "UnitType": 18}
        },
        "Wind": {
            "Direction": {"Degrees": 270, "Localized": "O", "English": "W"},
            "Speed": {
                "Metric": {"Value": 16.7, "Unit": "km/h", "UnitType": 7},
                "Imperial": {"Value": 10.4, "Unit": "mi/h", "UnitType": 9}
            }
        },
        "WindGust": {
            "Speed": {
                "Metric": {"Value": 33.3, "Unit": "km/h", "UnitType": 7},
                "Imperial": {"Value": 20.7, "Unit": "mi/h", "UnitType": 9}
            }
        },
        "UVIndex": 2,
        "UVIndexText": "Low",
        "Visibility": {
            "Metric": {"Value": 16.1, "Unit": "km", "UnitType": 6},
            "Imperial": {"Value": 10.0, "Unit": "mi", "UnitType": 2}
        },
        "ObstructionsToVisibility": "",
        "CloudCover": 85.0,
        "Ceiling": {
            "Metric": {"Value": 1524.0, "Unit": "m", "UnitType": 5},
            "Imperial": {"Value": 5000.0, "Unit": "ft", "UnitType": 0}
        },
        "Pressure": {
            "Metric": {"Value": 1017.0, "Unit": "mb", "UnitType": 14},
            "Imperial": {"Value": 30.03, "Unit": "inHg", "UnitType": 12}
        },
        "PressureTendency": {"LocalizedText": "Falling", "Code": "F"},
        "Past24HourTemperatureDeparture": {
            "Metric": {"Value": -2.2, "Unit": "C", "UnitType": 17},
            "Imperial": {"Value": -4.0, "Unit": "F", "UnitType": 18}
        },
        "ApparentTemperature": {
            "Metric": {"Value": 10.0, "Unit": "C", "UnitType": 17},
            "Imperial": {"Value": 50.0, "Unit": "F", "UnitType": 18}
        },
        "WindChillTemperature": {
            "Metric": {"Value": 5.6, "Unit": "C", "UnitType": 17},
            "Imperial": {"Value": 42.0, "Unit": "F", "UnitType": 18}
        },
        "Precip1hr": {
            "Metric": {"Value": 0.4, "Unit": "mm", "UnitType": 3},
            "Imperial": {"Value": 0.02, "Unit": "in", "UnitType": 1}
        },
        "PrecipitationSummary": {
            "Precipitation": {
                "Metric": {"Value": 0.4, "Unit": "mm", "UnitType": 3},
                "Imperial": {"Value": 0.02, "Unit": "in", "UnitType": 1}
            },
            "PastHour": {
                "Metric": {"Value": 0.4, "Unit": "mm", "UnitType": 3},
                "Imperial": {"Value": 0.02, "Unit": "in", "UnitType": 1}
            },
            "Past3Hours": {
                "Metric": {"Value": 1.2, "Unit": "mm", "UnitType": 3},
                "Imperial": {"Value": 0.05, "Unit": "in", "UnitType": 1}
            },
            "Past6Hours": {
                "Metric": {"Value": 1.2, "Unit": "mm", "UnitType": 3},
                "Imperial": {"Value": 0.05, "Unit": "in", "UnitType": 1}
            },
            "Past9Hours": {
                "Metric": {"Value": 1.2, "Unit": "mm", "UnitType": 3},
                "Imperial": {"Value": 0.05, "Unit": "in", "UnitType": 1}
            },
            "Past12Hours": {
                "Metric": {"Value": 2.0, "Unit": "mm", "UnitType": 3},
                "Imperial": {"Value": 0.08, "Unit": "in", "UnitType": 1}
            },
            "Past18Hours": {
                "Metric": {"Value": 2.0, "Unit": "mm", "UnitType": 3},
                "Imperial": {"Value": 0.08, "Unit": "in", "UnitType": 1}
            },
            "Past24Hours": {
                "Metric": {"Value": 2.5, "Unit": "mm", "UnitType": 3},
                "Imperial": {"Value": 0.1, "Unit": "in", "UnitType": 1}
            }
        },
        "TemperatureSummary": {
            "Past6HourRange": {
                "Minimum": {
                    "Metric": {"Value": 6.1, "Unit": "C", "UnitType": 17},
                    "Imperial": {"Value": 43.0, "Unit": "F", "UnitType": 18}
                },
                "Maximum": {
                    "Metric": {"Value": 9.4, "Unit": "C", "UnitType": 17},
                    "Imperial": {"Value": 49.0, "Unit": "F", "UnitType": 18}
                }
            },
            "Past12HourRange": {
                "Minimum": {
                    "Metric": {"Value": 4.4, "Unit": "C", "UnitType": 17},
                    "Imperial": {"Value": 40.0, "Unit": "F", "UnitType": 18}
                },
                "Maximum": {
                    "Metric": {"Value": 9.4, "Unit": "C", "UnitType": 17},
                    "Imperial": {"Value": 49.0, "Unit": "F", "UnitType": 18}
                }
            },
            "Past24HourRange": {
                "Minimum": {
                    "Metric": {"Value": 4.4, "Unit": "C", "UnitType": 17},
                    "Imperial": {"Value": 40.0, "Unit": "F", "UnitType": 18}
                },
                "Maximum": {
                    "Metric": {"Value": 11.1, "Unit": "C", "UnitType": 17},
                    "Imperial": {"Value": 52.0, "Unit": "F", "UnitType": 18}
                }
            }
        },
        "MobileLink": "http://www.accuweather.com/en/us/seattle-wa/98101/current-weather/351409?lang=en-us",
        "Link": "http://www.accuweather.com/en/us/seattle-wa/98101/current-weather/351409?lang=en-us"
    }"#;

    #[test]
    fn parses_a_full_observation() {
        let observation = parse_current_conditions(OBSERVATION).unwrap();
        assert_eq!(observation.weather_icon, WeatherIcon::MostlyCloudy);
        assert_eq!(observation.relative_humidity, Some(62));
        assert_eq!(observation.uv_index, Some(2));
        let temperature = observation.temperature.as_ref().unwrap();
        assert_eq!(temperature.metric.as_ref().unwrap().unit_type, UnitType::Celsius);
        assert_eq!(temperature.imperial.as_ref().unwrap().value, 48.0);
        let summary = observation.precipitation_summary.as_ref().unwrap();
        assert_eq!(
            summary.past_24_hours.as_ref().unwrap().metric.as_ref().unwrap().value,
            2.5
        );
        let ranges = observation.temperature_summary.as_ref().unwrap();
        let past_24 = ranges.past_24_hour_range.as_ref().unwrap();
        assert_eq!(
            past_24.maximum.as_ref().unwrap().imperial.as_ref().unwrap().value,
            52.0
        );
    }

    #[test]
    fn observed_at_preserves_both_time_representations() {
        let observation = parse_current_conditions(OBSERVATION).unwrap();
        let at = observation.observed_at();
        assert_eq!(at.epoch, 1710011220);
        assert_eq!(at.local.to_rfc3339(), "2024-03-09T14:07:00-05:00");
    }

    #[test]
    fn wind_gust_without_direction_is_not_an_error() {
        let observation = parse_current_conditions(OBSERVATION).unwrap();
        let gust = observation.wind_gust.as_ref().unwrap();
        assert!(gust.direction.is_none());
        assert_eq!(gust.speed.metric.as_ref().unwrap().value, 33.3);
        // The regular wind block still carries its direction.
        let wind = observation.wind.as_ref().unwrap();
        assert_eq!(wind.direction.as_ref().unwrap().degrees, 270);
    }

    #[test]
    fn pressure_tendency_resolves_falling_to_minus_one() {
        let observation = parse_current_conditions(OBSERVATION).unwrap();
        let tendency = observation.pressure_tendency.as_ref().unwrap();
        assert_eq!(tendency.localized_text, "Falling");
        assert_eq!(tendency.code, PressureTendencyCode::Falling);
        assert_eq!(tendency.code.trend(), Some(-1));
    }

    #[test]
    fn parse_serialize_parse_is_idempotent() {
        let first = parse_current_conditions(OBSERVATION).unwrap();
        let serialized = serde_json::to_string(&first).unwrap();
        let second = parse_current_conditions(&serialized).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn array_input_is_a_structural_error() {
        // The point-data endpoint yields a single object, not an array.
        let wrapped = format!("[{}]", OBSERVATION);
        assert!(matches!(
            parse_current_conditions(&wrapped),
            Err(AccuWeatherError::CurrentConditionsResponse(_))
        ));
    }
}
