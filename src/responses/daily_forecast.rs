//! Models for the AccuWeather daily (daypart) forecast endpoints.
//!
//! The root object carries one [`Headline`] plus one record per calendar
//! day (1, 5, 10, 20 or 25 days depending on the requested range). Each
//! day splits into a Day and a Night daypart sharing one
//! [`DaypartConditions`] shape, and carries solar/lunar almanac data and
//! the `AirAndPollen` entries.

use crate::error::AccuWeatherError;
use crate::responses::null_as_empty;
use crate::types::air_category::AirCategory;
use crate::types::measurement::Measurement;
use crate::types::moon_phase::MoonPhase;
use crate::types::time::TimePoint;
use crate::types::weather_icon::WeatherIcon;
use crate::types::wind::WindForecast;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The root of a daily forecast response.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyForecastResponse {
    /// The main weather story over the forecast period.
    pub headline: Headline,
    /// One forecast per calendar day, in upstream order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub daily_forecasts: Vec<DailyForecast>,
}

/// The headline: the most significant weather event over the forecast
/// period.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Headline {
    /// When the headline takes effect, as a local ISO-8601 datetime.
    pub effective_date: DateTime<FixedOffset>,
    /// The same instant as epoch seconds.
    pub effective_epoch_date: i64,
    /// Headline severity; lower numbers are more severe.
    pub severity: i32,
    /// The headline text.
    pub text: String,
    /// Headline category, e.g. "rain".
    pub category: Option<String>,
    /// When the headline period ends. Optional independently of
    /// [`Headline::epoch_end_date`]; no consistency between the two is
    /// imposed.
    pub end_date: Option<DateTime<FixedOffset>>,
    /// End of the headline period as epoch seconds.
    pub epoch_end_date: Option<i64>,
}

impl Headline {
    /// The instant the headline takes effect, in both wire
    /// representations.
    pub fn effective_at(&self) -> TimePoint {
        TimePoint::new(self.effective_date, self.effective_epoch_date)
    }
}

/// The forecast for one calendar day.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyForecast {
    /// The forecast date as a local ISO-8601 datetime.
    pub date: DateTime<FixedOffset>,
    /// The same date as epoch seconds.
    pub epoch_date: i64,
    /// Solar almanac data: sunrise and sunset.
    pub sun: Option<SunAlmanac>,
    /// Lunar almanac data: moonrise, moonset and phase.
    pub moon: Option<MoonAlmanac>,
    /// Forecast temperature extremes for the day.
    pub temperature: Option<DaypartTemperature>,
    /// RealFeel perceived temperature extremes.
    pub real_feel_temperature: Option<DaypartTemperature>,
    /// RealFeel perceived temperature extremes in the shade.
    pub real_feel_temperature_shade: Option<DaypartTemperature>,
    /// Hours of sunshine forecast for the day.
    pub hours_of_sun: Option<f64>,
    /// Airborne forecast entries (pollen, air quality, UV index), in
    /// upstream order. Entry names are not a closed set; unknown names
    /// pass through unchanged.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub air_and_pollen: Vec<AirAndPollen>,
    /// Daylight-half forecast elements.
    pub day: DaypartConditions,
    /// Nighttime-half forecast elements.
    pub night: DaypartConditions,
}

impl DailyForecast {
    /// The forecast date in both wire representations.
    pub fn date_at(&self) -> TimePoint {
        TimePoint::new(self.date, self.epoch_date)
    }
}

/// Solar almanac data for one day: rise and set, each in both wire
/// representations. Any of the four can be absent (polar day/night).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SunAlmanac {
    /// Rise time as a local ISO-8601 datetime.
    pub rise: Option<DateTime<FixedOffset>>,
    /// Rise time as epoch seconds.
    pub epoch_rise: Option<i64>,
    /// Set time as a local ISO-8601 datetime.
    pub set: Option<DateTime<FixedOffset>>,
    /// Set time as epoch seconds.
    pub epoch_set: Option<i64>,
}

/// Lunar almanac data for one day: the solar rise/set shape plus the moon
/// phase.
///
/// Upstream models this as "sun plus two fields"; here the shared shape is
/// embedded by composition and flattened back onto the same wire keys.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoonAlmanac {
    /// Moonrise and moonset, sharing the solar almanac shape.
    #[serde(flatten)]
    pub rise_set: SunAlmanac,
    /// Description of the moon phase, e.g. "Waning Gibbous".
    pub phase: Option<String>,
    /// The phase resolved from the numeric age field.
    pub age: Option<MoonPhase>,
}

/// Forecast temperature extremes for one day part or day.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DaypartTemperature {
    /// The minimum (low) temperature.
    pub minimum: Option<Measurement>,
    /// The maximum (high) temperature.
    pub maximum: Option<Measurement>,
}

/// One airborne forecast entry: pollen, air quality or UV index.
///
/// By convention the entries are named grass, mold, ragweed, tree,
/// UVIndex and AirQuality, but the set and order are not fixed and are
/// accepted as received.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AirAndPollen {
    /// Entry name, e.g. "Grass", "AirQuality".
    pub name: String,
    /// The measured or forecast value. Pollen values are parts per cubic
    /// meter; air quality and UV are unitless indices.
    pub value: Option<i32>,
    /// Category text, e.g. "Low", "Good", "Hazardous".
    pub category: Option<String>,
    /// The 1–5 category scale value.
    pub category_value: Option<AirCategory>,
    /// The pollutant measured. Populated only on air-quality entries
    /// (e.g. "Ozone"); absent on pollen entries.
    #[serde(rename = "Type")]
    pub pollutant_type: Option<String>,
}

/// The forecast elements for one 12-hour day part, used for both the Day
/// and Night halves of a [`DailyForecast`].
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DaypartConditions {
    /// The sensible weather icon for the day part.
    pub icon: WeatherIcon,
    /// Sensible weather text describing the icon.
    pub icon_phrase: String,
    /// Short description, at most 30 characters.
    pub short_phrase: Option<String>,
    /// Long description, at most 100 characters.
    pub long_phrase: Option<String>,
    /// Chance of any precipitation (POP) as a percentage.
    pub precipitation_probability: Option<f64>,
    /// Chance of a thunderstorm as a percentage.
    pub thunderstorm_probability: Option<f64>,
    /// Chance of rain as a percentage.
    pub rain_probability: Option<f64>,
    /// Chance of snow as a percentage.
    pub snow_probability: Option<f64>,
    /// Chance of sleet or freezing rain as a percentage.
    pub ice_probability: Option<f64>,
    /// Average wind forecast for the day part.
    pub wind: Option<WindForecast>,
    /// Maximum wind gust forecast for the day part.
    pub wind_gust: Option<WindForecast>,
    /// Total liquid-equivalent precipitation (QPF).
    pub total_liquid: Option<Measurement>,
    /// Rainfall accumulation.
    pub rain: Option<Measurement>,
    /// Snowfall accumulation.
    pub snow: Option<Measurement>,
    /// Sleet and freezing rain accumulation.
    pub ice: Option<Measurement>,
    /// Hours of precipitation forecast for the day part.
    pub hours_of_precipitation: Option<f64>,
    /// Hours of rain forecast for the day part.
    pub hours_of_rain: Option<f64>,
    /// Percentage of the day part forecast to have cloud cover.
    pub cloud_cover: Option<f64>,
}

/// Parses a daily forecast response: one root object with a headline and
/// the per-day records. Any number of days is accepted; validating the
/// count against the requested range is the caller's concern.
///
/// # Errors
///
/// Returns [`AccuWeatherError::DailyForecastResponse`] when the text is
/// not valid JSON or a required field is missing or of the wrong type.
pub fn parse_daily_forecast(json: &str) -> Result<DailyForecastResponse, AccuWeatherError> {
    serde_json::from_str(json).map_err(AccuWeatherError::DailyForecastResponse)
}
