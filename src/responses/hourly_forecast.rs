//! Models for the AccuWeather hourly forecast endpoints: an ordered array
//! of per-hour records.
//!
//! Every quantity here is single-system ([`Measurement`], not
//! [`DualMeasurement`](crate::DualMeasurement)): the endpoint returns only
//! the unit system requested in the query. The array length follows the
//! requested range (1, 12, 24, 72 or 120 hours) and is accepted as-is.

use crate::error::AccuWeatherError;
use crate::types::measurement::Measurement;
use crate::types::time::TimePoint;
use crate::types::weather_icon::WeatherIcon;
use crate::types::wind::WindForecast;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The forecast for a single hour.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HourlyForecast {
    /// The hour this forecast is valid for, as a local ISO-8601 datetime.
    pub date_time: DateTime<FixedOffset>,
    /// The same hour as epoch seconds.
    pub epoch_date_time: i64,
    /// Sensible weather text describing the icon, in the requested
    /// language.
    pub icon_phrase: String,
    /// The sensible weather icon for the hour.
    pub weather_icon: WeatherIcon,
    /// Forecast temperature.
    pub temperature: Option<Measurement>,
    /// AccuWeather RealFeel perceived temperature.
    pub real_feel_temperature: Option<Measurement>,
    /// Wet bulb temperature.
    pub wet_bulb_temperature: Option<Measurement>,
    /// Dew point temperature.
    pub dew_point: Option<Measurement>,
    /// Wind speed and direction.
    pub wind: Option<WindForecast>,
    /// Wind gust speed. Its direction is usually absent upstream.
    pub wind_gust: Option<WindForecast>,
    /// Relative humidity as a percentage.
    pub relative_humidity: Option<f64>,
    /// Horizontal visibility.
    pub visibility: Option<Measurement>,
    /// Height of the lowest cloud deck.
    pub ceiling: Option<Measurement>,
    /// Ultraviolet index, 0–12.
    #[serde(rename = "UVIndex")]
    pub uv_index: Option<f64>,
    /// Description of the ultraviolet index.
    #[serde(rename = "UVIndexText")]
    pub uv_index_text: Option<String>,
    /// Chance of any precipitation (POP) as a percentage.
    pub precipitation_probability: Option<f64>,
    /// Chance of rain (excluding frozen precipitation) as a percentage.
    pub rain_probability: Option<f64>,
    /// Chance of snow as a percentage.
    pub snow_probability: Option<f64>,
    /// Chance of sleet or freezing rain as a percentage.
    pub ice_probability: Option<f64>,
    /// Total liquid-equivalent accumulation for the hour.
    pub total_liquid: Option<Measurement>,
    /// Rainfall accumulation for the hour.
    pub rain: Option<Measurement>,
    /// Snowfall accumulation for the hour.
    pub snow: Option<Measurement>,
    /// Sleet and freezing rain accumulation for the hour.
    pub ice: Option<Measurement>,
    /// Percentage of the hour forecast to be cloudy.
    pub cloud_cover: Option<f64>,
}

impl HourlyForecast {
    /// The forecast hour in both of its wire representations.
    pub fn valid_at(&self) -> TimePoint {
        TimePoint::new(self.date_time, self.epoch_date_time)
    }
}

/// Parses an hourly forecast response: a JSON array of per-hour records in
/// upstream order. Any length is accepted; validating the count against
/// the requested range is the caller's concern.
///
/// # Errors
///
/// Returns [`AccuWeatherError::HourlyForecastResponse`] when the text is
/// not valid JSON or a required field is missing or of the wrong type.
pub fn parse_hourly_forecast(json: &str) -> Result<Vec<HourlyForecast>, AccuWeatherError> {
    serde_json::from_str(json).map_err(AccuWeatherError::HourlyForecastResponse)
}
