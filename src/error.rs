use thiserror::Error;

/// Errors produced when an AccuWeather response cannot be parsed.
///
/// Only structural problems surface here: text that is not valid JSON, or
/// a required field that is missing or of the wrong JSON type. The wrapped
/// [`serde_json::Error`] names the offending field and its position.
/// Unrecognized enumeration codes and absent optional fields are not
/// errors; they resolve to `Unknown` sentinels and `None` respectively.
#[derive(Debug, Error)]
pub enum AccuWeatherError {
    #[error("Failed to parse location search response")]
    LocationResponse(#[source] serde_json::Error),

    #[error("Failed to parse current conditions response")]
    CurrentConditionsResponse(#[source] serde_json::Error),

    #[error("Failed to parse hourly forecast response")]
    HourlyForecastResponse(#[source] serde_json::Error),

    #[error("Failed to parse daily forecast response")]
    DailyForecastResponse(#[source] serde_json::Error),
}
