//! Typed models for AccuWeather's location, current-conditions, hourly
//! forecast and daily (daypart) forecast JSON responses.
//!
//! This crate is the deserialization and validation layer only: it turns
//! raw JSON text fetched elsewhere into strongly typed, immutable records,
//! and serializes those records back to the same wire shape. Fetching,
//! authentication and caching are the caller's concern.
//!
//! Parsing is pure and stateless; every parse call is independent and safe
//! to run concurrently. Structural problems (invalid JSON, missing
//! required fields) fail the whole parse with an [`AccuWeatherError`];
//! unrecognized enumeration codes and absent optional fields never do —
//! they resolve to `Unknown` sentinels carrying the raw code, and to
//! `None` or empty sequences.
//!
//! ```rust
//! use accuweather_data::{parse_hourly_forecast, UnitType};
//!
//! let json = r#"[{
//!     "DateTime": "2024-03-09T15:00:00-05:00",
//!     "EpochDateTime": 1710014400,
//!     "IconPhrase": "Mostly cloudy",
//!     "WeatherIcon": 6,
//!     "Temperature": {"Value": 8.9, "Unit": "C", "UnitType": 17}
//! }]"#;
//!
//! let hours = parse_hourly_forecast(json).unwrap();
//! assert_eq!(hours[0].temperature.as_ref().unwrap().unit_type, UnitType::Celsius);
//! ```

mod error;
mod responses;
mod types;

pub use error::AccuWeatherError;

pub use responses::current_conditions::*;
pub use responses::daily_forecast::*;
pub use responses::hourly_forecast::*;
pub use responses::location::*;

pub use types::air_category::AirCategory;
pub use types::measurement::{DualMeasurement, Measurement};
pub use types::moon_phase::MoonPhase;
pub use types::pressure_tendency::{PressureTendency, PressureTendencyCode};
pub use types::time::TimePoint;
pub use types::unit_type::UnitType;
pub use types::weather_icon::WeatherIcon;
pub use types::wind::{WindDirection, WindForecast, WindObservation};
