pub mod air_category;
pub mod measurement;
pub mod moon_phase;
pub mod pressure_tendency;
pub mod time;
pub mod unit_type;
pub mod weather_icon;
pub mod wind;
