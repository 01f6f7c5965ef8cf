//! Defines the `WeatherIcon` enum, mapping AccuWeather's sparse icon index
//! table to named sensible-weather icons.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents an AccuWeather weather icon index.
///
/// The upstream icon table is sparse: indices 1–8, 11–26, 29–31 and 33–44
/// exist, while 9, 10, 27, 28 and 32 are intentionally unassigned. Indices
/// 33 and up are the nighttime counterparts of the daytime icons.
///
/// Resolution via [`WeatherIcon::from_code`] never fails; unassigned or
/// future indices become [`WeatherIcon::Unknown`] with the raw index kept.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WeatherIcon {
    /// Index 1.
    Sunny,
    /// Index 2.
    MostlySunny,
    /// Index 3.
    PartlySunny,
    /// Index 4.
    IntermittentClouds,
    /// Index 5.
    HazySunshine,
    /// Index 6.
    MostlyCloudy,
    /// Index 7.
    Cloudy,
    /// Index 8.
    DrearyOvercast,
    /// Index 11.
    Fog,
    /// Index 12.
    Showers,
    /// Index 13.
    MostlyCloudyShowers,
    /// Index 14.
    PartlySunnyShowers,
    /// Index 15.
    Tstorms,
    /// Index 16.
    MostlyCloudyTstorms,
    /// Index 17.
    PartlySunnyTstorms,
    /// Index 18.
    Rain,
    /// Index 19.
    Flurries,
    /// Index 20.
    MostlyCloudyFlurries,
    /// Index 21.
    PartlySunnyFlurries,
    /// Index 22.
    Snow,
    /// Index 23.
    MostlyCloudySnow,
    /// Index 24.
    Ice,
    /// Index 25.
    Sleet,
    /// Index 26.
    FreezingRain,
    /// Index 29.
    RainSnow,
    /// Index 30.
    Hot,
    /// Index 31.
    Cold,
    /// Index 33.
    ClearNight,
    /// Index 34.
    MostlyClearNight,
    /// Index 35.
    PartlyCloudyNight,
    /// Index 36.
    IntermittentCloudsNight,
    /// Index 37.
    HazyMoonlight,
    /// Index 38.
    MostlyCloudyNight,
    /// Index 39.
    PartlyCloudyShowersNight,
    /// Index 40.
    MostlyCloudyShowersNight,
    /// Index 41.
    PartlyCloudyTstormsNight,
    /// Index 42.
    MostlyCloudyTstormsNight,
    /// Index 43.
    MostlyCloudyFlurriesNight,
    /// Index 44.
    MostlyCloudySnowNight,
    /// Any index not in the table, including the intentional gaps.
    Unknown(i32),
}

impl WeatherIcon {
    /// Resolves a raw icon index into a `WeatherIcon`.
    ///
    /// Unassigned indices (including the in-range gaps 9, 10, 27, 28 and
    /// 32) resolve to [`WeatherIcon::Unknown`] carrying the raw index.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => WeatherIcon::Sunny,
            2 => WeatherIcon::MostlySunny,
            3 => WeatherIcon::PartlySunny,
            4 => WeatherIcon::IntermittentClouds,
            5 => WeatherIcon::HazySunshine,
            6 => WeatherIcon::MostlyCloudy,
            7 => WeatherIcon::Cloudy,
            8 => WeatherIcon::DrearyOvercast,
            11 => WeatherIcon::Fog,
            12 => WeatherIcon::Showers,
            13 => WeatherIcon::MostlyCloudyShowers,
            14 => WeatherIcon::PartlySunnyShowers,
            15 => WeatherIcon::Tstorms,
            16 => WeatherIcon::MostlyCloudyTstorms,
            17 => WeatherIcon::PartlySunnyTstorms,
            18 => WeatherIcon::Rain,
            19 => WeatherIcon::Flurries,
            20 => WeatherIcon::MostlyCloudyFlurries,
            21 => WeatherIcon::PartlySunnyFlurries,
            22 => WeatherIcon::Snow,
            23 => WeatherIcon::MostlyCloudySnow,
            24 => WeatherIcon::Ice,
            25 => WeatherIcon::Sleet,
            26 => WeatherIcon::FreezingRain,
            29 => WeatherIcon::RainSnow,
            30 => WeatherIcon::Hot,
            31 => WeatherIcon::Cold,
            33 => WeatherIcon::ClearNight,
            34 => WeatherIcon::MostlyClearNight,
            35 => WeatherIcon::PartlyCloudyNight,
            36 => WeatherIcon::IntermittentCloudsNight,
            37 => WeatherIcon::HazyMoonlight,
            38 => WeatherIcon::MostlyCloudyNight,
            39 => WeatherIcon::PartlyCloudyShowersNight,
            40 => WeatherIcon::MostlyCloudyShowersNight,
            41 => WeatherIcon::PartlyCloudyTstormsNight,
            42 => WeatherIcon::MostlyCloudyTstormsNight,
            43 => WeatherIcon::MostlyCloudyFlurriesNight,
            44 => WeatherIcon::MostlyCloudySnowNight,
            other => {
                log::warn!("Unrecognized AccuWeather icon index {}", other);
                WeatherIcon::Unknown(other)
            }
        }
    }

    /// Returns the raw icon index, including retained unknown indices.
    pub fn code(&self) -> i32 {
        match self {
            WeatherIcon::Sunny => 1,
            WeatherIcon::MostlySunny => 2,
            WeatherIcon::PartlySunny => 3,
            WeatherIcon::IntermittentClouds => 4,
            WeatherIcon::HazySunshine => 5,
            WeatherIcon::MostlyCloudy => 6,
            WeatherIcon::Cloudy => 7,
            WeatherIcon::DrearyOvercast => 8,
            WeatherIcon::Fog => 11,
            WeatherIcon::Showers => 12,
            WeatherIcon::MostlyCloudyShowers => 13,
            WeatherIcon::PartlySunnyShowers => 14,
            WeatherIcon::Tstorms => 15,
            WeatherIcon::MostlyCloudyTstorms => 16,
            WeatherIcon::PartlySunnyTstorms => 17,
            WeatherIcon::Rain => 18,
            WeatherIcon::Flurries => 19,
            WeatherIcon::MostlyCloudyFlurries => 20,
            WeatherIcon::PartlySunnyFlurries => 21,
            WeatherIcon::Snow => 22,
            WeatherIcon::MostlyCloudySnow => 23,
            WeatherIcon::Ice => 24,
            WeatherIcon::Sleet => 25,
            WeatherIcon::FreezingRain => 26,
            WeatherIcon::RainSnow => 29,
            WeatherIcon::Hot => 30,
            WeatherIcon::Cold => 31,
            WeatherIcon::ClearNight => 33,
            WeatherIcon::MostlyClearNight => 34,
            WeatherIcon::PartlyCloudyNight => 35,
            WeatherIcon::IntermittentCloudsNight => 36,
            WeatherIcon::HazyMoonlight => 37,
            WeatherIcon::MostlyCloudyNight => 38,
            WeatherIcon::PartlyCloudyShowersNight => 39,
            WeatherIcon::MostlyCloudyShowersNight => 40,
            WeatherIcon::PartlyCloudyTstormsNight => 41,
            WeatherIcon::MostlyCloudyTstormsNight => 42,
            WeatherIcon::MostlyCloudyFlurriesNight => 43,
            WeatherIcon::MostlyCloudySnowNight => 44,
            WeatherIcon::Unknown(code) => *code,
        }
    }
}

impl Serialize for WeatherIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for WeatherIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(WeatherIcon::from_code(i32::deserialize(deserializer)?))
    }
}
