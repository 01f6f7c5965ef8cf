//! Defines the `UnitType` enum, mapping AccuWeather's numeric unit-type codes
//! to named measurement units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents the unit-type code attached to every AccuWeather measurement.
///
/// AccuWeather tags each `{Value, Unit, UnitType}` object with an integer
/// code identifying the unit the value is expressed in. This enum maps the
/// documented codes (0–22) to named variants. Codes outside the documented
/// set resolve to [`UnitType::Unknown`], which retains the raw integer so
/// nothing is lost when the upstream code table grows.
///
/// You can convert a raw integer code into this enum using
/// [`UnitType::from_code`], and recover the wire code with [`UnitType::code`].
///
/// ```rust
/// use accuweather_data::UnitType;
///
/// assert_eq!(UnitType::from_code(9), UnitType::MilesPerHour);
/// assert_eq!(UnitType::from_code(999), UnitType::Unknown(999));
/// assert_eq!(UnitType::from_code(999).code(), 999);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnitType {
    /// Code 0: feet.
    Feet,
    /// Code 1: inches.
    Inches,
    /// Code 2: miles.
    Miles,
    /// Code 3: millimeters.
    Millimeter,
    /// Code 4: centimeters.
    Centimeter,
    /// Code 5: meters.
    Meter,
    /// Code 6: kilometers.
    Kilometer,
    /// Code 7: kilometers per hour.
    KilometersPerHour,
    /// Code 8: knots.
    Knots,
    /// Code 9: miles per hour.
    MilesPerHour,
    /// Code 10: meters per second.
    MetersPerSecond,
    /// Code 11: hectopascals.
    HectoPascals,
    /// Code 12: inches of mercury.
    InchesOfMercury,
    /// Code 13: kilopascals.
    KiloPascals,
    /// Code 14: millibars.
    Millibars,
    /// Code 15: millimeters of mercury.
    MillimetersOfMercury,
    /// Code 16: pounds per square inch.
    PoundsPerSquareInch,
    /// Code 17: degrees Celsius.
    Celsius,
    /// Code 18: degrees Fahrenheit.
    Fahrenheit,
    /// Code 19: kelvin.
    Kelvin,
    /// Code 20: percent.
    Percent,
    /// Code 21: unitless floating point quantity.
    Float,
    /// Code 22: unitless integer quantity.
    Integer,
    /// Any code outside 0–22. The raw code is preserved verbatim.
    Unknown(i32),
}

impl UnitType {
    /// Resolves a raw AccuWeather unit-type code into a `UnitType`.
    ///
    /// Resolution never fails: unrecognized codes yield
    /// [`UnitType::Unknown`] carrying the raw integer, and a warning is
    /// logged since an unexpected code usually means the upstream code
    /// table gained an entry.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => UnitType::Feet,
            1 => UnitType::Inches,
            2 => UnitType::Miles,
            3 => UnitType::Millimeter,
            4 => UnitType::Centimeter,
            5 => UnitType::Meter,
            6 => UnitType::Kilometer,
            7 => UnitType::KilometersPerHour,
            8 => UnitType::Knots,
            9 => UnitType::MilesPerHour,
            10 => UnitType::MetersPerSecond,
            11 => UnitType::HectoPascals,
            12 => UnitType::InchesOfMercury,
            13 => UnitType::KiloPascals,
            14 => UnitType::Millibars,
            15 => UnitType::MillimetersOfMercury,
            16 => UnitType::PoundsPerSquareInch,
            17 => UnitType::Celsius,
            18 => UnitType::Fahrenheit,
            19 => UnitType::Kelvin,
            20 => UnitType::Percent,
            21 => UnitType::Float,
            22 => UnitType::Integer,
            other => {
                log::warn!("Unrecognized AccuWeather unit type code {}", other);
                UnitType::Unknown(other)
            }
        }
    }

    /// Returns the raw integer code for this unit type.
    ///
    /// For [`UnitType::Unknown`] this is the code as received, so
    /// serialization round-trips losslessly.
    pub fn code(&self) -> i32 {
        match self {
            UnitType::Feet => 0,
            UnitType::Inches => 1,
            UnitType::Miles => 2,
            UnitType::Millimeter => 3,
            UnitType::Centimeter => 4,
            UnitType::Meter => 5,
            UnitType::Kilometer => 6,
            UnitType::KilometersPerHour => 7,
            UnitType::Knots => 8,
            UnitType::MilesPerHour => 9,
            UnitType::MetersPerSecond => 10,
            UnitType::HectoPascals => 11,
            UnitType::InchesOfMercury => 12,
            UnitType::KiloPascals => 13,
            UnitType::Millibars => 14,
            UnitType::MillimetersOfMercury => 15,
            UnitType::PoundsPerSquareInch => 16,
            UnitType::Celsius => 17,
            UnitType::Fahrenheit => 18,
            UnitType::Kelvin => 19,
            UnitType::Percent => 20,
            UnitType::Float => 21,
            UnitType::Integer => 22,
            UnitType::Unknown(code) => *code,
        }
    }
}

impl Serialize for UnitType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for UnitType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(UnitType::from_code(i32::deserialize(deserializer)?))
    }
}
