//! Defines pressure-tendency types: the single-letter trend code AccuWeather
//! attaches to a current observation, and the struct that pairs it with its
//! localized description.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The barometric pressure trend relative to a prior observation
/// (usually 1, 3 or 6 hours earlier).
///
/// Upstream encodes the trend as a single letter: `F` (falling), `R`
/// (rising) or `S` (steady). Each named variant carries a signed trend
/// value via [`PressureTendencyCode::trend`] (−1, +1, 0) so trends can be
/// compared or mapped to an up/down/flat indicator.
///
/// Codes outside `{F, R, S}` resolve to
/// [`PressureTendencyCode::Unrecognized`] carrying the raw string.
/// An unrecognized code reports no trend at all rather than defaulting to
/// 0, which would be indistinguishable from `Steady`.
///
/// ```rust
/// use accuweather_data::PressureTendencyCode;
///
/// assert_eq!(PressureTendencyCode::from_code("F").trend(), Some(-1));
/// assert_eq!(PressureTendencyCode::from_code("X").trend(), None);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PressureTendencyCode {
    /// Code `F`: pressure is falling. Trend −1.
    Falling,
    /// Code `R`: pressure is rising. Trend +1.
    Rising,
    /// Code `S`: pressure is steady. Trend 0.
    Steady,
    /// Any other code, preserved verbatim. Reports no trend.
    Unrecognized(String),
}

impl PressureTendencyCode {
    /// Resolves a raw tendency code into a `PressureTendencyCode`.
    ///
    /// Never fails; codes outside `{F, R, S}` yield
    /// [`PressureTendencyCode::Unrecognized`] and log a warning.
    pub fn from_code(code: &str) -> Self {
        match code {
            "F" => PressureTendencyCode::Falling,
            "R" => PressureTendencyCode::Rising,
            "S" => PressureTendencyCode::Steady,
            other => {
                log::warn!("Unrecognized AccuWeather pressure tendency code {:?}", other);
                PressureTendencyCode::Unrecognized(other.to_string())
            }
        }
    }

    /// Returns the signed trend value: −1 for falling, +1 for rising,
    /// 0 for steady, `None` for an unrecognized code.
    pub fn trend(&self) -> Option<i32> {
        match self {
            PressureTendencyCode::Falling => Some(-1),
            PressureTendencyCode::Rising => Some(1),
            PressureTendencyCode::Steady => Some(0),
            PressureTendencyCode::Unrecognized(_) => None,
        }
    }

    /// Returns the wire code letter(s) for this tendency.
    pub fn code(&self) -> &str {
        match self {
            PressureTendencyCode::Falling => "F",
            PressureTendencyCode::Rising => "R",
            PressureTendencyCode::Steady => "S",
            PressureTendencyCode::Unrecognized(raw) => raw,
        }
    }
}

impl Serialize for PressureTendencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PressureTendencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PressureTendencyCode::from_code(&raw))
    }
}

/// Pressure tendency as reported on a current observation: the resolved
/// trend code plus its localized text description.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PressureTendency {
    /// Trend description in the language requested from the API,
    /// e.g. "Falling", "Steigend".
    pub localized_text: String,
    /// The resolved single-letter trend code.
    pub code: PressureTendencyCode,
}
