//! Defines the measurement value types shared by every AccuWeather point
//! data response: a single `{Value, Unit, UnitType}` quantity and the
//! metric/imperial pair wrapped around two of them.

use crate::types::unit_type::UnitType;
use serde::{Deserialize, Serialize};

/// A single scalar quantity together with its display unit and resolved
/// unit-type code.
///
/// `unit` is the display text exactly as sent by upstream (e.g. `"mph"`,
/// `"°C"`). It is deliberately not validated against `unit_type`: the two
/// can disagree if upstream sends inconsistent data, and that disagreement
/// is preserved rather than rejected.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Measurement {
    /// The numeric value of the quantity.
    pub value: f64,
    /// The unit as display text, taken verbatim from upstream.
    pub unit: String,
    /// The unit as a resolved [`UnitType`] code.
    pub unit_type: UnitType,
}

/// A quantity expressed in both unit systems.
///
/// Either side may be absent independently; no conversion between the two
/// is ever performed, both sides are taken verbatim from upstream.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DualMeasurement {
    /// The quantity in metric (SI) units, if present.
    pub metric: Option<Measurement>,
    /// The quantity in imperial units, if present.
    pub imperial: Option<Measurement>,
}
