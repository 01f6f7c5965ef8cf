pub mod current_conditions;
pub mod daily_forecast;
pub mod hourly_forecast;
pub mod location;

use serde::{Deserialize, Deserializer};

/// Deserializes an upstream array that may be absent or JSON-null into an
/// empty `Vec`, so consumers can always iterate.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
