//! Defines `TimePoint`, the dual representation AccuWeather uses for every
//! timestamp: a local ISO-8601 datetime with offset plus epoch seconds.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A timestamp carried in both of its wire representations.
///
/// Upstream sends every instant twice: as an ISO-8601 local datetime with
/// the location's UTC offset, and as epoch seconds. Both are preserved as
/// received; neither is recomputed from the other, since the local offset
/// reflects the location at observation time and need not match the
/// parsing environment.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct TimePoint {
    /// The local datetime with the location's UTC offset.
    pub local: DateTime<FixedOffset>,
    /// Seconds since 1970-01-01T00:00:00Z.
    pub epoch: i64,
}

impl TimePoint {
    /// Pairs a local datetime with its epoch representation.
    pub fn new(local: DateTime<FixedOffset>, epoch: i64) -> Self {
        TimePoint { local, epoch }
    }
}
