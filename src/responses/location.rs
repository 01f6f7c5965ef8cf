//! Models for the AccuWeather location search endpoints.
//!
//! The location service always returns a JSON array of matches, even when a
//! query resolves to a single place. Each match describes the place's
//! political hierarchy (region, country, administrative areas), timezone
//! and geoposition, plus an optional `Details` block that is only present
//! when the request asked for it with `details=true`.

use crate::error::AccuWeatherError;
use crate::responses::null_as_empty;
use crate::types::measurement::DualMeasurement;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One location match returned by the location search endpoints.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    /// API version used to produce this record.
    pub version: i32,
    /// AccuWeather's unique key for the location, used by all point-data
    /// endpoints.
    pub key: String,
    /// What kind of place this is: "City", "Road", "Park", etc.
    #[serde(rename = "Type")]
    pub location_type: String,
    /// Sort rank among same-named locations; lower means more prominent
    /// (Berlin, Germany ranks above Berlin, NH).
    pub rank: i32,
    /// Display name in the language requested from the API.
    pub localized_name: String,
    /// Display name in English.
    pub english_name: String,
    /// Main postal code for the location.
    pub primary_postal_code: String,
    /// The AccuWeather region (continent-scale grouping).
    pub region: Region,
    /// The location's country.
    pub country: Country,
    /// Primary political subdivision: state, province, republic.
    pub administrative_area: AdministrativeArea,
    /// Timezone the location falls under.
    pub time_zone: LocationTimeZone,
    /// Position on the Earth: latitude, longitude, elevation.
    pub geo_position: GeoPosition,
    /// Whether this match is an alias (alternative name or spelling) for
    /// the requested location.
    pub is_alias: bool,
    /// Secondary administrative areas (county, parish, oblast, ...), in
    /// upstream order. Empty when upstream omits the array.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supplemental_admin_areas: Vec<SupplementalAdminArea>,
    /// Extended details, present only when the request opted in with
    /// `details=true`.
    pub details: Option<LocationDetails>,
}

/// An AccuWeather region: a continent-scale grouping such as `NAM` or
/// `EUR`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    /// Region code, e.g. `NAM`, `SAM`, `EUR`, `MEA`.
    #[serde(rename = "ID")]
    pub id: String,
    /// Region name in the requested language.
    pub localized_name: String,
    /// Region name in English.
    pub english_name: String,
}

/// A country as carried on a location match.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    /// ISO or Microsoft localization code for the country, e.g. `US`.
    #[serde(rename = "ID")]
    pub id: String,
    /// Country name in the requested language.
    pub localized_name: String,
    /// Country name in English.
    pub english_name: String,
}

/// The primary political subdivision a location belongs to.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdministrativeArea {
    /// Area identifier, usually the postal abbreviation (e.g. `WA`).
    #[serde(rename = "ID")]
    pub id: String,
    /// Area name in the requested language.
    pub localized_name: String,
    /// Area name in English.
    pub english_name: String,
    /// Subdivision scale index; 1 for primary political areas, 10+ for
    /// non-political boundaries.
    pub level: i32,
    /// What the area is called in the requested language: state, province,
    /// republic, ...
    pub localized_type: String,
    /// What the area is called in English.
    pub english_type: String,
    /// The [`Country::id`] this area belongs to.
    #[serde(rename = "CountryID")]
    pub country_id: String,
}

/// A secondary, more local administrative district, such as a county or
/// parish.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupplementalAdminArea {
    /// Subdivision scale index, as for [`AdministrativeArea::level`].
    pub level: i32,
    /// Area name in the requested language.
    pub localized_name: String,
    /// Area name in English.
    pub english_name: String,
}

/// Timezone information for a location.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationTimeZone {
    /// Timezone abbreviation, e.g. `EST`, `PDT`.
    pub code: String,
    /// IANA timezone name, e.g. `America/New_York`.
    pub name: String,
    /// Hours offset from UTC.
    pub gmt_offset: f64,
    /// Whether the location is currently observing daylight saving time.
    pub is_daylight_saving: bool,
    /// When the next UTC-offset change happens, if the location observes
    /// daylight saving time.
    pub next_offset_change: Option<DateTime<FixedOffset>>,
}

/// A location's position on the Earth.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoPosition {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
    /// Elevation relative to mean sea level, in both unit systems.
    pub elevation: DualMeasurement,
}

/// Extended location details, returned only when requested with
/// `details=true`.
///
/// Every field here is nullable upstream, so a present block with all
/// fields null stays distinguishable from an absent block
/// (`Location::details == None`).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationDetails {
    /// The location key, repeated inside the details block.
    pub key: Option<String>,
    /// ICAO code of the closest observation station.
    pub station_code: Option<String>,
    /// Hours offset between the closest station and UTC.
    pub station_gmt_offset: Option<f64>,
    /// Temperature/precipitation band map code for contour tiles.
    pub band_map: Option<String>,
    /// Source of climatology data for the location.
    pub climo: Option<String>,
    /// Closest radar site code.
    pub local_radar: Option<String>,
    /// Media region, e.g. `NE`, `SW`.
    pub media_region: Option<String>,
    /// Closest METAR reporting station.
    pub metar: Option<String>,
    /// City-level radar code.
    #[serde(rename = "NXMetro")]
    pub nx_metro: Option<String>,
    /// State-level radar code.
    #[serde(rename = "NXState")]
    pub nx_state: Option<String>,
    /// Location population.
    pub population: Option<i64>,
    /// NWS primary warning county identifier.
    pub primary_warning_county_code: Option<String>,
    /// NWS primary warning zone identifier.
    pub primary_warning_zone_code: Option<String>,
    /// Satellite map code for contour tiles.
    pub satellite: Option<String>,
    /// International synoptic identifier of the closest METAR station.
    pub synoptic: Option<String>,
    /// Closest marine reporting station.
    pub marine_station: Option<String>,
    /// Hours offset between the marine station and UTC.
    #[serde(rename = "MarineStationGMTOffset")]
    pub marine_station_gmt_offset: Option<f64>,
    /// Code identifying the city or region for video content.
    pub video_code: Option<String>,
    /// The location's television market.
    #[serde(rename = "DMA")]
    pub dma: Option<Dma>,
    /// Data sources available for this location, in upstream order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<LocationSource>,
    /// Canonical postal code for the location.
    pub canonical_postal_code: Option<String>,
    /// Canonical AccuWeather key for the location.
    pub canonical_location_key: Option<String>,
}

/// Designated Market Area: the television broadcast market a location
/// belongs to.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dma {
    /// DMA identification text.
    #[serde(rename = "ID")]
    pub id: String,
    /// DMA description in English.
    pub english_name: String,
}

/// A data source available for a location: alerts, daily forecast, hourly
/// forecast, climatology, ...
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationSource {
    /// The kind of data available, e.g. `Alerts`, `DailyForecast`.
    pub data_type: String,
    /// Where the data comes from, e.g. AccuWeather, US National Weather
    /// Service.
    pub data_source: String,
}

/// Parses a location search response: a JSON array of [`Location`]
/// records, in upstream order.
///
/// # Errors
///
/// Returns [`AccuWeatherError::LocationResponse`] when the text is not
/// valid JSON or a required field is missing or of the wrong type. The
/// wrapped [`serde_json::Error`] names the offending field and position.
pub fn parse_location_response(json: &str) -> Result<Vec<Location>, AccuWeatherError> {
    serde_json::from_str(json).map_err(AccuWeatherError::LocationResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_json(with_details: bool) -> String {
        let details = r#","Details": {
            "Key": "351409",
            "StationCode": "KBFI",
            "StationGmtOffset": -8.0,
            "BandMap": "SEA",
            "Climo": "BFI",
            "LocalRadar": "ATX",
            "MediaRegion": "NW",
            "Metar": "KBFI",
            "NXMetro": "SEA",
            "NXState": "WA",
            "Population": 737015,
            "PrimaryWarningCountyCode": "WA033",
            "PrimaryWarningZoneCode": "WAZ558",
            "Satellite": "NW",
            "Synoptic": "72793",
            "MarineStation": "WPOW1",
            "MarineStationGMTOffset": null,
            "VideoCode": "SEA",
            "DMA": {"ID": "819", "EnglishName": "Seattle-Tacoma, WA"},
            "Sources": [
                {"DataType": "Alerts", "DataSource": "US National Weather Service"},
                {"DataType": "DailyForecast", "DataSource": "AccuWeather"}
            ],
            "CanonicalPostalCode": "98101",
            "CanonicalLocationKey": "351409"
        }"#;
        format!(
            r#"{{
                "Version": 1,
                "Key": "351409",
                "Type": "City",
                "Rank": 21,
                "LocalizedName": "Seattle",
                "EnglishName": "Seattle",
                "PrimaryPostalCode": "98101",
                "Region": {{"ID": "NAM", "LocalizedName": "North America", "EnglishName": "North America"}},
                "Country": {{"ID": "US", "LocalizedName": "United States", "EnglishName": "United States"}},
                "AdministrativeArea": {{
                    "ID": "WA",
                    "LocalizedName": "Washington",
                    "EnglishName": "Washington",
                    "Level": 1,
                    "LocalizedType": "State",
                    "EnglishType": "State",
                    "CountryID": "US"
                }},
                "TimeZone": {{
                    "Code": "PST",
                    "Name": "America/Los_Angeles",
                    "GmtOffset": -8.0,
                    "IsDaylightSaving": false,
                    "NextOffsetChange": "2024-03-10T10:00:00Z"
                }},
                "GeoPosition": {{
                    "Latitude": 47.606,
                    "Longitude": -122.332,
                    "Elevation": {{
                        "Metric": {{"Value": 54.0, "Unit": "m", "UnitType": 5}},
                        "Imperial": {{"Value": 177.0, "Unit": "ft", "UnitType": 0}}
                    }}
                }},
                "IsAlias": false,
                "SupplementalAdminAreas": [
                    {{"Level": 2, "LocalizedName": "King", "EnglishName": "King"}}
                ]{}
            }}"#,
            if with_details { details } else { "" }
        )
    }

    #[test]
    fn parses_a_single_match_array() {
        let json = format!("[{}]", location_json(true));
        let locations = parse_location_response(&json).unwrap();
        assert_eq!(locations.len(), 1);
        let location = &locations[0];
        assert_eq!(location.key, "351409");
        assert_eq!(location.location_type, "City");
        assert_eq!(location.administrative_area.country_id, "US");
        assert_eq!(location.time_zone.name, "America/Los_Angeles");
        assert_eq!(location.geo_position.latitude, 47.606);
        assert_eq!(location.supplemental_admin_areas.len(), 1);
        let details = location.details.as_ref().unwrap();
        assert_eq!(details.dma.as_ref().unwrap().id, "819");
        assert_eq!(details.sources.len(), 2);
        assert_eq!(details.population, Some(737015));
        assert_eq!(details.marine_station_gmt_offset, None);
    }

    #[test]
    fn second_entry_without_details_is_explicitly_absent() {
        let json = format!("[{},{}]", location_json(true), location_json(false));
        let locations = parse_location_response(&json).unwrap();
        assert_eq!(locations.len(), 2);
        assert!(locations[0].details.is_some());
        assert!(locations[1].details.is_none());
        assert_eq!(locations[0].key, locations[1].key);
        assert_eq!(locations[0].english_name, locations[1].english_name);
    }

    // Compact single-entry fixture where the supplemental-areas fragment is
    // injectable, for the absent/null cases.
    fn minimal_location(supplemental: &str) -> String {
        format!(
            r#"[{{
                "Version": 1, "Key": "178087", "Type": "City", "Rank": 31,
                "LocalizedName": "Berlin", "EnglishName": "Berlin", "PrimaryPostalCode": "10178",
                "Region": {{"ID": "EUR", "LocalizedName": "Europe", "EnglishName": "Europe"}},
                "Country": {{"ID": "DE", "LocalizedName": "Germany", "EnglishName": "Germany"}},
                "AdministrativeArea": {{"ID": "BE", "LocalizedName": "Berlin", "EnglishName": "Berlin",
                    "Level": 1, "LocalizedType": "State", "EnglishType": "State", "CountryID": "DE"}},
                "TimeZone": {{"Code": "CET", "Name": "Europe/Berlin", "GmtOffset": 1.0,
                    "IsDaylightSaving": false, "NextOffsetChange": null}},
                "GeoPosition": {{"Latitude": 52.52, "Longitude": 13.405,
                    "Elevation": {{"Metric": {{"Value": 43.0, "Unit": "m", "UnitType": 5}},
                                   "Imperial": {{"Value": 141.0, "Unit": "ft", "UnitType": 0}}}}}},
                "IsAlias": false{}
            }}]"#,
            supplemental
        )
    }

    #[test]
    fn absent_supplemental_admin_areas_become_an_empty_sequence() {
        let locations = parse_location_response(&minimal_location("")).unwrap();
        assert!(locations[0].supplemental_admin_areas.is_empty());
        assert!(locations[0].details.is_none());
    }

    #[test]
    fn null_supplemental_admin_areas_become_an_empty_sequence() {
        let json = minimal_location(r#", "SupplementalAdminAreas": null"#);
        let locations = parse_location_response(&json).unwrap();
        assert!(locations[0].supplemental_admin_areas.is_empty());
    }

    #[test]
    fn parse_serialize_parse_is_idempotent() {
        let json = format!("[{},{}]", location_json(true), location_json(false));
        let first = parse_location_response(&json).unwrap();
        let serialized = serde_json::to_string(&first).unwrap();
        let second = parse_location_response(&serialized).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_json_is_a_structural_error() {
        let result = parse_location_response("{not json");
        assert!(matches!(result, Err(AccuWeatherError::LocationResponse(_))));
    }

    #[test]
    fn missing_required_field_is_a_structural_error() {
        // Key is required on every location record.
        let entry = location_json(false).replace(r#""Key": "351409","#, "");
        assert!(parse_location_response(&format!("[{}]", entry)).is_err());
    }
}
