//! DataMall `BusArrivalv2` response DTOs.
//!
//! Field names follow the API's PascalCase JSON. Missing top-level fields
//! default to empty so that "unknown stop" and "unknown service" can be told
//! apart from a malformed body.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Response from `BusArrivalv2`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusArrivalResponse {
    /// Echo of the requested stop. Empty when the stop is unknown.
    #[serde(default)]
    pub bus_stop_code: String,

    /// Services at the stop matching the request. Empty when the
    /// service does not call there.
    #[serde(default)]
    pub services: Vec<ArrivalService>,
}

/// One bus service at the stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArrivalService {
    #[serde(default)]
    pub service_no: String,

    /// Operator code, e.g. "SMRT" or "SBST".
    pub operator: Option<String>,

    /// Next bus.
    pub next_bus: Option<NextBus>,

    /// The one after.
    pub next_bus2: Option<NextBus>,

    /// And the one after that.
    pub next_bus3: Option<NextBus>,
}

/// Estimate for a single upcoming bus.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NextBus {
    /// Estimated arrival (ISO 8601 with offset). DataMall sends an empty
    /// string when no bus is scheduled in this slot.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub estimated_arrival: Option<DateTime<FixedOffset>>,

    pub origin_code: Option<String>,

    pub destination_code: Option<String>,

    /// Crowding: "SEA", "SDA" or "LSD".
    pub load: Option<String>,

    /// "WAB" when wheelchair accessible.
    pub feature: Option<String>,

    /// "SD", "DD" or "BD".
    #[serde(rename = "Type")]
    pub bus_type: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
