/// Domain models for the application
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Substituted for any moon event the upstream day listing does not contain.
pub const NOT_AVAILABLE: &str = "Not available";

/// Shown when the picture of the day cannot be fetched.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/100";

/// Query string accepted by `/api/moon-phase`
#[derive(Debug, Default, PartialEq)]
pub struct MoonPhaseQuery {
    pub date: Option<String>,
}

impl MoonPhaseQuery {
    /// Build from raw query pairs; a repeated `date` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let date = pairs
            .into_iter()
            .find(|(key, _)| key == "date")
            .map(|(_, value)| value);
        Self { date }
    }
}

/// USNO `rstt/oneday` payload, reduced to what the service reads
#[derive(Debug, Clone, Deserialize)]
pub struct RsttResponse {
    pub properties: RsttProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RsttProperties {
    pub data: RsttData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RsttData {
    pub curphase: String,
    pub fracillum: Illumination,
    #[serde(default)]
    pub moondata: Vec<PhenomenonTime>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl RsttData {
    /// Calendar day the upstream computed the listing for, if it reported one.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }

    /// UTC time of the first listed occurrence of `event`.
    ///
    /// `None` when the event is absent or its first entry carries no time.
    pub fn first_time_of(&self, event: MoonEvent) -> Option<&str> {
        self.moondata
            .iter()
            .find(|p| p.phen == event.label())
            .and_then(|p| p.time.as_deref())
    }
}

/// One `{phen, time}` entry of the moon listing
#[derive(Debug, Clone, Deserialize)]
pub struct PhenomenonTime {
    pub phen: String,
    pub time: Option<String>,
}

/// Illuminated fraction exactly as the upstream reported it (e.g. `"93%"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Illumination {
    Text(String),
    Number(serde_json::Number),
}

/// Moon events surfaced in the response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonEvent {
    Rise,
    Set,
    UpperTransit,
}

impl MoonEvent {
    pub fn label(self) -> &'static str {
        match self {
            MoonEvent::Rise => "Rise",
            MoonEvent::Set => "Set",
            MoonEvent::UpperTransit => "Upper Transit",
        }
    }
}

/// NASA APOD payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApodResponse {
    pub url: Option<String>,
}

/// Aggregated moon phase record returned to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonPhaseResponse {
    pub current_phase: String,
    pub fractional_illumination: Illumination,
    pub moon_rise_time: String,
    pub moon_set_time: String,
    pub moon_transit_time: String,
    pub image_url: String,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
