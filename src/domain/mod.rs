/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::is_iso_date;

/// Kind of reading carried by an environmental metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    WaterLevel,
    Temperature,
    Rainfall,
    WindSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Safe,
    Caution,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub value: f64,
    pub direction: TrendDirection,
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Snapshot of a single sensor reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalMetric {
    pub id: String,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub value: f64,
    pub unit: String,
    pub location: String,
    pub district: String,
    pub division: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
}

/// Active hazard alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub location: String,
    pub district: String,
    pub division: String,
    pub description: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Per-district summary shown in the region panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionData {
    pub name: String,
    pub division: String,
    pub population: String,
    pub elevation: String,
    pub risk_level: RiskLevel,
    pub water_level: String,
    pub rainfall: String,
    pub alerts: u32,
    pub coordinates: Coordinates,
}

/// One month of the yearly climate series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateDataPoint {
    pub month: String,
    pub temperature: f64,
    pub rainfall: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

/// Row of the district overview table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRow {
    pub district: String,
    pub water_level: String,
    pub rainfall: String,
    pub status: String,
    pub division: String,
}

/// Satellite collections the catalog search understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Collection {
    #[serde(rename = "sentinel-2-l2a")]
    Sentinel2L2a,
    #[serde(rename = "sentinel-1-grd")]
    Sentinel1Grd,
    #[serde(rename = "landsat-c2-l2")]
    LandsatC2L2,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Sentinel2L2a,
        Collection::Sentinel1Grd,
        Collection::LandsatC2L2,
    ];

    /// Catalog identifier of the collection
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Sentinel2L2a => "sentinel-2-l2a",
            Collection::Sentinel1Grd => "sentinel-1-grd",
            Collection::LandsatC2L2 => "landsat-c2-l2",
        }
    }

    /// Only Sentinel-2 items expose `eo:cloud_cover` for filtering.
    pub fn supports_cloud_cover(&self) -> bool {
        matches!(self, Collection::Sentinel2L2a)
    }
}

impl TryFrom<String> for Collection {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| {
                let known: Vec<_> = Collection::ALL.iter().map(|c| c.as_str()).collect();
                format!(
                    "collection: expected one of {}, got \"{}\"",
                    known.join(", "),
                    value
                )
            })
    }
}

/// Caller-facing satellite search parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteSearchRequest {
    pub collection: Collection,
    pub start_date: String,
    pub end_date: String,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_cover: Option<f64>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<u32>,
}

/// Optional field that may be omitted but never sent as `null`
fn present_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl SatelliteSearchRequest {
    /// Reject out-of-range or malformed fields. Nothing is clamped.
    pub fn validate(&self) -> Result<(), String> {
        if !is_iso_date(&self.start_date) {
            return Err(format!(
                "startDate: expected YYYY-MM-DD, got \"{}\"",
                self.start_date
            ));
        }
        if !is_iso_date(&self.end_date) {
            return Err(format!(
                "endDate: expected YYYY-MM-DD, got \"{}\"",
                self.end_date
            ));
        }
        if let Some(cc) = self.cloud_cover {
            if !(0.0..=100.0).contains(&cc) {
                return Err(format!("cloudCover: must be between 0 and 100, got {}", cc));
            }
        }
        if let Some(limit) = self.limit {
            if !(1..=100).contains(&limit) {
                return Err(format!("limit: must be between 1 and 100, got {}", limit));
            }
        }
        Ok(())
    }
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
