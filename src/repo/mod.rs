/// Repository layer for environmental reference data.
///
/// Every table is rebuilt from literals on each call; nothing is cached or
/// shared between requests.
use crate::domain::{
    Alert, AlertSeverity, ClimateDataPoint, Coordinates, DistrictRow, EnvironmentalMetric,
    MetricType, RegionData, RiskLevel, Severity, Trend, TrendDirection,
};
use crate::utils::minutes_ago;
use chrono::{DateTime, Utc};

/// Environmental data repository
#[derive(Clone, Default)]
pub struct EnvironmentRepo;

impl EnvironmentRepo {
    pub fn new() -> Self {
        Self
    }

    /// Current sensor readings, timestamped relative to now
    pub fn current_metrics(&self) -> Vec<EnvironmentalMetric> {
        self.current_metrics_at(Utc::now())
    }

    pub fn current_metrics_at(&self, now: DateTime<Utc>) -> Vec<EnvironmentalMetric> {
        vec![
            metric(
                "1",
                MetricType::WaterLevel,
                6.2,
                "m",
                "Brahmaputra River, Gazipur",
                ("Gazipur", "Dhaka"),
                minutes_ago(now, 120),
                Severity::Caution,
                (12.0, TrendDirection::Up),
            ),
            metric(
                "2",
                MetricType::WindSpeed,
                45.0,
                "km/h",
                "Cox's Bazar",
                ("Cox's Bazar", "Chittagong"),
                minutes_ago(now, 30),
                Severity::Critical,
                (18.0, TrendDirection::Up),
            ),
            metric(
                "3",
                MetricType::Temperature,
                32.0,
                "°C",
                "Dhaka",
                ("Dhaka", "Dhaka"),
                minutes_ago(now, 60),
                Severity::Safe,
                (3.0, TrendDirection::Down),
            ),
            metric(
                "4",
                MetricType::Rainfall,
                145.0,
                "mm",
                "Sylhet",
                ("Sylhet", "Sylhet"),
                minutes_ago(now, 180),
                Severity::Caution,
                (25.0, TrendDirection::Up),
            ),
        ]
    }

    /// Active alerts in insertion order
    pub fn active_alerts(&self) -> Vec<Alert> {
        self.active_alerts_at(Utc::now())
    }

    pub fn active_alerts_at(&self, now: DateTime<Utc>) -> Vec<Alert> {
        vec![
            Alert {
                id: "1".into(),
                severity: AlertSeverity::Critical,
                alert_type: "Flood Warning".into(),
                location: "Gazipur District".into(),
                district: "Gazipur".into(),
                division: "Dhaka".into(),
                description: "Water level rising rapidly in Brahmaputra River. Evacuation recommended for low-lying areas.".into(),
                timestamp: minutes_ago(now, 15),
                coordinates: Some(Coordinates { lat: 24.0, lon: 90.4 }),
            },
            Alert {
                id: "2".into(),
                severity: AlertSeverity::High,
                alert_type: "Cyclone Alert".into(),
                location: "Cox's Bazar".into(),
                district: "Cox's Bazar".into(),
                division: "Chittagong".into(),
                description: "Tropical cyclone approaching coastal areas. Wind speed 85 km/h expected within 24 hours.".into(),
                timestamp: minutes_ago(now, 60),
                coordinates: Some(Coordinates { lat: 21.4, lon: 92.0 }),
            },
            Alert {
                id: "3".into(),
                severity: AlertSeverity::Medium,
                alert_type: "Heavy Rainfall".into(),
                location: "Sylhet Division".into(),
                district: "Sylhet".into(),
                division: "Sylhet".into(),
                description: "Continuous heavy rainfall expected for next 48 hours. Flash flood risk in hilly areas.".into(),
                timestamp: minutes_ago(now, 180),
                coordinates: Some(Coordinates { lat: 24.9, lon: 91.9 }),
            },
        ]
    }

    /// Region lookup by district name, case-insensitive exact match
    pub fn region(&self, district: &str) -> Option<RegionData> {
        let key = district.to_lowercase();
        let (name, division, population, elevation, risk_level, water_level, rainfall, alerts, (lat, lon)) =
            match key.as_str() {
                "gazipur" => ("Gazipur", "Dhaka", "5.2 million", "8m above sea level", RiskLevel::High, "6.8m", "145mm", 2, (24.0, 90.4)),
                "dhaka" => ("Dhaka", "Dhaka", "21.7 million", "6m above sea level", RiskLevel::Medium, "5.2m", "98mm", 1, (23.8, 90.4)),
                "chittagong" => ("Chittagong", "Chittagong", "8.6 million", "15m above sea level", RiskLevel::High, "6.5m", "320mm", 3, (22.3, 91.8)),
                "sylhet" => ("Sylhet", "Sylhet", "3.9 million", "25m above sea level", RiskLevel::Critical, "7.5m", "450mm", 2, (24.9, 91.9)),
                "cox's bazar" => ("Cox's Bazar", "Chittagong", "2.3 million", "3m above sea level", RiskLevel::Critical, "4.2m", "380mm", 3, (21.4, 92.0)),
                _ => return None,
            };

        Some(RegionData {
            name: name.into(),
            division: division.into(),
            population: population.into(),
            elevation: elevation.into(),
            risk_level,
            water_level: water_level.into(),
            rainfall: rainfall.into(),
            alerts,
            coordinates: Coordinates { lat, lon },
        })
    }

    /// Monthly climate series. `year` does not vary the output.
    pub fn climate_series(&self, _year: i32) -> Vec<ClimateDataPoint> {
        const SERIES: [(&str, f64, f64, f64); 12] = [
            ("Jan", 18.0, 12.0, 65.0),
            ("Feb", 20.0, 25.0, 62.0),
            ("Mar", 25.0, 45.0, 68.0),
            ("Apr", 28.0, 120.0, 75.0),
            ("May", 30.0, 280.0, 82.0),
            ("Jun", 31.0, 420.0, 88.0),
            ("Jul", 31.0, 380.0, 87.0),
            ("Aug", 30.0, 320.0, 86.0),
            ("Sep", 29.0, 240.0, 84.0),
            ("Oct", 27.0, 180.0, 78.0),
            ("Nov", 23.0, 50.0, 70.0),
            ("Dec", 19.0, 15.0, 67.0),
        ];

        SERIES
            .iter()
            .map(|&(month, temperature, rainfall, humidity)| ClimateDataPoint {
                month: month.into(),
                temperature,
                rainfall,
                humidity: Some(humidity),
            })
            .collect()
    }

    /// District overview table
    pub fn district_rows(&self) -> Vec<DistrictRow> {
        const ROWS: [(&str, &str, &str, &str, &str); 8] = [
            ("Dhaka", "5.2", "145", "Normal", "Dhaka"),
            ("Chittagong", "6.8", "320", "Caution", "Chittagong"),
            ("Sylhet", "7.5", "450", "Warning", "Sylhet"),
            ("Khulna", "4.9", "98", "Normal", "Khulna"),
            ("Rajshahi", "3.2", "67", "Normal", "Rajshahi"),
            ("Rangpur", "4.5", "125", "Normal", "Rangpur"),
            ("Barisal", "6.1", "285", "Caution", "Barisal"),
            ("Mymensingh", "5.8", "210", "Caution", "Mymensingh"),
        ];

        ROWS.iter()
            .map(|&(district, water_level, rainfall, status, division)| DistrictRow {
                district: district.into(),
                water_level: water_level.into(),
                rainfall: rainfall.into(),
                status: status.into(),
                division: division.into(),
            })
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn metric(
    id: &str,
    metric_type: MetricType,
    value: f64,
    unit: &str,
    location: &str,
    (district, division): (&str, &str),
    timestamp: String,
    severity: Severity,
    (trend_value, direction): (f64, TrendDirection),
) -> EnvironmentalMetric {
    EnvironmentalMetric {
        id: id.into(),
        metric_type,
        value,
        unit: unit.into(),
        location: location.into(),
        district: district.into(),
        division: division.into(),
        timestamp,
        severity: Some(severity),
        trend: Some(Trend {
            value: trend_value,
            direction,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_region_lookup_is_case_insensitive() {
        let repo = EnvironmentRepo::new();
        let lower = repo.region("gazipur").unwrap();
        assert_eq!(repo.region("GAZIPUR"), Some(lower.clone()));
        assert_eq!(repo.region("GaZiPuR"), Some(lower.clone()));
        assert_eq!(lower.name, "Gazipur");
        assert_eq!(lower.division, "Dhaka");
        assert_eq!(lower.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_region_lookup_with_apostrophe_and_space() {
        let repo = EnvironmentRepo::new();
        let region = repo.region("COX'S BAZAR").unwrap();
        assert_eq!(region.name, "Cox's Bazar");
        assert_eq!(region.division, "Chittagong");
    }

    #[test]
    fn test_region_lookup_rejects_partial_and_unknown() {
        let repo = EnvironmentRepo::new();
        assert!(repo.region("gazi").is_none());
        assert!(repo.region(" gazipur").is_none());
        assert!(repo.region("Atlantis").is_none());
        assert!(repo.region("").is_none());
    }

    #[test]
    fn test_climate_series_ignores_year() {
        let repo = EnvironmentRepo::new();
        let series = repo.climate_series(2024);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].month, "Jan");
        assert_eq!(series[11].month, "Dec");
        assert_eq!(repo.climate_series(1950), series);
        assert_eq!(repo.climate_series(2100), series);
    }

    #[test]
    fn test_metrics_fixed_set() {
        let repo = EnvironmentRepo::new();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let metrics = repo.current_metrics_at(now);
        let ids: Vec<_> = metrics.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(metrics[0].metric_type, MetricType::WaterLevel);
        assert_eq!(metrics[0].timestamp, "2024-06-01T10:00:00.000Z");
    }

    #[test]
    fn test_metric_json_shape() {
        let repo = EnvironmentRepo::new();
        let v = serde_json::to_value(&repo.current_metrics()[1]).unwrap();
        assert_eq!(v["type"], "wind_speed");
        assert_eq!(v["severity"], "critical");
        assert_eq!(v["trend"]["direction"], "up");
    }

    #[test]
    fn test_alerts_keep_insertion_order() {
        let repo = EnvironmentRepo::new();
        let alerts = repo.active_alerts();
        let severities: Vec<_> = alerts.iter().map(|a| a.severity).collect();
        assert_eq!(
            severities,
            [AlertSeverity::Critical, AlertSeverity::High, AlertSeverity::Medium]
        );
        let v = serde_json::to_value(&alerts[0]).unwrap();
        assert_eq!(v["type"], "Flood Warning");
        assert_eq!(v["coordinates"]["lat"], 24.0);
    }

    #[test]
    fn test_district_table() {
        let rows = EnvironmentRepo::new().district_rows();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[2].district, "Sylhet");
        assert_eq!(rows[2].status, "Warning");
        let v = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(v["waterLevel"], "5.2");
    }
}
