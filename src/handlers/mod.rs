/// HTTP request handlers
use crate::domain::{
    Alert, ClimateDataPoint, DistrictRow, EnvironmentalMetric, Health, RegionData,
    SatelliteSearchRequest,
};
use crate::errors::{ApiError, ApiResult};
use crate::services::{EnvironmentService, SatelliteService};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::Uri,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_CLIMATE_YEAR: i32 = 2024;
pub const MIN_CLIMATE_YEAR: i32 = 1950;
pub const MAX_CLIMATE_YEAR: i32 = 2100;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentService>,
    pub satellite: Arc<SatelliteService>,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

pub async fn current_metrics(State(state): State<AppState>) -> Json<Vec<EnvironmentalMetric>> {
    Json(state.environment.current_metrics())
}

pub async fn active_alerts(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.environment.active_alerts())
}

/// Region details for one district
pub async fn region(
    district: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> ApiResult<Json<RegionData>> {
    let Path(district) = district
        .map_err(|e| ApiError::invalid_input("Invalid district parameter", e.body_text()))?;
    state.environment.region(&district).map(Json).ok_or_else(|| {
        ApiError::not_found(
            "Region not found",
            format!("No data available for district: {}", district),
        )
    })
}

#[derive(Debug, Deserialize)]
pub struct ClimateQuery {
    pub year: Option<String>,
}

/// Yearly climate series
pub async fn climate_data(
    params: Result<Query<ClimateQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ClimateDataPoint>>> {
    let Query(params) = params.map_err(|_| invalid_year())?;
    let year = parse_year(params.year.as_deref())?;
    Ok(Json(state.environment.climate_data(year)))
}

fn parse_year(raw: Option<&str>) -> ApiResult<i32> {
    let year = match raw.map(str::trim) {
        None | Some("") => DEFAULT_CLIMATE_YEAR,
        Some(s) => s.parse::<i32>().map_err(|_| invalid_year())?,
    };
    if !(MIN_CLIMATE_YEAR..=MAX_CLIMATE_YEAR).contains(&year) {
        return Err(invalid_year());
    }
    Ok(year)
}

fn invalid_year() -> ApiError {
    ApiError::invalid_input(
        "Invalid year parameter",
        format!(
            "Year must be between {} and {}",
            MIN_CLIMATE_YEAR, MAX_CLIMATE_YEAR
        ),
    )
}

pub async fn district_data(State(state): State<AppState>) -> Json<Vec<DistrictRow>> {
    Json(state.environment.district_data())
}

/// Free-form satellite search
pub async fn satellite_search(
    State(state): State<AppState>,
    body: Result<Json<SatelliteSearchRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<Value>>> {
    const INVALID: &str = "Invalid request parameters";

    let Json(req) = body.map_err(|e| ApiError::invalid_input(INVALID, e.body_text()))?;
    req.validate()
        .map_err(|msg| ApiError::invalid_input(INVALID, msg))?;

    let imagery = state
        .satellite
        .search(&req)
        .await
        .map_err(|e| ApiError::upstream("Failed to search satellite imagery", e))?;
    Ok(Json(imagery))
}

pub async fn latest_sentinel2(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    let imagery = state
        .satellite
        .latest_sentinel2()
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch satellite imagery", e))?;
    Ok(Json(imagery))
}

pub async fn latest_sentinel1(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    let imagery = state
        .satellite
        .latest_sentinel1_sar()
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch SAR imagery", e))?;
    Ok(Json(imagery))
}

/// Fallback for unknown routes when no client bundle is served
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("Not found", format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_default() {
        assert_eq!(parse_year(None).unwrap(), 2024);
        assert_eq!(parse_year(Some("")).unwrap(), 2024);
    }

    #[test]
    fn test_parse_year_bounds() {
        assert_eq!(parse_year(Some("1950")).unwrap(), 1950);
        assert_eq!(parse_year(Some("2100")).unwrap(), 2100);
        assert!(parse_year(Some("1949")).is_err());
        assert!(parse_year(Some("2101")).is_err());
        assert!(parse_year(Some("-5")).is_err());
    }

    #[test]
    fn test_parse_year_non_numeric() {
        for raw in ["abc", "20x4", "2024.5", "99999999999"] {
            let err = parse_year(Some(raw)).unwrap_err();
            assert_eq!(err.title(), "Invalid year parameter");
        }
    }
}
