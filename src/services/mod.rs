/// Business logic services layer
use crate::clients::{StacClient, StacSearchParams};
use crate::domain::{
    Alert, ClimateDataPoint, Collection, DistrictRow, EnvironmentalMetric, RegionData,
    SatelliteSearchRequest,
};
use crate::errors::StacError;
use crate::repo::EnvironmentRepo;
use crate::utils::trailing_window;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info};

const LATEST_WINDOW_DAYS: i64 = 30;
const LATEST_LIMIT: u32 = 5;
const LATEST_MAX_CLOUD_COVER: f64 = 20.0;

/// Environmental reference data service
pub struct EnvironmentService {
    repo: EnvironmentRepo,
}

impl EnvironmentService {
    pub fn new(repo: EnvironmentRepo) -> Self {
        Self { repo }
    }

    pub fn current_metrics(&self) -> Vec<EnvironmentalMetric> {
        self.repo.current_metrics()
    }

    pub fn active_alerts(&self) -> Vec<Alert> {
        self.repo.active_alerts()
    }

    pub fn region(&self, district: &str) -> Option<RegionData> {
        self.repo.region(district)
    }

    pub fn climate_data(&self, year: i32) -> Vec<ClimateDataPoint> {
        self.repo.climate_series(year)
    }

    pub fn district_data(&self) -> Vec<DistrictRow> {
        self.repo.district_rows()
    }
}

/// Satellite imagery search over the STAC catalog
pub struct SatelliteService {
    client: StacClient,
}

impl SatelliteService {
    pub fn new(client: StacClient) -> Self {
        Self { client }
    }

    /// Run one catalog search. `req` must already be validated.
    pub async fn search(&self, req: &SatelliteSearchRequest) -> Result<Vec<Value>, StacError> {
        let params = StacSearchParams::from_request(req);
        debug!(
            url = self.client.base_url(),
            collection = req.collection.as_str(),
            datetime = %params.datetime,
            "searching satellite catalog"
        );

        let features = self.client.search(&params).await?;
        info!(
            collection = req.collection.as_str(),
            count = features.len(),
            "satellite search complete"
        );
        Ok(features)
    }

    /// Latest low-cloud Sentinel-2 scenes
    pub async fn latest_sentinel2(&self) -> Result<Vec<Value>, StacError> {
        self.search(&sentinel2_preset(Utc::now())).await
    }

    /// Latest Sentinel-1 radar scenes
    pub async fn latest_sentinel1_sar(&self) -> Result<Vec<Value>, StacError> {
        self.search(&sentinel1_preset(Utc::now())).await
    }
}

pub fn sentinel2_preset(now: DateTime<Utc>) -> SatelliteSearchRequest {
    let (start_date, end_date) = trailing_window(now, LATEST_WINDOW_DAYS);
    SatelliteSearchRequest {
        collection: Collection::Sentinel2L2a,
        start_date,
        end_date,
        cloud_cover: Some(LATEST_MAX_CLOUD_COVER),
        limit: Some(LATEST_LIMIT),
    }
}

pub fn sentinel1_preset(now: DateTime<Utc>) -> SatelliteSearchRequest {
    let (start_date, end_date) = trailing_window(now, LATEST_WINDOW_DAYS);
    SatelliteSearchRequest {
        collection: Collection::Sentinel1Grd,
        start_date,
        end_date,
        cloud_cover: None,
        limit: Some(LATEST_LIMIT),
    }
}
