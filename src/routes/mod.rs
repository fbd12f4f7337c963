/// Application routes configuration
use crate::errors::panic_response;
use crate::handlers::{
    active_alerts, climate_data, current_metrics, district_data, health, latest_sentinel1,
    latest_sentinel2, not_found, region, satellite_search, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};

/// Build the application router with all routes
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health))
        // Environmental data
        .route("/api/metrics/current", get(current_metrics))
        .route("/api/alerts", get(active_alerts))
        .route("/api/region/:district", get(region))
        .route("/api/climate/data", get(climate_data))
        .route("/api/districts/data", get(district_data))
        // Satellite imagery
        .route("/api/satellite/search", post(satellite_search))
        .route("/api/satellite/sentinel2/latest", get(latest_sentinel2))
        .route("/api/satellite/sentinel1/latest", get(latest_sentinel1));

    // Unmatched paths go to the client bundle, with index.html for client-side routes
    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => router.fallback(not_found),
    };

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
