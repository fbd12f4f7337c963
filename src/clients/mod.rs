/// External API clients module
use crate::domain::SatelliteSearchRequest;
use crate::errors::StacError;
use crate::utils::json_number;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

/// Bangladesh extent as `[minLon, minLat, maxLon, maxLat]`
pub const BANGLADESH_BBOX: [f64; 4] = [88.0, 20.5, 92.7, 26.6];

pub const DEFAULT_LIMIT: u32 = 10;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, StacError> {
        let mut builder = Client::builder().user_agent("bd-envmon/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Body of a STAC `/search` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StacSearchParams {
    pub collections: Vec<String>,
    pub bbox: [f64; 4],
    pub datetime: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
}

impl StacSearchParams {
    /// Build the outbound search for an already validated request
    pub fn from_request(req: &SatelliteSearchRequest) -> Self {
        let query = match req.cloud_cover {
            Some(cc) if req.collection.supports_cloud_cover() => {
                Some(json!({ "eo:cloud_cover": { "lt": json_number(cc) } }))
            }
            _ => None,
        };

        Self {
            collections: vec![req.collection.as_str().to_string()],
            bbox: BANGLADESH_BBOX,
            datetime: format!("{}/{}", req.start_date, req.end_date),
            limit: req.limit.unwrap_or(DEFAULT_LIMIT),
            query,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StacSearchResponse {
    #[serde(default)]
    features: Option<Vec<Value>>,
}

/// STAC catalog search client
pub struct StacClient {
    http_client: HttpClient,
    base_url: String,
}

impl StacClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, StacError> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url,
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post a single search and return the raw `features` array
    pub async fn search(&self, params: &StacSearchParams) -> Result<Vec<Value>, StacError> {
        let url = format!("{}/search", self.base_url);
        let resp = self
            .http_client
            .get_client()
            .post(&url)
            .json(params)
            .send()
            .await?
            .error_for_status()?;

        let body: StacSearchResponse = resp.json().await?;
        Ok(body.features.unwrap_or_default())
    }
}
