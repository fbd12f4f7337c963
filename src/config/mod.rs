/// Application configuration module
use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STAC_API_URL: &str = "https://planetarycomputer.microsoft.com/api/stac/v1";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub stac_api_url: String,
    /// No timeout unless configured
    pub stac_timeout: Option<Duration>,
    /// Pre-built client bundle served for unmatched paths
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:5000".to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:5000")?;

        let stac_api_url = get("STAC_API_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_STAC_API_URL.to_string());

        let stac_timeout = match get("STAC_TIMEOUT_SECONDS") {
            Some(s) => Some(Duration::from_secs(
                s.parse::<u64>()
                    .context("STAC_TIMEOUT_SECONDS must be a whole number of seconds")?,
            )),
            None => None,
        };

        let static_dir = get("STATIC_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            stac_api_url,
            stac_timeout,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.stac_api_url, DEFAULT_STAC_API_URL);
        assert!(cfg.stac_timeout.is_none());
        assert!(cfg.static_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let cfg = load(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STAC_API_URL", "http://localhost:9000/stac/"),
            ("STAC_TIMEOUT_SECONDS", "15"),
            ("STATIC_DIR", "dist/public"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.stac_api_url, "http://localhost:9000/stac");
        assert_eq!(cfg.stac_timeout, Some(Duration::from_secs(15)));
        assert_eq!(cfg.static_dir, Some(PathBuf::from("dist/public")));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(load(&[("BIND_ADDR", "not-an-addr")]).is_err());
        assert!(load(&[("STAC_TIMEOUT_SECONDS", "soon")]).is_err());
    }
}
