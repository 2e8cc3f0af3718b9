//! Client configuration
//!
//! Defaults live in an embedded TOML document. The API base url can be
//! overridden at build time with the `DEALS_API_URL` environment variable.

use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub import: ImportSettings,
    pub restaurants: RestaurantsConfig,
    pub deals: DealsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
        }
    }
}

/// localStorage keys
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub location_key: String,
    /// Last location whose import finished successfully
    pub last_import_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            location_key: "userLocation".to_string(),
            last_import_key: "lastScrapedLocation".to_string(),
        }
    }
}

/// Polling knobs for remote import jobs
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ImportSettings {
    pub poll_interval_ms: u32,
    pub max_attempts: u32,
}

impl ImportSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
            max_attempts: 120,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RestaurantsConfig {
    /// Imported for the home page
    pub home: Vec<String>,
    /// Offered by the admin Uber Eats import
    pub admin: Vec<String>,
}

impl Default for RestaurantsConfig {
    fn default() -> Self {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            home: names(&["McDonald's", "KFC", "Taco Bell"]),
            admin: names(&[
                "McDonald's",
                "KFC",
                "Taco Bell",
                "Wendy's",
                "Burger King",
                "Chick-fil-A",
                "Subway",
                "Popeyes",
            ]),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DealsConfig {
    pub home_limit: u32,
    pub admin_limit: u32,
}

impl Default for DealsConfig {
    fn default() -> Self {
        Self {
            home_limit: 10,
            admin_limit: 100,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000/api"

[storage]
location_key = "userLocation"
last_import_key = "lastScrapedLocation"

[import]
poll_interval_ms = 2000
max_attempts = 120

[restaurants]
home = ["McDonald's", "KFC", "Taco Bell"]
admin = ["McDonald's", "KFC", "Taco Bell", "Wendy's", "Burger King", "Chick-fil-A", "Subway", "Popeyes"]

[deals]
home_limit = 10
admin_limit = 100
"#;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Parse a configuration document and apply the build-time API override
pub fn load_config(contents: &str, api_override: Option<&str>) -> Result<ClientConfig, toml::de::Error> {
    let mut config: ClientConfig = toml::from_str(contents)?;
    if let Some(url) = api_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
    Ok(config)
}

/// Process-wide configuration, loaded once
pub fn app_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let api_override = option_env!("DEALS_API_URL");
        match load_config(DEFAULT_CONFIG, api_override) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Embedded config is invalid, using built-in defaults: {}", e);
                ClientConfig::default()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG, None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.import.poll_interval(), Duration::from_millis(2000));
        assert_eq!(config.import.max_attempts, 120);
        assert_eq!(config.restaurants.admin.len(), 8);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = load_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_api_override() {
        let config = load_config(DEFAULT_CONFIG, Some("https://deals.example.com/api")).unwrap();
        assert_eq!(config.api.base_url, "https://deals.example.com/api");

        let config = load_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = load_config("[import]\nmax_attempts = 3\n", None).unwrap();
        assert_eq!(config.import.max_attempts, 3);
        assert_eq!(config.import.poll_interval_ms, 2000);
        assert_eq!(config.storage.last_import_key, "lastScrapedLocation");
    }
}
