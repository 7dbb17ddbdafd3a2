use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DishubConfig {
    /// Remote recipe service settings
    #[serde(default)]
    pub service: ServiceConfig,
    /// Presentation settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Configuration for the remote recipe service
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// API key for authentication (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and test servers)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in whole seconds. Unset leaves the transport default in place.
    ///
    /// `DishSearchBuilder::timeout` accepts finer-grained durations.
    pub timeout: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: None,
        }
    }
}

impl ServiceConfig {
    /// Resolve the API key: config first, then the SPOONACULAR_API_KEY environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Configuration for rendering
#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Image shown when a recipe image is missing or fails to load
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Heading shown above the search box
    #[serde(default = "default_heading")]
    pub heading: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            heading: default_heading(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_placeholder_image() -> String {
    "/api/placeholder/400/320".to_string()
}

fn default_heading() -> String {
    "DisHub".to_string()
}

impl DishubConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with DISHUB__ prefix
/// 2. dishub.toml file in current directory
/// 3. Default values
///
/// Environment variable format: DISHUB__SERVICE__API_KEY
pub fn load_config() -> Result<DishubConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("dishub").required(false))
        .add_source(
            Environment::with_prefix("DISHUB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Load configuration from an explicit file, still honouring environment overrides
pub fn load_config_from(path: &Path) -> Result<DishubConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("DISHUB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
