use std::sync::Arc;
use std::time::Duration;

use crate::config::DishubConfig;
use crate::service::{RecipeService, SpoonacularService};
use crate::{DishSearch, DishubError};

/// Builder for configuring a [`DishSearch`] widget
#[derive(Default)]
pub struct DishSearchBuilder {
    config: Option<DishubConfig>,
    service: Option<Arc<dyn RecipeService>>,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl DishSearchBuilder {
    /// Start from a loaded configuration
    ///
    /// Values set directly on the builder take precedence over the configuration.
    pub fn config(mut self, config: DishubConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom recipe service instead of Spoonacular
    ///
    /// When a service is given, `api_key`, `base_url` and `timeout` are ignored.
    pub fn service(mut self, service: Arc<dyn RecipeService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the Spoonacular API key
    ///
    /// # Example
    /// ```
    /// use dishub::DishSearch;
    ///
    /// let builder = DishSearch::builder().api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point the widget at a different endpoint (proxy or mock server)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use dishub::DishSearch;
    /// use std::time::Duration;
    ///
    /// let builder = DishSearch::builder()
    ///     .api_key("your-api-key")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the widget
    ///
    /// # Errors
    /// Returns `DishubError` if:
    /// - No API key is available from the builder, configuration or environment
    /// - The base URL is empty
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<DishSearch, DishubError> {
        if let Some(service) = self.service {
            return Ok(DishSearch::new(service));
        }

        let mut service_config = self.config.unwrap_or_default().service;
        if let Some(key) = self.api_key {
            service_config.api_key = Some(key);
        }
        if let Some(url) = self.base_url {
            service_config.base_url = url;
        }
        if service_config.base_url.trim().is_empty() {
            return Err(DishubError::Builder("Base URL cannot be empty".to_string()));
        }

        // A builder timeout wins over the whole-second one from configuration
        let timeout = self.timeout.or_else(|| service_config.timeout_duration());
        let service = SpoonacularService::with_request_timeout(&service_config, timeout)?;
        Ok(DishSearch::new(Arc::new(service)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    #[test]
    fn test_build_with_api_key() {
        let widget = DishSearch::builder()
            .api_key("test-key")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(widget.service_name(), "spoonacular");
    }

    #[test]
    fn test_build_from_config() {
        let config = DishubConfig {
            service: ServiceConfig {
                api_key: Some("config-key".to_string()),
                base_url: "http://localhost:1234".to_string(),
                timeout: None,
            },
            ..Default::default()
        };

        let widget = DishSearch::builder().config(config).build();
        assert!(widget.is_ok());
    }

    #[test]
    fn test_build_rejects_empty_base_url() {
        let result = DishSearch::builder()
            .api_key("test-key")
            .base_url("  ")
            .build();
        assert!(matches!(result, Err(DishubError::Builder(_))));
    }
}
