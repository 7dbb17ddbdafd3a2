use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::error::DishubError;
use crate::model::{RecipeDetail, RecipeId, SearchResponse, SearchResult};
use crate::service::RecipeService;

pub struct SpoonacularService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SpoonacularService {
    /// Create a new Spoonacular service from configuration
    pub fn new(config: &ServiceConfig) -> Result<Self, DishubError> {
        Self::with_request_timeout(config, config.timeout_duration())
    }

    /// Create a service from configuration with an explicit request timeout.
    ///
    /// The timeout is used as given; `None` leaves the transport default in place.
    pub fn with_request_timeout(
        config: &ServiceConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, DishubError> {
        let api_key = config.resolve_api_key().ok_or(DishubError::MissingApiKey)?;

        Ok(SpoonacularService {
            client: build_client(timeout)?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a service against the public endpoint with default settings
    pub fn with_api_key(api_key: String) -> Self {
        SpoonacularService {
            client: Client::new(),
            api_key,
            base_url: "https://api.spoonacular.com".to_string(),
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularService {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, DishubError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Spoonacular responded with {}", status);
            return Err(DishubError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Received {} bytes from Spoonacular", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

fn build_client(timeout: Option<Duration>) -> Result<Client, DishubError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

#[async_trait]
impl RecipeService for SpoonacularService {
    fn service_name(&self) -> &str {
        "spoonacular"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, DishubError> {
        debug!("Searching recipes for {:?}", query);
        let request = self
            .client
            .get(format!("{}/recipes/complexSearch", self.base_url))
            .query(&[("apiKey", self.api_key.as_str()), ("query", query)]);

        let response: SearchResponse = self.fetch_json(request).await?;
        debug!(
            "Search returned {} results (total {:?})",
            response.results.len(),
            response.total_results
        );
        Ok(response.results)
    }

    async fn recipe_information(&self, id: RecipeId) -> Result<RecipeDetail, DishubError> {
        debug!("Fetching information for recipe {}", id);
        let request = self
            .client
            .get(format!("{}/recipes/{}/information", self.base_url, id))
            .query(&[("apiKey", self.api_key.as_str())]);

        self.fetch_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_search() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()),
                Matcher::UrlEncoded("query".into(), "pasta".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "results": [
                        {"id": 1, "title": "Pasta Carbonara", "image": "x.jpg", "imageType": "jpg"},
                        {"id": 2, "title": "Pasta Primavera", "image": "y.jpg", "imageType": "jpg"}
                    ],
                    "offset": 0,
                    "number": 10,
                    "totalResults": 2
                }"#,
            )
            .create_async()
            .await;

        let service = SpoonacularService::with_base_url("fake_api_key".to_string(), server.url());
        let results = service.search("pasta").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Pasta Carbonara");
        assert_eq!(results[1].id, 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_sends_raw_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::UrlEncoded("query".into(), "  mac & cheese ".into()))
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let service = SpoonacularService::with_base_url("fake_api_key".to_string(), server.url());
        let results = service.search("  mac & cheese ").await.unwrap();

        assert!(results.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::Any)
            .with_status(402)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "failure", "code": 402, "message": "Daily points limit reached"}"#)
            .create_async()
            .await;

        let service = SpoonacularService::with_base_url("fake_api_key".to_string(), server.url());
        let result = service.search("pasta").await;

        assert!(matches!(result, Err(DishubError::Status(402))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let service = SpoonacularService::with_base_url("fake_api_key".to_string(), server.url());
        let result = service.search("pasta").await;

        assert!(matches!(result, Err(DishubError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_recipe_information() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/42/information")
            .match_query(Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()))
            .with_status(200)
            .with_body(
                r#"{
                    "id": 42,
                    "title": "Lentil Soup",
                    "image": "https://img.example.com/42.jpg",
                    "extendedIngredients": [
                        {"id": 10, "original": "1 cup red lentils"},
                        {"id": 11, "original": "1 onion, diced"}
                    ],
                    "instructions": "Simmer everything for 25 minutes."
                }"#,
            )
            .create_async()
            .await;

        let service = SpoonacularService::with_base_url("fake_api_key".to_string(), server.url());
        let detail = service.recipe_information(42).await.unwrap();

        assert_eq!(detail.title, "Lentil Soup");
        assert_eq!(detail.ingredients.len(), 2);
        assert_eq!(detail.ingredients[1].display_text, "1 onion, diced");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Nothing listens on the discard port
        let service = SpoonacularService::with_base_url(
            "fake_api_key".to_string(),
            "http://127.0.0.1:9".to_string(),
        );
        let result = service.recipe_information(1).await;
        assert!(matches!(result, Err(DishubError::Transport(_))));
    }

    #[test]
    fn test_missing_api_key() {
        std::env::remove_var("SPOONACULAR_API_KEY");
        let result = SpoonacularService::new(&ServiceConfig::default());
        assert!(matches!(result, Err(DishubError::MissingApiKey)));
    }

    #[test]
    fn test_service_name() {
        let service = SpoonacularService::with_api_key("fake_api_key".to_string());
        assert_eq!(service.service_name(), "spoonacular");
    }
}
