mod spoonacular;

pub use spoonacular::SpoonacularService;

use async_trait::async_trait;

use crate::error::DishubError;
use crate::model::{RecipeDetail, RecipeId, SearchResult};

/// Unified trait for remote recipe services
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Get the service name (e.g., "spoonacular")
    fn service_name(&self) -> &str;

    /// Search recipes by name. The query is sent exactly as given.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, DishubError>;

    /// Fetch full information for one recipe
    async fn recipe_information(&self, id: RecipeId) -> Result<RecipeDetail, DishubError>;
}
