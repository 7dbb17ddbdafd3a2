use serde::{Deserialize, Serialize};

/// Identifier the recipe service assigns to each recipe
pub type RecipeId = u64;

/// Shown in place of missing or blank instructions
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

/// One entry of a search response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResult {
    pub id: RecipeId,
    pub title: String,
    /// Image URL; empty when the service omits it
    #[serde(default)]
    pub image: String,
}

/// Envelope returned by the search endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    pub total_results: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ingredient {
    /// The service occasionally omits ingredient ids
    #[serde(default)]
    pub id: Option<u64>,
    /// Human-readable line, e.g. "2 cups of flour"
    #[serde(rename = "original")]
    pub display_text: String,
}

/// Full information about a single recipe
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "extendedIngredients")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl RecipeDetail {
    /// Instructions text, or [`NO_INSTRUCTIONS`] when absent or blank
    pub fn instructions_or_fallback(&self) -> &str {
        match self.instructions.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_INSTRUCTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_without_results() {
        let response: SearchResponse = serde_json::from_str(r#"{"offset": 0}"#).unwrap();
        assert!(response.results.is_empty());
        assert!(response.total_results.is_none());
    }

    #[test]
    fn test_search_result_requires_title() {
        let result = serde_json::from_str::<SearchResponse>(r#"{"results": [{"id": 1}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_result_missing_image() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"results": [{"id": 7, "title": "Toast"}], "totalResults": 1}"#)
                .unwrap();
        assert_eq!(response.results[0].image, "");
        assert_eq!(response.total_results, Some(1));
    }

    #[test]
    fn test_recipe_detail_parsing() {
        let json = r#"{
            "id": 42,
            "title": "Shakshuka",
            "image": "https://img.example.com/42.jpg",
            "readyInMinutes": 30,
            "servings": 2,
            "sourceUrl": "https://example.com/shakshuka",
            "extendedIngredients": [
                {"id": 1, "original": "4 eggs", "amount": 4},
                {"original": "1 can tomatoes"}
            ],
            "instructions": "Simmer the tomatoes, crack in the eggs."
        }"#;

        let detail: RecipeDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, 42);
        assert_eq!(detail.ingredients.len(), 2);
        assert_eq!(detail.ingredients[0].display_text, "4 eggs");
        assert_eq!(detail.ingredients[0].id, Some(1));
        assert_eq!(detail.ingredients[1].id, None);
        assert_eq!(detail.ready_in_minutes, Some(30));
        assert_eq!(detail.servings, Some(2));
        assert_eq!(
            detail.instructions_or_fallback(),
            "Simmer the tomatoes, crack in the eggs."
        );
    }

    #[test]
    fn test_instructions_fallback() {
        let mut detail: RecipeDetail =
            serde_json::from_str(r#"{"id": 1, "title": "Water", "instructions": null}"#).unwrap();
        assert!(detail.ingredients.is_empty());
        assert_eq!(detail.instructions_or_fallback(), NO_INSTRUCTIONS);

        detail.instructions = Some("   ".to_string());
        assert_eq!(detail.instructions_or_fallback(), NO_INSTRUCTIONS);
    }
}
