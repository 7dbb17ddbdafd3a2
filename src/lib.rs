//! A recipe search widget backed by the Spoonacular recipe API.
//!
//! [`DishSearch`] holds the view state and runs the search and detail
//! requests; [`render`] turns a [`ViewState`] snapshot into HTML or terminal
//! text.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use dishub::{render, DishSearch, UiConfig};
//!
//! let widget = DishSearch::builder().api_key("your-api-key").build()?;
//! if let Some(request) = widget.search_for("pasta") {
//!     request.settled().await;
//! }
//! println!("{}", render::render_text(&widget.snapshot(), &UiConfig::default()));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod service;
pub mod state;
pub mod widget;

pub use builder::DishSearchBuilder;
pub use config::{load_config, load_config_from, DishubConfig, ServiceConfig, UiConfig};
pub use error::{DishubError, FailureKind};
pub use model::{Ingredient, RecipeDetail, RecipeId, SearchResult, NO_INSTRUCTIONS};
pub use service::{RecipeService, SpoonacularService};
pub use state::{
    DetailState, SearchState, ViewError, ViewState, DETAIL_FAILED_MESSAGE, EMPTY_STATE_MESSAGE,
    SEARCH_FAILED_MESSAGE,
};
pub use widget::{DishSearch, Key, RequestHandle, UiEvent};
