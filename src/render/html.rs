use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{image_or_placeholder, recipe_summary};
use crate::config::UiConfig;
use crate::model::{RecipeDetail, SearchResult};
use crate::state::{ViewState, EMPTY_STATE_MESSAGE};

/// Swap a broken image for the URL in its `data-fallback` attribute, once
const IMAGE_ONERROR: &str = "this.onerror=null;this.src=this.dataset.fallback";

/// Render the whole widget as an HTML fragment
pub fn render_html(state: &ViewState, ui: &UiConfig) -> String {
    let search = &state.search;
    let mut html = String::new();

    html.push_str("<div class=\"dish-search\">\n");
    html.push_str(&format!("  <h1>{}</h1>\n", encode_text(&ui.heading)));

    html.push_str("  <div class=\"search-bar\">\n");
    html.push_str(&format!(
        "    <input type=\"text\" name=\"query\" value=\"{}\" placeholder=\"Search for dishes...\">\n",
        encode_double_quoted_attribute(&search.query)
    ));
    html.push_str(&format!(
        "    <button type=\"button\" class=\"search-button\"{}>{}</button>\n",
        if search.search_disabled() { " disabled" } else { "" },
        search.search_button_label()
    ));
    html.push_str("  </div>\n");

    for error in state.errors() {
        html.push_str(&format!(
            "  <div class=\"error-banner\" role=\"alert\">{}</div>\n",
            encode_text(error.message)
        ));
    }

    html.push_str("  <div class=\"results-grid\">\n");
    for dish in &search.results {
        html.push_str(&render_card(dish, ui));
    }
    html.push_str("  </div>\n");

    if search.show_empty_state() {
        html.push_str(&format!(
            "  <div class=\"empty-state\">{}</div>\n",
            EMPTY_STATE_MESSAGE
        ));
    }

    if state.detail.loading {
        html.push_str("  <div class=\"recipe-loading\">Loading recipe...</div>\n");
    }

    if let Some(recipe) = &state.detail.selected {
        html.push_str(&render_modal(recipe, ui));
    }

    html.push_str("</div>\n");
    html
}

fn render_image(src: &str, alt: &str, class: &str, ui: &UiConfig) -> String {
    format!(
        "<img class=\"{}\" src=\"{}\" alt=\"{}\" data-fallback=\"{}\" onerror=\"{}\">",
        class,
        encode_double_quoted_attribute(image_or_placeholder(src, ui)),
        encode_double_quoted_attribute(alt),
        encode_double_quoted_attribute(&ui.placeholder_image),
        IMAGE_ONERROR
    )
}

fn render_card(dish: &SearchResult, ui: &UiConfig) -> String {
    format!(
        "    <div class=\"dish-card\" data-recipe-id=\"{}\">\n      {}\n      <h2 class=\"dish-title\">{}</h2>\n    </div>\n",
        dish.id,
        render_image(&dish.image, &dish.title, "dish-image", ui),
        encode_text(&dish.title)
    )
}

fn render_modal(recipe: &RecipeDetail, ui: &UiConfig) -> String {
    let mut html = String::new();
    html.push_str("  <div class=\"recipe-modal\" role=\"dialog\" aria-modal=\"true\">\n");
    html.push_str(&format!(
        "    <h2 class=\"recipe-title\">{}</h2>\n",
        encode_text(&recipe.title)
    ));
    html.push_str(&format!(
        "    {}\n",
        render_image(&recipe.image, &recipe.title, "recipe-image", ui)
    ));

    if let Some(summary) = recipe_summary(recipe.ready_in_minutes, recipe.servings) {
        html.push_str(&format!("    <p class=\"recipe-meta\">{}</p>\n", summary));
    }

    html.push_str("    <h3>Ingredients:</h3>\n");
    html.push_str("    <ul class=\"ingredients\">\n");
    for ingredient in &recipe.ingredients {
        html.push_str(&format!("      <li>{}</li>\n", encode_text(&ingredient.display_text)));
    }
    html.push_str("    </ul>\n");

    html.push_str("    <h3>Instructions:</h3>\n");
    html.push_str(&format!(
        "    <p class=\"instructions\">{}</p>\n",
        encode_text(recipe.instructions_or_fallback())
    ));

    if let Some(url) = &recipe.source_url {
        html.push_str(&format!(
            "    <a class=\"source-link\" href=\"{}\">View original recipe</a>\n",
            encode_double_quoted_attribute(url)
        ));
    }

    html.push_str("    <button type=\"button\" class=\"close-button\">Close</button>\n");
    html.push_str("  </div>\n");
    html
}
