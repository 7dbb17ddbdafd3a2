use super::{image_or_placeholder, recipe_summary};
use crate::config::UiConfig;
use crate::state::{ViewState, EMPTY_STATE_MESSAGE};

/// Render the widget for a terminal. Cards are numbered from 1.
pub fn render_text(state: &ViewState, ui: &UiConfig) -> String {
    let search = &state.search;
    let mut lines = vec![
        ui.heading.clone(),
        format!("[{}] [{}]", search.query, search.search_button_label()),
    ];

    for error in state.errors() {
        lines.push(format!("! {}", error.message));
    }

    for (index, dish) in search.results.iter().enumerate() {
        lines.push(format!(
            "{:>3}. {}  <{}>",
            index + 1,
            dish.title,
            image_or_placeholder(&dish.image, ui)
        ));
    }

    if search.show_empty_state() {
        lines.push(EMPTY_STATE_MESSAGE.to_string());
    }

    if state.detail.loading {
        lines.push("Loading recipe...".to_string());
    }

    if let Some(recipe) = &state.detail.selected {
        lines.push(String::new());
        lines.push(format!("=== {} ===", recipe.title));
        lines.push(format!("<{}>", image_or_placeholder(&recipe.image, ui)));
        if let Some(summary) = recipe_summary(recipe.ready_in_minutes, recipe.servings) {
            lines.push(summary);
        }
        lines.push("Ingredients:".to_string());
        for ingredient in &recipe.ingredients {
            lines.push(format!("  - {}", ingredient.display_text));
        }
        lines.push("Instructions:".to_string());
        lines.push(format!("  {}", recipe.instructions_or_fallback()));
        if let Some(url) = &recipe.source_url {
            lines.push(format!("Source: {}", url));
        }
        lines.push("[Close]".to_string());
    }

    lines.join("\n")
}
