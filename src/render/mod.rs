//! Pure rendering of the widget from a [`ViewState`](crate::state::ViewState).
//!
//! `html` produces the browser markup, `text` the terminal view used by the
//! `dishub` binary. Neither keeps any state of its own.

mod html;
mod text;

pub use html::render_html;
pub use text::render_text;

use crate::config::UiConfig;

/// Image to show for a recipe, falling back to the placeholder when the service sent none
fn image_or_placeholder<'a>(image: &'a str, ui: &'a UiConfig) -> &'a str {
    if image.trim().is_empty() {
        &ui.placeholder_image
    } else {
        image
    }
}

/// "Ready in 30 minutes, serves 2" style summary, if the service provided either value
fn recipe_summary(ready_in_minutes: Option<u32>, servings: Option<u32>) -> Option<String> {
    match (ready_in_minutes, servings) {
        (Some(minutes), Some(servings)) => {
            Some(format!("Ready in {} minutes, serves {}", minutes, servings))
        }
        (Some(minutes), None) => Some(format!("Ready in {} minutes", minutes)),
        (None, Some(servings)) => Some(format!("Serves {}", servings)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_or_placeholder() {
        let ui = UiConfig::default();
        assert_eq!(image_or_placeholder("", &ui), "/api/placeholder/400/320");
        assert_eq!(image_or_placeholder("a.jpg", &ui), "a.jpg");
    }

    #[test]
    fn test_recipe_summary() {
        assert_eq!(
            recipe_summary(Some(30), Some(2)).as_deref(),
            Some("Ready in 30 minutes, serves 2")
        );
        assert_eq!(recipe_summary(None, Some(4)).as_deref(), Some("Serves 4"));
        assert!(recipe_summary(None, None).is_none());
    }
}
