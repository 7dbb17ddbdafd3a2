#![allow(dead_code)]

use dishub::{render, DishSearch, UiConfig};
use scraper::{Html, Selector};

pub fn widget_for(server: &mockito::Server) -> DishSearch {
    DishSearch::builder()
        .api_key("test_key")
        .base_url(server.url())
        .build()
        .unwrap()
}

/// Render the widget and parse the markup back for assertions
pub fn rendered(widget: &DishSearch) -> Html {
    let html = render::render_html(&widget.snapshot(), &UiConfig::default());
    Html::parse_fragment(&html)
}

pub fn texts(document: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

pub fn attr(document: &Html, selector: &str, name: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(name))
        .map(str::to_string)
}
