//! View state for the dish search widget.
//!
//! Search and detail each own their loading and error fields, so a detail
//! fetch finishing never flips the search button back while a search is still
//! running, and vice versa.

use crate::error::FailureKind;
use crate::model::{RecipeDetail, SearchResult};

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch dishes. Please try again.";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch recipe details, Please try again.";
pub const EMPTY_STATE_MESSAGE: &str = "No dishes found. Try searching for something!";

/// A failure shown in the error banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    pub kind: FailureKind,
    pub message: &'static str,
}

impl ViewError {
    pub fn search(kind: FailureKind) -> Self {
        Self {
            kind,
            message: SEARCH_FAILED_MESSAGE,
        }
    }

    pub fn detail(kind: FailureKind) -> Self {
        Self {
            kind,
            message: DETAIL_FAILED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Current contents of the query field, untrimmed
    pub query: String,
    /// Last successful result list, in service order
    pub results: Vec<SearchResult>,
    pub loading: bool,
    pub error: Option<ViewError>,
    pub has_searched: bool,
}

impl SearchState {
    /// The "no dishes found" message shows only after a settled, successful, empty search
    pub fn show_empty_state(&self) -> bool {
        self.has_searched && !self.loading && self.error.is_none() && self.results.is_empty()
    }

    pub fn search_disabled(&self) -> bool {
        self.loading
    }

    pub fn search_button_label(&self) -> &'static str {
        if self.loading {
            "Searching..."
        } else {
            "Search"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub loading: bool,
    pub error: Option<ViewError>,
    /// The recipe shown in the modal; its presence opens the modal
    pub selected: Option<RecipeDetail>,
}

impl DetailState {
    pub fn modal_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub search: SearchState,
    pub detail: DetailState,
}

impl ViewState {
    /// Banner contents, search failure first
    pub fn errors(&self) -> impl Iterator<Item = &ViewError> {
        self.search.error.iter().chain(self.detail.error.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: u64) -> SearchResult {
        SearchResult {
            id,
            title: format!("Dish {}", id),
            image: String::new(),
        }
    }

    #[test]
    fn test_initial_state_shows_nothing() {
        let state = ViewState::default();
        assert!(!state.search.show_empty_state());
        assert!(!state.search.search_disabled());
        assert_eq!(state.search.search_button_label(), "Search");
        assert!(!state.detail.modal_open());
        assert_eq!(state.errors().count(), 0);
    }

    #[test]
    fn test_empty_state_conditions() {
        let mut search = SearchState {
            has_searched: true,
            ..Default::default()
        };
        assert!(search.show_empty_state());

        search.loading = true;
        assert!(!search.show_empty_state());
        assert_eq!(search.search_button_label(), "Searching...");
        assert!(search.search_disabled());

        search.loading = false;
        search.error = Some(ViewError::search(FailureKind::Transport));
        assert!(!search.show_empty_state());

        search.error = None;
        search.results = vec![result(1)];
        assert!(!search.show_empty_state());
    }

    #[test]
    fn test_errors_order() {
        let state = ViewState {
            search: SearchState {
                error: Some(ViewError::search(FailureKind::Status(500))),
                ..Default::default()
            },
            detail: DetailState {
                error: Some(ViewError::detail(FailureKind::Malformed)),
                ..Default::default()
            },
        };

        let messages: Vec<_> = state.errors().map(|e| e.message).collect();
        assert_eq!(messages, vec![SEARCH_FAILED_MESSAGE, DETAIL_FAILED_MESSAGE]);
    }
}
