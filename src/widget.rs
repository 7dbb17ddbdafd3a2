//! The dish search widget: search controller and recipe detail viewer.
//!
//! Every request runs as its own tokio task. Each concern (search, detail)
//! tracks at most one in-flight request; starting a new one aborts the old
//! task and bumps a generation counter, and a response is applied only while
//! its generation is still current.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tokio::task::{AbortHandle, JoinHandle};

use crate::builder::DishSearchBuilder;
use crate::model::RecipeId;
use crate::service::RecipeService;
use crate::state::{DetailState, ViewError, ViewState};

/// Keys the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

/// User interactions with the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The query field now holds this text
    QueryChanged(String),
    /// A key was pressed while the query field had focus
    KeyPressed(Key),
    SearchClicked,
    CardClicked(RecipeId),
    CloseClicked,
    /// The dialog asked to close itself (overlay click, escape)
    DialogDismissed,
}

/// Handle to a request started by the widget
#[derive(Debug)]
pub struct RequestHandle {
    handle: JoinHandle<()>,
}

impl RequestHandle {
    /// Wait until the request has been applied, discarded or cancelled
    pub async fn settled(self) {
        if let Err(err) = self.handle.await {
            if !err.is_cancelled() {
                warn!("Request task failed: {}", err);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[derive(Debug, Default)]
struct InFlight {
    generation: u64,
    abort: Option<AbortHandle>,
}

impl InFlight {
    /// Abort whatever is running and hand out a fresh generation
    fn begin(&mut self) -> u64 {
        self.cancel();
        self.generation
    }

    fn cancel(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
        self.generation += 1;
    }

    fn attach(&mut self, generation: u64, abort: AbortHandle) {
        if self.generation == generation {
            self.abort = Some(abort);
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn finish(&mut self) {
        self.abort = None;
    }
}

#[derive(Debug, Default)]
struct Shared {
    view: ViewState,
    search: InFlight,
    detail: InFlight,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct DishSearch {
    service: Arc<dyn RecipeService>,
    shared: Arc<Mutex<Shared>>,
}

impl DishSearch {
    pub fn new(service: Arc<dyn RecipeService>) -> Self {
        Self {
            service,
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    /// Creates a new builder for the widget
    ///
    /// # Example
    /// ```
    /// use dishub::DishSearch;
    ///
    /// let builder = DishSearch::builder().api_key("your-api-key");
    /// ```
    pub fn builder() -> DishSearchBuilder {
        DishSearchBuilder::default()
    }

    pub fn service_name(&self) -> &str {
        self.service.service_name()
    }

    /// A copy of the current view state for rendering
    pub fn snapshot(&self) -> ViewState {
        lock(&self.shared).view.clone()
    }

    pub fn query(&self) -> String {
        lock(&self.shared).view.search.query.clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        lock(&self.shared).view.search.query = query.into();
    }

    /// Route a user interaction. Returns a handle when the event started a request.
    ///
    /// # Panics
    /// Panics outside a Tokio runtime when the event starts a request
    /// (see [`search`](Self::search) and [`select_recipe`](Self::select_recipe)).
    pub fn dispatch(&self, event: UiEvent) -> Option<RequestHandle> {
        match event {
            UiEvent::QueryChanged(query) => {
                self.set_query(query);
                None
            }
            UiEvent::KeyPressed(Key::Enter) => self.search(),
            // The search button is disabled while a search is running
            UiEvent::SearchClicked if lock(&self.shared).view.search.loading => None,
            UiEvent::SearchClicked => self.search(),
            UiEvent::CardClicked(id) => Some(self.select_recipe(id)),
            UiEvent::KeyPressed(Key::Escape) | UiEvent::CloseClicked | UiEvent::DialogDismissed => {
                self.dismiss_recipe();
                None
            }
            UiEvent::KeyPressed(Key::Char(_)) => None,
        }
    }

    /// Set the query and search for it
    pub fn search_for(&self, query: impl Into<String>) -> Option<RequestHandle> {
        self.set_query(query);
        self.search()
    }

    /// Search for the current query.
    ///
    /// A blank query is ignored. Otherwise the previous search and any detail
    /// fetch are cancelled, the open recipe is closed and a new request starts.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime, since the request runs as a
    /// spawned task.
    pub fn search(&self) -> Option<RequestHandle> {
        let (query, generation) = {
            let mut shared = lock(&self.shared);
            let query = shared.view.search.query.clone();
            if query.trim().is_empty() {
                debug!("Ignoring search for blank query");
                return None;
            }

            let generation = shared.search.begin();
            shared.detail.cancel();

            let view = &mut shared.view;
            view.search.loading = true;
            view.search.error = None;
            view.search.has_searched = true;
            view.detail = DetailState::default();
            (query, generation)
        };

        info!("Searching {} for {:?}", self.service.service_name(), query);
        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let outcome = service.search(&query).await;

            let mut shared = lock(&shared);
            if !shared.search.is_current(generation) {
                debug!("Discarding superseded search for {:?}", query);
                return;
            }
            shared.search.finish();

            let search = &mut shared.view.search;
            match outcome {
                Ok(results) => {
                    debug!("Search for {:?} returned {} results", query, results.len());
                    search.results = results;
                }
                Err(err) => {
                    warn!("Search for {:?} failed: {}", query, err);
                    search.error = Some(ViewError::search(err.failure_kind()));
                }
            }
            search.loading = false;
        });

        lock(&self.shared)
            .search
            .attach(generation, handle.abort_handle());
        Some(RequestHandle { handle })
    }

    /// Fetch full details for a recipe and open it in the modal
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime, since the request runs as a
    /// spawned task.
    pub fn select_recipe(&self, id: RecipeId) -> RequestHandle {
        let generation = {
            let mut shared = lock(&self.shared);
            let generation = shared.detail.begin();
            let detail = &mut shared.view.detail;
            detail.loading = true;
            detail.error = None;
            detail.selected = None;
            generation
        };

        info!("Fetching recipe {}", id);
        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let outcome = service.recipe_information(id).await;

            let mut shared = lock(&shared);
            if !shared.detail.is_current(generation) {
                debug!("Discarding superseded details for recipe {}", id);
                return;
            }
            shared.detail.finish();

            let detail = &mut shared.view.detail;
            match outcome {
                Ok(recipe) => detail.selected = Some(recipe),
                Err(err) => {
                    warn!("Fetching recipe {} failed: {}", id, err);
                    detail.error = Some(ViewError::detail(err.failure_kind()));
                }
            }
            detail.loading = false;
        });

        lock(&self.shared)
            .detail
            .attach(generation, handle.abort_handle());
        RequestHandle { handle }
    }

    /// Close the modal. Returns false when no recipe was open.
    ///
    /// A recipe is only ever open once its fetch has completed, so there is no
    /// detail request to cancel here. A later fetch supersedes the earlier one
    /// through [`select_recipe`](Self::select_recipe) instead.
    pub fn dismiss_recipe(&self) -> bool {
        let mut shared = lock(&self.shared);
        shared.view.detail.selected.take().is_some()
    }
}

impl Drop for DishSearch {
    fn drop(&mut self) {
        let mut shared = lock(&self.shared);
        shared.search.cancel();
        shared.detail.cancel();
    }
}
