// ============================================================================
// RESOURCE HOOKS - Fetch on mount, keep loading/error state per page
// ============================================================================
// Requests are only issued with a token; without one the hooks stay idle and
// the route guard takes care of the redirect.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use super::use_session::use_session;
use crate::models::{Resource, Statistics};
use crate::services::{ApiClient, ApiError};
use crate::state::SessionAccess;

/// One-shot fetch state for detail pages and statistics
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// List page state. Created records are appended locally, no refetch.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
}

pub enum ListAction<R> {
    Loaded(Vec<R>),
    Failed(String),
    Appended(R),
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl<R: Clone> Reducible for ListState<R> {
    type Action = ListAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::Loaded(items) => {
                next.items = items;
                next.loading = false;
                next.error = None;
            }
            ListAction::Failed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            ListAction::Appended(item) => {
                next.items.push(item);
            }
        }
        Rc::new(next)
    }
}

pub fn list_error_message<R: Resource>() -> String {
    format!("Failed to fetch {}.", R::TITLE.to_lowercase())
}

pub fn create_error_message<R: Resource>() -> String {
    format!("Failed to add new {}.", R::SINGULAR.to_lowercase())
}

pub fn detail_error_message<R: Resource>() -> String {
    format!("Failed to fetch {} details.", R::SINGULAR.to_lowercase())
}

fn log_failure(what: &str, error: &ApiError) {
    log::error!("❌ Error loading {}: {}", what, error);
    if error.is_unauthorized() {
        log::warn!("⚠️ The API refused the stored token; logging out will clear it");
    }
}

#[hook]
pub fn use_resource_list<R>() -> UseReducerHandle<ListState<R>>
where
    R: Resource,
{
    let session = use_session();
    let state = use_reducer(ListState::<R>::default);
    let token = session.token();

    {
        let state = state.clone();
        use_effect_with(token, move |token| {
            if let Ok(client) = ApiClient::authorized(token.as_deref()) {
                wasm_bindgen_futures::spawn_local(async move {
                    match client.list::<R>().await {
                        Ok(items) => state.dispatch(ListAction::Loaded(items)),
                        Err(e) => {
                            log_failure(R::TITLE, &e);
                            state.dispatch(ListAction::Failed(list_error_message::<R>()));
                        }
                    }
                });
            }
            || ()
        });
    }

    state
}

#[hook]
pub fn use_resource_item<R>(id: i64) -> UseStateHandle<FetchState<R>>
where
    R: Resource,
{
    let session = use_session();
    let state = use_state(|| FetchState::<R>::Loading);
    let token = session.token();

    {
        let state = state.clone();
        use_effect_with((token, id), move |(token, id)| {
            let id = *id;
            if let Ok(client) = ApiClient::authorized(token.as_deref()) {
                state.set(FetchState::Loading);
                wasm_bindgen_futures::spawn_local(async move {
                    match client.get::<R>(id).await {
                        Ok(item) => state.set(FetchState::Loaded(item)),
                        Err(e) => {
                            log_failure(&format!("{} {}", R::SINGULAR, id), &e);
                            state.set(FetchState::Failed(detail_error_message::<R>()));
                        }
                    }
                });
            }
            || ()
        });
    }

    state
}

#[hook]
pub fn use_statistics() -> UseStateHandle<FetchState<Statistics>> {
    let session = use_session();
    let state = use_state(|| FetchState::<Statistics>::Loading);
    let token = session.token();

    {
        let state = state.clone();
        use_effect_with(token, move |token| {
            if let Ok(client) = ApiClient::authorized(token.as_deref()) {
                wasm_bindgen_futures::spawn_local(async move {
                    match client.statistics().await {
                        Ok(stats) => state.set(FetchState::Loaded(stats)),
                        Err(e) => {
                            log_failure("statistics", &e);
                            state.set(FetchState::Failed("Failed to fetch statistics.".to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    state
}
