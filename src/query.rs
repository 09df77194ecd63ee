//! Data Queries
//!
//! Fetch-and-cache hooks over the backend. Results land in the global
//! store; a `QueryStatus` carries the loading / error flags and a
//! revalidation trigger. Responses older than the latest request for the
//! same key are dropped.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_api, use_app_context};
use crate::error::{ApiError, ApiResult};
use crate::models::{Memory, Person};
use crate::store::{
    store_find_user, store_put_profile, store_set_memories, store_set_users, use_app_store, AppStateStoreFields,
    AppStore,
};

/// Monotonic request counter; only the newest ticket may write results
#[derive(Clone, Default)]
pub struct RequestGeneration(Arc<AtomicU64>);

impl RequestGeneration {
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

#[derive(Clone, Copy)]
pub struct QueryStatus {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    trigger: RwSignal<u32>,
}

impl QueryStatus {
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            trigger: RwSignal::new(0),
        }
    }

    /// Fetch again
    pub fn revalidate(&self) {
        self.trigger.update(|v| *v = v.wrapping_add(1));
    }

    fn track(&self) {
        self.trigger.track();
    }
}

/// Read handle returned by the `use_*` hooks
pub struct Query<T: Send + Sync + 'static> {
    pub data: Signal<Option<T>>,
    pub status: QueryStatus,
}

impl<T: Send + Sync + 'static> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Query<T> {}

impl<T: Clone + Send + Sync + 'static> Query<T> {
    pub fn loading(&self) -> bool {
        self.status.loading.get()
    }

    pub fn error(&self) -> Option<ApiError> {
        self.status.error.get()
    }

    pub fn revalidate(&self) {
        self.status.revalidate();
    }
}

/// Spawn `fetch`, hand a fresh result to `on_ok`, record failures on `status`
fn run<T, F>(status: QueryStatus, generation: RequestGeneration, what: String, fetch: F, on_ok: impl FnOnce(T) + 'static)
where
    T: 'static,
    F: Future<Output = ApiResult<T>> + 'static,
{
    let ticket = generation.begin();
    status.loading.set(true);
    spawn_local(async move {
        let result = fetch.await;
        if !generation.is_current(ticket) {
            log::debug!("dropping stale response for {}", what);
            return;
        }
        status.loading.try_set(false);
        match result {
            Ok(value) => {
                status.error.try_set(None);
                on_ok(value);
            }
            Err(err) => {
                log::error!("failed to load {}: {}", what, err);
                status.error.try_set(Some(err));
            }
        }
    });
}

/// Statuses of the two app-wide collections
#[derive(Clone, Copy)]
pub struct DirectoryQueries {
    pub users: QueryStatus,
    pub memories: QueryStatus,
}

/// Start the people and memory fetchers. Call once from the root component.
pub fn install_directory_queries(store: AppStore, api: ApiClient) -> DirectoryQueries {
    let users = QueryStatus::new();
    let memories = QueryStatus::new();

    let users_api = api.clone();
    let users_generation = RequestGeneration::default();
    Effect::new(move |_| {
        users.track();
        let api = users_api.clone();
        run(
            users,
            users_generation.clone(),
            "people".to_string(),
            async move { api.list_users().await },
            move |list: Vec<Person>| {
                log::info!("loaded {} people", list.len());
                store_set_users(&store, list);
            },
        );
    });

    let memories_generation = RequestGeneration::default();
    Effect::new(move |_| {
        memories.track();
        let api = api.clone();
        run(
            memories,
            memories_generation.clone(),
            "memories".to_string(),
            async move { api.list_memories().await },
            move |list: Vec<Memory>| {
                log::info!("loaded {} memories", list.len());
                store_set_memories(&store, list);
            },
        );
    });

    // Only the directory follows window focus
    let _ = window_event_listener(leptos::ev::focus, move |_| users.revalidate());

    DirectoryQueries { users, memories }
}

/// Everyone (`GET /user/all`)
pub fn use_users() -> Query<Vec<Person>> {
    let store = use_app_store();
    let ctx = use_app_context();
    Query {
        data: Signal::derive(move || store.users_loaded().get().then(|| store.users().get())),
        status: ctx.queries.users,
    }
}

/// All memories (`GET /memory/all`)
pub fn use_memories() -> Query<Vec<Memory>> {
    let store = use_app_store();
    let ctx = use_app_context();
    Query {
        data: Signal::derive(move || store.memories_loaded().get().then(|| store.memories().get())),
        status: ctx.queries.memories,
    }
}

/// One profile (`GET /user/find/{id}`). Nothing is requested for a blank id.
///
/// Until the full profile arrives the directory entry stands in for it.
pub fn use_user(person_id: Signal<String>) -> Query<Person> {
    let store = use_app_store();
    let api = use_api();
    let status = QueryStatus::new();
    let generation = RequestGeneration::default();

    Effect::new(move |_| {
        status.track();
        let id = person_id.get();
        if id.trim().is_empty() {
            return;
        }
        let api = api.clone();
        let key = id.clone();
        run(
            status,
            generation.clone(),
            format!("profile {}", id),
            async move { api.find_user(&key).await },
            move |found: Option<Person>| match found {
                Some(person) => store_put_profile(&store, person),
                None => {
                    log::warn!("profile {} does not exist", id);
                    store.profiles().write().remove(&id);
                }
            },
        );
    });

    let data = Signal::derive(move || {
        let id = person_id.get();
        store
            .profiles()
            .with(|profiles| profiles.get(&id).cloned())
            .or_else(|| store_find_user(&store, &id))
    });

    Query { data, status }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let generation = RequestGeneration::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = RequestGeneration::default();
        let ticket = generation.begin();
        let other = generation.clone();
        other.begin();
        assert!(!generation.is_current(ticket));
    }
}
