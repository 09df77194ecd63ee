//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::notify::Notifications;
use crate::query::DirectoryQueries;
use crate::routing::{Page, Router};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// People / memories fetch status and reload triggers
    pub queries: DirectoryQueries,
    pub router: Router,
    pub notify: Notifications,
    /// An info modal is open (hides the mobile nav)
    pub modal_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new(queries: DirectoryQueries, router: Router, notify: Notifications) -> Self {
        Self {
            queries,
            router,
            notify,
            modal_open: RwSignal::new(false),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.router.navigate(page);
    }

    /// Refetch the people directory
    pub fn reload_users(&self) {
        self.queries.users.revalidate();
    }

    /// Refetch all memories
    pub fn reload_memories(&self) {
        self.queries.memories.revalidate();
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// HTTP client, provided next to `AppContext`
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
