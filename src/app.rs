//! WeFamily Frontend App
//!
//! Root component: provides the store, API client and context, starts the
//! directory fetchers and switches pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{MobileNav, Toaster, TopBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify::Notifications;
use crate::pages::{
    AddMemoryPage, CreateParentPage, MemoriesPage, MemoryDetailPage, ProfilePage, TreePage, WhoAmIPage,
};
use crate::query::install_directory_queries;
use crate::routing::{Page, Router};
use crate::storage::{load_current_user, BrowserStorage};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let current_user_id = load_current_user(&BrowserStorage);
    log::info!("starting, remembered person: {:?}", current_user_id);

    let store = Store::new(AppState {
        current_user_id,
        ..Default::default()
    });
    provide_context(store);

    let api = ApiClient::new(config);
    provide_context(api.clone());

    let queries = install_directory_queries(store, api);
    let ctx = AppContext::new(queries, Router::from_location(), Notifications::new());
    provide_context(ctx);

    let page = ctx.router.page();

    view! {
        <div class="app-layout">
            <TopBar />
            <main class="main-content">
                {move || match page.get() {
                    Page::WhoAmI => view! { <WhoAmIPage /> }.into_any(),
                    Page::Tree => view! { <TreePage /> }.into_any(),
                    Page::Memories => view! { <MemoriesPage /> }.into_any(),
                    Page::Profile(id) => view! { <ProfilePage person_id=id /> }.into_any(),
                    Page::MemoryDetail(id) => view! { <MemoryDetailPage memory_id=id /> }.into_any(),
                    Page::AddMemory => view! { <AddMemoryPage /> }.into_any(),
                    Page::CreateParent => view! { <CreateParentPage /> }.into_any(),
                }}
            </main>
            <MobileNav />
            <Toaster />
        </div>
    }
}
