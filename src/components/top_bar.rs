//! Top Bar Component
//!
//! Brand, desktop navigation and the current-user chip.

use leptos::prelude::*;

use crate::components::{follow, AppLink, Avatar};
use crate::context::use_app_context;
use crate::query::use_user;
use crate::routing::{NavSection, Page};
use crate::storage::{clear_current_user, BrowserStorage};
use crate::store::{store_set_current_user, use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let current_id = Signal::derive(move || store.current_user_id().get().unwrap_or_default());
    let me = use_user(current_id);

    let nav_class = move |section: NavSection| {
        move || {
            if ctx.router.page().get().nav_section() == Some(section) {
                "top-bar-link active"
            } else {
                "top-bar-link"
            }
        }
    };

    let switch_user = move |_| {
        log::info!("leaving profile {}", current_id.get_untracked());
        clear_current_user(&BrowserStorage);
        store_set_current_user(&store, None);
        ctx.navigate(Page::WhoAmI);
    };

    view! {
        <header class="top-bar">
            <AppLink page=Page::Tree class="top-bar-brand">"WeFamily"</AppLink>
            <nav class="top-bar-nav">
                <a
                    href=Page::Tree.path()
                    class=nav_class(NavSection::Tree)
                    on:click=follow(ctx, Page::Tree)
                >
                    "Древо"
                </a>
                <a
                    href=Page::Memories.path()
                    class=nav_class(NavSection::Memories)
                    on:click=follow(ctx, Page::Memories)
                >
                    "Воспоминания"
                </a>
            </nav>
            {move || match me.data.get() {
                Some(person) => {
                    let page = Page::Profile(person.id.clone());
                    let href = page.path();
                    view! {
                        <a href=href class="user-chip" on:click=follow(ctx, page)>
                            <span class="user-chip-name">{person.name.clone()}</span>
                            <Avatar person=person class="user-chip-photo" />
                        </a>
                    }
                    .into_any()
                }
                None if me.loading() => view! { <div class="user-chip skeleton"></div> }.into_any(),
                None => view! { <span class="user-chip missing">"Пользователь не найден"</span> }.into_any(),
            }}
            <Show when=move || !current_id.get().is_empty()>
                <button class="top-bar-switch" title="Сменить пользователя" on:click=switch_user>
                    "Выйти"
                </button>
            </Show>
        </header>
    }
}
