//! Identity Picker Page
//!
//! "Who are you?" list. The choice is remembered in localStorage and an
//! already remembered person goes straight to their profile.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::query::use_users;
use crate::routing::Page;
use crate::storage::{save_current_user, BrowserStorage};
use crate::store::{store_set_current_user, use_app_store, AppStateStoreFields};

#[component]
pub fn WhoAmIPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let users = use_users();

    Effect::new(move |_| {
        if let Some(id) = store.current_user_id().get_untracked() {
            log::debug!("remembered person {}, skipping identity picker", id);
            ctx.router.replace(Page::Profile(id));
        }
    });

    let pick = move |person_id: String| {
        save_current_user(&BrowserStorage, &person_id);
        store_set_current_user(&store, Some(person_id.clone()));
        ctx.navigate(Page::Profile(person_id));
    };

    view! {
        <div class="page who-am-i">
            <h1>"Кто вы?"</h1>
            <p class="description">"Выберите себя из списка или войдите как гость"</p>
            {move || match users.data.get() {
                None if users.error().is_some() => {
                    view! { <p class="status-message">"Не удалось загрузить список родственников"</p> }.into_any()
                }
                None => view! { <p class="status-message">"Загрузка..."</p> }.into_any(),
                Some(people) => view! {
                    <div class="who-am-i-list">
                        <button class="who-am-i-option" on:click=move |_| ctx.navigate(Page::Tree)>
                            <span class="who-am-i-name">"Гость"</span>
                            <p class="muted">"Просмотр без авторизации"</p>
                        </button>
                        {people
                            .into_iter()
                            .map(|person| {
                                let id = person.id.clone();
                                let rest = (!person.surname.trim().is_empty()).then(|| {
                                    format!("{} {}", person.surname.trim(), person.middlename.trim())
                                        .trim()
                                        .to_string()
                                });
                                view! {
                                    <button class="who-am-i-option" on:click=move |_| pick(id.clone())>
                                        <span class="who-am-i-name">{person.name}</span>
                                        {rest.map(|rest| view! { <p class="muted">{rest}</p> })}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
