//! Memories Page
//!
//! Pick people on the tree, then show the memories they all share.

use leptos::prelude::*;

use crate::components::{AppLink, FamilyTreeView, InfoModal, MemoriesInfo};
use crate::query::{use_memories, use_users};
use crate::routing::Page;
use crate::selection::ChosenSet;

#[component]
pub fn MemoriesPage() -> impl IntoView {
    let users = use_users();
    let memories = use_memories();
    let chosen = RwSignal::new(ChosenSet::new());
    let (list_open, set_list_open) = signal(false);

    let toggle = move |id: String| {
        let mut now_chosen = false;
        let mut count = 0;
        chosen.update(|set| {
            now_chosen = set.toggle(&id);
            count = set.len();
        });
        log::debug!("{} {} ({} chosen)", if now_chosen { "chose" } else { "unchose" }, id, count);
    };

    let people = Signal::derive(move || {
        let directory = users.data.get().unwrap_or_default();
        chosen.with(|set| set.resolve(&directory).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="page memories-page">
            <h1>"Выбери родственников"</h1>
            <div class="page-actions">
                <AppLink page=Page::AddMemory class="btn-secondary">"Добавить воспоминание"</AppLink>
            </div>
            <FamilyTreeView on_select=toggle chosen=chosen />
            <Show when=move || chosen.with(|set| !set.is_empty())>
                <button class="btn-primary show-memories" on:click=move |_| set_list_open.update(|open| *open = !*open)>
                    "Показать"
                </button>
                <button class="btn-secondary" on:click=move |_| {
                    chosen.update(ChosenSet::clear);
                    set_list_open.set(false);
                }>
                    "Сбросить"
                </button>
            </Show>
            <InfoModal open=list_open on_close=move |_: ()| set_list_open.set(false)>
                <MemoriesInfo
                    people=people
                    chosen=chosen
                    memories=Signal::derive(move || memories.data.get().unwrap_or_default())
                />
            </InfoModal>
        </div>
    }
}
