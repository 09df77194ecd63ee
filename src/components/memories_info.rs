//! Memories Info Component
//!
//! Memories shared by every chosen person, shown in the memories modal.

use leptos::prelude::*;

use crate::components::MemoryCard;
use crate::models::{Memory, Person};
use crate::selection::{filter_memories, ChosenSet};

#[component]
pub fn MemoriesInfo(
    /// Chosen people, in selection order
    #[prop(into)] people: Signal<Vec<Person>>,
    #[prop(into)] chosen: Signal<ChosenSet>,
    #[prop(into)] memories: Signal<Vec<Memory>>,
) -> impl IntoView {
    let shared = Memo::new(move |_| memories.with(|all| chosen.with(|set| filter_memories(all, set))));
    let names = move || {
        people
            .get()
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", ")
    };

    view! {
        <div class="memories-info">
            <h2>"Воспоминания"</h2>
            <div class="memories-info-with">
                <p class="meta-label">"С кем:"</p>
                <p>{names}</p>
            </div>
            <div class="memories-info-list">
                <For
                    each=move || shared.get()
                    key=|memory| memory.id.clone()
                    children=move |memory| view! { <MemoryCard memory=memory /> }
                />
                <Show when=move || shared.with(|list| list.is_empty())>
                    <p class="muted">"Воспоминания не найдены"</p>
                </Show>
            </div>
        </div>
    }
}
