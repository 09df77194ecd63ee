//! Memory Detail Page
//!
//! Photo carousel, title, full text, author and everyone the memory is about.

use leptos::prelude::*;

use crate::components::{AppLink, MemoryGallery};
use crate::models::{Memory, Person};
use crate::query::use_memories;
use crate::routing::Page;
use crate::store::{store_find_memory, use_app_store};

#[component]
pub fn MemoryDetailPage(memory_id: String) -> impl IntoView {
    let store = use_app_store();
    let memories = use_memories();
    // None while the list has never loaded, Some(None) when the id is unknown
    let memory = Memo::new(move |_| {
        memories
            .data
            .with(Option::is_some)
            .then(|| store_find_memory(&store, &memory_id))
    });

    view! {
        <div class="page memory-detail-page">
            {move || match memory.get() {
                Some(Some(memory)) => view! { <MemoryDetail memory=memory /> }.into_any(),
                Some(None) => view! { <p class="status-message">"Воспоминание не найдено"</p> }.into_any(),
                None if memories.error().is_some() => {
                    view! {
                        <p class="status-message">"Ошибка загрузки воспоминаний"</p>
                        <button class="btn-secondary" on:click=move |_| memories.revalidate()>"Повторить"</button>
                    }
                    .into_any()
                }
                None => view! { <p class="status-message">"Загрузка..."</p> }.into_any(),
            }}
        </div>
    }
}

fn name_or_unknown(person: &Person) -> String {
    let name = person.full_name();
    if name.is_empty() { "Не указано".to_string() } else { name }
}

#[component]
fn MemoryDetail(memory: Memory) -> impl IntoView {
    let gallery = memory.gallery();
    let title = memory.display_title().unwrap_or_default().to_string();
    let author = name_or_unknown(&memory.creator);
    let author_page = Page::Profile(memory.creator.id.clone());

    view! {
        <MemoryGallery images=gallery title=title.clone() />
        <div class="memory-detail">
            {(!title.is_empty()).then(|| view! { <h1>{title.clone()}</h1> })}
            <p class="memory-detail-text">{memory.text}</p>

            <div class="memory-detail-section">
                <p class="field-label">"Автор"</p>
                <AppLink page=author_page>{author}</AppLink>
            </div>

            <div class="memory-detail-section">
                <p class="field-label">"О ком это воспоминание"</p>
                {if memory.relatives.is_empty() {
                    view! { <p class="muted">"Не указано"</p> }.into_any()
                } else {
                    memory
                        .relatives
                        .iter()
                        .map(|relative| {
                            let name = name_or_unknown(relative);
                            view! {
                                <AppLink page=Page::Profile(relative.id.clone()) class="memory-detail-relative">
                                    {name}
                                </AppLink>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
