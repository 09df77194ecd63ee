use leptos::prelude::*;

use crate::components::avatar::photo_with_fallback;
use crate::components::follow;
use crate::context::use_app_context;
use crate::models::{Memory, MEMORY_PLACEHOLDER};
use crate::routing::Page;

/// Memory preview: cover, title, first lines, author and subjects.
/// Clicking the card opens the memory.
#[component]
pub fn MemoryCard(memory: Memory) -> impl IntoView {
    let ctx = use_app_context();
    let detail = Page::MemoryDetail(memory.id.clone());
    let author = Page::Profile(memory.creator.id.clone());
    let author_href = author.path();

    let cover = memory.cover().unwrap_or(MEMORY_PLACEHOLDER).to_string();
    let title = memory.display_title().map(str::to_string);
    let alt = title.clone().unwrap_or_else(|| "Воспоминание".to_string());
    let about = memory.about_summary();

    view! {
        <article class="memory-card" on:click=move |_| ctx.navigate(detail.clone())>
            {photo_with_fallback(cover, alt, MEMORY_PLACEHOLDER, "memory-card-cover")}
            <p class="memory-card-title">{title}</p>
            <p class="memory-card-text">{memory.text}</p>
            <div class="memory-card-meta">
                <a href=author_href on:click=follow(ctx, author)>
                    <span class="meta-label">"Автор:"</span>
                    " "
                    {memory.creator.name}
                </a>
                <p>
                    <span class="meta-label">"О ком:"</span>
                    " "
                    {about}
                </p>
            </div>
        </article>
    }
}
