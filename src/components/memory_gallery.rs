//! Memory Gallery Component
//!
//! Looping photo carousel for the memory detail page.

use leptos::prelude::*;
use leptos_carousel::{bind_arrow_keys, can_scroll, create_carousel_signals, scroll_next, scroll_prev, scroll_to};

use crate::models::MEMORY_PLACEHOLDER;

#[component]
pub fn MemoryGallery(images: Vec<String>, #[prop(into)] title: String) -> impl IntoView {
    let carousel = create_carousel_signals(images.len(), true);
    bind_arrow_keys(carousel);

    let track_style = move || format!("transform: translateX(-{}%);", carousel.selected_read.get() * 100);
    let count = images.len();

    view! {
        <div class="memory-gallery">
            <div class="memory-gallery-viewport">
                <div class="memory-gallery-track" style=track_style>
                    {images
                        .into_iter()
                        .enumerate()
                        .map(|(index, src)| {
                            let alt = if title.is_empty() {
                                format!("Воспоминание - фото {}", index + 1)
                            } else {
                                title.clone()
                            };
                            let (broken, set_broken) = signal(false);
                            view! {
                                <div class="memory-gallery-slide">
                                    <img
                                        src=move || if broken.get() { MEMORY_PLACEHOLDER.to_string() } else { src.clone() }
                                        alt=alt
                                        on:error=move |_| set_broken.set(true)
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Show when=move || can_scroll(&carousel)>
                <button class="memory-gallery-prev" aria-label="Предыдущее фото" on:click=move |_| scroll_prev(&carousel)>
                    "‹"
                </button>
                <button class="memory-gallery-next" aria-label="Следующее фото" on:click=move |_| scroll_next(&carousel)>
                    "›"
                </button>
                <div class="memory-gallery-dots">
                    {(0..count)
                        .map(|index| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.selected_read.get() == index { "dot active" } else { "dot" }
                                    }
                                    on:click=move |_| scroll_to(&carousel, index)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
