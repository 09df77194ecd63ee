use leptos::prelude::*;

use crate::models::{Person, USER_PLACEHOLDER};

/// Person photo; swaps to the placeholder if the image fails to load
#[component]
pub fn Avatar(person: Person, #[prop(optional)] class: &'static str) -> impl IntoView {
    photo_with_fallback(person.avatar_or_placeholder().to_string(), person.full_name(), USER_PLACEHOLDER, class)
}

/// `<img>` that falls back to `placeholder` on load error
pub fn photo_with_fallback(src: String, alt: String, placeholder: &'static str, class: &'static str) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    view! {
        <img
            class=class
            src=move || if broken.get() { placeholder.to_string() } else { src.clone() }
            alt=alt
            on:error=move |_| set_broken.set(true)
        />
    }
}
