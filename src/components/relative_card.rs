use leptos::prelude::*;

use crate::components::avatar::photo_with_fallback;
use crate::family_tree::GraphNode;
use crate::models::USER_PLACEHOLDER;

/// One person on the tree canvas. Unmatched layout entries render inert.
#[component]
pub fn RelativeCard(
    node: GraphNode,
    #[prop(into)] chosen: Signal<bool>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let GraphNode { person_id, label, photo, .. } = node;
    let inert = person_id.is_none();
    let alt = label.clone();

    let class = move || match (inert, chosen.get()) {
        (true, _) => "relative-card placeholder",
        (false, true) => "relative-card chosen",
        (false, false) => "relative-card",
    };

    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(id) = &person_id {
                    on_select.run(id.clone());
                }
            }
        >
            {photo_with_fallback(photo, alt, USER_PLACEHOLDER, "relative-card-photo")}
            <p class="relative-card-label">{label}</p>
        </div>
    }
}
