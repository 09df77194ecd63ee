//! Mobile Bottom Navigation
//!
//! Two-tab bar shown on narrow screens; hidden while a modal is open.

use leptos::prelude::*;

use crate::components::follow;
use crate::context::use_app_context;
use crate::routing::{NavSection, Page};

#[component]
pub fn MobileNav() -> impl IntoView {
    let ctx = use_app_context();
    let tab_class = move |section: NavSection| {
        move || {
            if ctx.router.page().get().nav_section() == Some(section) {
                "mobile-nav-item active"
            } else {
                "mobile-nav-item"
            }
        }
    };

    view! {
        <Show when=move || !ctx.modal_open.get()>
            <nav class="mobile-nav">
                <a href=Page::Tree.path() class=tab_class(NavSection::Tree) on:click=follow(ctx, Page::Tree)>
                    <div class="mobile-nav-label">"Древо"</div>
                </a>
                <a href=Page::Memories.path() class=tab_class(NavSection::Memories) on:click=follow(ctx, Page::Memories)>
                    <div class="mobile-nav-label">"Воспоминания"</div>
                </a>
            </nav>
        </Show>
    }
}
