//! In-App Links
//!
//! Real `<a href>` elements (so middle-click / new tab still work) whose
//! plain clicks go through the router instead of reloading the page.

use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};
use crate::routing::Page;

/// Click handler for an anchor pointing at `page`
pub fn follow(ctx: AppContext, page: Page) -> impl FnMut(leptos::ev::MouseEvent) + 'static {
    move |ev| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        ctx.navigate(page.clone());
    }
}

#[component]
pub fn AppLink(page: Page, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let href = page.path();
    view! {
        <a href=href class=class on:click=follow(ctx, page)>
            {children()}
        </a>
    }
}
