//! Info Modal Component
//!
//! Slide-up panel used for the profile and memory-list overlays.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

/// Closing animation length; the panel stays in the DOM this long
pub const MODAL_EXIT_MS: u32 = 300;

/// Slide-up panel with a close button
///
/// # Arguments
/// * `open` - Whether the panel should be shown
/// * `on_close` - Called when the close button is pressed
#[component]
pub fn InfoModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_app_context();
    let (rendered, set_rendered) = signal(false);
    let (raised, set_raised) = signal(false);

    Effect::new(move |_| {
        let is_open = open.get();
        ctx.modal_open.set(is_open);
        if is_open {
            set_rendered.set(true);
            // Mount first, then slide in on the next frame
            request_animation_frame(move || {
                set_raised.try_set(true);
            });
        } else {
            set_raised.set(false);
            spawn_local(async move {
                TimeoutFuture::new(MODAL_EXIT_MS).await;
                // Reopened while the exit animation ran
                if open.try_get_untracked() == Some(false) {
                    set_rendered.try_set(false);
                }
            });
        }
    });

    on_cleanup(move || ctx.modal_open.set(false));

    view! {
        <Show when=move || rendered.get()>
            <div class=move || if raised.get() { "info-modal open" } else { "info-modal" }>
                <div class="info-modal-header">
                    <button
                        class="info-modal-close"
                        aria-label="Закрыть"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </Show>
    }
}
