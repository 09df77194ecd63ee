//! Editable List Component
//!
//! One profile section (hobbies, specializations, achievements) with an
//! edit mode: add entries, remove entries, save the whole list at once.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_api, use_app_context};
use crate::profile_editor::{ListDraft, ListField, ProfilePatch};
use crate::store::{store_apply_patch, use_app_store};

/// Editable string-list section of a profile
///
/// # Arguments
/// * `person_id` - Whose profile this is
/// * `field` - Which list
/// * `items` - Current saved values
/// * `own_profile` - The viewer is this person; empty sections stay visible
/// * `on_saved` - Called after a successful save (e.g. to refetch)
#[component]
pub fn EditableList(
    #[prop(into)] person_id: Signal<String>,
    field: ListField,
    #[prop(into)] items: Signal<Vec<String>>,
    #[prop(into)] own_profile: Signal<bool>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let store = use_app_store();
    let draft = RwSignal::new(ListDraft::default());

    let save = Callback::new(move |_: ()| {
        let saved = draft.with_untracked(|d| d.items.clone());
        let patch = ProfilePatch::list(&person_id.get_untracked(), field, saved.clone());
        let api = api.clone();
        spawn_local(async move {
            match api.update_user(&patch).await {
                Ok(()) => {
                    store_apply_patch(&store, &patch);
                    draft.try_update(|d| d.reset(&saved));
                    on_saved.run(());
                    ctx.notify.success(field.success_message());
                }
                Err(err) => {
                    log::error!("saving {} failed: {}", field.key(), err);
                    ctx.notify
                        .error(err.toast_message("Ошибка при сохранении данных", "Не удалось сохранить изменения"));
                }
            }
        });
    });

    let edit_items = move || {
        draft
            .with(|d| d.items.clone())
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || items.with(|source| draft.with(|d| d.is_visible(source, own_profile.get())))>
            <section class="editable-list">
                <div class="editable-list-header">
                    <p class="editable-list-title">{field.title()} ":"</p>
                    <Show when=move || draft.with(|d| d.editing)>
                        <button type="button" class="editable-list-add" on:click=move |_| draft.update(|d| d.start_adding())>
                            "+"
                        </button>
                    </Show>
                    <Show
                        when=move || draft.with(|d| d.editing)
                        fallback=move || view! {
                            <button
                                type="button"
                                class="editable-list-toggle"
                                on:click=move |_| draft.update(|d| d.begin_edit(&items.get_untracked()))
                            >
                                "Изменить"
                            </button>
                        }
                    >
                        <button type="button" class="editable-list-toggle" on:click=move |_| save.run(())>
                            "Сохранить"
                        </button>
                        <button
                            type="button"
                            class="editable-list-cancel"
                            on:click=move |_| draft.update(|d| d.reset(&items.get_untracked()))
                        >
                            "Отмена"
                        </button>
                    </Show>
                </div>

                <Show
                    when=move || draft.with(|d| d.editing)
                    fallback=move || view! {
                        <ul class="editable-list-items">
                            {move || items.get().into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                        </ul>
                    }
                >
                    <ul class="editable-list-items editing">
                        {move || edit_items().into_iter().map(|(index, item)| view! {
                            <li>
                                <span>{item}</span>
                                <button
                                    type="button"
                                    class="editable-list-remove"
                                    on:click=move |_| draft.update(|d| d.remove(index))
                                >
                                    "×"
                                </button>
                            </li>
                        }).collect_view()}
                    </ul>
                    <Show when=move || draft.with(|d| d.adding)>
                        <div class="editable-list-new">
                            <input
                                type="text"
                                placeholder=field.placeholder()
                                autofocus=true
                                prop:value=move || draft.with(|d| d.new_item.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.new_item = value);
                                }
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    match ev.key().as_str() {
                                        "Enter" => {
                                            ev.prevent_default();
                                            draft.update(|d| {
                                                d.confirm_add();
                                            });
                                        }
                                        "Escape" => draft.update(|d| d.cancel_add()),
                                        _ => {}
                                    }
                                }
                            />
                            <button
                                type="button"
                                class="confirm-btn"
                                on:click=move |_| draft.update(|d| {
                                    d.confirm_add();
                                })
                            >
                                "✓"
                            </button>
                            <button type="button" class="cancel-btn" on:click=move |_| draft.update(|d| d.cancel_add())>
                                "×"
                            </button>
                        </div>
                    </Show>
                </Show>
            </section>
        </Show>
    }
}
