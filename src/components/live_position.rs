use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_api, use_app_context};
use crate::profile_editor::ProfilePatch;
use crate::store::{store_apply_patch, use_app_store};

/// Free-text "about / where I live" line with an inline editor
#[component]
pub fn LivePosition(
    #[prop(into)] person_id: Signal<String>,
    #[prop(into)] text: Signal<String>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let store = use_app_store();
    let (editing, set_editing) = signal(false);
    let (input, set_input) = signal(String::new());

    let save = Callback::new(move |_: ()| {
        let patch = ProfilePatch::live_position(&person_id.get_untracked(), &input.get_untracked());
        let api = api.clone();
        spawn_local(async move {
            match api.update_user(&patch).await {
                Ok(()) => {
                    store_apply_patch(&store, &patch);
                    set_editing.try_set(false);
                    on_saved.run(());
                    ctx.notify.success("Данные успешно сохранены");
                }
                Err(err) => {
                    log::error!("saving livePosition failed: {}", err);
                    ctx.notify
                        .error(err.toast_message("Ошибка при сохранении данных", "Не удалось сохранить изменения"));
                }
            }
        });
    });

    view! {
        <div class="live-position">
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <p class="live-position-text">{move || text.get()}</p>
                    <button
                        type="button"
                        class="live-position-edit"
                        on:click=move |_| {
                            set_input.set(text.get_untracked());
                            set_editing.set(true);
                        }
                    >
                        {move || if text.with(|t| t.trim().is_empty()) { "Добавить о себе" } else { "Изменить" }}
                    </button>
                }
            >
                <textarea
                    class="live-position-input"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                ></textarea>
                <button type="button" class="confirm-btn" on:click=move |_| save.run(())>"Сохранить"</button>
                <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>"Отмена"</button>
            </Show>
        </div>
    }
}
