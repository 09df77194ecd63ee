//! Add Memory Page
//!
//! Form for a new memory written by the remembered person. Without a
//! remembered person there is no author, so the page sends you to the
//! identity picker.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Field, ImagePicker, PeoplePicker};
use crate::context::{use_api, use_app_context};
use crate::error::FormError;
use crate::forms::{toggle_id, ImageUpload, MemoryDraft};
use crate::query::use_users;
use crate::routing::Page;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AddMemoryPage() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let store = use_app_store();
    let users = use_users();

    let creator_id = store.current_user_id().get_untracked().unwrap_or_default();
    let draft = RwSignal::new(MemoryDraft::with_creator(&creator_id));
    let pick_images = Callback::new(move |images: Vec<ImageUpload>| draft.update(|d| d.set_images(images)));
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        if store.current_user_id().get_untracked().is_none() {
            log::info!("no remembered person, asking who is writing");
            ctx.router.replace(Page::WhoAmI);
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (params, images) = match draft.with_untracked(|d| d.validate().map(|p| (p, d.images.clone()))) {
            Ok(valid) => valid,
            Err(err) => {
                ctx.notify.error(err.to_string());
                if err == FormError::MissingCreator {
                    ctx.navigate(Page::WhoAmI);
                }
                return;
            }
        };

        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.create_memory(&params, &images).await {
                Ok(()) => {
                    ctx.notify.success("Успех!");
                    draft.try_update(|d| d.reset());
                    ctx.reload_memories();
                }
                Err(err) => {
                    log::error!("creating memory failed: {}", err);
                    ctx.notify
                        .error(err.toast_message("Ошибка при добавлении", "Не удалось добавить воспоминание"));
                }
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="page form-page">
            <h1>"Добавить воспоминание"</h1>
            <p class="description">"Заполните поля ниже, чтобы добавить новое воспоминание."</p>
            <form class="form" on:submit=submit>
                <Field
                    label="Заголовок"
                    placeholder="Забытое воспоминание..."
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.title.clone()))
                    on_input=move |value: String| draft.update(|d| d.title = value)
                />
                <Field
                    label="Текст"
                    placeholder="Я вспомнил, что как-то раз я вспомнил..."
                    required=true
                    multiline=true
                    value=Signal::derive(move || draft.with(|d| d.text.clone()))
                    on_input=move |value: String| draft.update(|d| d.text = value)
                />
                <PeoplePicker
                    label="О ком: *"
                    empty_text="Нет данных о родственниках"
                    people=Signal::derive(move || users.data.get().unwrap_or_default())
                    selected=Signal::derive(move || draft.with(|d| d.relatives_id.clone()))
                    on_toggle=move |id: String| draft.update(|d| toggle_id(&mut d.relatives_id, &id))
                />
                <ImagePicker
                    selected=Signal::derive(move || draft.with(|d| d.images.len()))
                    on_pick=pick_images
                />
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Создание..." } else { "Создать воспоминание" }}
                </button>
            </form>
        </div>
    }
}
