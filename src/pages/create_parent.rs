//! Create Parent Page
//!
//! Form for adding a new relative to the directory.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Field, ImagePicker, PeoplePicker};
use crate::context::{use_api, use_app_context};
use crate::forms::{toggle_id, ImageUpload, PersonDraft};
use crate::query::use_users;

#[component]
pub fn CreateParentPage() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let users = use_users();
    let draft = RwSignal::new(PersonDraft::default());
    let pick_images = Callback::new(move |images: Vec<ImageUpload>| draft.update(|d| d.set_images(images)));
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (params, images) = match draft.with_untracked(|d| d.validate().map(|p| (p, d.images.clone()))) {
            Ok(valid) => valid,
            Err(err) => {
                ctx.notify.error(err.to_string());
                return;
            }
        };

        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.create_user(&params, &images).await {
                Ok(()) => {
                    ctx.notify.success("Родственник успешно добавлен");
                    ctx.reload_users();
                    draft.try_update(|d| d.reset());
                }
                Err(err) => {
                    log::error!("creating relative failed: {}", err);
                    ctx.notify
                        .error(err.toast_message("Не удалось сохранить данные", "Произошла ошибка при сохранении"));
                }
            }
            set_submitting.try_set(false);
        });
    };

    // One text input bound to one draft field
    let text_field = move |label: &'static str, placeholder: &'static str, required: bool, get: fn(&PersonDraft) -> String, set: fn(&mut PersonDraft, String)| {
        view! {
            <Field
                label=label
                placeholder=placeholder
                required=required
                value=Signal::derive(move || draft.with(get))
                on_input=move |value: String| draft.update(|d| set(d, value))
            />
        }
    };

    view! {
        <div class="page form-page">
            <h1>"Добавить родственника"</h1>
            <p class="description">"Заполните поля ниже, чтобы добавить нового родственника в дерево."</p>
            <form class="form" on:submit=submit>
                {text_field("Фамилия", "Иванов", true, |d| d.surname.clone(), |d, v| d.surname = v)}
                {text_field("Имя", "Иван", true, |d| d.name.clone(), |d, v| d.name = v)}
                {text_field("Отчество", "Иванович", false, |d| d.middlename.clone(), |d, v| d.middlename = v)}
                {text_field("Дата рождения", "DD.MM.YYYY", true, |d| d.birth_date.clone(), |d, v| d.birth_date = v)}
                <PeoplePicker
                    label="Родители"
                    empty_text="Нет данных о родителях"
                    people=Signal::derive(move || users.data.get().unwrap_or_default())
                    selected=Signal::derive(move || draft.with(|d| d.parents_id.clone()))
                    on_toggle=move |id: String| draft.update(|d| toggle_id(&mut d.parents_id, &id))
                />
                <ImagePicker
                    selected=Signal::derive(move || draft.with(|d| d.images.len()))
                    on_pick=pick_images
                />
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Сохранение..." } else { "Сохранить родственника" }}
                </button>
            </form>
        </div>
    }
}
