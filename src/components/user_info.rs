//! User Info Component
//!
//! Full profile: photo, name, birth date, the editable sections and the
//! person's memories. Used both in the tree modal and on the profile page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Avatar, EditableList, ImagePicker, LivePosition, MemoryCard};
use crate::context::{use_api, use_app_context};
use crate::forms::ImageUpload;
use crate::models::{Memory, Person};
use crate::profile_editor::ListField;
use crate::query::{use_user, QueryStatus};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn UserInfo(#[prop(into)] person_id: Signal<String>) -> impl IntoView {
    let profile = use_user(person_id);
    // Re-render the body only when a different person arrives
    let loaded = Memo::new(move |_| profile.data.with(|p| p.as_ref().map(|p| p.id.clone())));

    view! {
        <div class="user-info">
            {move || match loaded.get() {
                Some(_) => view! {
                    <ProfileBody person_id=person_id profile=profile.data status=profile.status />
                }
                .into_any(),
                None if profile.loading() => view! { <p class="status-message">"Загрузка..."</p> }.into_any(),
                None if profile.error().is_some() => {
                    view! { <p class="status-message">"Ошибка загрузки данных пользователя"</p> }.into_any()
                }
                None => view! { <p class="status-message">"Пользователь не найден"</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileBody(person_id: Signal<String>, profile: Signal<Option<Person>>, status: QueryStatus) -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let store = use_app_store();
    let own_profile = Signal::derive(move || {
        store.current_user_id().with(|me| me.as_deref() == Some(person_id.get().as_str()))
    });
    let refetch = Callback::new(move |_: ()| {
        status.revalidate();
        ctx.reload_users();
    });

    let read = move |f: fn(&Person) -> String| profile.with(|p| p.as_ref().map(f).unwrap_or_default());
    let list_items = move |field: ListField| {
        Signal::derive(move || profile.with(|p| p.as_ref().map(|p| field.read(p).to_vec()).unwrap_or_default()))
    };
    let memories = Signal::derive(move || profile.with(|p| p.as_ref().map(|p| p.memories.clone()).unwrap_or_default()));
    let created = Signal::derive(move || {
        profile.with(|p| p.as_ref().map(|p| p.created_memories.clone()).unwrap_or_default())
    });

    let full_name = move || {
        let name = read(Person::full_name);
        if name.is_empty() { "Не указано".to_string() } else { name }
    };
    let birth_date = move || read(|p| p.birth_date.trim().to_string());

    let (uploading, set_uploading) = signal(false);
    let (photos, set_photos) = signal(Vec::<ImageUpload>::new());
    let upload = move |images: Vec<ImageUpload>| {
        if images.is_empty() {
            set_photos.set(images);
            return;
        }
        set_photos.set(images.clone());
        set_uploading.set(true);
        let api = api.clone();
        let id = person_id.get_untracked();
        spawn_local(async move {
            match api.upload_user_photos(&id, &images).await {
                Ok(()) => {
                    ctx.notify.success("Фотографии загружены");
                    status.revalidate();
                    ctx.reload_users();
                }
                Err(err) => {
                    log::error!("photo upload for {} failed: {}", id, err);
                    ctx.notify
                        .error(err.toast_message("Не удалось загрузить фотографии", "Произошла ошибка при загрузке"));
                }
            }
            set_uploading.try_set(false);
            set_photos.try_set(Vec::new());
        });
    };

    view! {
        <div class="user-info-photo">
            {move || profile.get().map(|person| view! { <Avatar person=person /> })}
        </div>
        <div class="user-info-body">
            <h1 class="user-info-name">{full_name}</h1>
            <Show when=move || !birth_date().is_empty()>
                <p>"Дата рождения: " {birth_date}</p>
            </Show>

            <LivePosition
                person_id=person_id
                text=Signal::derive(move || read(|p| p.live_position.clone()))
                on_saved=refetch
            />

            {ListField::ALL
                .into_iter()
                .map(|field| view! {
                    <EditableList
                        person_id=person_id
                        field=field
                        items=list_items(field)
                        own_profile=own_profile
                        on_saved=refetch
                    />
                })
                .collect_view()}

            <ImagePicker
                label="Добавить фотографии:"
                selected=Signal::derive(move || photos.with(|p| p.len()))
                on_pick=Callback::new(upload)
            />
            <Show when=move || uploading.get()>
                <p class="muted">"Загрузка фотографий..."</p>
            </Show>

            <MemoryList title="Воспоминания" memories=memories />
            <Show when=move || created.with(|list| !list.is_empty())>
                <MemoryList title="Написанные воспоминания" memories=created />
            </Show>
        </div>
    }
}

#[component]
fn MemoryList(title: &'static str, #[prop(into)] memories: Signal<Vec<Memory>>) -> impl IntoView {
    view! {
        <section class="user-info-memories">
            <h2>{title}</h2>
            <For
                each=move || memories.get()
                key=|memory| memory.id.clone()
                children=move |memory| view! { <MemoryCard memory=memory /> }
            />
        </section>
    }
}
