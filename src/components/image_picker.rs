//! Image Picker Component
//!
//! Multi-file `<input>` limited to images. A selection containing anything
//! else is rejected as a whole.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::forms::ImageUpload;
use crate::uploads::read_images;

/// File input for photos
///
/// # Arguments
/// * `selected` - How many images the owner currently holds; the input is
///   cleared when this drops to zero (form reset)
/// * `on_pick` - Receives the accepted images (empty after a rejection)
#[component]
pub fn ImagePicker(
    #[prop(into)] selected: Signal<usize>,
    #[prop(into)] on_pick: Callback<Vec<ImageUpload>>,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if selected.get() == 0 {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else { return };
        spawn_local(async move {
            match read_images(list).await {
                Ok(images) => on_pick.run(images),
                Err(err) => {
                    log::warn!("image selection rejected: {}", err);
                    ctx.notify
                        .error(err.toast_message("Допустимы только изображения", "Не удалось прочитать файлы"));
                    input.set_value("");
                    on_pick.run(Vec::new());
                }
            }
        });
    };

    view! {
        <div class="image-picker">
            <label class="field-label">{label.unwrap_or("Загрузите изображения:")}</label>
            <input node_ref=input_ref type="file" accept="image/*" multiple=true on:change=on_change />
            <Show when=move || { selected.get() > 0 }>
                <p class="image-picker-count">"Выбрано изображений: " {move || selected.get()}</p>
            </Show>
        </div>
    }
}
