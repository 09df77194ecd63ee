//! Form Field Components
//!
//! Labelled text input and the checkbox list used to pick relatives.

use leptos::prelude::*;

use crate::models::Person;

/// Labelled text input; required fields get a `*`
#[component]
pub fn Field(
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    /// Render a `<textarea>` instead of a single-line input
    #[prop(optional)]
    multiline: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let caption = if required { format!("{} *", label) } else { label.to_string() };

    view! {
        <label class="field">
            <span class="field-label">{caption}</span>
            {if multiline {
                view! {
                    <textarea
                        placeholder=placeholder
                        required=required
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        type="text"
                        placeholder=placeholder
                        required=required
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                }
                .into_any()
            }}
        </label>
    }
}

/// Checkbox list of people
///
/// # Arguments
/// * `label` - Caption above the list
/// * `empty_text` - Shown when there is nobody to pick
/// * `people` - Options, labelled by full name
/// * `selected` - Currently checked ids
/// * `on_toggle` - Called with the id of the clicked person
#[component]
pub fn PeoplePicker(
    label: &'static str,
    empty_text: &'static str,
    #[prop(into)] people: Signal<Vec<Person>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="people-picker">
            <span class="field-label">{label}</span>
            <div class="people-picker-options">
                <Show when=move || people.with(|p| p.is_empty())>
                    <div class="people-picker-empty">{empty_text}</div>
                </Show>
                <For
                    each=move || people.get()
                    key=|person| person.id.clone()
                    children=move |person| {
                        let id = person.id.clone();
                        let checked = {
                            let id = id.clone();
                            move || selected.with(|ids| ids.contains(&id))
                        };
                        view! {
                            <label class="people-picker-option">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| on_toggle.run(id.clone())
                                />
                                <span>{person.full_name()}</span>
                            </label>
                        }
                    }
                />
            </div>
        </div>
    }
}
