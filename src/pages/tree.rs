//! Tree Page
//!
//! Family tree; clicking a card opens that person's profile in a modal.

use leptos::prelude::*;

use crate::components::{AppLink, FamilyTreeView, InfoModal, UserInfo};
use crate::routing::Page;

#[component]
pub fn TreePage() -> impl IntoView {
    let (profile_open, set_profile_open) = signal(false);
    let (person_id, set_person_id) = signal(String::new());

    let open_profile = move |id: String| {
        log::debug!("tree card {} clicked", id);
        set_person_id.set(id);
        set_profile_open.set(true);
    };

    view! {
        <div class="page tree-page">
            <div class="page-actions">
                <AppLink page=Page::CreateParent class="btn-secondary">"Добавить родственника"</AppLink>
            </div>
            <FamilyTreeView on_select=open_profile />
            <InfoModal open=profile_open on_close=move |_: ()| set_profile_open.set(false)>
                <UserInfo person_id=person_id />
                <div class="info-modal-footer">
                    {move || {
                        let id = person_id.get();
                        (!id.is_empty()).then(|| view! {
                            <AppLink page=Page::Profile(id) class="btn-secondary">"Открыть профиль"</AppLink>
                        })
                    }}
                </div>
            </InfoModal>
        </div>
    }
}
