use leptos::prelude::*;

use crate::components::UserInfo;

/// Stand-alone profile page (`/profile/{id}`)
#[component]
pub fn ProfilePage(person_id: String) -> impl IntoView {
    view! {
        <div class="page profile-page">
            <UserInfo person_id=Signal::derive(move || person_id.clone()) />
        </div>
    }
}
